/*
 * // Copyright (c) The mixfft developers 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::factors::{Algorithm, FactorFlags, FactorPlan, factor};
use crate::general_radix::GeneralRadix;
use crate::mixed_radix::MixedRadix248;
use crate::{FftDirection, FftSample, MixFftError};
use log::{debug, warn};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Complex engine selected once when a plan is built.
pub(crate) enum FftKernel<T> {
    MixedRadix248(MixedRadix248<T>),
    GeneralRadix(GeneralRadix<T>),
}

impl<T: FftSample> FftKernel<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(n: usize, flags: FactorFlags) -> Result<Self, MixFftError> {
        let plan = factor(n, flags).inspect_err(|e| {
            warn!("Rejected FFT length {n}: {e}");
        })?;
        Self::from_plan(plan)
    }

    pub(crate) fn from_plan(plan: FactorPlan) -> Result<Self, MixFftError> {
        let kernel = if plan.algorithm() == Algorithm::MixedRadix248 && plan.is_radix4_chain() {
            FftKernel::MixedRadix248(MixedRadix248::new(plan)?)
        } else {
            FftKernel::GeneralRadix(GeneralRadix::new(plan)?)
        };
        debug!(
            "Built {} point {} kernel with radices {:?}",
            plan.length(),
            kernel.name(),
            plan.stages().iter().rev().map(|s| s.radix).collect::<Vec<_>>()
        );
        Ok(kernel)
    }
}

impl<T: FftSample> FftKernel<T> {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            FftKernel::MixedRadix248(_) => "radix-2/4/8",
            FftKernel::GeneralRadix(_) => "general radix",
        }
    }

    pub(crate) fn length(&self) -> usize {
        match self {
            FftKernel::MixedRadix248(k) => k.length(),
            FftKernel::GeneralRadix(k) => k.length(),
        }
    }

    pub(crate) fn plan(&self) -> &FactorPlan {
        match self {
            FftKernel::MixedRadix248(k) => k.plan(),
            FftKernel::GeneralRadix(k) => k.plan(),
        }
    }

    #[cfg(test)]
    pub(crate) fn twiddles(&self) -> &[Complex<T>] {
        match self {
            FftKernel::MixedRadix248(k) => k.twiddles(),
            FftKernel::GeneralRadix(k) => k.twiddles(),
        }
    }

    /// Elements of `scratch` [FftKernel::execute] needs besides its two buffers.
    pub(crate) fn scratch_length(&self) -> usize {
        match self {
            FftKernel::MixedRadix248(_) => 0,
            FftKernel::GeneralRadix(k) => k.scratch_length(),
        }
    }

    /// Transforms `input` into `output`, both exactly [FftKernel::length] long.
    ///
    /// `input` may be clobbered.
    pub(crate) fn execute(
        &self,
        input: &mut [Complex<T>],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        match self {
            FftKernel::MixedRadix248(k) => k.execute(input, output, direction),
            FftKernel::GeneralRadix(k) => k.execute(input, output, scratch, direction),
        }
    }
}
