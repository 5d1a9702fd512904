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
use crate::err::try_vec;
use crate::r2c::{C2RFftExecutor, R2CFftExecutor, RealFft};
use crate::{FactorPlan, FftSample, MixFftError};
use log::debug;
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::sync::Arc;

/// Real FFT handle owning its working buffer.
///
/// The factor plan and twiddle tables are shared and read-only, the scratch buffer is
/// private to the handle, so transforms take `&mut self`. Cloning shares the tables and
/// gives the clone a scratch buffer of its own, which is how one plan is handed to
/// several threads. Everything is released when the handle is dropped.
pub struct RealFftPlan<T> {
    fft: Arc<RealFft<T>>,
    scratch: Vec<Complex<T>>,
}

impl<T: FftSample> RealFftPlan<T>
where
    f64: AsPrimitive<T>,
{
    /// Builds a plan for real signals of `length` samples.
    ///
    /// `length` must be even and non-zero, and `length / 2` must factor into at most
    /// [crate::MAX_STAGES] stages.
    pub fn new(length: usize) -> Result<Self, MixFftError> {
        Self::from_shared(Arc::new(RealFft::new(length)?))
    }

    /// Wraps an existing transform, allocating only the scratch buffer.
    pub fn from_shared(fft: Arc<RealFft<T>>) -> Result<Self, MixFftError> {
        let scratch = try_vec![Complex::<T>::default(); R2CFftExecutor::complex_scratch_length(fft.as_ref())];
        debug!(
            "Real FFT plan for {} samples, {} scratch elements",
            R2CFftExecutor::real_length(fft.as_ref()),
            scratch.len()
        );
        Ok(RealFftPlan { fft, scratch })
    }

    /// Forward transform of `input` (`length` reals) into `length / 2 + 1` bins.
    pub fn forward(&mut self, input: &[T], output: &mut [Complex<T>]) -> Result<(), MixFftError> {
        R2CFftExecutor::execute_with_scratch(self.fft.as_ref(), input, output, &mut self.scratch)
    }

    /// Inverse transform of `length / 2 + 1` bins into `length` reals, scaled by
    /// `1/length`.
    pub fn inverse(&mut self, input: &[Complex<T>], output: &mut [T]) -> Result<(), MixFftError> {
        C2RFftExecutor::execute_with_scratch(self.fft.as_ref(), input, output, &mut self.scratch)
    }
}

impl<T: FftSample> RealFftPlan<T> {
    pub fn length(&self) -> usize {
        self.fft.length()
    }

    pub fn complex_length(&self) -> usize {
        self.length() / 2 + 1
    }

    pub fn factors(&self) -> &FactorPlan {
        self.fft.factors()
    }

    pub fn shared(&self) -> &Arc<RealFft<T>> {
        &self.fft
    }

    /// As [Clone::clone], but reports a failed scratch allocation instead of aborting.
    pub fn try_clone(&self) -> Result<Self, MixFftError> {
        Ok(RealFftPlan {
            fft: Arc::clone(&self.fft),
            scratch: try_vec![Complex::<T>::default(); self.scratch.len()],
        })
    }
}

/// Cloning aborts if the scratch buffer cannot be allocated, use
/// [RealFftPlan::try_clone] to handle that case.
impl<T: FftSample> Clone for RealFftPlan<T> {
    fn clone(&self) -> Self {
        RealFftPlan {
            fft: Arc::clone(&self.fft),
            scratch: vec![Complex::<T>::default(); self.scratch.len()],
        }
    }
}
