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
use crate::err::{try_vec, validate_scratch};
use crate::factors::FactorFlags;
use crate::kernel::FftKernel;
use crate::{FftDirection, FftExecutor, FftSample, MixFftError};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Complex FFT of a fixed length and direction.
pub struct ComplexFft<T> {
    kernel: FftKernel<T>,
    direction: FftDirection,
}

impl<T: FftSample> ComplexFft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(n: usize, direction: FftDirection) -> Result<Self, MixFftError> {
        Ok(ComplexFft {
            kernel: FftKernel::new(n, FactorFlags::EightFirstStage)?,
            direction,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for ComplexFft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), MixFftError> {
        let mut scratch = try_vec![Complex::<T>::default(); self.scratch_length()];
        self.execute_with_scratch(in_place, &mut scratch)
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), MixFftError> {
        let length = self.kernel.length();
        if !in_place.len().is_multiple_of(length) {
            return Err(MixFftError::InvalidSizeMultiplier(in_place.len(), length));
        }
        let scratch = validate_scratch!(scratch, self.scratch_length());
        let (working, kernel_scratch) = scratch.split_at_mut(length);

        for chunk in in_place.chunks_exact_mut(length) {
            working.copy_from_slice(chunk);
            self.kernel
                .execute(working, chunk, kernel_scratch, self.direction);
        }
        Ok(())
    }

    fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
    ) -> Result<(), MixFftError> {
        let mut scratch = try_vec![Complex::<T>::default(); self.out_of_place_scratch_length()];
        self.execute_out_of_place_with_scratch(src, dst, &mut scratch)
    }

    fn execute_out_of_place_with_scratch(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), MixFftError> {
        let length = self.kernel.length();
        if !src.len().is_multiple_of(length) {
            return Err(MixFftError::InvalidSizeMultiplier(src.len(), length));
        }
        if !dst.len().is_multiple_of(length) {
            return Err(MixFftError::InvalidSizeMultiplier(dst.len(), length));
        }
        if src.len() != dst.len() {
            return Err(MixFftError::MismatchedBatches(
                src.len() / length,
                dst.len() / length,
            ));
        }
        let scratch = validate_scratch!(scratch, self.out_of_place_scratch_length());
        let (working, kernel_scratch) = scratch.split_at_mut(length);

        for (src, dst) in src.chunks_exact(length).zip(dst.chunks_exact_mut(length)) {
            working.copy_from_slice(src);
            self.kernel.execute(working, dst, kernel_scratch, self.direction);
        }
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.kernel.length()
    }

    fn scratch_length(&self) -> usize {
        self.kernel.length() + self.kernel.scratch_length()
    }

    fn out_of_place_scratch_length(&self) -> usize {
        self.kernel.length() + self.kernel.scratch_length()
    }
}
