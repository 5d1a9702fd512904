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
mod plan;
mod split;

pub use plan::RealFftPlan;

use crate::err::{try_vec, validate_scratch};
use crate::factors::FactorFlags;
use crate::kernel::FftKernel;
use crate::twiddles::super_twiddles;
use crate::{FftDirection, FftSample, MixFftError};
use log::warn;
use num_complex::Complex;
use num_traits::AsPrimitive;
use split::{split_c2r, split_r2c};

pub trait R2CFftExecutor<T> {
    /// Executes the Real-to-Complex Forward FFT.
    ///
    /// `input` holds a whole number of real signals of [R2CFftExecutor::real_length]
    /// samples, `output` the same number of spectra of [R2CFftExecutor::complex_length]
    /// bins. The DC and Nyquist bins always have a zero imaginary part.
    fn execute(&self, input: &[T], output: &mut [Complex<T>]) -> Result<(), MixFftError>;
    fn execute_with_scratch(
        &self,
        input: &[T],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), MixFftError>;
    /// Returns the **length** of the **real-valued** input array (N).
    fn real_length(&self) -> usize;
    /// Returns the **length** of the **complex-valued** output array (`N/2 + 1`).
    fn complex_length(&self) -> usize;
    fn complex_scratch_length(&self) -> usize;
}

pub trait C2RFftExecutor<T> {
    /// Executes the Complex-to-Real Inverse FFT, scaled by `1/N`.
    ///
    /// The size of the `input` slice must be a multiple of `self.complex_length()`, and the
    /// size of the `output` slice the same multiple of `self.real_length()`. Imaginary parts
    /// of the DC and Nyquist bins are ignored.
    fn execute(&self, input: &[Complex<T>], output: &mut [T]) -> Result<(), MixFftError>;
    fn execute_with_scratch(
        &self,
        input: &[Complex<T>],
        output: &mut [T],
        scratch: &mut [Complex<T>],
    ) -> Result<(), MixFftError>;
    /// Returns the **length** of the final **real-valued** output array (N).
    fn real_length(&self) -> usize;
    /// Returns the **length** of the **complex-valued** input array (`N/2 + 1`).
    fn complex_length(&self) -> usize;
    fn complex_scratch_length(&self) -> usize;
}

/// Real FFT of an even length `N` computed through an `N/2` point complex FFT.
///
/// The same instance serves both directions: the forward transform is unnormalized, the
/// inverse one is scaled by `1/N` so a forward/inverse pair restores the signal.
pub struct RealFft<T> {
    kernel: FftKernel<T>,
    super_twiddles: Vec<Complex<T>>,
    length: usize,
}

impl<T: FftSample> RealFft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(length: usize) -> Result<Self, MixFftError> {
        if length == 0 {
            warn!("Rejected real FFT length 0");
            return Err(MixFftError::ZeroSizedFft);
        }
        if !length.is_multiple_of(2) {
            warn!("Rejected odd real FFT length {length}");
            return Err(MixFftError::OddRealLength(length));
        }
        let ncfft = length / 2;
        let kernel = FftKernel::new(ncfft, FactorFlags::EightFirstStage)?;
        let super_twiddles = super_twiddles(ncfft)?;
        Ok(RealFft {
            kernel,
            super_twiddles,
            length,
        })
    }
}

impl<T: FftSample> RealFft<T> {
    /// Number of real samples per signal.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Half-length complex plan driving the transform.
    pub fn factors(&self) -> &crate::FactorPlan {
        self.kernel.plan()
    }

    #[cfg(test)]
    pub(crate) fn super_twiddles(&self) -> &[Complex<T>] {
        &self.super_twiddles
    }

    #[cfg(test)]
    pub(crate) fn twiddles(&self) -> &[Complex<T>] {
        self.kernel.twiddles()
    }

    fn check_batches(&self, real: usize, complex: usize) -> Result<(), MixFftError> {
        let complex_length = self.length / 2 + 1;
        if !real.is_multiple_of(self.length) {
            return Err(MixFftError::InvalidSizeMultiplier(real, self.length));
        }
        if !complex.is_multiple_of(complex_length) {
            return Err(MixFftError::InvalidSizeMultiplier(complex, complex_length));
        }
        if real / self.length != complex / complex_length {
            return Err(MixFftError::MismatchedBatches(
                real / self.length,
                complex / complex_length,
            ));
        }
        Ok(())
    }
}

impl<T: FftSample> R2CFftExecutor<T> for RealFft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, input: &[T], output: &mut [Complex<T>]) -> Result<(), MixFftError> {
        let mut scratch = try_vec![Complex::<T>::default(); R2CFftExecutor::complex_scratch_length(self)];
        R2CFftExecutor::execute_with_scratch(self, input, output, &mut scratch)
    }

    fn execute_with_scratch(
        &self,
        input: &[T],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), MixFftError> {
        self.check_batches(input.len(), output.len())?;
        let ncfft = self.length / 2;
        let scratch = validate_scratch!(scratch, R2CFftExecutor::complex_scratch_length(self));
        let (packed, rest) = scratch.split_at_mut(ncfft);
        let (spectrum, kernel_scratch) = rest.split_at_mut(ncfft);

        for (input, output) in input
            .chunks_exact(self.length)
            .zip(output.chunks_exact_mut(ncfft + 1))
        {
            for (dst, pair) in packed.iter_mut().zip(input.chunks_exact(2)) {
                *dst = Complex::new(pair[0], pair[1]);
            }
            self.kernel
                .execute(packed, spectrum, kernel_scratch, FftDirection::Forward);
            split_r2c(spectrum, output, &self.super_twiddles);
        }
        Ok(())
    }

    fn real_length(&self) -> usize {
        self.length
    }

    fn complex_length(&self) -> usize {
        self.length / 2 + 1
    }

    fn complex_scratch_length(&self) -> usize {
        self.length + self.kernel.scratch_length()
    }
}

impl<T: FftSample> C2RFftExecutor<T> for RealFft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, input: &[Complex<T>], output: &mut [T]) -> Result<(), MixFftError> {
        let mut scratch = try_vec![Complex::<T>::default(); C2RFftExecutor::complex_scratch_length(self)];
        C2RFftExecutor::execute_with_scratch(self, input, output, &mut scratch)
    }

    fn execute_with_scratch(
        &self,
        input: &[Complex<T>],
        output: &mut [T],
        scratch: &mut [Complex<T>],
    ) -> Result<(), MixFftError> {
        self.check_batches(output.len(), input.len())?;
        let ncfft = self.length / 2;
        let scratch = validate_scratch!(scratch, C2RFftExecutor::complex_scratch_length(self));
        let (packed, rest) = scratch.split_at_mut(ncfft);
        let (signal, kernel_scratch) = rest.split_at_mut(ncfft);

        for (input, output) in input
            .chunks_exact(ncfft + 1)
            .zip(output.chunks_exact_mut(self.length))
        {
            split_c2r(input, packed, &self.super_twiddles);
            self.kernel
                .execute(packed, signal, kernel_scratch, FftDirection::Inverse);
            for (dst, src) in output.chunks_exact_mut(2).zip(signal.iter()) {
                dst[0] = src.re;
                dst[1] = src.im;
            }
        }
        Ok(())
    }

    fn real_length(&self) -> usize {
        self.length
    }

    fn complex_length(&self) -> usize {
        self.length / 2 + 1
    }

    fn complex_scratch_length(&self) -> usize {
        self.length + self.kernel.scratch_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rustfft::FftPlanner;

    fn random_real(size: usize) -> Vec<f32> {
        (0..size)
            .map(|_| rand::rng().random_range(-1.0f32..1.0))
            .collect()
    }

    fn forward(fft: &RealFft<f32>, input: &[f32]) -> Vec<Complex<f32>> {
        let mut output = vec![Complex::<f32>::default(); R2CFftExecutor::complex_length(fft)];
        R2CFftExecutor::execute(fft, input, &mut output).unwrap();
        output
    }

    #[test]
    fn test_r2c_against_rustfft() {
        for size in (2usize..=512).step_by(2).chain([1024, 2048, 4096]) {
            let input = random_real(size);
            let mut reference = input
                .iter()
                .map(|&x| Complex::new(x, 0.))
                .collect::<Vec<_>>();
            FftPlanner::new()
                .plan_fft_forward(size)
                .process(&mut reference);

            let fft = RealFft::<f32>::new(size).unwrap();
            let output = forward(&fft, &input);

            let tol = 1e-5 * (size as f32).log2().max(1.) * (size as f32).sqrt();
            output
                .iter()
                .zip(reference.iter())
                .enumerate()
                .for_each(|(idx, (a, b))| {
                    assert!(
                        (a.re - b.re).abs() < tol,
                        "a_re {} != b_re {} for size {} at {idx}",
                        a.re,
                        b.re,
                        size
                    );
                    assert!(
                        (a.im - b.im).abs() < tol,
                        "a_im {} != b_im {} for size {} at {idx}",
                        a.im,
                        b.im,
                        size
                    );
                });
        }
    }

    #[test]
    fn test_round_trip() {
        for size in (2usize..=4096).step_by(2) {
            let input = random_real(size);
            let fft = RealFft::<f32>::new(size).unwrap();
            let spectrum = forward(&fft, &input);
            let mut restored = vec![0f32; size];
            C2RFftExecutor::execute(&fft, &spectrum, &mut restored).unwrap();
            restored.iter().zip(input.iter()).for_each(|(a, b)| {
                assert!((a - b).abs() < 1e-4, "{a} != {b} for size {size}");
            });
        }
    }

    #[test]
    fn test_boundary_bins_are_real() {
        for size in [2usize, 4, 10, 64, 250, 1024] {
            let fft = RealFft::<f32>::new(size).unwrap();
            let spectrum = forward(&fft, &random_real(size));
            assert_eq!(spectrum[0].im, 0.);
            assert_eq!(spectrum[size / 2].im, 0.);
        }
    }

    #[test]
    fn test_impulse() {
        for size in [2usize, 8, 16, 24, 128, 1000] {
            let mut input = vec![0f32; size];
            input[0] = 1.;
            let fft = RealFft::<f32>::new(size).unwrap();
            for bin in forward(&fft, &input) {
                assert!((bin.re - 1.).abs() < 1e-5, "{bin} for size {size}");
                assert!(bin.im.abs() < 1e-5, "{bin} for size {size}");
            }
        }
    }

    #[test]
    fn test_constant_signal() {
        let c = 0.25f32;
        for size in [4usize, 32, 96, 512] {
            let fft = RealFft::<f32>::new(size).unwrap();
            let spectrum = forward(&fft, &vec![c; size]);
            assert!((spectrum[0].re - size as f32 * c).abs() < 1e-3);
            assert_eq!(spectrum[0].im, 0.);
            for bin in spectrum.iter().skip(1) {
                assert!(bin.norm() < 1e-3, "{bin} for size {size}");
            }
        }
    }

    #[test]
    fn test_linearity() {
        let (a, b) = (1.5f32, -0.75f32);
        for size in [16usize, 60, 256] {
            let fft = RealFft::<f32>::new(size).unwrap();
            let x = random_real(size);
            let y = random_real(size);
            let mixed = x
                .iter()
                .zip(y.iter())
                .map(|(x, y)| a * x + b * y)
                .collect::<Vec<_>>();
            let fx = forward(&fft, &x);
            let fy = forward(&fft, &y);
            let fm = forward(&fft, &mixed);
            for ((m, x), y) in fm.iter().zip(fx.iter()).zip(fy.iter()) {
                assert!((m - (x * a + y * b)).norm() < 1e-3, "size {size}");
            }
        }
    }

    #[test]
    fn test_inverse_ignores_boundary_imaginary_parts() {
        let size = 32usize;
        let fft = RealFft::<f32>::new(size).unwrap();
        let input = random_real(size);
        let mut spectrum = forward(&fft, &input);
        spectrum[0].im = 5.;
        spectrum[size / 2].im = -3.;
        let mut restored = vec![0f32; size];
        C2RFftExecutor::execute(&fft, &spectrum, &mut restored).unwrap();
        restored.iter().zip(input.iter()).for_each(|(a, b)| {
            assert!((a - b).abs() < 1e-4, "{a} != {b}");
        });
    }

    #[test]
    fn test_batches() {
        let size = 48usize;
        let fft = RealFft::<f32>::new(size).unwrap();
        let input = random_real(size * 4);
        let mut batched = vec![Complex::<f32>::default(); (size / 2 + 1) * 4];
        R2CFftExecutor::execute(&fft, &input, &mut batched).unwrap();
        for (signal, spectrum) in input
            .chunks_exact(size)
            .zip(batched.chunks_exact(size / 2 + 1))
        {
            assert_eq!(forward(&fft, signal), spectrum);
        }

        let mut restored = vec![0f32; size * 4];
        C2RFftExecutor::execute(&fft, &batched, &mut restored).unwrap();
        restored.iter().zip(input.iter()).for_each(|(a, b)| {
            assert!((a - b).abs() < 1e-4, "{a} != {b}");
        });
    }

    #[test]
    fn test_double_precision() {
        for size in [2usize, 20, 1024, 3000] {
            let fft = RealFft::<f64>::new(size).unwrap();
            let input = (0..size)
                .map(|_| rand::rng().random_range(-1.0f64..1.0))
                .collect::<Vec<_>>();
            let mut spectrum = vec![Complex::<f64>::default(); size / 2 + 1];
            let mut restored = vec![0f64; size];
            R2CFftExecutor::execute(&fft, &input, &mut spectrum).unwrap();
            C2RFftExecutor::execute(&fft, &spectrum, &mut restored).unwrap();
            restored.iter().zip(input.iter()).for_each(|(a, b)| {
                assert!((a - b).abs() < 1e-10, "{a} != {b} for size {size}");
            });
        }
    }

    #[test]
    fn test_shape_errors() {
        assert_eq!(RealFft::<f32>::new(0).err().map(|e| e.to_string()), Some(MixFftError::ZeroSizedFft.to_string()));
        assert!(matches!(
            RealFft::<f32>::new(9),
            Err(MixFftError::OddRealLength(9))
        ));

        let fft = RealFft::<f32>::new(16).unwrap();
        let mut spectrum = vec![Complex::<f32>::default(); 9];
        assert_eq!(
            R2CFftExecutor::execute(&fft, &[0f32; 15], &mut spectrum),
            Err(MixFftError::InvalidSizeMultiplier(15, 16))
        );
        assert_eq!(
            R2CFftExecutor::execute(&fft, &[0f32; 16], &mut spectrum[..8]),
            Err(MixFftError::InvalidSizeMultiplier(8, 9))
        );
        let mut wide = vec![Complex::<f32>::default(); 18];
        assert_eq!(
            R2CFftExecutor::execute(&fft, &[0f32; 16], &mut wide),
            Err(MixFftError::MismatchedBatches(1, 2))
        );
        let mut scratch = vec![Complex::<f32>::default(); 3];
        let mut output = vec![0f32; 16];
        assert_eq!(
            C2RFftExecutor::execute_with_scratch(&fft, &spectrum, &mut output, &mut scratch),
            Err(MixFftError::ScratchBufferIsTooSmall(3, 16))
        );
    }
}
