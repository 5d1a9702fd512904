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
#![forbid(unsafe_code)]
//! Mixed radix FFT with a real-input front end.
//!
//! Power-of-two lengths run an ordered radix-8/4 decimation-in-time engine, lengths with
//! factors 3, 5 or a residual prime go through a recursive general radix kernel. Real
//! signals of even length are transformed through a half-length complex FFT followed by a
//! split pass.
//!
//! ```
//! use mixfft::{MixFft, R2CFftExecutor};
//! use num_complex::Complex;
//!
//! let r2c = MixFft::make_r2c_fft_f32(16).unwrap();
//! let input = vec![1.0f32; 16];
//! let mut spectrum = vec![Complex::<f32>::default(); r2c.complex_length()];
//! r2c.execute(&input, &mut spectrum).unwrap();
//! assert!((spectrum[0].re - 16.).abs() < 1e-5);
//! ```
mod butterflies;
mod complex_fft;
mod err;
mod factors;
mod general_radix;
mod kernel;
mod layout;
mod mixed_radix;
mod r2c;
mod twiddles;

pub use complex_fft::ComplexFft;
pub use err::MixFftError;
pub use factors::{Algorithm, FactorFlags, FactorPlan, MAX_STAGES, Stage, factor};
pub use layout::{PackedRealFft, SpectrumLayout, pack_spectrum, unpack_spectrum};
pub use r2c::{C2RFftExecutor, R2CFftExecutor, RealFft, RealFftPlan};

use num_complex::Complex;
use num_traits::Float;
use std::fmt::Debug;
use std::sync::Arc;

/// Sample type the transforms operate on.
pub trait FftSample: Float + Default + Debug + Send + Sync + 'static {
    /// `cos(π/4)` as used by the first-stage radix-8 butterfly.
    const RADIX8_ROTATION: Self;
    const HALF: Self;
}

impl FftSample for f32 {
    const RADIX8_ROTATION: Self = 0.70710678;
    const HALF: Self = 0.5;
}

impl FftSample for f64 {
    const RADIX8_ROTATION: Self = std::f64::consts::FRAC_1_SQRT_2;
    const HALF: Self = 0.5;
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

impl FftDirection {
    pub fn inverse(self) -> FftDirection {
        match self {
            FftDirection::Forward => FftDirection::Inverse,
            FftDirection::Inverse => FftDirection::Forward,
        }
    }
}

/// Complex to complex transform of a fixed length and direction.
///
/// Every method accepts any whole number of transforms laid out back to back, so a
/// slice of `k * length()` samples runs `k` independent FFTs. Inverse transforms are
/// scaled by `1/length()`.
pub trait FftExecutor<T> {
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), MixFftError>;
    /// As [FftExecutor::execute], using `scratch` of at least [FftExecutor::scratch_length]
    /// elements instead of allocating.
    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), MixFftError>;
    fn execute_out_of_place(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
    ) -> Result<(), MixFftError>;
    fn execute_out_of_place_with_scratch(
        &self,
        src: &[Complex<T>],
        dst: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), MixFftError>;
    fn direction(&self) -> FftDirection;
    fn length(&self) -> usize;
    fn scratch_length(&self) -> usize;
    fn out_of_place_scratch_length(&self) -> usize;
}

pub struct MixFft {}

impl MixFft {
    pub fn make_forward_fft_f32(
        n: usize,
    ) -> Result<Arc<dyn FftExecutor<f32> + Send + Sync>, MixFftError> {
        ComplexFft::new(n, FftDirection::Forward)
            .map(|x| Arc::new(x) as Arc<dyn FftExecutor<f32> + Send + Sync>)
    }

    pub fn make_forward_fft_f64(
        n: usize,
    ) -> Result<Arc<dyn FftExecutor<f64> + Send + Sync>, MixFftError> {
        ComplexFft::new(n, FftDirection::Forward)
            .map(|x| Arc::new(x) as Arc<dyn FftExecutor<f64> + Send + Sync>)
    }

    pub fn make_inverse_fft_f32(
        n: usize,
    ) -> Result<Arc<dyn FftExecutor<f32> + Send + Sync>, MixFftError> {
        ComplexFft::new(n, FftDirection::Inverse)
            .map(|x| Arc::new(x) as Arc<dyn FftExecutor<f32> + Send + Sync>)
    }

    pub fn make_inverse_fft_f64(
        n: usize,
    ) -> Result<Arc<dyn FftExecutor<f64> + Send + Sync>, MixFftError> {
        ComplexFft::new(n, FftDirection::Inverse)
            .map(|x| Arc::new(x) as Arc<dyn FftExecutor<f64> + Send + Sync>)
    }

    /// Real to complex transform of an even length `n`, producing `n/2 + 1` bins.
    pub fn make_r2c_fft_f32(
        n: usize,
    ) -> Result<Arc<dyn R2CFftExecutor<f32> + Send + Sync>, MixFftError> {
        RealFft::new(n).map(|x| Arc::new(x) as Arc<dyn R2CFftExecutor<f32> + Send + Sync>)
    }

    pub fn make_r2c_fft_f64(
        n: usize,
    ) -> Result<Arc<dyn R2CFftExecutor<f64> + Send + Sync>, MixFftError> {
        RealFft::new(n).map(|x| Arc::new(x) as Arc<dyn R2CFftExecutor<f64> + Send + Sync>)
    }

    /// Complex to real transform of an even length `n`, consuming `n/2 + 1` bins and
    /// scaling the result by `1/n`.
    pub fn make_c2r_fft_f32(
        n: usize,
    ) -> Result<Arc<dyn C2RFftExecutor<f32> + Send + Sync>, MixFftError> {
        RealFft::new(n).map(|x| Arc::new(x) as Arc<dyn C2RFftExecutor<f32> + Send + Sync>)
    }

    pub fn make_c2r_fft_f64(
        n: usize,
    ) -> Result<Arc<dyn C2RFftExecutor<f64> + Send + Sync>, MixFftError> {
        RealFft::new(n).map(|x| Arc::new(x) as Arc<dyn C2RFftExecutor<f64> + Send + Sync>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_factory_complex_round_trip() {
        for size in [1usize, 2, 8, 12, 30, 64, 100, 256, 1000] {
            let forward = MixFft::make_forward_fft_f64(size).unwrap();
            let inverse = MixFft::make_inverse_fft_f64(size).unwrap();
            assert_eq!(forward.length(), size);
            assert_eq!(forward.direction(), FftDirection::Forward);
            assert_eq!(inverse.direction(), FftDirection::Inverse);

            let mut input = vec![Complex::<f64>::default(); size];
            for z in input.iter_mut() {
                *z = Complex {
                    re: rand::rng().random_range(-1.0..1.0),
                    im: rand::rng().random_range(-1.0..1.0),
                };
            }
            let src = input.to_vec();
            forward.execute(&mut input).unwrap();
            inverse.execute(&mut input).unwrap();
            input.iter().zip(src.iter()).for_each(|(a, b)| {
                assert!((a - b).norm() < 1e-10, "{a} != {b} for size {size}");
            });
        }
    }

    #[test]
    fn test_factory_real_round_trip() {
        for size in [2usize, 4, 6, 16, 18, 48, 512, 4096] {
            let r2c = MixFft::make_r2c_fft_f32(size).unwrap();
            let c2r = MixFft::make_c2r_fft_f32(size).unwrap();
            assert_eq!(r2c.real_length(), size);
            assert_eq!(r2c.complex_length(), size / 2 + 1);
            assert_eq!(c2r.complex_length(), size / 2 + 1);

            let input = (0..size)
                .map(|_| rand::rng().random_range(-1.0f32..1.0))
                .collect::<Vec<_>>();
            let mut spectrum = vec![Complex::<f32>::default(); r2c.complex_length()];
            let mut restored = vec![0f32; size];
            r2c.execute(&input, &mut spectrum).unwrap();
            c2r.execute(&spectrum, &mut restored).unwrap();
            restored.iter().zip(input.iter()).for_each(|(a, b)| {
                assert!((a - b).abs() < 1e-4, "{a} != {b} for size {size}");
            });
        }
    }

    #[test]
    fn test_factory_rejects_lengths() {
        assert_eq!(
            MixFft::make_forward_fft_f32(0).err(),
            Some(MixFftError::ZeroSizedFft)
        );
        assert_eq!(
            MixFft::make_r2c_fft_f32(7).err(),
            Some(MixFftError::OddRealLength(7))
        );
        assert!(
            MixFft::make_c2r_fft_f64(0)
                .err()
                .is_some_and(|e| e.is_invalid_length())
        );
    }
}
