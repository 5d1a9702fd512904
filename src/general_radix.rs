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
use crate::butterflies::{butterfly4, c_mul_dir};
use crate::factors::FactorPlan;
use crate::twiddles::dft_twiddles;
use crate::{FftDirection, FftSample, MixFftError};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Recursive mixed radix decimation-in-time FFT for lengths containing radix 3, 5 or a
/// residual factor.
///
/// Each stage gathers its `radix` sub-transforms into consecutive sections of the output
/// and combines them in place. Radices 2, 3, 4 and 5 have dedicated butterflies, every
/// other radix goes through an `O(radix²)` generic one.
pub(crate) struct GeneralRadix<T> {
    plan: FactorPlan,
    twiddles: Vec<Complex<T>>,
    inverse_scale: T,
    scratch_length: usize,
}

impl<T: FftSample> GeneralRadix<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(plan: FactorPlan) -> Result<Self, MixFftError> {
        let twiddles = dft_twiddles(plan.length())?;
        let scratch_length = plan
            .stages()
            .iter()
            .map(|stage| stage.radix)
            .filter(|radix| !matches!(radix, 2..=5))
            .max()
            .unwrap_or(0);
        Ok(GeneralRadix {
            inverse_scale: (1. / plan.length() as f64).as_(),
            plan,
            twiddles,
            scratch_length,
        })
    }
}

impl<T: FftSample> GeneralRadix<T> {
    pub(crate) fn length(&self) -> usize {
        self.plan.length()
    }

    pub(crate) fn plan(&self) -> &FactorPlan {
        &self.plan
    }

    #[cfg(test)]
    pub(crate) fn twiddles(&self) -> &[Complex<T>] {
        &self.twiddles
    }

    /// Scratch the generic butterfly needs, the largest radix it handles.
    pub(crate) fn scratch_length(&self) -> usize {
        self.scratch_length
    }

    pub(crate) fn execute(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        debug_assert_eq!(input.len(), self.length());
        debug_assert_eq!(output.len(), self.length());
        debug_assert!(scratch.len() >= self.scratch_length);

        self.work(output, input, 1, 0, scratch, direction);

        if direction == FftDirection::Inverse {
            for v in output.iter_mut() {
                *v = *v * self.inverse_scale;
            }
        }
    }

    fn work(
        &self,
        output: &mut [Complex<T>],
        input: &[Complex<T>],
        fstride: usize,
        stage: usize,
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        let current = self.plan.stages()[stage];
        let radix = current.radix;
        let m = current.remainder;

        if m == 1 {
            for (q, dst) in output.iter_mut().take(radix).enumerate() {
                *dst = input[q * fstride];
            }
        } else {
            for (q, section) in output.chunks_exact_mut(m).take(radix).enumerate() {
                self.work(
                    section,
                    &input[q * fstride..],
                    fstride * radix,
                    stage + 1,
                    scratch,
                    direction,
                );
            }
        }

        match radix {
            2 => self.butterfly2(output, fstride, m, direction),
            3 => self.butterfly3(output, fstride, m, direction),
            4 => self.butterfly4(output, fstride, m, direction),
            5 => self.butterfly5(output, fstride, m, direction),
            _ => self.butterfly_generic(output, fstride, m, radix, scratch, direction),
        }
    }

    #[inline]
    fn twiddle(&self, index: usize, direction: FftDirection) -> Complex<T> {
        match direction {
            FftDirection::Forward => self.twiddles[index],
            FftDirection::Inverse => self.twiddles[index].conj(),
        }
    }

    fn butterfly2(&self, data: &mut [Complex<T>], fstride: usize, m: usize, direction: FftDirection) {
        let (lo, hi) = data.split_at_mut(m);
        for (k, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
            let t = c_mul_dir(*b, self.twiddles[k * fstride], direction);
            *b = *a - t;
            *a = *a + t;
        }
    }

    fn butterfly3(&self, data: &mut [Complex<T>], fstride: usize, m: usize, direction: FftDirection) {
        let epi3 = self.twiddle(fstride * m, direction);
        for k in 0..m {
            let s1 = c_mul_dir(data[k + m], self.twiddles[k * fstride], direction);
            let s2 = c_mul_dir(data[k + 2 * m], self.twiddles[2 * k * fstride], direction);
            let s3 = s1 + s2;
            let s0 = (s1 - s2) * epi3.im;

            let half = data[k] - s3 * T::HALF;
            data[k] = data[k] + s3;
            data[k + 2 * m] = Complex {
                re: half.re + s0.im,
                im: half.im - s0.re,
            };
            data[k + m] = Complex {
                re: half.re - s0.im,
                im: half.im + s0.re,
            };
        }
    }

    fn butterfly4(&self, data: &mut [Complex<T>], fstride: usize, m: usize, direction: FftDirection) {
        for k in 0..m {
            let u1 = c_mul_dir(data[k + m], self.twiddles[k * fstride], direction);
            let u2 = c_mul_dir(data[k + 2 * m], self.twiddles[2 * k * fstride], direction);
            let u3 = c_mul_dir(data[k + 3 * m], self.twiddles[3 * k * fstride], direction);
            let [y0, y1, y2, y3] = butterfly4(data[k], u1, u2, u3, direction);
            data[k] = y0;
            data[k + m] = y1;
            data[k + 2 * m] = y2;
            data[k + 3 * m] = y3;
        }
    }

    fn butterfly5(&self, data: &mut [Complex<T>], fstride: usize, m: usize, direction: FftDirection) {
        let ya = self.twiddle(fstride * m, direction);
        let yb = self.twiddle(fstride * 2 * m, direction);
        for u in 0..m {
            let s0 = data[u];
            let s1 = c_mul_dir(data[u + m], self.twiddles[u * fstride], direction);
            let s2 = c_mul_dir(data[u + 2 * m], self.twiddles[2 * u * fstride], direction);
            let s3 = c_mul_dir(data[u + 3 * m], self.twiddles[3 * u * fstride], direction);
            let s4 = c_mul_dir(data[u + 4 * m], self.twiddles[4 * u * fstride], direction);

            let s7 = s1 + s4;
            let s10 = s1 - s4;
            let s8 = s2 + s3;
            let s9 = s2 - s3;

            data[u] = s0 + s7 + s8;

            let s5 = Complex {
                re: s0.re + s7.re * ya.re + s8.re * yb.re,
                im: s0.im + s7.im * ya.re + s8.im * yb.re,
            };
            let s6 = Complex {
                re: s10.im * ya.im + s9.im * yb.im,
                im: -(s10.re * ya.im) - s9.re * yb.im,
            };
            data[u + m] = s5 - s6;
            data[u + 4 * m] = s5 + s6;

            let s11 = Complex {
                re: s0.re + s7.re * yb.re + s8.re * ya.re,
                im: s0.im + s7.im * yb.re + s8.im * ya.re,
            };
            let s12 = Complex {
                re: s9.im * ya.im - s10.im * yb.im,
                im: s10.re * yb.im - s9.re * ya.im,
            };
            data[u + 2 * m] = s11 + s12;
            data[u + 3 * m] = s11 - s12;
        }
    }

    fn butterfly_generic(
        &self,
        data: &mut [Complex<T>],
        fstride: usize,
        m: usize,
        radix: usize,
        scratch: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        let n = self.twiddles.len();
        let scratch = &mut scratch[..radix];
        for u in 0..m {
            for (q, dst) in scratch.iter_mut().enumerate() {
                *dst = data[u + q * m];
            }
            for q1 in 0..radix {
                let k = u + q1 * m;
                let mut twiddle_idx = 0usize;
                let mut sum = scratch[0];
                for &value in scratch.iter().skip(1) {
                    twiddle_idx += fstride * k;
                    twiddle_idx %= n;
                    sum = sum + c_mul_dir(value, self.twiddles[twiddle_idx], direction);
                }
                data[k] = sum;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::{FactorFlags, factor};
    use rand::Rng;
    use rustfft::FftPlanner;

    fn check_size(size: usize, flags: FactorFlags) {
        let plan = factor(size, flags).unwrap();
        let fft = GeneralRadix::<f32>::new(plan).unwrap();
        let mut input = vec![Complex::<f32>::default(); size];
        for z in input.iter_mut() {
            *z = Complex {
                re: rand::rng().random_range(-1.0..1.0),
                im: rand::rng().random_range(-1.0..1.0),
            };
        }
        let mut reference = input.to_vec();
        FftPlanner::new()
            .plan_fft_forward(size)
            .process(&mut reference);

        let mut scratch = vec![Complex::<f32>::default(); fft.scratch_length()];
        let mut output = vec![Complex::<f32>::default(); size];
        fft.execute(&input, &mut output, &mut scratch, FftDirection::Forward);

        let tol = 1e-4 * (size as f32).sqrt().max(1.);
        output
            .iter()
            .zip(reference.iter())
            .enumerate()
            .for_each(|(idx, (a, b))| {
                assert!(
                    (a - b).norm() < tol,
                    "{a} != {b} for size {size} at {idx}"
                );
            });

        let mut restored = vec![Complex::<f32>::default(); size];
        fft.execute(&output, &mut restored, &mut scratch, FftDirection::Inverse);
        restored.iter().zip(input.iter()).for_each(|(a, b)| {
            assert!((a - b).norm() < 1e-4, "{a} != {b} for size {size}");
        });
    }

    #[test]
    fn test_general_radix() {
        for size in [3usize, 5, 6, 7, 9, 10, 12, 15, 20, 24, 25, 30, 40, 45, 60, 96, 120, 243, 625, 1000] {
            check_size(size, FactorFlags::EightFirstStage);
            check_size(size, FactorFlags::Default);
        }
    }

    #[test]
    fn test_general_radix_primes() {
        for size in [11usize, 13, 17, 22, 34, 97, 202] {
            check_size(size, FactorFlags::Default);
        }
    }

    #[test]
    fn test_general_radix_runs_eight_stages() {
        // Radix-8 stages of a non radix-4 chain go through the generic butterfly.
        for size in [64usize, 512, 128] {
            check_size(size, FactorFlags::Eight);
        }
    }

    #[test]
    fn test_scratch_length() {
        let fft = GeneralRadix::<f32>::new(factor(60, FactorFlags::Default).unwrap()).unwrap();
        assert_eq!(fft.scratch_length(), 0);
        let fft = GeneralRadix::<f32>::new(factor(26, FactorFlags::Default).unwrap()).unwrap();
        assert_eq!(fft.scratch_length(), 13);
        let fft = GeneralRadix::<f32>::new(factor(24, FactorFlags::EightFirstStage).unwrap()).unwrap();
        assert_eq!(fft.scratch_length(), 8);
    }
}
