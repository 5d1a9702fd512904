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
use crate::factors::FactorPlan;
use crate::{FftDirection, FftSample, MixFftError};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::f64::consts::PI;

#[inline]
fn unit<T: FftSample>(angle: f64) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let (v_sin, v_cos) = angle.sin_cos();
    Complex {
        re: v_cos.as_(),
        im: v_sin.as_(),
    }
}

pub(crate) fn compute_twiddle<T: FftSample>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let result = unit(-2. * PI * index as f64 / fft_len as f64);
    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

/// Number of entries [stage_twiddles] produces for `plan`.
pub(crate) fn stage_twiddles_length(plan: &FactorPlan) -> usize {
    let stages = plan.stages();
    stages[..stages.len() - 1]
        .iter()
        .map(|stage| stage.remainder * (stage.radix - 1))
        .sum()
}

/// Twiddles for every stage but the first executed one, laid out in execution order.
///
/// Each stage's sub-table holds `mstride * (radix - 1)` entries, entry
/// `mstride * (k - 1) + j` being `exp(-2πi * fstride * k * j / n)`. The `k = 0`
/// rotation is the identity and is not stored. Only forward rotations are kept,
/// the inverse engine conjugates on the fly.
pub(crate) fn stage_twiddles<T: FftSample>(plan: &FactorPlan) -> Result<Vec<Complex<T>>, MixFftError>
where
    f64: AsPrimitive<T>,
{
    let n = plan.length();
    let stages = plan.stages();
    let mut twiddles = try_vec![Complex::<T>::default(); stage_twiddles_length(plan)];

    let mut fstride = plan.first_stride();
    let mut offset = 0usize;
    for stage in stages[..stages.len() - 1].iter().rev() {
        let radix = stage.radix;
        let mstride = stage.remainder;
        fstride /= radix;
        let table = &mut twiddles[offset..offset + mstride * (radix - 1)];
        for j in 0..mstride {
            for k in 1..radix {
                table[mstride * (k - 1) + j] = compute_twiddle(
                    (fstride * k * j) % n,
                    n,
                    FftDirection::Forward,
                );
            }
        }
        offset += mstride * (radix - 1);
    }

    Ok(twiddles)
}

/// Rotations combining the two halves of a packed real sequence, `ncfft / 2` entries of
/// `exp(-πi * ((j + 1) / ncfft + 0.5))`.
pub(crate) fn super_twiddles<T: FftSample>(ncfft: usize) -> Result<Vec<Complex<T>>, MixFftError>
where
    f64: AsPrimitive<T>,
{
    let mut twiddles = try_vec![Complex::<T>::default(); ncfft / 2];
    for (j, twiddle) in twiddles.iter_mut().enumerate() {
        *twiddle = unit(-PI * ((j + 1) as f64 / ncfft as f64 + 0.5));
    }
    Ok(twiddles)
}

/// Full circle of `n` forward rotations, used by the general radix kernel.
pub(crate) fn dft_twiddles<T: FftSample>(n: usize) -> Result<Vec<Complex<T>>, MixFftError>
where
    f64: AsPrimitive<T>,
{
    let mut twiddles = try_vec![Complex::<T>::default(); n];
    for (k, twiddle) in twiddles.iter_mut().enumerate() {
        *twiddle = compute_twiddle(k, n, FftDirection::Forward);
    }
    Ok(twiddles)
}
