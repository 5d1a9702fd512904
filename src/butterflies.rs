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
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use std::ops::Neg;

/// Multiplies by `-i` for forward transforms and by `i` for inverse ones.
#[inline(always)]
pub(crate) fn rotate_90<T: Copy + Neg<Output = T>>(
    value: Complex<T>,
    direction: FftDirection,
) -> Complex<T> {
    match direction {
        FftDirection::Forward => Complex {
            re: value.im,
            im: -value.re,
        },
        FftDirection::Inverse => Complex {
            re: -value.im,
            im: value.re,
        },
    }
}

/// `value * twiddle` going forward, `value * conj(twiddle)` going backward.
#[inline(always)]
pub(crate) fn c_mul_dir<T: FftSample>(
    value: Complex<T>,
    twiddle: Complex<T>,
    direction: FftDirection,
) -> Complex<T> {
    match direction {
        FftDirection::Forward => Complex {
            re: value.re * twiddle.re - value.im * twiddle.im,
            im: value.im * twiddle.re + value.re * twiddle.im,
        },
        FftDirection::Inverse => Complex {
            re: value.re * twiddle.re + value.im * twiddle.im,
            im: value.im * twiddle.re - value.re * twiddle.im,
        },
    }
}

#[inline(always)]
pub(crate) fn butterfly2<T: FftSample>(
    u0: Complex<T>,
    u1: Complex<T>,
) -> (Complex<T>, Complex<T>) {
    (u0 + u1, u0 - u1)
}

/// Radix-4 DIT butterfly over already twiddled inputs.
#[inline(always)]
pub(crate) fn butterfly4<T: FftSample>(
    u0: Complex<T>,
    u1: Complex<T>,
    u2: Complex<T>,
    u3: Complex<T>,
    direction: FftDirection,
) -> [Complex<T>; 4] {
    let t0 = u0 + u2;
    let t1 = u0 - u2;
    let t2 = u1 + u3;
    let t3 = rotate_90(u1 - u3, direction);
    [t0 + t2, t1 + t3, t0 - t2, t1 - t3]
}

/// Radix-4 butterfly of a middle or last stage: inputs 1..3 are rotated by their
/// twiddles first, input 0 carries the identity rotation.
#[inline(always)]
pub(crate) fn twiddled_butterfly4<T: FftSample>(
    u: [Complex<T>; 4],
    tw: [Complex<T>; 3],
    direction: FftDirection,
) -> [Complex<T>; 4] {
    let u1 = c_mul_dir(u[1], tw[0], direction);
    let u2 = c_mul_dir(u[2], tw[1], direction);
    let u3 = c_mul_dir(u[3], tw[2], direction);
    butterfly4(u[0], u1, u2, u3, direction)
}

/// Closed form radix-8 DIT butterfly used as a first stage.
///
/// The odd eighth rotations are realized as `(x ± rotate_90(x)) * T::RADIX8_ROTATION`
/// instead of full complex multiplications.
#[inline(always)]
pub(crate) fn butterfly8<T: FftSample>(u: [Complex<T>; 8], direction: FftDirection) -> [Complex<T>; 8] {
    let (s0, s1) = butterfly2(u[0], u[4]);
    let (s2, s3) = butterfly2(u[1], u[5]);
    let (s4, s5) = butterfly2(u[2], u[6]);
    let (s6, s7) = butterfly2(u[3], u[7]);

    let s3 = (s3 + rotate_90(s3, direction)) * T::RADIX8_ROTATION;
    let s5 = rotate_90(s5, direction);
    let s7 = (s7 - rotate_90(s7, direction)) * T::RADIX8_ROTATION;

    let (e0, e2) = butterfly2(s0, s4);
    let (e1, e3) = butterfly2(s1, s5);
    let o0 = s2 + s6;
    let o1 = s3 - s7;
    let o2 = rotate_90(s2 - s6, direction);
    let o3 = rotate_90(s3 + s7, direction);

    [
        e0 + o0,
        e1 + o1,
        e2 + o2,
        e3 + o3,
        e0 - o0,
        e1 - o1,
        e2 - o2,
        e3 - o3,
    ]
}
