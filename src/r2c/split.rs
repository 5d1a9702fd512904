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
use crate::FftSample;
use num_complex::Complex;

/// Turns the half-length spectrum `src` of a real signal packed as complex pairs into the
/// `ncfft + 1` non-negative bins of the full length real spectrum.
///
/// `src` holds `ncfft` values, `dst` at least `ncfft + 1` and `super_twiddles`
/// `ncfft / 2`.
pub(crate) fn split_r2c<T: FftSample>(
    src: &[Complex<T>],
    dst: &mut [Complex<T>],
    super_twiddles: &[Complex<T>],
) {
    let ncfft = src.len();
    let zero = T::zero();

    let tdc = src[0];
    dst[0] = Complex::new(tdc.re + tdc.im, zero);
    dst[ncfft] = Complex::new(tdc.re - tdc.im, zero);

    for k in 1..=ncfft / 2 {
        let fpk = src[k];
        let fpnk = src[ncfft - k].conj();

        let f1k = fpk + fpnk;
        let f2k = fpk - fpnk;
        let tw = f2k * super_twiddles[k - 1];

        dst[k] = Complex {
            re: (f1k.re + tw.re) * T::HALF,
            im: (f1k.im + tw.im) * T::HALF,
        };
        dst[ncfft - k] = Complex {
            re: (f1k.re - tw.re) * T::HALF,
            im: (tw.im - f1k.im) * T::HALF,
        };
    }
}

/// Inverse of [split_r2c]: folds `ncfft + 1` bins back into the half-length spectrum the
/// inverse complex FFT expects.
///
/// The imaginary parts of the DC and Nyquist bins are ignored.
pub(crate) fn split_c2r<T: FftSample>(
    src: &[Complex<T>],
    dst: &mut [Complex<T>],
    super_twiddles: &[Complex<T>],
) {
    let ncfft = dst.len();

    dst[0] = Complex {
        re: (src[0].re + src[ncfft].re) * T::HALF,
        im: (src[0].re - src[ncfft].re) * T::HALF,
    };

    for k in 1..=ncfft / 2 {
        let fk = src[k];
        let fnkc = src[ncfft - k].conj();

        let fek = fk + fnkc;
        let tmp = fk - fnkc;
        let fok = tmp * super_twiddles[k - 1].conj();

        dst[k] = Complex {
            re: (fek.re + fok.re) * T::HALF,
            im: (fek.im + fok.im) * T::HALF,
        };
        dst[ncfft - k] = Complex {
            re: (fek.re - fok.re) * T::HALF,
            im: (fok.im - fek.im) * T::HALF,
        };
    }
}
