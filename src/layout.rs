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
use crate::r2c::RealFftPlan;
use crate::{FftSample, MixFftError};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Ways of storing the `N/2 + 1` bins of a real spectrum in a flat real array.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum SpectrumLayout {
    /// `r0, r1, ..., r(N/2), i(N/2-1), ..., i1`: `N` values, the imaginary part of bin `k`
    /// stored at `N - k`.
    HalfComplex,
    /// `r0, r(N/2), r1, i1, ..., r(N/2-1), i(N/2-1)`: `N` values.
    Perm,
    /// `r0, 0, r1, i1, ..., r(N/2), 0`: `N + 2` values.
    Ccs,
}

impl SpectrumLayout {
    /// Number of reals a spectrum of a length `n` real signal occupies.
    pub fn packed_length(self, n: usize) -> usize {
        match self {
            SpectrumLayout::HalfComplex | SpectrumLayout::Perm => n,
            SpectrumLayout::Ccs => n + 2,
        }
    }
}

fn signal_length<T>(spectrum: &[Complex<T>]) -> Result<usize, MixFftError> {
    if spectrum.len() < 2 {
        return Err(MixFftError::ZeroSizedFft);
    }
    Ok((spectrum.len() - 1) * 2)
}

/// Stores `spectrum`, the `N/2 + 1` bins of a length `N` real signal, into `packed`.
pub fn pack_spectrum<T: FftSample>(
    spectrum: &[Complex<T>],
    layout: SpectrumLayout,
    packed: &mut [T],
) -> Result<(), MixFftError> {
    let n = signal_length(spectrum)?;
    let half = n / 2;
    if packed.len() != layout.packed_length(n) {
        return Err(MixFftError::InvalidPackedLength(
            packed.len(),
            layout.packed_length(n),
        ));
    }

    match layout {
        SpectrumLayout::HalfComplex => {
            packed[0] = spectrum[0].re;
            packed[half] = spectrum[half].re;
            for (idx, bin) in spectrum.iter().enumerate().take(half).skip(1) {
                packed[idx] = bin.re;
                packed[n - idx] = bin.im;
            }
        }
        SpectrumLayout::Perm => {
            packed[0] = spectrum[0].re;
            packed[1] = spectrum[half].re;
            for (dst, bin) in packed[2..]
                .chunks_exact_mut(2)
                .zip(spectrum[1..half].iter())
            {
                dst[0] = bin.re;
                dst[1] = bin.im;
            }
        }
        SpectrumLayout::Ccs => {
            for (dst, bin) in packed.chunks_exact_mut(2).zip(spectrum.iter()) {
                dst[0] = bin.re;
                dst[1] = bin.im;
            }
        }
    }
    Ok(())
}

/// Reads a packed spectrum back into `spectrum` (`N/2 + 1` bins).
///
/// The DC and Nyquist bins always come out with a zero imaginary part.
pub fn unpack_spectrum<T: FftSample>(
    packed: &[T],
    layout: SpectrumLayout,
    spectrum: &mut [Complex<T>],
) -> Result<(), MixFftError> {
    let n = signal_length(spectrum)?;
    let half = n / 2;
    if packed.len() != layout.packed_length(n) {
        return Err(MixFftError::InvalidPackedLength(
            packed.len(),
            layout.packed_length(n),
        ));
    }
    let zero = T::zero();

    match layout {
        SpectrumLayout::HalfComplex => {
            spectrum[0] = Complex::new(packed[0], zero);
            spectrum[half] = Complex::new(packed[half], zero);
            for (idx, bin) in spectrum.iter_mut().enumerate().take(half).skip(1) {
                *bin = Complex::new(packed[idx], packed[n - idx]);
            }
        }
        SpectrumLayout::Perm => {
            spectrum[0] = Complex::new(packed[0], zero);
            spectrum[half] = Complex::new(packed[1], zero);
            for (bin, src) in spectrum[1..half]
                .iter_mut()
                .zip(packed[2..].chunks_exact(2))
            {
                *bin = Complex::new(src[0], src[1]);
            }
        }
        SpectrumLayout::Ccs => {
            for (bin, src) in spectrum.iter_mut().zip(packed.chunks_exact(2)) {
                *bin = Complex::new(src[0], src[1]);
            }
            spectrum[0].im = zero;
            spectrum[half].im = zero;
        }
    }
    Ok(())
}

/// Real FFT that reads and writes spectra in a packed [SpectrumLayout].
pub struct PackedRealFft<T> {
    plan: RealFftPlan<T>,
    spectrum: Vec<Complex<T>>,
    layout: SpectrumLayout,
}

impl<T: FftSample> PackedRealFft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(length: usize, layout: SpectrumLayout) -> Result<Self, MixFftError> {
        let plan = RealFftPlan::new(length)?;
        let spectrum = crate::err::try_vec![Complex::<T>::default(); plan.complex_length()];
        Ok(PackedRealFft {
            plan,
            spectrum,
            layout,
        })
    }

    /// Forward transform of one signal of [PackedRealFft::length] samples into `packed`,
    /// which must be [SpectrumLayout::packed_length] long.
    pub fn forward(&mut self, input: &[T], packed: &mut [T]) -> Result<(), MixFftError> {
        self.plan.forward(input, &mut self.spectrum)?;
        pack_spectrum(&self.spectrum, self.layout, packed)
    }

    /// Inverse transform of a packed spectrum, scaled by `1/length`.
    pub fn inverse(&mut self, packed: &[T], output: &mut [T]) -> Result<(), MixFftError> {
        unpack_spectrum(packed, self.layout, &mut self.spectrum)?;
        self.plan.inverse(&self.spectrum, output)
    }
}

impl<T: FftSample> PackedRealFft<T> {
    pub fn length(&self) -> usize {
        self.plan.length()
    }

    pub fn layout(&self) -> SpectrumLayout {
        self.layout
    }

    pub fn packed_length(&self) -> usize {
        self.layout.packed_length(self.length())
    }
}
