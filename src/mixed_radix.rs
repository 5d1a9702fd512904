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
use crate::butterflies::{butterfly2, butterfly4, butterfly8, twiddled_butterfly4};
use crate::factors::FactorPlan;
use crate::twiddles::stage_twiddles;
use crate::{FftDirection, FftSample, MixFftError};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Which of the two working buffers currently holds the latest stage output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BufferIndex {
    Output,
    Scratch,
}

impl BufferIndex {
    fn swap(self) -> Self {
        match self {
            BufferIndex::Output => BufferIndex::Scratch,
            BufferIndex::Scratch => BufferIndex::Output,
        }
    }
}

/// Ordered mixed radix-4/8 decimation-in-time FFT for power-of-two lengths.
///
/// A radix-8 or radix-4 first stage with hardcoded rotations is followed by radix-4
/// stages. At each stage `fstride` counts the butterfly sections and `mstride` the
/// butterflies within a section; after a radix-4 stage the former is quartered and the
/// latter quadrupled. Stage outputs are stored so that every stage reads contiguously
/// and the last one leaves the result in natural order.
pub(crate) struct MixedRadix248<T> {
    plan: FactorPlan,
    twiddles: Vec<Complex<T>>,
    inverse_scale: T,
}

impl<T: FftSample> MixedRadix248<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(plan: FactorPlan) -> Result<Self, MixFftError> {
        assert!(
            plan.is_radix4_chain(),
            "Radix 2/4/8 engine needs a radix-8/4 first stage followed by radix-4 stages"
        );
        let twiddles = stage_twiddles(&plan)?;
        Ok(MixedRadix248 {
            inverse_scale: (1. / plan.length() as f64).as_(),
            plan,
            twiddles,
        })
    }
}

impl<T: FftSample> MixedRadix248<T> {
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

    /// Transforms `input` into `output`.
    ///
    /// Both slices must be exactly [Self::length] long. `input` is clobbered: once the
    /// first stage has consumed it, it serves as the second ping-pong buffer.
    pub(crate) fn execute(
        &self,
        input: &mut [Complex<T>],
        output: &mut [Complex<T>],
        direction: FftDirection,
    ) {
        let n = self.plan.length();
        debug_assert_eq!(input.len(), n);
        debug_assert_eq!(output.len(), n);

        let mut stage_count = self.plan.stage_count();
        let first_radix = self.plan.first_radix();
        let mut fstride = self.plan.first_stride();
        let mut mstride = if stage_count > 1 {
            self.plan.stages()[stage_count - 2].remainder
        } else {
            1
        };
        let scale = self.inverse_scale;
        let inverse = direction == FftDirection::Inverse;

        let step = match first_radix {
            8 => {
                for (f, dst) in output.chunks_exact_mut(8).enumerate() {
                    let src = &input[f..];
                    let u = std::array::from_fn(|k| src[fstride * k]);
                    dst.copy_from_slice(&butterfly8(u, direction));
                }
                fstride * 2
            }
            4 => {
                for (f, dst) in output.chunks_exact_mut(4).enumerate() {
                    let src = &input[f..];
                    let bf = butterfly4(
                        src[0],
                        src[fstride],
                        src[fstride * 2],
                        src[fstride * 3],
                        direction,
                    );
                    dst.copy_from_slice(&bf);
                }
                fstride
            }
            2 => {
                let (y0, y1) = butterfly2(input[0], input[1]);
                output[0] = y0;
                output[1] = y1;
                if inverse {
                    scale_in_place(output, scale);
                }
                return;
            }
            _ => {
                output[0] = input[0];
                return;
            }
        };

        stage_count -= 1;
        fstride /= 4;

        if stage_count == 0 {
            if inverse {
                scale_in_place(output, scale);
            }
            return;
        }

        let scratch = input;
        let mut current = BufferIndex::Output;
        let mut twiddles = self.twiddles.as_slice();

        while stage_count > 1 {
            let (src, dst): (&[Complex<T>], &mut [Complex<T>]) = match current {
                BufferIndex::Output => (&*output, &mut *scratch),
                BufferIndex::Scratch => (&*scratch, &mut *output),
            };
            for f in 0..fstride {
                let src = &src[f * mstride..];
                let dst = &mut dst[f * mstride * 4..];
                for m in 0..mstride {
                    let tw = [twiddles[m], twiddles[m + mstride], twiddles[m + mstride * 2]];
                    let u = [src[m], src[m + step], src[m + step * 2], src[m + step * 3]];
                    let [y0, y1, y2, y3] = twiddled_butterfly4(u, tw, direction);
                    dst[m] = y0;
                    dst[m + mstride] = y1;
                    dst[m + mstride * 2] = y2;
                    dst[m + mstride * 3] = y3;
                }
            }

            twiddles = &twiddles[mstride * 3..];
            mstride *= 4;
            fstride /= 4;
            current = current.swap();
            stage_count -= 1;
        }

        // The last stage reads and writes the same offsets, so when its input already sits
        // in the output buffer it runs in place.
        let scale = if inverse { Some(scale) } else { None };
        match current {
            BufferIndex::Scratch => last_stage(
                scratch, output, twiddles, fstride, mstride, step, direction, scale,
            ),
            BufferIndex::Output => {
                last_stage_in_place(output, twiddles, fstride, mstride, step, direction, scale)
            }
        }
    }
}

#[inline]
fn scale_in_place<T: FftSample>(data: &mut [Complex<T>], scale: T) {
    for v in data.iter_mut() {
        *v = *v * scale;
    }
}

#[inline(always)]
fn apply_scale<T: FftSample>(values: [Complex<T>; 4], scale: Option<T>) -> [Complex<T>; 4] {
    match scale {
        Some(s) => values.map(|v| v * s),
        None => values,
    }
}

#[allow(clippy::too_many_arguments)]
fn last_stage<T: FftSample>(
    src: &[Complex<T>],
    dst: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    fstride: usize,
    mstride: usize,
    step: usize,
    direction: FftDirection,
    scale: Option<T>,
) {
    for f in 0..fstride {
        let base = f * mstride;
        for m in 0..mstride {
            let i = base + m;
            let tw = [twiddles[m], twiddles[m + mstride], twiddles[m + mstride * 2]];
            let u = [src[i], src[i + step], src[i + step * 2], src[i + step * 3]];
            let [y0, y1, y2, y3] = apply_scale(twiddled_butterfly4(u, tw, direction), scale);
            dst[i] = y0;
            dst[i + step] = y1;
            dst[i + step * 2] = y2;
            dst[i + step * 3] = y3;
        }
    }
}

fn last_stage_in_place<T: FftSample>(
    data: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    fstride: usize,
    mstride: usize,
    step: usize,
    direction: FftDirection,
    scale: Option<T>,
) {
    for f in 0..fstride {
        let base = f * mstride;
        for m in 0..mstride {
            let i = base + m;
            let tw = [twiddles[m], twiddles[m + mstride], twiddles[m + mstride * 2]];
            let u = [data[i], data[i + step], data[i + step * 2], data[i + step * 3]];
            let [y0, y1, y2, y3] = apply_scale(twiddled_butterfly4(u, tw, direction), scale);
            data[i] = y0;
            data[i + step] = y1;
            data[i + step * 2] = y2;
            data[i + step * 3] = y3;
        }
    }
}
