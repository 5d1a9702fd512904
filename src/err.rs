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
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MixFftError {
    /// Transform length is zero.
    ZeroSizedFft,
    /// Real transforms are computed through a half-length complex transform,
    /// so the real length must be even.
    OddRealLength(usize),
    /// Length needs more radix stages than a factor plan can hold.
    TooManyStages(usize, usize),
    OutOfMemory(usize),
    InvalidSizeMultiplier(usize, usize),
    MismatchedBatches(usize, usize),
    ScratchBufferIsTooSmall(usize, usize),
    InvalidPackedLength(usize, usize),
}

impl MixFftError {
    /// Returns true when the error rejects the requested transform length itself,
    /// as opposed to a failed allocation or a badly shaped buffer.
    pub fn is_invalid_length(&self) -> bool {
        matches!(
            self,
            MixFftError::ZeroSizedFft
                | MixFftError::OddRealLength(_)
                | MixFftError::TooManyStages(_, _)
        )
    }
}

impl Error for MixFftError {}

impl std::fmt::Display for MixFftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MixFftError::ZeroSizedFft => f.write_str("Cannot execute FFT on zero-sized buffers"),
            MixFftError::OddRealLength(length) => f.write_fmt(format_args!(
                "Real transform length must be even, but it was {length}"
            )),
            MixFftError::TooManyStages(length, stages) => f.write_fmt(format_args!(
                "Length {length} requires {stages} stages, at most {} are supported",
                crate::factors::MAX_STAGES
            )),
            MixFftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} elements to vector"))
            }
            MixFftError::InvalidSizeMultiplier(s0, s1) => f.write_fmt(format_args!(
                "Size {s0} is assumed to be multiplier of {s1} to execute many FFT, but it wasn't"
            )),
            MixFftError::MismatchedBatches(s0, s1) => f.write_fmt(format_args!(
                "Input holds {s0} transforms, but output has room for {s1}"
            )),
            MixFftError::ScratchBufferIsTooSmall(current, required) => f.write_fmt(format_args!(
                "Scratch buffer size must be at least {required} but it is {current}"
            )),
            MixFftError::InvalidPackedLength(current, required) => f.write_fmt(format_args!(
                "Packed spectrum length expected to be {required}, but it was {current}"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::MixFftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;

macro_rules! validate_scratch {
    ($scratch: expr, $required: expr) => {{
        if $scratch.len() < $required {
            return Err(crate::err::MixFftError::ScratchBufferIsTooSmall(
                $scratch.len(),
                $required,
            ));
        }
        &mut $scratch[..$required]
    }};
}

pub(crate) use validate_scratch;
