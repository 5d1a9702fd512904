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
use crate::MixFftError;

/// Maximum number of radix stages a factor plan can describe.
///
/// Lengths that are products of 3 need the most stages, and 3^21 already exceeds
/// the 32-bit range transform lengths were historically limited to.
pub const MAX_STAGES: usize = 21;

/// Controls which radices the factorizer may emit.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum FactorFlags {
    /// Radices 4, 2, 5 and 3, and a residual factor when nothing else divides.
    #[default]
    Default,
    /// As [FactorFlags::Default], but quotients of 8, 24 and 40 are split so that the
    /// first executed stage becomes radix-8.
    EightFirstStage,
    /// Radix-8 is preferred whenever the remaining quotient is divisible by 8.
    Eight,
}

/// Kernel family a factor plan can be executed with.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// Only radices 1, 2, 4 and 8.
    MixedRadix248,
    /// Contains radix 3, 5 or a residual factor.
    GeneralRadix,
}

/// One radix stage: the radix stripped from the length and the quotient left after it.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct Stage {
    pub radix: usize,
    pub remainder: usize,
}

/// Decomposition of a transform length into radix stages.
///
/// Stages are stored in the order they were stripped from the length. The butterfly
/// engine executes them in reverse, so the last stored stage is the first executed one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FactorPlan {
    length: usize,
    stages: [Stage; MAX_STAGES],
    stage_count: usize,
    algorithm: Algorithm,
}

impl FactorPlan {
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages[..self.stage_count]
    }

    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Radix of the first executed stage.
    pub fn first_radix(&self) -> usize {
        self.stages[self.stage_count - 1].radix
    }

    /// Distance between the samples combined by one first-stage butterfly.
    pub fn first_stride(&self) -> usize {
        self.length / self.first_radix()
    }

    /// Whether the plan has the exact shape the radix-2/4/8 engine walks: a first stage of
    /// radix 8, 4, 2 or 1 followed only by radix-4 stages, with radix 2 reserved for length 2.
    pub(crate) fn is_radix4_chain(&self) -> bool {
        let first = self.first_radix();
        let first_ok = match first {
            8 | 4 => true,
            1 | 2 => self.stage_count == 1,
            _ => false,
        };
        first_ok
            && self.stages()[..self.stage_count - 1]
                .iter()
                .all(|stage| stage.radix == 4)
    }
}

/// Decomposes `n` into radix stages.
///
/// Radices are stripped from the remaining quotient in the preferred order
/// 8 (when enabled), 4, 2, 5, 3, and finally whatever is left.
pub fn factor(n: usize, flags: FactorFlags) -> Result<FactorPlan, MixFftError> {
    if n == 0 {
        return Err(MixFftError::ZeroSizedFft);
    }

    let mut stages = [Stage::default(); MAX_STAGES];
    let mut stage_count = 0usize;
    let mut algorithm = Algorithm::MixedRadix248;
    let mut remaining = n;

    loop {
        let radix = if flags == FactorFlags::EightFirstStage
            && (remaining == 8 || remaining == 24 || remaining == 40)
        {
            match remaining {
                8 => 8,
                24 => 3,
                _ => 5,
            }
        } else if flags == FactorFlags::Eight && remaining % 8 == 0 {
            8
        } else if remaining % 4 == 0 {
            4
        } else if remaining % 2 == 0 {
            2
        } else if remaining % 5 == 0 {
            5
        } else if remaining % 3 == 0 {
            3
        } else {
            remaining
        };

        if !matches!(radix, 1 | 2 | 4 | 8) {
            algorithm = Algorithm::GeneralRadix;
        }

        remaining /= radix;
        if stage_count == MAX_STAGES {
            let total = stage_count + count_remaining_stages(remaining, flags) + 1;
            return Err(MixFftError::TooManyStages(n, total));
        }
        stages[stage_count] = Stage {
            radix,
            remainder: remaining,
        };
        stage_count += 1;

        if remaining <= 1 {
            break;
        }
    }

    Ok(FactorPlan {
        length: n,
        stages,
        stage_count,
        algorithm,
    })
}

/// Counts the stages still needed for `n`, used only to report how far over the limit a
/// rejected length is.
fn count_remaining_stages(mut n: usize, flags: FactorFlags) -> usize {
    let mut count = 0;
    while n > 1 {
        let radix = if flags == FactorFlags::Eight && n % 8 == 0 {
            8
        } else {
            [4usize, 2, 5, 3]
                .into_iter()
                .find(|&r| n % r == 0)
                .unwrap_or(n)
        };
        n /= radix;
        count += 1;
    }
    count
}
