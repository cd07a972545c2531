use crate::consts::{NUM_DICE, NUM_MASKS};
use crate::error::{YahtzeeError, YzResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subset of the five (sorted) dice positions to reroll, one bit per position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RerollMask(u8);

impl RerollMask {
    /// Stand pat: reroll nothing.
    pub const EMPTY: RerollMask = RerollMask(0);
    pub const ALL: RerollMask = RerollMask(NUM_MASKS - 1);

    pub fn from_bits(bits: u8) -> YzResult<Self> {
        if bits < NUM_MASKS {
            Ok(RerollMask(bits))
        } else {
            Err(YahtzeeError::RerollBits(bits))
        }
    }

    #[inline(always)]
    pub(crate) fn from_bits_truncate(bits: u8) -> Self {
        RerollMask(bits & (NUM_MASKS - 1))
    }

    pub fn from_positions(positions: &[usize]) -> YzResult<Self> {
        let mut bits = 0u8;
        for &pos in positions {
            if pos >= NUM_DICE {
                return Err(YahtzeeError::RerollPosition(pos));
            }
            if bits & (1 << pos) != 0 {
                return Err(YahtzeeError::DuplicateRerollPosition(pos));
            }
            bits |= 1 << pos;
        }
        Ok(RerollMask(bits))
    }

    /// Every mask in ascending numeric order, `EMPTY` first.
    pub fn all() -> impl Iterator<Item = RerollMask> {
        (0..NUM_MASKS).map(RerollMask)
    }

    #[inline(always)]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn contains(self, pos: usize) -> bool {
        pos < NUM_DICE && self.0 & (1 << pos) != 0
    }

    pub fn positions(self) -> impl Iterator<Item = usize> {
        (0..NUM_DICE).filter(move |&pos| self.contains(pos))
    }

    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl TryFrom<u8> for RerollMask {
    type Error = YahtzeeError;

    fn try_from(bits: u8) -> YzResult<Self> {
        RerollMask::from_bits(bits)
    }
}

impl From<RerollMask> for u8 {
    fn from(mask: RerollMask) -> u8 {
        mask.0
    }
}

/// Renders as `[1, -, 3, -, -]`: rerolled positions by 1-based index, kept ones as `-`.
impl fmt::Display for RerollMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = (0..NUM_DICE)
            .map(|pos| {
                if self.contains(pos) {
                    (pos + 1).to_string()
                } else {
                    "-".to_string()
                }
            })
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
