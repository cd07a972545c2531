pub mod reroll;

pub use self::reroll::RerollMask;

use crate::consts::{MAX_PIP, MIN_PIP, NUM_DICE};
use crate::error::{YahtzeeError, YzResult};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single six-sided die. Always holds a pip in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    pub fn new(pip: u8) -> YzResult<Self> {
        if (MIN_PIP..=MAX_PIP).contains(&pip) {
            Ok(Die(pip))
        } else {
            Err(YahtzeeError::InvalidPip(pip))
        }
    }

    pub fn roll(rng: &mut Rng) -> Self {
        Die(rng.u8(MIN_PIP..=MAX_PIP))
    }

    #[inline(always)]
    pub fn pip(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Die {
    type Error = YahtzeeError;

    fn try_from(pip: u8) -> YzResult<Self> {
        Die::new(pip)
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> u8 {
        die.0
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Five dice kept in ascending pip order.
///
/// Every constructor and mutator re-sorts, so two hands holding the same
/// multiset of pips compare, hash and order identically. Reroll masks
/// address positions of this sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Dice([Die; NUM_DICE]);

impl Dice {
    pub fn from_pips(pips: &[u8]) -> YzResult<Self> {
        if pips.len() != NUM_DICE {
            return Err(YahtzeeError::DiceCount(pips.len()));
        }
        let mut dice = [Die(MIN_PIP); NUM_DICE];
        for (slot, &pip) in dice.iter_mut().zip(pips) {
            *slot = Die::new(pip)?;
        }
        dice.sort_unstable();
        Ok(Dice(dice))
    }

    /// Builds a hand from pips already known to be in range.
    /// Used by the outcome enumeration, whose tuples are valid by construction.
    #[inline(always)]
    pub(crate) fn from_valid_pips(mut pips: [u8; NUM_DICE]) -> Self {
        debug_assert!(pips.iter().all(|p| (MIN_PIP..=MAX_PIP).contains(p)));
        pips.sort_unstable();
        Dice(pips.map(Die))
    }

    pub fn roll(rng: &mut Rng) -> Self {
        let mut dice = Dice([Die(MIN_PIP); NUM_DICE]);
        dice.roll_all(rng);
        dice
    }

    pub fn roll_all(&mut self, rng: &mut Rng) {
        for die in self.0.iter_mut() {
            *die = Die::roll(rng);
        }
        self.0.sort_unstable();
    }

    /// Rerolls the positions selected by `mask`, then re-sorts.
    pub fn reroll(&mut self, mask: RerollMask, rng: &mut Rng) {
        for pos in mask.positions() {
            self.0[pos] = Die::roll(rng);
        }
        self.0.sort_unstable();
    }

    #[inline(always)]
    pub fn pips(&self) -> [u8; NUM_DICE] {
        self.0.map(Die::pip)
    }

    #[inline(always)]
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|d| d.pip() as u32).sum()
    }

    /// Occurrences per face, indexed by pip (index 0 unused).
    #[inline(always)]
    pub fn face_counts(&self) -> [u8; 7] {
        let mut counts = [0u8; 7];
        for die in &self.0 {
            counts[die.pip() as usize] += 1;
        }
        counts
    }

    pub fn count_of(&self, pip: u8) -> u8 {
        self.0.iter().filter(|d| d.pip() == pip).count() as u8
    }

    /// Positions that must be rerolled before `target` is reachable.
    ///
    /// Walks both sorted sequences in step: a die matching the next target
    /// pip is kept, a die smaller than it (or left over once the target is
    /// exhausted) is rerolled, and a target pip smaller than the current die
    /// is skipped.
    pub fn reroll_toward(&self, target: &Dice) -> RerollMask {
        let own = self.pips();
        let goal = target.pips();
        let mut bits = 0u8;
        let (mut i, mut j) = (0, 0);

        while i < NUM_DICE {
            if j == NUM_DICE || own[i] < goal[j] {
                bits |= 1 << i;
                i += 1;
            } else if own[i] == goal[j] {
                i += 1;
                j += 1;
            } else {
                j += 1;
            }
        }
        RerollMask::from_bits_truncate(bits)
    }
}

impl TryFrom<Vec<u8>> for Dice {
    type Error = YahtzeeError;

    fn try_from(pips: Vec<u8>) -> YzResult<Self> {
        Dice::from_pips(&pips)
    }
}

impl From<Dice> for Vec<u8> {
    fn from(dice: Dice) -> Vec<u8> {
        dice.pips().to_vec()
    }
}

impl FromStr for Dice {
    type Err = YahtzeeError;

    /// Parses a comma separated pip list such as `3,1,6,6,2`.
    fn from_str(s: &str) -> YzResult<Self> {
        let pips = s
            .split(',')
            .map(|p| {
                let p = p.trim();
                p.parse::<u8>()
                    .map_err(|_| YahtzeeError::Config(format!("Invalid pip '{}' in '{}'", p, s)))
            })
            .collect::<YzResult<Vec<u8>>>()?;
        Dice::from_pips(&pips)
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.pips();
        write!(f, "[{}, {}, {}, {}, {}]", a, b, c, d, e)
    }
}
