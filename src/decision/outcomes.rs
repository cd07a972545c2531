use crate::consts::{MAX_PIP, MIN_PIP};
use crate::dice::{Dice, RerollMask};
use itertools::iproduct;
use std::ops::RangeInclusive;

/// Every raw result of rerolling `mask` on `dice`.
///
/// Masked positions range over all six faces, the rest stay at their
/// current pip, so the sequence has `6^k` items for `k` rerolled dice.
/// Tuples are not deduplicated: each one is an equally likely draw, and
/// repeats of the same sorted hand carry its probability mass. The
/// iterator is `Clone`, so a sequence can be replayed from the start.
pub fn outcomes(dice: &Dice, mask: RerollMask) -> impl Iterator<Item = Dice> + Clone {
    let pips = dice.pips();
    let faces = |pos: usize| -> RangeInclusive<u8> {
        if mask.contains(pos) {
            MIN_PIP..=MAX_PIP
        } else {
            pips[pos]..=pips[pos]
        }
    };

    iproduct!(faces(0), faces(1), faces(2), faces(3), faces(4))
        .map(|(a, b, c, d, e)| Dice::from_valid_pips([a, b, c, d, e]))
}

pub fn outcome_count(mask: RerollMask) -> usize {
    6usize.pow(mask.count() as u32)
}
