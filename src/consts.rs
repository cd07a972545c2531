pub const MIN_PIP: u8 = 1;
pub const MAX_PIP: u8 = 6;
pub const NUM_DICE: usize = 5;

/// Number of distinct reroll masks over five positions (2^5).
pub const NUM_MASKS: u8 = 1 << NUM_DICE;

pub const BONUS_THRESHOLD: u32 = 63;
pub const BONUS_POINTS: u32 = 35;

pub const POINTS_SMALL_STRAIGHT: u32 = 15;
pub const POINTS_LARGE_STRAIGHT: u32 = 30;
pub const POINTS_YAHTZEE: u32 = 50;

/// Rolls per turn: the opening roll plus two rerolls.
pub const ROLLS_PER_TURN: usize = 3;
