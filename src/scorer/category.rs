use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The twelve scoring boxes, declared in canonical order.
///
/// Declaration order doubles as the tie-break order of the decision engine:
/// whenever two categories rank equal, the earlier one wins.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    // Upper section
    Ace,
    Deuce,
    Trey,
    Four,
    Five,
    Six,
    // Lower section
    Choice,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Ace,
        Category::Deuce,
        Category::Trey,
        Category::Four,
        Category::Five,
        Category::Six,
        Category::Choice,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
    ];

    pub const UPPER: [Category; 6] = [
        Category::Ace,
        Category::Deuce,
        Category::Trey,
        Category::Four,
        Category::Five,
        Category::Six,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub fn is_upper(self) -> bool {
        self.face().is_some()
    }

    /// Pip value counted by an upper category.
    pub fn face(self) -> Option<u8> {
        match self {
            Category::Ace => Some(1),
            Category::Deuce => Some(2),
            Category::Trey => Some(3),
            Category::Four => Some(4),
            Category::Five => Some(5),
            Category::Six => Some(6),
            _ => None,
        }
    }
}
