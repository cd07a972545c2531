use crate::scorer::ProjectedOutcome;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How candidate categories (and through them, rerolls) are ranked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    ValueEnum,
)]
#[strum(ascii_case_insensitive)]
pub enum SelectionPolicy {
    /// Highest points now, bonus included.
    MaximizeGain,
    /// Smallest shortfall against the category's ceiling.
    MinimizeLoss,
    /// Gain and loss added together.
    Balance,
}

impl SelectionPolicy {
    #[inline(always)]
    pub fn metric(self, outcome: &ProjectedOutcome) -> i32 {
        match self {
            SelectionPolicy::MaximizeGain => outcome.gained,
            SelectionPolicy::MinimizeLoss => outcome.lost,
            SelectionPolicy::Balance => outcome.gained + outcome.lost,
        }
    }
}
