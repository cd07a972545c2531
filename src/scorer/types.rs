use super::Category;
use crate::dice::Dice;
use serde::{Deserialize, Serialize};

/// What committing a hand to a category would do, without doing it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedOutcome {
    pub total_if_assigned: u32,
    // Category points plus any bonus this assignment would newly trigger.
    pub gained: i32,
    // Gain minus the gain of a perfect hand in the same box. Never positive.
    pub lost: i32,
}

/// One row of the scorecard as shown in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreLine {
    pub category: Category,
    pub points: u32,
    pub cap: u32,
    pub dice: Option<Dice>,
}
