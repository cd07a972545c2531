use crate::scorer::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum YahtzeeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    // === Contract violations ===
    #[error("Invalid pip {0}: a die shows 1..=6")]
    InvalidPip(u8),

    #[error("Expected 5 dice, got {0}")]
    DiceCount(usize),

    #[error("Reroll position {0} is outside 0..=4")]
    RerollPosition(usize),

    #[error("Reroll position {0} listed more than once")]
    DuplicateRerollPosition(usize),

    #[error("Reroll mask {0} is outside 0..=31")]
    RerollBits(u8),

    #[error("Category {0} is already assigned")]
    AlreadyAssigned(Category),

    #[error("Scorecard is complete: no category left to choose")]
    ScorecardComplete,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

pub type YzResult<T> = Result<T, YahtzeeError>;
