pub mod record;
pub mod runner;
pub mod stats;

pub use self::record::{write_totals_csv, GameRecord, RecordWriter, TurnRecord};
pub use self::runner::{play_game, run_experiment, run_sweep, ExperimentReport, GameOptions};
pub use self::stats::Summary;
