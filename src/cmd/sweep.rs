use crate::reports;
use autoyahtzee::config::Config;
use autoyahtzee::error::YzResult;
use autoyahtzee::game::run_sweep;
use clap::Args;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(config: &Config) -> YzResult<()> {
    if config.output.record_dir.is_some() || config.output.csv.is_some() {
        warn!("⚠️  Record and CSV output are ignored by sweep.");
    }
    info!("🔁 Sweeping all reroll/choice policy pairs");

    let reports = run_sweep(config)?;
    reports::print_sweep(&reports);
    Ok(())
}
