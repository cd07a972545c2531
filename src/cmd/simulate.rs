use crate::reports;
use autoyahtzee::config::Config;
use autoyahtzee::error::YzResult;
use autoyahtzee::game::run_experiment;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(config: &Config) -> YzResult<()> {
    let report = run_experiment(config)?;

    if let Some(last) = report.records.last() {
        reports::print_game(last);
    }
    reports::print_summary(&report);
    Ok(())
}
