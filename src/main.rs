use autoyahtzee::config::Config;
use autoyahtzee::error::YzResult;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Autonomous Yahtzee player", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; options given on the command line take precedence
    #[arg(global = true, long = "config", value_name = "JSON")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a batch of games and summarise the totals
    Simulate(cmd::simulate::SimulateArgs),
    /// Compare every reroll/choice policy pair
    Sweep(cmd::sweep::SweepArgs),
    /// Rank every reroll for one hand against a partly filled scorecard
    Advise(cmd::advise::AdviseArgs),
}

fn resolve_config(cli: &Cli, matches: &ArgMatches) -> YzResult<Config> {
    // Config-bearing args live inside the subcommand's matches, not the root.
    let (cli_config, name) = match &cli.command {
        Commands::Simulate(args) => (&args.config, "simulate"),
        Commands::Sweep(args) => (&args.config, "sweep"),
        Commands::Advise(args) => (&args.config, "advise"),
    };

    let config = match (&cli.config_file, matches.subcommand_matches(name)) {
        (Some(path), Some(sub_matches)) => {
            info!("📂 Loading config: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        _ => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn main() {
    // Raw matches tell user input apart from clap defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = resolve_config(&cli, &matches).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let result = match &cli.command {
        Commands::Simulate(_) => cmd::simulate::run(&config),
        Commands::Sweep(_) => cmd::sweep::run(&config),
        Commands::Advise(args) => cmd::advise::run(args, &config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
