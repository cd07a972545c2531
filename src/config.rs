use crate::decision::SelectionPolicy;
use crate::error::{YahtzeeError, YzResult};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub game: GameParams,
    #[command(flatten)]
    pub policy: PolicyParams,
    #[command(flatten)]
    pub engine: EngineParams,
    #[command(flatten)]
    pub output: OutputParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameParams {
    #[arg(short = 'g', long, default_value_t = 50)]
    pub games: usize,

    // Game i plays with seed + i
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            games: 50,
            seed: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyParams {
    /// Ranks hypothetical reroll outcomes
    #[arg(long, value_enum, default_value_t = SelectionPolicy::MaximizeGain)]
    pub reroll_policy: SelectionPolicy,

    /// Ranks the final category choice and the stand-pat outcome
    #[arg(long, value_enum, default_value_t = SelectionPolicy::Balance)]
    pub choice_policy: SelectionPolicy,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            reroll_policy: SelectionPolicy::MaximizeGain,
            choice_policy: SelectionPolicy::Balance,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub engine_cache: bool,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub parallel_masks: bool,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub parallel_games: bool,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            engine_cache: true,
            parallel_masks: true,
            parallel_games: true,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputParams {
    /// Directory receiving one JSON-lines game record file per run
    #[arg(long)]
    pub record_dir: Option<String>,

    /// CSV file receiving per-game totals
    #[arg(long)]
    pub csv: Option<String>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> YzResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            YahtzeeError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Copies onto `self` only the values the user typed on the command line,
    /// so a config file's values survive clap's defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(game.games);
        update_if_present!(game.seed);

        update_if_present!(policy.reroll_policy);
        update_if_present!(policy.choice_policy);

        update_if_present!(engine.engine_cache);
        update_if_present!(engine.parallel_masks);
        update_if_present!(engine.parallel_games);

        update_if_present!(output.record_dir);
        update_if_present!(output.csv);
    }

    pub fn validate(&self) -> YzResult<()> {
        if self.game.games == 0 {
            return Err(YahtzeeError::Config("games must be at least 1".to_string()));
        }
        Ok(())
    }
}
