use super::record::{write_totals_csv, GameRecord, RecordWriter, TurnRecord};
use super::stats::Summary;
use crate::config::Config;
use crate::consts::ROLLS_PER_TURN;
use crate::decision::{DecisionEngine, EngineOptions, SelectionPolicy};
use crate::dice::Dice;
use crate::error::YzResult;
use crate::scorecard::Scorecard;
use crate::scorer::Category;
use fastrand::Rng;
use itertools::iproduct;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
pub struct GameOptions {
    pub reroll_policy: SelectionPolicy,
    pub choice_policy: SelectionPolicy,
    pub engine_cache: bool,
    pub parallel_masks: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            reroll_policy: SelectionPolicy::MaximizeGain,
            choice_policy: SelectionPolicy::Balance,
            engine_cache: true,
            parallel_masks: true,
        }
    }
}

impl From<&Config> for GameOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            reroll_policy: cfg.policy.reroll_policy,
            choice_policy: cfg.policy.choice_policy,
            engine_cache: cfg.engine.engine_cache,
            parallel_masks: cfg.engine.parallel_masks,
        }
    }
}

impl GameOptions {
    fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            default_policy: self.reroll_policy,
            use_cache: self.engine_cache,
            parallel: self.parallel_masks,
        }
    }
}

/// Plays one full game: a turn per category, up to three throws per turn.
pub fn play_game(options: &GameOptions, rng: &mut Rng) -> YzResult<GameRecord> {
    let mut card = Scorecard::new();
    let mut turns = Vec::with_capacity(Category::COUNT);

    for turn in 1..=Category::COUNT {
        debug!("=== {:>2}/{}:", turn, Category::COUNT);
        // Fresh engine per turn: its cache is only valid for this scorecard.
        let engine = DecisionEngine::new(&card, options.engine_options());

        let mut dice = Dice::roll(rng);
        debug!(target: "game_record", "d:{}", dice);
        let mut rolls = vec![dice];
        let mut rerolls = Vec::new();

        for _ in 1..ROLLS_PER_TURN {
            let mask = engine.choose_reroll(&dice, options.reroll_policy, options.choice_policy)?;
            debug!(target: "game_record", "r:{}", mask);
            rerolls.push(mask);
            if mask.is_empty() {
                break;
            }
            dice.reroll(mask, rng);
            debug!(target: "game_record", "d:{}", dice);
            rolls.push(dice);
        }

        let choice = engine.choose_category(&dice, options.choice_policy)?;
        let points = card.assign(choice.category, dice, false)?;
        debug!(target: "game_record", "c:{}", choice.category);

        turns.push(TurnRecord {
            turn,
            rolls,
            rerolls,
            choice: choice.category,
            points,
        });
    }

    Ok(GameRecord {
        seed: None,
        turns,
        upper_total: card.upper_total(),
        bonus: card.bonus(),
        total: card.total(),
        scorecard: card.snapshot_for_display(),
    })
}

pub struct ExperimentReport {
    pub options: GameOptions,
    pub summary: Summary,
    pub records: Vec<GameRecord>,
    pub elapsed: Duration,
}

impl ExperimentReport {
    pub fn scores(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.total).collect()
    }
}

/// Plays `cfg.game.games` games. Game `i` is seeded with `seed + i` (wrapping), so a
/// seeded run gives the same records regardless of thread scheduling.
pub fn run_experiment(cfg: &Config) -> YzResult<ExperimentReport> {
    cfg.validate()?;
    let options = GameOptions::from(cfg);
    let games = cfg.game.games;
    let seed = cfg.game.seed;

    info!(
        "🎲 Playing {} games (reroll: {}, choice: {})",
        games, options.reroll_policy, options.choice_policy
    );

    let start = Instant::now();
    let play = |i: usize| -> YzResult<GameRecord> {
        let game_seed = seed.map(|s| s.wrapping_add(i as u64));
        let mut rng = game_seed.map_or_else(Rng::new, Rng::with_seed);
        let mut record = play_game(&options, &mut rng)?;
        record.seed = game_seed;
        debug!("== {:>2}/{}: {}", i + 1, games, record.total);
        Ok(record)
    };

    let records: Vec<GameRecord> = if cfg.engine.parallel_games {
        (0..games).into_par_iter().map(play).collect::<YzResult<_>>()?
    } else {
        (0..games).map(play).collect::<YzResult<_>>()?
    };
    let elapsed = start.elapsed();

    if let Some(dir) = &cfg.output.record_dir {
        let mut writer = RecordWriter::create(dir)?;
        for r in &records {
            writer.write(r)?;
        }
        let path = writer.finish()?;
        info!("📝 Game records written to {}", path.display());
    }

    if let Some(path) = &cfg.output.csv {
        write_totals_csv(path, &records)?;
        info!("📊 Totals written to {}", path);
    }

    let scores: Vec<u32> = records.iter().map(|r| r.total).collect();
    let summary = Summary::from_scores(&scores);
    info!(
        "✅ Maximum: {} Average: {:.2} ({:.2}s)",
        summary.max,
        summary.mean,
        elapsed.as_secs_f64()
    );

    Ok(ExperimentReport {
        options,
        summary,
        records,
        elapsed,
    })
}

/// Runs one experiment per (reroll, choice) policy pair. Record and CSV
/// output are not written for sweeps.
pub fn run_sweep(cfg: &Config) -> YzResult<Vec<ExperimentReport>> {
    iproduct!(SelectionPolicy::iter(), SelectionPolicy::iter())
        .map(|(reroll, choice)| {
            let mut run_cfg = cfg.clone();
            run_cfg.policy.reroll_policy = reroll;
            run_cfg.policy.choice_policy = choice;
            run_cfg.output = Default::default();
            run_experiment(&run_cfg)
        })
        .collect()
}
