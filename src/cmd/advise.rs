use crate::reports;
use autoyahtzee::config::Config;
use autoyahtzee::decision::{select_best, DecisionEngine, EngineOptions};
use autoyahtzee::dice::{Dice, RerollMask};
use autoyahtzee::error::{YahtzeeError, YzResult};
use autoyahtzee::scorecard::Scorecard;
use autoyahtzee::scorer::Category;
use clap::Args;
use std::str::FromStr;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AdviseArgs {
    #[command(flatten)]
    pub config: Config,

    /// Current hand, e.g. 1,3,3,5,6
    #[arg(short, long)]
    pub dice: String,

    /// Already filled boxes, e.g. Ace=1,1,1,2,3 (repeatable)
    #[arg(short, long, value_name = "CATEGORY=DICE")]
    pub assigned: Vec<String>,
}

fn parse_assignment(entry: &str) -> YzResult<(Category, Dice)> {
    let (name, pips) = entry.split_once('=').ok_or_else(|| {
        YahtzeeError::Config(format!("expected CATEGORY=DICE, got '{}'", entry))
    })?;
    let category = Category::from_str(name.trim())
        .map_err(|_| YahtzeeError::UnknownCategory(name.trim().to_string()))?;
    let dice = Dice::from_str(pips)?;
    Ok((category, dice))
}

fn build_scorecard(assigned: &[String]) -> YzResult<Scorecard> {
    let mut card = Scorecard::new();
    for entry in assigned {
        let (category, dice) = parse_assignment(entry)?;
        card.assign(category, dice, false)?;
    }
    Ok(card)
}

pub fn run(args: &AdviseArgs, config: &Config) -> YzResult<()> {
    let dice = Dice::from_str(&args.dice)?;
    let card = build_scorecard(&args.assigned)?;
    let reroll_policy = config.policy.reroll_policy;
    let choice_policy = config.policy.choice_policy;

    info!(
        "🎯 Advising on {} ({} of 12 boxes filled, reroll: {}, choice: {})",
        dice,
        card.filled_count(),
        reroll_policy,
        choice_policy
    );

    let engine = DecisionEngine::new(&card, EngineOptions::from(config));
    let evaluations = engine.rank_rerolls(&dice, reroll_policy, choice_policy)?;
    let chosen = select_best(&evaluations).map_or(RerollMask::EMPTY, |e| e.mask);
    reports::print_reroll_ranking(&evaluations, chosen);

    let choice = engine.choose_category(&dice, choice_policy)?;
    let outcome = card.projected_outcome(choice.category, &dice);

    println!("\nReroll   : {}", chosen);
    if let Some(best) = evaluations.iter().find(|e| e.mask == chosen) {
        println!(
            "Chasing  : {} {} (reroll toward it: {})",
            best.best_choice.category,
            best.best_dice,
            dice.reroll_toward(&best.best_dice)
        );
    }
    println!(
        "Category : {} now ({} pts, gain {}, loss {})",
        choice.category,
        outcome.total_if_assigned - card.total(),
        outcome.gained,
        outcome.lost
    );

    reports::print_scorecard(
        &card.snapshot_for_display(),
        card.upper_total(),
        card.bonus(),
        card.total(),
    );
    Ok(())
}
