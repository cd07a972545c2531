pub mod cache;
pub mod outcomes;
pub mod policy;

pub use self::cache::OutcomeCache;
pub use self::policy::SelectionPolicy;

use self::outcomes::outcomes;
use crate::config::Config;
use crate::dice::{Dice, RerollMask};
use crate::error::{YahtzeeError, YzResult};
use crate::scorecard::Scorecard;
use crate::scorer::Category;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

pub struct EngineOptions {
    /// Ranking policy the outcome cache is built for.
    pub default_policy: SelectionPolicy,
    pub use_cache: bool,
    pub parallel: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_policy: SelectionPolicy::MaximizeGain,
            use_cache: true,
            parallel: true,
        }
    }
}

impl From<&Config> for EngineOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            default_policy: cfg.policy.reroll_policy,
            use_cache: cfg.engine.engine_cache,
            parallel: cfg.engine.parallel_masks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChoice {
    pub category: Category,
    pub value: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct RerollEvaluation {
    pub mask: RerollMask,
    pub expected: f64,
    pub outcomes: usize,
    pub elapsed: Duration,
    /// Highest-valued outcome seen, first one wins on ties.
    pub best_dice: Dice,
    pub best_choice: CategoryChoice,
}

/// Exhaustive expected-value search over a frozen scorecard.
///
/// The engine owns its own copy of the scorecard, taken at construction, so
/// hypothetical evaluations never touch the live game state.
pub struct DecisionEngine {
    scorecard: Scorecard,
    options: EngineOptions,
    cache: Option<OutcomeCache>,
}

impl DecisionEngine {
    pub fn new(scorecard: &Scorecard, options: EngineOptions) -> Self {
        let cache = options
            .use_cache
            .then(|| OutcomeCache::new(options.default_policy));
        Self {
            scorecard: scorecard.clone(),
            options,
            cache,
        }
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    pub fn cache(&self) -> Option<&OutcomeCache> {
        self.cache.as_ref()
    }

    pub fn choose_category(&self, dice: &Dice, policy: SelectionPolicy) -> YzResult<CategoryChoice> {
        self.choose_category_with(dice, policy, policy)
    }

    /// Ranks open categories by `rank_policy` and reports the winner's value
    /// under `return_policy`. Strict comparison keeps the earliest maximum in
    /// canonical order.
    pub fn choose_category_with(
        &self,
        dice: &Dice,
        rank_policy: SelectionPolicy,
        return_policy: SelectionPolicy,
    ) -> YzResult<CategoryChoice> {
        let mut best: Option<(i32, CategoryChoice)> = None;

        for category in self.scorecard.unassigned_categories() {
            let outcome = self.scorecard.projected_outcome(category, dice);
            let rank = rank_policy.metric(&outcome);
            if best.map_or(true, |(top, _)| rank > top) {
                let value = return_policy.metric(&outcome);
                best = Some((rank, CategoryChoice { category, value }));
            }
        }

        best.map(|(_, choice)| choice)
            .ok_or(YahtzeeError::ScorecardComplete)
    }

    /// Mean value over every raw outcome of rerolling `mask`.
    ///
    /// The outcome equal to `dice` (standing pat) is ranked with
    /// `self_policy`; all others with `rank_policy`. Values are always
    /// reported under `rank_policy`.
    pub fn evaluate_reroll(
        &self,
        dice: &Dice,
        mask: RerollMask,
        rank_policy: SelectionPolicy,
        self_policy: SelectionPolicy,
    ) -> YzResult<RerollEvaluation> {
        let start = Instant::now();
        let mut sum: i64 = 0;
        let mut count: usize = 0;
        let mut best_dice = *dice;
        let mut best_choice = CategoryChoice {
            category: Category::Ace,
            value: i32::MIN,
        };

        for outcome in outcomes(dice, mask) {
            let choice = if outcome == *dice {
                self.choose_category_with(&outcome, self_policy, rank_policy)?
            } else {
                self.lookup(&outcome, rank_policy)?
            };

            if choice.value > best_choice.value {
                best_dice = outcome;
                best_choice = choice;
            }
            sum += choice.value as i64;
            count += 1;
        }

        let expected = sum as f64 / count as f64;
        let elapsed = start.elapsed();

        debug!(
            "Reroll({:>2}) {:<16} Ave.Expected: {:>7.4} time: {:>7.4} max: {:>3} <- {}({})",
            mask.bits(),
            mask.to_string(),
            expected,
            elapsed.as_secs_f64(),
            best_choice.value,
            best_choice.category,
            best_dice
        );

        Ok(RerollEvaluation {
            mask,
            expected,
            outcomes: count,
            elapsed,
            best_dice,
            best_choice,
        })
    }

    /// All 32 evaluations, in ascending mask order.
    pub fn rank_rerolls(
        &self,
        dice: &Dice,
        rank_policy: SelectionPolicy,
        self_policy: SelectionPolicy,
    ) -> YzResult<Vec<RerollEvaluation>> {
        if self.scorecard.is_complete() {
            return Err(YahtzeeError::ScorecardComplete);
        }

        let masks: Vec<RerollMask> = RerollMask::all().collect();
        if self.options.parallel {
            masks
                .into_par_iter()
                .map(|mask| self.evaluate_reroll(dice, mask, rank_policy, self_policy))
                .collect()
        } else {
            masks
                .into_iter()
                .map(|mask| self.evaluate_reroll(dice, mask, rank_policy, self_policy))
                .collect()
        }
    }

    /// Mask with the strictly highest expected value; the earliest mask wins
    /// ties, so standing pat wins unless a reroll improves on it.
    pub fn choose_reroll(
        &self,
        dice: &Dice,
        rank_policy: SelectionPolicy,
        self_policy: SelectionPolicy,
    ) -> YzResult<RerollMask> {
        let evaluations = self.rank_rerolls(dice, rank_policy, self_policy)?;
        Ok(select_best(&evaluations).map_or(RerollMask::EMPTY, |e| e.mask))
    }

    fn lookup(&self, outcome: &Dice, policy: SelectionPolicy) -> YzResult<CategoryChoice> {
        match &self.cache {
            Some(cache) if cache.policy() == policy => {
                cache.get_or_try_insert_with(*outcome, || self.choose_category(outcome, policy))
            }
            _ => self.choose_category(outcome, policy),
        }
    }
}

/// First evaluation with the strictly greatest expectation.
pub fn select_best(evaluations: &[RerollEvaluation]) -> Option<&RerollEvaluation> {
    evaluations.iter().fold(None, |best, e| match best {
        Some(b) if e.expected <= b.expected => Some(b),
        _ => Some(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice(pips: [u8; 5]) -> Dice {
        Dice::from_pips(&pips).unwrap()
    }

    fn sequential() -> EngineOptions {
        EngineOptions {
            parallel: false,
            ..Default::default()
        }
    }

    #[test]
    fn empty_mask_evaluates_a_single_outcome() {
        let card = Scorecard::new();
        let engine = DecisionEngine::new(&card, sequential());
        let hand = dice([2, 3, 3, 3, 6]);

        for policy in [
            SelectionPolicy::MaximizeGain,
            SelectionPolicy::MinimizeLoss,
            SelectionPolicy::Balance,
        ] {
            let eval = engine
                .evaluate_reroll(&hand, RerollMask::EMPTY, policy, policy)
                .unwrap();
            let direct = engine.choose_category(&hand, policy).unwrap();
            assert_eq!(eval.outcomes, 1);
            assert_eq!(eval.expected, direct.value as f64);
        }
    }

    #[test]
    fn complete_card_has_nothing_to_choose() {
        let mut card = Scorecard::new();
        for c in Category::ALL {
            card.assign(c, dice([1, 2, 3, 4, 5]), false).unwrap();
        }
        let engine = DecisionEngine::new(&card, sequential());
        let hand = dice([1, 1, 1, 1, 1]);
        assert!(matches!(
            engine.choose_category(&hand, SelectionPolicy::Balance),
            Err(YahtzeeError::ScorecardComplete)
        ));
        assert!(engine
            .choose_reroll(&hand, SelectionPolicy::Balance, SelectionPolicy::Balance)
            .is_err());
    }

    #[test]
    fn cache_only_fills_for_its_policy() {
        let card = Scorecard::new();
        let engine = DecisionEngine::new(&card, sequential());
        let hand = dice([1, 2, 4, 4, 6]);
        let mask = RerollMask::from_positions(&[0]).unwrap();

        engine
            .evaluate_reroll(&hand, mask, SelectionPolicy::Balance, SelectionPolicy::Balance)
            .unwrap();
        assert!(engine.cache().unwrap().is_empty());

        engine
            .evaluate_reroll(
                &hand,
                mask,
                SelectionPolicy::MaximizeGain,
                SelectionPolicy::MaximizeGain,
            )
            .unwrap();
        // Six raw outcomes; [1,2,4,4,6] itself is the stand-pat hand and is not cached.
        assert_eq!(engine.cache().unwrap().len(), 5);
    }

    #[test]
    fn select_best_keeps_first_maximum() {
        let card = Scorecard::new();
        let engine = DecisionEngine::new(&card, sequential());
        let hand = dice([6, 6, 6, 6, 6]);
        let evals: Vec<RerollEvaluation> = [0u8, 1, 2]
            .iter()
            .map(|&b| {
                let mut e = engine
                    .evaluate_reroll(
                        &hand,
                        RerollMask::from_bits(b).unwrap(),
                        SelectionPolicy::MaximizeGain,
                        SelectionPolicy::MaximizeGain,
                    )
                    .unwrap();
                e.expected = 10.0;
                e
            })
            .collect();
        assert!(select_best(&evals).unwrap().mask.is_empty());
        assert!(select_best(&[]).is_none());
    }
}
