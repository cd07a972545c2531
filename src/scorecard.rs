use crate::consts::{BONUS_POINTS, BONUS_THRESHOLD};
use crate::dice::Dice;
use crate::error::{YahtzeeError, YzResult};
use crate::scorer::{self, Category, ProjectedOutcome, ScoreLine};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Slot {
    dice: Dice,
    points: u32,
}

/// Per-game scoring state.
///
/// Slots are indexed by `Category::index()`. The bonus latches: it is set by
/// the first upper assignment that brings the upper total to the threshold
/// and is never re-evaluated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    slots: [Option<Slot>; 12],
    bonus: u32,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open categories in canonical order.
    pub fn unassigned_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |c| self.slots[c.index()].is_none())
    }

    pub fn is_assigned(&self, category: Category) -> bool {
        self.slots[category.index()].is_some()
    }

    pub fn points(&self, category: Category) -> Option<u32> {
        self.slots[category.index()].map(|s| s.points)
    }

    pub fn dice(&self, category: Category) -> Option<Dice> {
        self.slots[category.index()].map(|s| s.dice)
    }

    /// Commits `dice` to `category`.
    ///
    /// Fails if the category is already filled, unless `force` is set.
    /// Forcing exists for building fixtures; the game loop never forces.
    pub fn assign(&mut self, category: Category, dice: Dice, force: bool) -> YzResult<u32> {
        if !force && self.is_assigned(category) {
            return Err(YahtzeeError::AlreadyAssigned(category));
        }

        let points = scorer::points(category, &dice);
        self.slots[category.index()] = Some(Slot { dice, points });

        if self.bonus == 0 && category.is_upper() && self.upper_total() >= BONUS_THRESHOLD {
            debug!("Upper bonus reached via {} ({})", category, self.upper_total());
            self.bonus = BONUS_POINTS;
        }
        Ok(points)
    }

    /// Effect of committing `dice` to `category`, computed without mutation.
    pub fn projected_outcome(&self, category: Category, dice: &Dice) -> ProjectedOutcome {
        let hand_points = scorer::points(category, dice);
        let max_hand_points = scorer::best_possible_points(category);

        let (bonus_points, max_bonus_points) = if self.bonus == 0 && category.is_upper() {
            let upper = self.upper_total();
            let reaches = |p: u32| {
                if upper + p >= BONUS_THRESHOLD {
                    BONUS_POINTS
                } else {
                    0
                }
            };
            (reaches(hand_points), reaches(max_hand_points))
        } else {
            (0, 0)
        };

        let gained = (hand_points + bonus_points) as i32;
        let lost = gained - (max_hand_points + max_bonus_points) as i32;
        debug_assert!(lost <= 0);

        ProjectedOutcome {
            total_if_assigned: self.total() + gained as u32,
            gained,
            lost,
        }
    }

    pub fn upper_total(&self) -> u32 {
        Category::UPPER.iter().filter_map(|&c| self.points(c)).sum()
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    pub fn total(&self) -> u32 {
        self.slots.iter().flatten().map(|s| s.points).sum::<u32>() + self.bonus
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Rows in canonical order: points so far, category ceiling, dice used.
    pub fn snapshot_for_display(&self) -> Vec<ScoreLine> {
        Category::ALL
            .iter()
            .map(|&category| {
                let slot = self.slots[category.index()];
                ScoreLine {
                    category,
                    points: slot.map_or(0, |s| s.points),
                    cap: scorer::best_possible_points(category),
                    dice: slot.map(|s| s.dice),
                }
            })
            .collect()
    }
}
