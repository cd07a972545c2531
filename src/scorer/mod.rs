pub mod category;
pub mod patterns;
pub mod types;

pub use self::category::Category;
pub use self::types::{ProjectedOutcome, ScoreLine};

use crate::consts::{POINTS_LARGE_STRAIGHT, POINTS_SMALL_STRAIGHT, POINTS_YAHTZEE};
use crate::dice::Dice;

/// Points `category` scores for `dice`.
#[inline(always)]
pub fn points(category: Category, dice: &Dice) -> u32 {
    let shape = patterns::analyze(dice);
    if let Some(face) = category.face() {
        return shape.counts[face as usize] as u32 * face as u32;
    }

    match category {
        Category::Choice => dice.sum(),
        Category::FourOfAKind if shape.is_four_of_a_kind() => dice.sum(),
        Category::FullHouse if shape.is_full_house() => dice.sum(),
        Category::SmallStraight if shape.is_small_straight() => POINTS_SMALL_STRAIGHT,
        Category::LargeStraight if shape.is_large_straight() => POINTS_LARGE_STRAIGHT,
        Category::Yahtzee if shape.is_yahtzee() => POINTS_YAHTZEE,
        _ => 0,
    }
}

/// Ceiling of a category: what its ideal hand scores.
/// Reference point for loss computation only.
pub fn best_possible_points(category: Category) -> u32 {
    match category {
        Category::Ace => 5,
        Category::Deuce => 10,
        Category::Trey => 15,
        Category::Four => 20,
        Category::Five => 25,
        // [6,6,6,6,6]
        Category::Six | Category::Choice | Category::FourOfAKind | Category::FullHouse => 30,
        Category::SmallStraight => POINTS_SMALL_STRAIGHT,
        Category::LargeStraight => POINTS_LARGE_STRAIGHT,
        Category::Yahtzee => POINTS_YAHTZEE,
    }
}
