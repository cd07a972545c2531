use autoyahtzee::dice::Dice;
use autoyahtzee::scorer::{best_possible_points, points, Category};
use rstest::rstest;

fn dice(pips: [u8; 5]) -> Dice {
    Dice::from_pips(&pips).unwrap()
}

#[rstest]
#[case([1, 1, 1, 1, 1], 50)]
#[case([6, 6, 6, 6, 6], 50)]
#[case([6, 6, 6, 6, 5], 0)]
#[case([1, 2, 3, 4, 5], 0)]
fn yahtzee_is_all_or_nothing(#[case] pips: [u8; 5], #[case] expected: u32) {
    assert_eq!(points(Category::Yahtzee, &dice(pips)), expected);
}

#[rstest]
#[case([2, 2, 3, 3, 3], 13)]
#[case([6, 6, 6, 1, 1], 20)]
// Five of a kind is also a full house.
#[case([4, 4, 4, 4, 4], 20)]
#[case([2, 2, 3, 3, 4], 0)]
#[case([5, 5, 5, 5, 1], 0)]
#[case([1, 2, 3, 4, 6], 0)]
fn full_house(#[case] pips: [u8; 5], #[case] expected: u32) {
    assert_eq!(points(Category::FullHouse, &dice(pips)), expected);
}

#[rstest]
#[case([1, 2, 3, 4, 6], 15)]
#[case([3, 4, 5, 6, 6], 15)]
#[case([2, 3, 4, 5, 2], 15)]
#[case([1, 2, 3, 4, 5], 15)]
#[case([1, 2, 3, 5, 6], 0)]
#[case([1, 1, 3, 4, 5], 0)]
fn small_straight(#[case] pips: [u8; 5], #[case] expected: u32) {
    assert_eq!(points(Category::SmallStraight, &dice(pips)), expected);
}

#[rstest]
#[case([1, 2, 3, 4, 5], 30)]
#[case([6, 5, 4, 3, 2], 30)]
#[case([1, 2, 3, 4, 6], 0)]
#[case([2, 3, 4, 5, 5], 0)]
fn large_straight(#[case] pips: [u8; 5], #[case] expected: u32) {
    assert_eq!(points(Category::LargeStraight, &dice(pips)), expected);
}

#[rstest]
#[case([3, 3, 3, 3, 2], 14)]
#[case([5, 5, 5, 5, 5], 25)]
#[case([3, 3, 3, 2, 2], 0)]
fn four_of_a_kind(#[case] pips: [u8; 5], #[case] expected: u32) {
    assert_eq!(points(Category::FourOfAKind, &dice(pips)), expected);
}

#[rstest]
#[case(Category::Ace, [1, 1, 2, 3, 1], 3)]
#[case(Category::Trey, [3, 3, 1, 2, 4], 6)]
#[case(Category::Six, [6, 6, 6, 6, 1], 24)]
#[case(Category::Five, [1, 2, 3, 4, 6], 0)]
#[case(Category::Choice, [1, 2, 3, 4, 6], 16)]
fn counted_categories(#[case] category: Category, #[case] pips: [u8; 5], #[case] expected: u32) {
    assert_eq!(points(category, &dice(pips)), expected);
}

#[test]
fn every_hand_stays_under_its_ceiling() {
    // All 7776 ordered rolls.
    for a in 1..=6u8 {
        for b in 1..=6u8 {
            for c in 1..=6u8 {
                for d in 1..=6u8 {
                    for e in 1..=6u8 {
                        let hand = dice([a, b, c, d, e]);
                        for category in Category::ALL {
                            assert!(
                                points(category, &hand) <= best_possible_points(category),
                                "{} on {}",
                                category,
                                hand
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn ceilings_are_reached_by_some_hand() {
    let best = [
        (Category::Ace, [1, 1, 1, 1, 1]),
        (Category::Six, [6, 6, 6, 6, 6]),
        (Category::Choice, [6, 6, 6, 6, 6]),
        (Category::FourOfAKind, [6, 6, 6, 6, 6]),
        (Category::FullHouse, [6, 6, 6, 6, 6]),
        (Category::SmallStraight, [1, 2, 3, 4, 4]),
        (Category::LargeStraight, [2, 3, 4, 5, 6]),
        (Category::Yahtzee, [3, 3, 3, 3, 3]),
    ];
    for (category, pips) in best {
        assert_eq!(points(category, &dice(pips)), best_possible_points(category));
    }
}
