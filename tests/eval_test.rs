//! Тесты оценки руки (crate::eval).

use yahtzee_engine::domain::{Category, Hand};
use yahtzee_engine::eval::lookup_tables::{
    contains_small_straight, count_faces, count_pattern, face_mask, is_large_straight,
    mask_from_faces,
};
use yahtzee_engine::eval::{evaluate, HandScores};

/// Все 6^5 рук.
fn all_hands() -> Vec<Hand> {
    let mut hands = Vec::with_capacity(7776);
    for a in 1..=6 {
        for b in 1..=6 {
            for c in 1..=6 {
                for d in 1..=6 {
                    for e in 1..=6 {
                        hands.push([a, b, c, d, e]);
                    }
                }
            }
        }
    }
    hands
}

fn sum(hand: &Hand) -> u32 {
    hand.iter().map(|&v| v as u32).sum()
}

#[test]
fn five_ones_is_yahtzee_not_full_house() {
    let s = evaluate(&[1, 1, 1, 1, 1]);
    assert_eq!(s.get(Category::FullHouse), 0);
    assert_eq!(s.get(Category::Yahtzee), 50);
    assert_eq!(s.get(Category::ThreeOfAKind), 5);
    assert_eq!(s.get(Category::FourOfAKind), 5);
    assert_eq!(s.get(Category::Chance), 5);
    assert_eq!(s.get(Category::Ones), 5);
    assert_eq!(s.get(Category::SmallStraight), 0);
    assert_eq!(s.get(Category::LargeStraight), 0);
}

#[test]
fn triple_and_pair_is_full_house() {
    let s = evaluate(&[2, 2, 2, 5, 5]);
    assert_eq!(s.get(Category::ThreeOfAKind), 16);
    assert_eq!(s.get(Category::FullHouse), 25);
    assert_eq!(s.get(Category::Chance), 16);
    assert_eq!(s.get(Category::Yahtzee), 0);
    assert_eq!(s.get(Category::FourOfAKind), 0);
    assert_eq!(s.get(Category::Twos), 6);
    assert_eq!(s.get(Category::Fives), 10);
    assert_eq!(s.get(Category::Ones), 0);
}

#[test]
fn low_large_straight_also_counts_as_small() {
    let s = evaluate(&[1, 2, 3, 4, 5]);
    assert_eq!(s.get(Category::SmallStraight), 30);
    assert_eq!(s.get(Category::LargeStraight), 40);
    assert_eq!(s.get(Category::Chance), 15);
    assert_eq!(s.get(Category::ThreeOfAKind), 0);
}

#[test]
fn small_straight_with_duplicate_is_not_large() {
    let s = evaluate(&[1, 1, 2, 3, 4]);
    assert_eq!(s.get(Category::SmallStraight), 30);
    assert_eq!(s.get(Category::LargeStraight), 0);
}

#[test]
fn straights_ignore_die_order() {
    assert_eq!(evaluate(&[6, 5, 4, 3, 2]).get(Category::LargeStraight), 40);
    assert_eq!(evaluate(&[6, 3, 5, 4, 6]).get(Category::SmallStraight), 30);
    assert_eq!(evaluate(&[5, 2, 3, 4, 5]).get(Category::SmallStraight), 30);
}

#[test]
fn broken_run_is_no_straight() {
    let s = evaluate(&[1, 2, 3, 5, 6]);
    assert_eq!(s.get(Category::SmallStraight), 0);
    assert_eq!(s.get(Category::LargeStraight), 0);
}

#[test]
fn four_of_a_kind_scores_sum_in_both_kind_categories() {
    let s = evaluate(&[4, 4, 4, 4, 2]);
    assert_eq!(s.get(Category::FourOfAKind), 18);
    assert_eq!(s.get(Category::ThreeOfAKind), 18);
    assert_eq!(s.get(Category::FullHouse), 0);
    assert_eq!(s.get(Category::Fours), 16);
}

#[test]
fn two_pair_scores_no_kind_categories() {
    let s = evaluate(&[3, 3, 6, 6, 1]);
    assert_eq!(s.get(Category::ThreeOfAKind), 0);
    assert_eq!(s.get(Category::FullHouse), 0);
    assert_eq!(s.get(Category::Chance), 19);
}

#[test]
fn evaluate_is_deterministic() {
    let hand = [5, 1, 5, 3, 5];
    assert_eq!(evaluate(&hand), evaluate(&hand));
}

#[test]
fn hand_scores_iterate_in_card_order() {
    let s: HandScores = evaluate(&[2, 3, 4, 5, 6]);
    let cats: Vec<Category> = s.iter().map(|(c, _)| c).collect();
    assert_eq!(cats, Category::ALL.to_vec());
}

#[test]
#[should_panic]
fn evaluate_rejects_face_out_of_range() {
    evaluate(&[0, 1, 2, 3, 4]);
}

#[test]
fn rules_hold_for_every_hand() {
    for hand in all_hands() {
        let s = evaluate(&hand);
        let total = sum(&hand);

        assert_eq!(s.get(Category::Chance), total, "{hand:?}");

        let upper: u32 = Category::UPPER.iter().map(|c| s.get(*c)).sum();
        assert_eq!(upper, total, "{hand:?}");

        if s.get(Category::LargeStraight) > 0 {
            assert_eq!(s.get(Category::SmallStraight), 30, "{hand:?}");
        }
        if s.get(Category::Yahtzee) > 0 {
            assert_eq!(s.get(Category::FourOfAKind), total, "{hand:?}");
            assert_eq!(s.get(Category::FullHouse), 0, "{hand:?}");
        }
        if s.get(Category::FourOfAKind) > 0 {
            assert_eq!(s.get(Category::ThreeOfAKind), total, "{hand:?}");
        }
        for c in [Category::ThreeOfAKind, Category::FourOfAKind, Category::Chance] {
            let v = s.get(c);
            assert!(v == 0 || v == total, "{hand:?} {c:?}");
        }
    }
}

#[test]
fn hand_counts_match_known_totals() {
    let hands = all_hands();
    let count = |c: Category| hands.iter().filter(|h| evaluate(h).get(c) > 0).count();

    assert_eq!(count(Category::Yahtzee), 6);
    // 6 * 5 пар граней * C(5,3) расстановок
    assert_eq!(count(Category::FullHouse), 300);
    // две маски * 5! перестановок
    assert_eq!(count(Category::LargeStraight), 240);
}

// ----------------------
// lookup_tables.rs
// ----------------------

#[test]
fn face_masks_and_counts() {
    let hand = [6, 1, 6, 3, 3];
    assert_eq!(face_mask(&hand), mask_from_faces(&[1, 3, 6]));
    assert_eq!(count_faces(&hand), [0, 1, 0, 2, 0, 0, 2]);
    assert_eq!(count_pattern(&count_faces(&hand)), vec![2, 2, 1]);
    assert_eq!(count_pattern(&count_faces(&[4, 4, 4, 4, 4])), vec![5]);
}

#[test]
fn straight_mask_checks() {
    assert!(contains_small_straight(mask_from_faces(&[1, 2, 3, 4, 6])));
    assert!(!contains_small_straight(mask_from_faces(&[1, 2, 4, 5, 6])));
    assert!(is_large_straight(mask_from_faces(&[2, 3, 4, 5, 6])));
    assert!(!is_large_straight(mask_from_faces(&[1, 2, 3, 4])));
}
