use crate::domain::category::Category;
use crate::domain::dice::Hand;
use crate::domain::die::Die;

use super::hand_scores::HandScores;
use super::lookup_tables::{
    contains_small_straight, count_faces, count_pattern, face_mask, is_large_straight,
    FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE, YAHTZEE_SCORE,
};

/// Главная функция: посчитать, сколько дала бы рука в каждой категории.
///
/// Детерминирована и не имеет состояния.
///
/// # Panics
/// Если в руке есть значение вне 1..=6. `DiceSet` таких рук не производит.
pub fn evaluate(hand: &Hand) -> HandScores {
    assert!(
        hand.iter().all(|&v| Die::is_valid_face(v)),
        "evaluate ожидает значения костей 1..=6, получено {hand:?}"
    );

    let counts = count_faces(hand);
    let mask = face_mask(hand);
    let sum: u32 = hand.iter().map(|&v| v as u32).sum();
    let max_count = counts.iter().copied().max().unwrap_or(0);

    // pattern counts: например [5], [4,1], [3,2], [3,1,1], [2,2,1], [1,1,1,1,1]
    let pattern = count_pattern(&counts);

    let mut scores = HandScores::default();

    // Верхняя секция: count[face] * face.
    for category in Category::UPPER {
        if let Some(face) = category.face() {
            scores.set(category, counts[face as usize] as u32 * face as u32);
        }
    }

    if max_count >= 3 {
        scores.set(Category::ThreeOfAKind, sum);
    }
    if max_count >= 4 {
        scores.set(Category::FourOfAKind, sum);
    }

    // Ровно тройка + пара на двух разных гранях. Пять одинаковых – не фулл-хаус.
    if pattern == [3, 2] {
        scores.set(Category::FullHouse, FULL_HOUSE_SCORE);
    }

    if contains_small_straight(mask) {
        scores.set(Category::SmallStraight, SMALL_STRAIGHT_SCORE);
    }
    if is_large_straight(mask) {
        scores.set(Category::LargeStraight, LARGE_STRAIGHT_SCORE);
    }

    if max_count == 5 {
        scores.set(Category::Yahtzee, YAHTZEE_SCORE);
    }

    scores.set(Category::Chance, sum);

    scores
}
