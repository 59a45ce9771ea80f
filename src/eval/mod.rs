//! Модуль оценки руки из пяти костей.
//!
//! Основная функция:
//!   `evaluate(hand) -> HandScores`
//!
//! Чистая функция: не знает о карточке и всегда отвечает, сколько дала бы
//! каждая категория, включая уже закрытые.

pub mod evaluator;
pub mod hand_scores;
pub mod lookup_tables;

pub use evaluator::evaluate;
pub use hand_scores::HandScores;
pub use lookup_tables::{
    FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE, YAHTZEE_SCORE,
};
