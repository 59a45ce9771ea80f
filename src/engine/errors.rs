use crate::domain::{Category, DieIndex};

use thiserror::Error;

/// Ошибки движка партии.
///
/// Все восстановимы: ошибка всегда оставляет состояние ровно таким,
/// каким оно было до вызова.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Броски в этом раунде закончились")]
    NoRollsRemaining,

    #[error("В этом раунде ещё не было броска")]
    NoRollYet,

    #[error("Кости с индексом {0} не существует")]
    IndexOutOfRange(DieIndex),

    #[error("Неизвестная категория: {0}")]
    InvalidCategory(String),

    #[error("Категория {0} уже занята")]
    CategoryAlreadyClaimed(Category),

    #[error("Партия окончена")]
    GameOver,

    #[error("Удержание заморожено после последнего броска")]
    HoldsFrozen,
}
