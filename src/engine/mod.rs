//! Движок партии: раунды бросков, удержание костей, запись в карточку.
//!
//! Высокоуровневый объект: `RoundController`
//! Основные операции:
//!   - `roll` – перебросить не удержанные кости
//!   - `toggle_hold` – переключить удержание кости
//!   - `claim` – записать руку в категорию и начать новый раунд

pub mod errors;
pub mod game_history;
pub mod game_loop;
pub mod validation;

pub use errors::EngineError;
pub use game_history::{GameEvent, GameEventKind, GameHistory};
pub use game_loop::{RoundController, RoundState, ROLLS_PER_ROUND, ROUNDS_PER_GAME};

/// Источник случайности для бросков.
///
/// Передаётся в движок явно, а не живёт глобально: с фиксированным seed
/// партия воспроизводима. Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно распределённое значение грани 1..=6.
    fn roll_face(&mut self) -> u8;
}
