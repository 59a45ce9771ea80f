//! Доменная модель игры в кости: кости, набор из пяти костей, категории,
//! карточка очков и конфиг партии.

pub mod category;
pub mod config;
pub mod dice;
pub mod die;
pub mod score_card;

/// Идентификатор партии (нужен для доменного reseeding RNG).
pub type GameId = u64;

/// Индекс кости в наборе (0..DICE_COUNT-1).
pub type DieIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Category и т.п.
pub use category::*;
pub use config::*;
pub use dice::*;
pub use die::*;
pub use score_card::*;
