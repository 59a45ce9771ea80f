use serde::{Deserialize, Serialize};

use crate::domain::{Category, Section};
use crate::engine::RoundState;

/// DTO одной кости.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DieDto {
    pub index: u8,
    pub value: u8,
    pub held: bool,
}

/// Состояние категории в снапшоте.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryStatusDto {
    /// Открыта. `preview` – сколько дала бы текущая рука (если рука есть
    /// и превью включено в конфиге). Ничего не фиксирует.
    Open { preview: Option<u32> },
    Claimed { value: u32 },
}

/// DTO одного слота карточки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryEntryDto {
    pub category: Category,
    /// Человеческое название (отображается во фронте).
    pub name: String,
    pub section: Section,
    pub status: EntryStatusDto,
}

/// Очки категории для текущей руки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryScoreDto {
    pub category: Category,
    pub score: u32,
}

/// Снапшот партии только для чтения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub dice: Vec<DieDto>,
    pub rolls_remaining: u8,
    pub state: RoundState,
    /// Текущий раунд 1..=13.
    pub round: u8,
    pub categories: Vec<CategoryEntryDto>,
    /// Сумма верхней секции без бонуса.
    pub upper_subtotal: u32,
    pub upper_bonus: u32,
    pub yahtzee_bonus_count: u32,
    pub upper_total: u32,
    pub lower_total: u32,
    pub grand_total: u32,
    pub is_complete: bool,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Бросок выполнен.
    Rolled { game: GameViewDto },

    /// Удержание кости переключено.
    HoldToggled {
        index: u8,
        held: bool,
        game: GameViewDto,
    },

    /// Рука записана в категорию (раунд закончен).
    Claimed {
        category: Category,
        score: u32,
        yahtzee_bonus_awarded: bool,
        game: GameViewDto,
    },
}

impl CommandResponse {
    /// Снапшот после команды.
    pub fn game(&self) -> &GameViewDto {
        match self {
            CommandResponse::Rolled { game }
            | CommandResponse::HoldToggled { game, .. }
            | CommandResponse::Claimed { game, .. } => game,
        }
    }
}
