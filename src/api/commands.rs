use serde::{Deserialize, Serialize};

use crate::domain::{Category, DieIndex};
use crate::engine::{EngineError, RandomSource, RoundController};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_game_view;

/// Команда верхнего уровня.
///
/// Эти команды превращаются в операции (`YahtzeeOperation`),
/// которые хост экспонирует наружу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Перебросить не удержанные кости.
    Roll,

    /// Переключить удержание одной кости.
    ToggleHold(ToggleHoldCommand),

    /// Записать текущую руку в категорию.
    Claim(ClaimCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleHoldCommand {
    /// Индекс кости 0..=4.
    pub index: u8,
}

/// Запись в категорию.
///
/// Категория приходит от клиента как строковый идентификатор
/// (`"full_house"`, `"chance"`, ...) или номер слота (`"0"`..`"12"`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimCommand {
    pub category: String,
}

impl ClaimCommand {
    pub fn new(category: Category) -> Self {
        Self {
            category: category.name().to_string(),
        }
    }

    /// Разобрать идентификатор категории.
    pub fn parse_category(&self) -> Result<Category, EngineError> {
        match self.category.trim().parse::<u8>() {
            Ok(slot) => Category::try_from(slot),
            Err(_) => self.category.parse::<Category>(),
        }
    }
}

/// Применить команду к партии.
///
/// После конца партии любая команда получает `GameOver`, даже с кривой категорией.
pub fn apply_command<R: RandomSource + ?Sized>(
    controller: &mut RoundController,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    if controller.is_game_over() {
        return Err(EngineError::GameOver.into());
    }

    match command {
        Command::Roll => {
            controller.roll(rng)?;
            Ok(CommandResponse::Rolled {
                game: build_game_view(controller),
            })
        }

        Command::ToggleHold(cmd) => {
            let held = controller.toggle_hold(cmd.index as DieIndex)?;
            Ok(CommandResponse::HoldToggled {
                index: cmd.index,
                held,
                game: build_game_view(controller),
            })
        }

        Command::Claim(cmd) => {
            let category = cmd.parse_category()?;
            let result = controller.claim(category)?;
            Ok(CommandResponse::Claimed {
                category: result.category,
                score: result.score,
                yahtzee_bonus_awarded: result.yahtzee_bonus_awarded,
                game: build_game_view(controller),
            })
        }
    }
}

/// Разобрать команду из JSON и применить её.
pub fn apply_command_json<R: RandomSource + ?Sized>(
    controller: &mut RoundController,
    rng: &mut R,
    json: &str,
) -> Result<CommandResponse, ApiError> {
    let command: Command = serde_json::from_str(json)?;
    apply_command(controller, rng, command)
}
