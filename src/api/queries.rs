use serde::{Deserialize, Serialize};

use crate::domain::ScoreEntry;
use crate::engine::{GameHistory, RoundController};

use super::dto::{CategoryEntryDto, CategoryScoreDto, DieDto, EntryStatusDto, GameViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Получить снапшот партии.
    GetGame,

    /// Превью очков текущей руки по открытым категориям.
    PreviewScores,

    /// Получить историю событий партии.
    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Game(GameViewDto),
    /// Пусто, пока в раунде не было броска.
    Preview(Vec<CategoryScoreDto>),
    History(GameHistory),
}

/// Выполнить запрос.
pub fn run_query(controller: &RoundController, query: &Query) -> QueryResponse {
    match query {
        Query::GetGame => QueryResponse::Game(build_game_view(controller)),
        Query::PreviewScores => QueryResponse::Preview(build_preview(controller)),
        Query::GetHistory => QueryResponse::History(controller.history().clone()),
    }
}

/// Сформировать снапшот партии.
pub fn build_game_view(controller: &RoundController) -> GameViewDto {
    let card = controller.score_card();

    GameViewDto {
        dice: build_dice_dto(controller),
        rolls_remaining: controller.rolls_remaining(),
        state: controller.state(),
        round: controller.current_round(),
        categories: build_categories_dto(controller),
        upper_subtotal: card.upper_subtotal(),
        upper_bonus: card.upper_bonus(),
        yahtzee_bonus_count: card.yahtzee_bonus_count(),
        upper_total: card.upper_total(),
        lower_total: card.lower_total(),
        grand_total: card.grand_total(),
        is_complete: card.is_complete(),
    }
}

fn build_dice_dto(controller: &RoundController) -> Vec<DieDto> {
    controller
        .dice()
        .dice()
        .iter()
        .enumerate()
        .map(|(idx, die)| DieDto {
            index: idx as u8,
            value: die.value,
            held: die.held,
        })
        .collect()
}

/// Собрать DTO всех 13 слотов.
fn build_categories_dto(controller: &RoundController) -> Vec<CategoryEntryDto> {
    let card = controller.score_card();

    // Превью только если рука есть и фронт его хочет.
    let preview = if controller.config().preview_in_snapshot {
        controller.preview_scores().unwrap_or_default()
    } else {
        Vec::new()
    };

    card.entries()
        .map(|(category, entry)| {
            let status = match entry {
                ScoreEntry::Claimed(value) => EntryStatusDto::Claimed { value },
                ScoreEntry::Open => EntryStatusDto::Open {
                    preview: preview
                        .iter()
                        .find(|(c, _)| *c == category)
                        .map(|(_, score)| *score),
                },
            };

            CategoryEntryDto {
                category,
                name: category.display_name().to_string(),
                section: category.section(),
                status,
            }
        })
        .collect()
}

fn build_preview(controller: &RoundController) -> Vec<CategoryScoreDto> {
    controller
        .preview_scores()
        .unwrap_or_default()
        .into_iter()
        .map(|(category, score)| CategoryScoreDto { category, score })
        .collect()
}
