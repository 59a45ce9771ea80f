use serde::{Deserialize, Serialize};

use crate::domain::dice::{DiceSet, Hand};
use crate::domain::{Category, ClaimResult, DieIndex, GameConfig, ScoreCard, CATEGORY_COUNT};
use crate::engine::errors::EngineError;
use crate::engine::game_history::{GameEventKind, GameHistory};
use crate::engine::validation::{validate_claim, validate_hold, validate_roll};
use crate::engine::RandomSource;

/// Бросков в одном раунде.
pub const ROLLS_PER_ROUND: u8 = 3;
/// Раундов в партии: по одному на категорию.
pub const ROUNDS_PER_GAME: u8 = CATEGORY_COUNT as u8;

/// Состояние раунда для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundState {
    /// В этом раунде бросков ещё не было.
    AwaitingRoll,
    /// 1–2 броска сделано: можно держать/бросать дальше или записать руку.
    InPlay,
    /// Все три броска сделаны, остаётся только claim.
    MustClaim,
    /// Все 13 категорий закрыты.
    GameOver,
}

/// Оркестратор партии: DiceSet + оценка руки + ScoreCard.
///
/// Единственный, кто мутирует кости и карточку. Владеет им окружающее
/// приложение; команды должны приходить последовательно.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundController {
    config: GameConfig,
    dice: DiceSet,
    card: ScoreCard,
    rolls_remaining: u8,
    state: RoundState,
    history: GameHistory,
}

impl RoundController {
    /// Новая партия с конфигом по умолчанию.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut controller = Self {
            config,
            dice: DiceSet::new(),
            card: ScoreCard::new(),
            rolls_remaining: ROLLS_PER_ROUND,
            state: RoundState::AwaitingRoll,
            history: GameHistory::new(),
        };
        controller.record(GameEventKind::GameStarted);
        controller
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn rolls_remaining(&self) -> u8 {
        self.rolls_remaining
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn hand(&self) -> Hand {
        self.dice.values()
    }

    pub fn score_card(&self) -> &ScoreCard {
        &self.card
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn is_game_over(&self) -> bool {
        self.state == RoundState::GameOver
    }

    /// Есть ли в этом раунде рука, о которой можно рассуждать.
    pub fn has_hand(&self) -> bool {
        matches!(self.state, RoundState::InPlay | RoundState::MustClaim)
    }

    /// Сколько раундов сыграно (= сколько категорий закрыто).
    pub fn rounds_played(&self) -> u8 {
        self.card.claimed_count() as u8
    }

    /// Номер текущего раунда 1..=13. После конца партии остаётся 13.
    pub fn current_round(&self) -> u8 {
        (self.rounds_played() + 1).min(ROUNDS_PER_GAME)
    }

    /// Номер броска внутри раунда, который уже сделан (0..=3).
    pub fn rolls_made(&self) -> u8 {
        ROLLS_PER_ROUND - self.rolls_remaining
    }

    /// Превью очков по открытым категориям для текущей руки.
    /// `None`, пока в раунде не было броска.
    pub fn preview_scores(&self) -> Option<Vec<(Category, u32)>> {
        if self.has_hand() {
            Some(self.card.preview_scores(&self.hand()))
        } else {
            None
        }
    }

    /// Бросок: перебросить не удержанные кости.
    ///
    /// Возвращает новое состояние раунда: `InPlay`, если броски ещё есть,
    /// иначе `MustClaim`.
    pub fn roll<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<RoundState, EngineError> {
        validate_roll(self.state, self.rolls_remaining)?;

        self.dice.roll_unheld(rng);
        self.rolls_remaining -= 1;
        self.state = if self.rolls_remaining > 0 {
            RoundState::InPlay
        } else {
            RoundState::MustClaim
        };

        self.record(GameEventKind::DiceRolled {
            round: self.current_round(),
            roll_number: self.rolls_made(),
            values: self.dice.values(),
            held: self.dice.held_flags(),
        });

        Ok(self.state)
    }

    /// Переключить удержание кости, вернуть новое значение флага.
    pub fn toggle_hold(&mut self, index: DieIndex) -> Result<bool, EngineError> {
        validate_hold(self.state, index, self.config.hold_policy)?;

        let held = self.dice.toggle_held(index)?;
        self.record(GameEventKind::HoldToggled { index, held });

        Ok(held)
    }

    /// Записать текущую руку в категорию и начать новый раунд.
    ///
    /// При `CategoryAlreadyClaimed` кости, броски и состояние не меняются.
    pub fn claim(&mut self, category: Category) -> Result<ClaimResult, EngineError> {
        validate_claim(self.state, &self.card, category)?;

        let round = self.current_round();
        let hand = self.dice.values();
        let result = self.card.claim(category, &hand)?;

        self.record(GameEventKind::CategoryClaimed {
            round,
            category,
            score: result.score,
            hand,
        });
        if result.upper_bonus_reached {
            self.record(GameEventKind::UpperBonusReached {
                upper_subtotal: self.card.upper_subtotal(),
            });
        }
        if result.yahtzee_bonus_awarded {
            self.record(GameEventKind::YahtzeeBonusAwarded {
                count: self.card.yahtzee_bonus_count(),
            });
        }

        // Новый раунд.
        self.rolls_remaining = ROLLS_PER_ROUND;
        self.dice.release_all();

        if self.card.is_complete() {
            self.state = RoundState::GameOver;
            self.record(GameEventKind::GameFinished {
                grand_total: self.card.grand_total(),
            });
        } else {
            self.state = RoundState::AwaitingRoll;
        }

        Ok(result)
    }

    fn record(&mut self, kind: GameEventKind) {
        if self.config.record_history {
            self.history.push(kind);
        }
    }
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new()
    }
}
