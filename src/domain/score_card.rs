use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, CATEGORY_COUNT};
use crate::domain::dice::Hand;
use crate::engine::errors::EngineError;
use crate::eval::{evaluate, YAHTZEE_SCORE};

/// Порог суммы верхней секции для бонуса.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;
/// Бонус верхней секции (начисляется один раз).
pub const UPPER_BONUS: u32 = 35;
/// Очки за каждый дополнительный Yahtzee.
pub const YAHTZEE_BONUS: u32 = 100;

/// Состояние одного слота карточки.
///
/// `Claimed(0)` – «обнулённая» категория: это легальный и окончательный выбор.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ScoreEntry {
    #[default]
    Open,
    Claimed(u32),
}

impl ScoreEntry {
    pub fn is_open(&self) -> bool {
        matches!(self, ScoreEntry::Open)
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            ScoreEntry::Open => None,
            ScoreEntry::Claimed(v) => Some(*v),
        }
    }
}

/// Что произошло при успешном claim.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimResult {
    pub category: Category,
    /// Сколько очков записано в категорию.
    pub score: u32,
    /// Начислен ли бонусный Yahtzee этим claim.
    pub yahtzee_bonus_awarded: bool,
    /// Перешла ли верхняя секция порог бонуса именно сейчас.
    pub upper_bonus_reached: bool,
}

/// Карточка очков одного игрока.
///
/// Инварианты:
///   - слот, перешедший в `Claimed`, больше не меняется;
///   - `upper_total = upper_subtotal + (35 если upper_subtotal >= 63)`;
///   - `lower_total = lower_subtotal + 100 * yahtzee_bonus_count`;
///   - `grand_total = upper_total + lower_total`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreCard {
    entries: [ScoreEntry; CATEGORY_COUNT],
    yahtzee_bonus_count: u32,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self {
            entries: [ScoreEntry::Open; CATEGORY_COUNT],
            yahtzee_bonus_count: 0,
        }
    }

    pub fn entry(&self, category: Category) -> ScoreEntry {
        self.entries[category.index()]
    }

    /// Все слоты в порядке карточки.
    pub fn entries(&self) -> impl Iterator<Item = (Category, ScoreEntry)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.entry(c)))
    }

    pub fn is_claimed(&self, category: Category) -> bool {
        !self.entry(category).is_open()
    }

    pub fn open_categories(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|c| !self.is_claimed(*c))
            .collect()
    }

    pub fn claimed_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_open()).count()
    }

    /// Что дала бы рука в каждой ещё открытой категории. Ничего не мутирует.
    pub fn preview_scores(&self, hand: &Hand) -> Vec<(Category, u32)> {
        let scores = evaluate(hand);
        scores
            .iter()
            .filter(|(c, _)| !self.is_claimed(*c))
            .collect()
    }

    /// Записать руку в категорию.
    ///
    /// Бонусный Yahtzee проверяется один раз на этот вызов по этой руке:
    /// если Yahtzee уже `Claimed(50)` и рука – пять одинаковых,
    /// счётчик бонусов растёт, независимо от целевой категории.
    pub fn claim(&mut self, category: Category, hand: &Hand) -> Result<ClaimResult, EngineError> {
        if self.is_claimed(category) {
            return Err(EngineError::CategoryAlreadyClaimed(category));
        }

        let scores = evaluate(hand);
        let score = scores.get(category);

        // Смотрим на Yahtzee ДО записи: claim, который впервые ставит 50, бонус не даёт.
        let yahtzee_bonus_awarded = self.entry(Category::Yahtzee)
            == ScoreEntry::Claimed(YAHTZEE_SCORE)
            && scores.get(Category::Yahtzee) == YAHTZEE_SCORE;

        let had_upper_bonus = self.upper_bonus_applied();

        self.entries[category.index()] = ScoreEntry::Claimed(score);
        if yahtzee_bonus_awarded {
            self.yahtzee_bonus_count += 1;
        }

        Ok(ClaimResult {
            category,
            score,
            yahtzee_bonus_awarded,
            upper_bonus_reached: !had_upper_bonus && self.upper_bonus_applied(),
        })
    }

    fn claimed_sum(&self, categories: &[Category]) -> u32 {
        categories
            .iter()
            .filter_map(|c| self.entry(*c).value())
            .sum()
    }

    /// Сумма верхней секции без бонуса.
    pub fn upper_subtotal(&self) -> u32 {
        self.claimed_sum(&Category::UPPER)
    }

    pub fn upper_bonus_applied(&self) -> bool {
        self.upper_subtotal() >= UPPER_BONUS_THRESHOLD
    }

    pub fn upper_bonus(&self) -> u32 {
        if self.upper_bonus_applied() {
            UPPER_BONUS
        } else {
            0
        }
    }

    pub fn upper_total(&self) -> u32 {
        self.upper_subtotal() + self.upper_bonus()
    }

    /// Сумма нижней секции без бонусных Yahtzee.
    pub fn lower_subtotal(&self) -> u32 {
        self.claimed_sum(&Category::LOWER)
    }

    pub fn yahtzee_bonus_count(&self) -> u32 {
        self.yahtzee_bonus_count
    }

    pub fn yahtzee_bonus_points(&self) -> u32 {
        self.yahtzee_bonus_count * YAHTZEE_BONUS
    }

    pub fn lower_total(&self) -> u32 {
        self.lower_subtotal() + self.yahtzee_bonus_points()
    }

    pub fn grand_total(&self) -> u32 {
        self.upper_total() + self.lower_total()
    }

    /// Партия окончена, когда закрыты все 13 категорий.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| !e.is_open())
    }
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self::new()
    }
}
