use serde::{Deserialize, Serialize};

use crate::domain::dice::{Hand, DICE_COUNT};
use crate::domain::{Category, DieIndex};

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Новая партия началась.
    GameStarted,

    /// Бросок не удержанных костей.
    DiceRolled {
        round: u8,
        /// 1..=3 внутри раунда.
        roll_number: u8,
        values: Hand,
        held: [bool; DICE_COUNT],
    },

    HoldToggled {
        index: DieIndex,
        held: bool,
    },

    /// Рука записана в категорию.
    CategoryClaimed {
        round: u8,
        category: Category,
        score: u32,
        hand: Hand,
    },

    /// Верхняя секция впервые дошла до порога бонуса.
    UpperBonusReached {
        upper_subtotal: u32,
    },

    /// Начислен бонусный Yahtzee; `count` – сколько их теперь всего.
    YahtzeeBonusAwarded {
        count: u32,
    },

    /// Все 13 категорий закрыты.
    GameFinished {
        grand_total: u32,
    },
}

/// Событие в партии с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }
}
