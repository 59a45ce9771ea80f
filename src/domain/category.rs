use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Секция карточки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Section {
    /// Ones..Sixes, бонус 35 при сумме >= 63.
    Upper,
    /// Остальные семь категорий + повторяемый бонус за Yahtzee.
    Lower,
}

/// Категория очков. Ровно 13 фиксированных слотов.
///
/// Дискриминант = индекс слота в карточке, поэтому поиск по категории O(1).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Category {
    Ones = 0,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

/// Количество категорий.
pub const CATEGORY_COUNT: usize = 13;

impl Category {
    /// Все категории в порядке карточки.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    pub const LOWER: [Category; 7] = [
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn section(self) -> Section {
        if self.face().is_some() {
            Section::Upper
        } else {
            Section::Lower
        }
    }

    /// Грань, которую считает верхняя категория (Ones → 1, ..., Sixes → 6).
    pub fn face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// Машинное имя (snake_case), его принимает `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FourOfAKind => "four_of_a_kind",
            Category::FullHouse => "full_house",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::Yahtzee => "yahtzee",
            Category::Chance => "chance",
        }
    }

    /// Человеческое название для фронта.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "3 of a Kind",
            Category::FourOfAKind => "4 of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Sm. Straight",
            Category::LargeStraight => "Lg. Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Категория по индексу слота 0..=12.
impl TryFrom<u8> for Category {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Category::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidCategory(value.to_string()))
    }
}

/// Парсинг машинного имени: "ones", "full_house", "YAHTZEE" и т.п.
/// Регистр и разделители `-`/`_`/пробел не важны.
impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| EngineError::InvalidCategory(s.to_string()))
    }
}
