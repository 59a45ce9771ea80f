use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, CATEGORY_COUNT};

/// Результат оценки руки: очки для каждой из 13 категорий.
///
/// Индексация по `Category::index()`, поиск O(1).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HandScores {
    scores: [u32; CATEGORY_COUNT],
}

impl HandScores {
    pub fn get(&self, category: Category) -> u32 {
        self.scores[category.index()]
    }

    pub(crate) fn set(&mut self, category: Category, score: u32) {
        self.scores[category.index()] = score;
    }

    /// Пары (категория, очки) в порядке карточки.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}
