use serde::{Deserialize, Serialize};

use crate::domain::die::Die;
use crate::domain::DieIndex;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Сколько костей в наборе.
pub const DICE_COUNT: usize = 5;

/// Рука: текущие значения пяти костей, позиция = идентичность кости.
pub type Hand = [u8; DICE_COUNT];

/// Набор из пяти костей.
///
/// Живёт всю партию и мутируется на месте каждым броском.
/// Удерживаемые кости броском не затрагиваются, пока их явно не отпустят.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiceSet {
    dice: [Die; DICE_COUNT],
}

impl DiceSet {
    pub fn new() -> Self {
        Self {
            dice: [Die::new(); DICE_COUNT],
        }
    }

    /// Перебросить все не удержанные кости.
    pub fn roll_unheld<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for die in self.dice.iter_mut().filter(|d| !d.held) {
            let face = rng.roll_face();
            debug_assert!(Die::is_valid_face(face), "RandomSource вернул грань {face}");
            die.value = face;
        }
    }

    /// Поставить/снять удержание. Значение кости не меняется.
    pub fn set_held(&mut self, index: DieIndex, held: bool) -> Result<(), EngineError> {
        let die = self
            .dice
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange(index))?;
        die.held = held;
        Ok(())
    }

    /// Переключить удержание, вернуть новое значение флага.
    pub fn toggle_held(&mut self, index: DieIndex) -> Result<bool, EngineError> {
        let die = self
            .dice
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange(index))?;
        die.held = !die.held;
        Ok(die.held)
    }

    /// Снять удержание со всех костей (начало нового раунда).
    pub fn release_all(&mut self) {
        for die in self.dice.iter_mut() {
            die.held = false;
        }
    }

    pub fn values(&self) -> Hand {
        self.dice.map(|d| d.value)
    }

    pub fn held_flags(&self) -> [bool; DICE_COUNT] {
        self.dice.map(|d| d.held)
    }

    pub fn dice(&self) -> &[Die; DICE_COUNT] {
        &self.dice
    }

    pub fn get(&self, index: DieIndex) -> Option<&Die> {
        self.dice.get(index)
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}
