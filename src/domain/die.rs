use core::fmt;

use serde::{Deserialize, Serialize};

/// Минимальное значение грани.
pub const FACE_MIN: u8 = 1;
/// Максимальное значение грани.
pub const FACE_MAX: u8 = 6;

/// Одна игральная кость: значение грани + флаг удержания.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Die {
    /// Значение 1..=6.
    pub value: u8,
    /// Удерживается ли кость между бросками.
    pub held: bool,
}

impl Die {
    /// Свежая кость: единица, не удерживается.
    pub const fn new() -> Self {
        Self {
            value: FACE_MIN,
            held: false,
        }
    }

    pub fn is_valid_face(value: u8) -> bool {
        (FACE_MIN..=FACE_MAX).contains(&value)
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Die {
    /// Формат вида `4` или `[4]` для удерживаемой кости.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.held {
            write!(f, "[{}]", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
