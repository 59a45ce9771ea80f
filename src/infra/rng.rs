use crate::engine::RandomSource;

//
// NATIVE ВАРИАНТ (НЕ wasm32): тут есть rand.
// Под wasm реализацию `RandomSource` даёт хост.
//
#[cfg(not(target_arch = "wasm32"))]
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(target_arch = "wasm32"))]
use crate::domain::die::{FACE_MAX, FACE_MIN};

/// Системный RNG (thread_rng) для живых партий.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for SystemRng {
    fn roll_face(&mut self) -> u8 {
        rand::thread_rng().gen_range(FACE_MIN..=FACE_MAX)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же броски при одинаковом seed.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_bytes(bytes: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(bytes),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for DeterministicRng {
    fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(FACE_MIN..=FACE_MAX)
    }
}

/// Заранее заданная последовательность граней, по кругу.
///
/// Удобно, когда нужна конкретная рука (реплей, сценарии, туториал).
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    faces: Vec<u8>,
    pos: usize,
}

impl ScriptedRng {
    /// Пустой список превращается в бесконечные единицы.
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        Self {
            faces: faces.into(),
            pos: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn roll_face(&mut self) -> u8 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.pos % self.faces.len()];
        self.pos += 1;
        face
    }
}
