//! RngSeed – доменный seed для RNG партии.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || game_id || round || roll)
//!   - создавать DeterministicRng из seed

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::GameId;
#[cfg(not(target_arch = "wasm32"))]
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение с контекстом партии:
    ///   - game_id
    ///   - round (1..=13)
    ///   - roll (1..=3)
    pub fn derive(&self, game_id: GameId, round: u8, roll: u8) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"YAHTZEE_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(game_id.to_le_bytes());
        hasher.update([round, roll]);

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}
