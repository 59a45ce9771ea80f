use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки конфига партии.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг партии: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Можно ли менять удержание костей после последнего броска.
///
/// После третьего броска кости заморожены, но фронт может позволять
/// «переключать» удержание для разглядывания руки перед выбором категории.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HoldPolicy {
    /// В состоянии MustClaim удержание переключается как обычно.
    #[default]
    AllowAfterLastRoll,
    /// В состоянии MustClaim переключение даёт `EngineError::HoldsFrozen`.
    FrozenAfterLastRoll,
}

/// Конфиг партии.
///
/// Правила подсчёта (25/30/40/50, бонусы 35 и 100) и три броска за раунд
/// фиксированы и сюда не входят.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub hold_policy: HoldPolicy,
    /// Показывать ли в снапшоте превью очков для открытых категорий.
    pub preview_in_snapshot: bool,
    /// Писать ли события партии в `GameHistory`.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hold_policy: HoldPolicy::default(),
            preview_in_snapshot: true,
            record_history: true,
        }
    }
}

impl GameConfig {
    /// Загрузить конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Удобный пресет: удержание замораживается после третьего броска.
    pub fn frozen_holds() -> Self {
        Self {
            hold_policy: HoldPolicy::FrozenAfterLastRoll,
            ..Self::default()
        }
    }
}
