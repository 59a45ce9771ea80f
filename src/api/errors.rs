use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Стабильный машинный код ошибки для клиента.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorCode {
    NoRollsRemaining,
    NoRollYet,
    IndexOutOfRange,
    InvalidCategory,
    CategoryAlreadyClaimed,
    GameOver,
    HoldsFrozen,
}

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Команда отклонена движком. Состояние партии не изменилось.
    Rejected { code: ErrorCode, message: String },
}

impl ApiError {
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ApiError::BadRequest(_) => None,
            ApiError::Rejected { code, .. } => Some(*code),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let code = match &err {
            EngineError::NoRollsRemaining => ErrorCode::NoRollsRemaining,
            EngineError::NoRollYet => ErrorCode::NoRollYet,
            EngineError::IndexOutOfRange(_) => ErrorCode::IndexOutOfRange,
            EngineError::InvalidCategory(_) => ErrorCode::InvalidCategory,
            EngineError::CategoryAlreadyClaimed(_) => ErrorCode::CategoryAlreadyClaimed,
            EngineError::GameOver => ErrorCode::GameOver,
            EngineError::HoldsFrozen => ErrorCode::HoldsFrozen,
        };
        ApiError::Rejected {
            code,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
