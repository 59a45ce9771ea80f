//! Движок игры в кости (Yahtzee): оценка руки, карточка очков, раунды.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response),
//! через которое хост отдаёт команды движку и читает снапшоты.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};

/// Операции (внешние команды), которые модуль принимает.
///
/// Для простоты: одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum YahtzeeOperation {
    Command(Command),
}

/// Сообщения между приложениями. Партия одиночная – enum пустой.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum YahtzeeMessage {}

/// Запросы к сервису (read-only).
pub type YahtzeeQuery = Query;

/// Ответы на запросы.
pub type YahtzeeResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct YahtzeeAbi;

impl ContractAbi for YahtzeeAbi {
    type Operation = YahtzeeOperation;
    type Response = ();
}

impl ServiceAbi for YahtzeeAbi {
    type Query = YahtzeeQuery;
    type QueryResponse = YahtzeeResponse;
}
