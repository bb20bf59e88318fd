use crate::domain::chat::{ChatBackend, ChatExchange};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReplyDto {
    pub response: String,
    pub backend_used: ChatBackend,
    pub timestamp: DateTime<Utc>,
}

impl From<ChatExchange> for ChatReplyDto {
    fn from(exchange: ChatExchange) -> Self {
        Self {
            response: exchange.response,
            backend_used: exchange.backend,
            timestamp: exchange.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatExchangeDto {
    pub message: String,
    pub response: String,
    pub backend_used: ChatBackend,
    pub timestamp: DateTime<Utc>,
}

impl From<ChatExchange> for ChatExchangeDto {
    fn from(exchange: ChatExchange) -> Self {
        Self {
            message: exchange.message,
            response: exchange.response,
            backend_used: exchange.backend,
            timestamp: exchange.created_at,
        }
    }
}
