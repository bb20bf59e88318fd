// src/infrastructure/repositories/postgres_chat.rs
use super::map_sqlx;
use crate::domain::chat::{
    ChatExchange, ChatExchangeRepository, FaqEntry, FaqRepository, NewChatExchange,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresChatExchangeRepository {
    pool: PgPool,
}

impl PostgresChatExchangeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresFaqRepository {
    pool: PgPool,
}

impl PostgresFaqRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ExchangeRow {
    id: i64,
    user_id: i64,
    message: String,
    response: String,
    backend: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ExchangeRow> for ChatExchange {
    type Error = DomainError;

    fn try_from(row: ExchangeRow) -> Result<Self, Self::Error> {
        Ok(ChatExchange {
            id: row.id,
            user_id: UserId::new(row.user_id)?,
            message: row.message,
            response: row.response,
            backend: row.backend.parse()?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct FaqRow {
    id: i64,
    question: String,
    answer: String,
    keywords: String,
    category: String,
    is_active: bool,
}

impl From<FaqRow> for FaqEntry {
    fn from(row: FaqRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            keywords: row.keywords,
            category: row.category,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl ChatExchangeRepository for PostgresChatExchangeRepository {
    async fn append(&self, exchange: NewChatExchange) -> DomainResult<ChatExchange> {
        let row = sqlx::query_as::<_, ExchangeRow>(
            "INSERT INTO chat_exchanges (user_id, message, response, backend, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, message, response, backend, created_at",
        )
        .bind(i64::from(exchange.user_id))
        .bind(&exchange.message)
        .bind(&exchange.response)
        .bind(exchange.backend.as_str())
        .bind(exchange.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ChatExchange::try_from(row)
    }

    async fn recent_for_user(&self, user: UserId, limit: u32) -> DomainResult<Vec<ChatExchange>> {
        let rows = sqlx::query_as::<_, ExchangeRow>(
            "SELECT id, user_id, message, response, backend, created_at
             FROM chat_exchanges WHERE user_id = $1
             ORDER BY created_at DESC, id DESC LIMIT $2",
        )
        .bind(i64::from(user))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ChatExchange::try_from).collect()
    }
}

#[async_trait]
impl FaqRepository for PostgresFaqRepository {
    async fn list_active(&self) -> DomainResult<Vec<FaqEntry>> {
        let rows = sqlx::query_as::<_, FaqRow>(
            "SELECT id, question, answer, keywords, category, is_active
             FROM faqs WHERE is_active = TRUE ORDER BY question",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
