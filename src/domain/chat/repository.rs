use crate::domain::chat::entity::{ChatExchange, NewChatExchange};
use crate::domain::chat::faq::FaqEntry;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ChatExchangeRepository: Send + Sync {
    async fn append(&self, exchange: NewChatExchange) -> DomainResult<ChatExchange>;

    /// The `limit` most recent exchanges of `user`, newest first.
    async fn recent_for_user(&self, user: UserId, limit: u32) -> DomainResult<Vec<ChatExchange>>;
}

#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Active entries ordered by question.
    async fn list_active(&self) -> DomainResult<Vec<FaqEntry>>;
}
