use crate::domain::errors::DomainResult;
use crate::domain::notification::entity::{NewNotification, Notification};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn insert(&self, notification: NewNotification) -> DomainResult<Notification>;

    /// Newest first.
    async fn list_for_recipient(
        &self,
        recipient: UserId,
        limit: u32,
    ) -> DomainResult<Vec<Notification>>;

    async fn unread_count(&self, recipient: UserId) -> DomainResult<u64>;

    /// Flip `is_read` to true for a notification owned by `recipient`.
    /// Returns `None` when no such notification belongs to the recipient.
    async fn mark_read(&self, id: i64, recipient: UserId) -> DomainResult<Option<Notification>>;
}
