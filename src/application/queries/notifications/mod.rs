use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, NotificationListDto},
        error::ApplicationResult,
        queries::clamp_limit,
    },
    domain::notification::NotificationRepository,
};

pub struct NotificationQueryService {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationQueryService {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    /// The actor's inbox, newest first, with the total unread count.
    pub async fn list_notifications(
        &self,
        actor: &AuthenticatedUser,
        limit: Option<u32>,
    ) -> ApplicationResult<NotificationListDto> {
        let items = self
            .repo
            .list_for_recipient(actor.id, clamp_limit(limit))
            .await?;
        let unread = self.repo.unread_count(actor.id).await?;
        Ok(NotificationListDto {
            items: items.into_iter().map(Into::into).collect(),
            unread,
        })
    }

    pub async fn unread_count(&self, actor: &AuthenticatedUser) -> ApplicationResult<u64> {
        Ok(self.repo.unread_count(actor.id).await?)
    }
}
