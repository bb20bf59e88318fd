// src/application/commands/notifications/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, NotificationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::notification::NotificationRepository,
};

pub struct NotificationCommandService {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationCommandService {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    /// Mark one of the actor's notifications as read. Marking twice is a no-op.
    pub async fn mark_read(
        &self,
        actor: &AuthenticatedUser,
        notification_id: i64,
    ) -> ApplicationResult<NotificationDto> {
        self.repo
            .mark_read(notification_id, actor.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("notification not found"))
    }
}
