// src/infrastructure/repositories/postgres_notification.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::notification::{NewNotification, Notification, NotificationRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresNotificationRepository {
    pool: PgPool,
}

impl PostgresNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRow {
    id: i64,
    recipient_id: i64,
    title: String,
    body: String,
    link: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<NotificationRow> for Notification {
    type Error = DomainError;

    fn try_from(row: NotificationRow) -> Result<Self, Self::Error> {
        Ok(Notification {
            id: row.id,
            recipient_id: UserId::new(row.recipient_id)?,
            title: row.title,
            body: row.body,
            link: row.link,
            is_read: row.is_read,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn insert(&self, notification: NewNotification) -> DomainResult<Notification> {
        let row = sqlx::query_as::<_, NotificationRow>(
            "INSERT INTO notifications (recipient_id, title, body, link, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, recipient_id, title, body, link, is_read, created_at",
        )
        .bind(i64::from(notification.recipient_id))
        .bind(&notification.title)
        .bind(&notification.body)
        .bind(&notification.link)
        .bind(notification.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Notification::try_from(row)
    }

    async fn list_for_recipient(
        &self,
        recipient: UserId,
        limit: u32,
    ) -> DomainResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            "SELECT id, recipient_id, title, body, link, is_read, created_at
             FROM notifications WHERE recipient_id = $1
             ORDER BY created_at DESC, id DESC LIMIT $2",
        )
        .bind(i64::from(recipient))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Notification::try_from).collect()
    }

    async fn unread_count(&self, recipient: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM notifications WHERE recipient_id = $1 AND is_read = FALSE",
        )
        .bind(i64::from(recipient))
        .fetch_one(&self.pool)
        .await
        .map(|count| u64::try_from(count).unwrap_or_default())
        .map_err(map_sqlx)
    }

    async fn mark_read(&self, id: i64, recipient: UserId) -> DomainResult<Option<Notification>> {
        let row = sqlx::query_as::<_, NotificationRow>(
            "UPDATE notifications SET is_read = TRUE
             WHERE id = $1 AND recipient_id = $2
             RETURNING id, recipient_id, title, body, link, is_read, created_at",
        )
        .bind(id)
        .bind(i64::from(recipient))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Notification::try_from).transpose()
    }
}
