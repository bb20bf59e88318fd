use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: i64,
    pub recipient_id: UserId,
    pub title: String,
    pub body: String,
    pub link: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_addressed_to(&self, user_id: UserId) -> bool {
        self.recipient_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub recipient_id: UserId,
    pub title: String,
    pub body: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
}
