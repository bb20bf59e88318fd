// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Role, UserId, Username};
use chrono::{DateTime, Utc};

/// A directory entry for someone who can act on tickets. Accounts are managed
/// by the identity provider; this crate only reads them.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn can_be_assigned(&self) -> bool {
        self.is_active && self.role.is_maintenance()
    }

    pub fn mailbox(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }
}
