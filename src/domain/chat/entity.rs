use crate::domain::errors::DomainError;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Which responder produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ChatBackend {
    RemoteA,
    RemoteB,
    RuleBased,
}

impl ChatBackend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RemoteA => "remote-a",
            Self::RemoteB => "remote-b",
            Self::RuleBased => "rule-based",
        }
    }
}

impl fmt::Display for ChatBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatBackend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remote-a" => Ok(Self::RemoteA),
            "remote-b" => Ok(Self::RemoteB),
            "rule-based" => Ok(Self::RuleBased),
            other => Err(DomainError::Validation(format!("unknown chat backend '{other}'"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub id: i64,
    pub user_id: UserId,
    pub message: String,
    pub response: String,
    pub backend: ChatBackend,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewChatExchange {
    pub user_id: UserId,
    pub message: String,
    pub response: String,
    pub backend: ChatBackend,
    pub created_at: DateTime<Utc>,
}
