use crate::domain::audit::AuditEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditEntryDto {
    pub id: i64,
    pub ticket_id: i64,
    /// Empty for the creation entry.
    pub old_status: String,
    pub new_status: String,
    pub actor_id: Option<i64>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl From<AuditEntry> for AuditEntryDto {
    fn from(entry: AuditEntry) -> Self {
        Self {
            id: entry.id,
            ticket_id: entry.ticket_id.into(),
            old_status: entry
                .old_status
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            new_status: entry.new_status.as_str().to_string(),
            actor_id: entry.actor_id.map(Into::into),
            notes: entry.notes,
            created_at: entry.created_at,
        }
    }
}
