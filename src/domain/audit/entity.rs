// src/domain/audit/entity.rs
use crate::domain::ticket::{TicketId, TicketStatus};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// What happened to a ticket's status. `old_status` is `None` for the creation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub old_status: Option<TicketStatus>,
    pub new_status: TicketStatus,
    pub actor_id: Option<UserId>,
    pub notes: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub ticket_id: TicketId,
    pub record: AuditRecord,
}

#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: i64,
    pub ticket_id: TicketId,
    pub old_status: Option<TicketStatus>,
    pub new_status: TicketStatus,
    pub actor_id: Option<UserId>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn from_record(id: i64, ticket_id: TicketId, record: AuditRecord) -> Self {
        Self {
            id,
            ticket_id,
            old_status: record.old_status,
            new_status: record.new_status,
            actor_id: record.actor_id,
            notes: record.notes,
            created_at: record.recorded_at,
        }
    }

    pub const fn is_creation(&self) -> bool {
        self.old_status.is_none()
    }
}
