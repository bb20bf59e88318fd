use crate::domain::audit::entity::{AuditEntry, NewAuditEntry};
use crate::domain::errors::DomainResult;
use crate::domain::ticket::TicketId;
use async_trait::async_trait;

/// Append-only status history. Entries are never updated or deleted.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn append(&self, entry: NewAuditEntry) -> DomainResult<AuditEntry>;

    /// Newest first, ties broken by insertion order.
    async fn history(&self, ticket_id: TicketId) -> DomainResult<Vec<AuditEntry>>;
}
