// src/infrastructure/repositories/postgres_audit_log.rs
use super::map_sqlx;
use crate::domain::audit::{AuditEntry, AuditLogRepository, AuditRecord, NewAuditEntry};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ticket::{TicketId, TicketStatus};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor, PgPool};

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditRow {
    id: i64,
    ticket_id: i64,
    old_status: Option<String>,
    new_status: String,
    actor_id: Option<i64>,
    notes: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuditRow> for AuditEntry {
    type Error = DomainError;

    fn try_from(row: AuditRow) -> Result<Self, Self::Error> {
        Ok(AuditEntry {
            id: row.id,
            ticket_id: TicketId::new(row.ticket_id)?,
            old_status: row
                .old_status
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<TicketStatus>())
                .transpose()?,
            new_status: row.new_status.parse()?,
            actor_id: row.actor_id.map(UserId::new).transpose()?,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

/// Writes one audit row. Ticket writes call this inside their own transaction.
pub(super) async fn insert_entry<'e>(
    executor: impl PgExecutor<'e>,
    ticket_id: TicketId,
    record: &AuditRecord,
) -> DomainResult<AuditEntry> {
    let row = sqlx::query_as::<_, AuditRow>(
        r#"
        INSERT INTO ticket_audit_log (ticket_id, old_status, new_status, actor_id, notes, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, ticket_id, old_status, new_status, actor_id, notes, created_at
        "#,
    )
    .bind(i64::from(ticket_id))
    .bind(record.old_status.map(TicketStatus::as_str))
    .bind(record.new_status.as_str())
    .bind(record.actor_id.map(i64::from))
    .bind(&record.notes)
    .bind(record.recorded_at)
    .fetch_one(executor)
    .await
    .map_err(map_sqlx)?;

    AuditEntry::try_from(row)
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn append(&self, entry: NewAuditEntry) -> DomainResult<AuditEntry> {
        insert_entry(&self.pool, entry.ticket_id, &entry.record).await
    }

    async fn history(&self, ticket_id: TicketId) -> DomainResult<Vec<AuditEntry>> {
        let rows = sqlx::query_as::<_, AuditRow>(
            r#"
            SELECT id, ticket_id, old_status, new_status, actor_id, notes, created_at
            FROM ticket_audit_log
            WHERE ticket_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(i64::from(ticket_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(AuditEntry::try_from).collect()
    }
}
