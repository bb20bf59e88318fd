// src/infrastructure/repositories/postgres_ticket.rs
use super::map_sqlx;
use super::postgres_audit_log::insert_entry;
use crate::domain::audit::AuditRecord;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ticket::{
    AssignmentUpdate, ImageAttachment, Location, NewTicket, StatusCounts, Ticket,
    TicketDescription, TicketFilter, TicketId, TicketReadRepository, TicketScope, TicketStatus,
    TicketTitle, TicketTransition, TicketWriteRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const TICKET_COLUMNS: &str = "id, title, description, category, priority, status, \
     location_building, location_room, image_file_name, image_content_type, image_size_bytes, \
     reporter_id, assignee_id, resolution_notes, resolved_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresTicketWriteRepository {
    pool: PgPool,
}

impl PostgresTicketWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresTicketReadRepository {
    pool: PgPool,
}

impl PostgresTicketReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TicketRow {
    id: i64,
    title: String,
    description: String,
    category: String,
    priority: String,
    status: String,
    location_building: String,
    location_room: String,
    image_file_name: Option<String>,
    image_content_type: Option<String>,
    image_size_bytes: Option<i64>,
    reporter_id: i64,
    assignee_id: Option<i64>,
    resolution_notes: String,
    resolved_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = DomainError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let image = match (row.image_file_name, row.image_content_type, row.image_size_bytes) {
            (Some(name), Some(content_type), Some(size)) => Some(ImageAttachment::new(
                name,
                content_type,
                u64::try_from(size)
                    .map_err(|_| DomainError::Persistence("negative image size".into()))?,
            )?),
            _ => None,
        };

        Ok(Ticket {
            id: TicketId::new(row.id)?,
            title: TicketTitle::new(row.title)?,
            description: TicketDescription::new(row.description)?,
            category: row.category.parse()?,
            priority: row.priority.parse()?,
            status: row.status.parse()?,
            location: Location::new(row.location_building, row.location_room)?,
            image,
            reporter_id: UserId::new(row.reporter_id)?,
            assignee_id: row.assignee_id.map(UserId::new).transpose()?,
            resolution_notes: row.resolution_notes,
            resolved_at: row.resolved_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TicketWriteRepository for PostgresTicketWriteRepository {
    async fn insert(&self, ticket: NewTicket, audit: AuditRecord) -> DomainResult<Ticket> {
        let NewTicket {
            title,
            description,
            category,
            priority,
            location,
            image,
            reporter_id,
            created_at,
        } = ticket;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, TicketRow>(&format!(
            "INSERT INTO tickets (title, description, category, priority, status,
                 location_building, location_room, image_file_name, image_content_type,
                 image_size_bytes, reporter_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, 'pending', $5, $6, $7, $8, $9, $10, $11, $11)
             RETURNING {TICKET_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(category.as_str())
        .bind(priority.as_str())
        .bind(location.building())
        .bind(location.room())
        .bind(image.as_ref().map(ImageAttachment::file_name))
        .bind(image.as_ref().map(ImageAttachment::content_type))
        .bind(
            image
                .as_ref()
                .map(|i| i64::try_from(i.size_bytes()).unwrap_or(i64::MAX)),
        )
        .bind(i64::from(reporter_id))
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let ticket = Ticket::try_from(row)?;
        insert_entry(&mut *tx, ticket.id, &audit).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(ticket)
    }

    async fn apply_transition(&self, transition: TicketTransition) -> DomainResult<Ticket> {
        let TicketTransition {
            id,
            expected_status,
            expected_assignee,
            new_status,
            resolution_notes,
            resolved_at,
            updated_at,
            audit,
        } = transition;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, TicketRow>(&format!(
            "UPDATE tickets
             SET status = $1, resolution_notes = $2, resolved_at = $3, updated_at = $4
             WHERE id = $5 AND status = $6 AND assignee_id IS NOT DISTINCT FROM $7
             RETURNING {TICKET_COLUMNS}"
        ))
        .bind(new_status.as_str())
        .bind(&resolution_notes)
        .bind(resolved_at)
        .bind(updated_at)
        .bind(i64::from(id))
        .bind(expected_status.as_str())
        .bind(expected_assignee.map(i64::from))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| {
            DomainError::Conflict(format!(
                "ticket {id} is no longer {expected_status} with the same assignee"
            ))
        })?;

        let ticket = Ticket::try_from(row)?;
        insert_entry(&mut *tx, ticket.id, &audit).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(ticket)
    }

    async fn update_assignment(&self, update: AssignmentUpdate) -> DomainResult<Ticket> {
        let row = sqlx::query_as::<_, TicketRow>(&format!(
            "UPDATE tickets SET assignee_id = $1, priority = $2, updated_at = $3
             WHERE id = $4 AND updated_at = $5
             RETURNING {TICKET_COLUMNS}"
        ))
        .bind(update.assignee_id.map(i64::from))
        .bind(update.priority.as_str())
        .bind(update.updated_at)
        .bind(i64::from(update.id))
        .bind(update.original_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::Conflict("ticket update conflict, please retry".into()))?;

        Ticket::try_from(row)
    }
}

fn push_scope(builder: &mut QueryBuilder<'_, Postgres>, scope: TicketScope) {
    builder.push(" WHERE TRUE");
    match scope {
        TicketScope::All => {}
        TicketScope::AssignedToOrUnassigned(user_id) => {
            builder.push(" AND (assignee_id IS NULL OR assignee_id = ");
            builder.push_bind(i64::from(user_id));
            builder.push(")");
        }
        TicketScope::ReportedBy(user_id) => {
            builder.push(" AND reporter_id = ");
            builder.push_bind(i64::from(user_id));
        }
    }
}

#[async_trait]
impl TicketReadRepository for PostgresTicketReadRepository {
    async fn find_by_id(&self, id: TicketId) -> DomainResult<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(&format!(
            "SELECT {TICKET_COLUMNS} FROM tickets WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Ticket::try_from).transpose()
    }

    async fn latest_reported_by(&self, reporter: UserId) -> DomainResult<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(&format!(
            "SELECT {TICKET_COLUMNS} FROM tickets WHERE reporter_id = $1
             ORDER BY created_at DESC, id DESC LIMIT 1"
        ))
        .bind(i64::from(reporter))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Ticket::try_from).transpose()
    }

    async fn list(&self, filter: &TicketFilter) -> DomainResult<Vec<Ticket>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {TICKET_COLUMNS} FROM tickets"));
        push_scope(&mut builder, filter.scope);

        if let Some(category) = filter.category {
            builder.push(" AND category = ");
            builder.push_bind(category.as_str());
        }
        if let Some(priority) = filter.priority {
            builder.push(" AND priority = ");
            builder.push_bind(priority.as_str());
        }
        if let Some(status) = filter.status {
            builder.push(" AND status = ");
            builder.push_bind(status.as_str());
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(filter.limit));

        let rows = builder
            .build_query_as::<TicketRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Ticket::try_from).collect()
    }

    async fn count_by_status(&self, scope: TicketScope) -> DomainResult<StatusCounts> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT status, COUNT(1) FROM tickets");
        push_scope(&mut builder, scope);
        builder.push(" GROUP BY status");

        let rows: Vec<(String, i64)> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut counts = StatusCounts::default();
        for (status, count) in rows {
            let status: TicketStatus = status.parse()?;
            counts.record(status, u64::try_from(count).unwrap_or_default());
        }
        Ok(counts)
    }
}
