use crate::domain::ticket::{Category, Priority, StatusCounts, Ticket, TicketStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImageAttachmentDto {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: TicketStatus,
    pub location_building: String,
    pub location_room: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachmentDto>,
    pub reporter_id: i64,
    #[serde(default)]
    pub assignee_id: Option<i64>,
    pub resolution_notes: String,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    /// Seconds between creation and resolution.
    #[serde(default)]
    pub resolution_seconds: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketDto {
    fn from(ticket: Ticket) -> Self {
        let resolution_seconds = ticket.resolution_time().map(|d| d.num_seconds());
        Self {
            id: ticket.id.into(),
            title: ticket.title.into_inner(),
            description: ticket.description.into_inner(),
            category: ticket.category,
            priority: ticket.priority,
            status: ticket.status,
            location_building: ticket.location.building().to_string(),
            location_room: ticket.location.room().to_string(),
            image: ticket.image.map(|image| ImageAttachmentDto {
                file_name: image.file_name().to_string(),
                content_type: image.content_type().to_string(),
                size_bytes: image.size_bytes(),
            }),
            reporter_id: ticket.reporter_id.into(),
            assignee_id: ticket.assignee_id.map(Into::into),
            resolution_notes: ticket.resolution_notes,
            resolved_at: ticket.resolved_at,
            resolution_seconds,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketSummaryDto {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

impl From<StatusCounts> for TicketSummaryDto {
    fn from(counts: StatusCounts) -> Self {
        Self {
            total: counts.total(),
            pending: counts.pending,
            in_progress: counts.in_progress,
            resolved: counts.resolved,
        }
    }
}
