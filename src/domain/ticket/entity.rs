// src/domain/ticket/entity.rs
use crate::domain::audit::AuditRecord;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ticket::value_objects::{
    Category, ImageAttachment, Location, Priority, TicketDescription, TicketId, TicketStatus,
    TicketTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: TicketId,
    pub title: TicketTitle,
    pub description: TicketDescription,
    pub category: Category,
    pub priority: Priority,
    pub status: TicketStatus,
    pub location: Location,
    pub image: Option<ImageAttachment>,
    pub reporter_id: UserId,
    pub assignee_id: Option<UserId>,
    pub resolution_notes: String,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Move the ticket to `next`, returning the status it left.
    ///
    /// Entering `resolved` stamps `resolved_at` once and replaces the resolution
    /// notes only when non-blank notes are supplied.
    pub fn transition(
        &mut self,
        next: TicketStatus,
        notes: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<TicketStatus> {
        if next == self.status {
            return Err(DomainError::InvalidTransition(format!(
                "ticket is already {}",
                self.status
            )));
        }
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidTransition(format!(
                "cannot move ticket from {} to {next}",
                self.status
            )));
        }

        let previous = self.status;
        self.status = next;
        if next == TicketStatus::Resolved {
            self.resolved_at.get_or_insert(now);
            if let Some(notes) = notes.map(str::trim).filter(|n| !n.is_empty()) {
                self.resolution_notes = notes.to_string();
            }
        }
        self.updated_at = now;
        Ok(previous)
    }

    /// Apply an admin assignment. Returns `true` when the assignee changed.
    pub fn reassign(
        &mut self,
        assignee: Option<UserId>,
        priority: Option<Priority>,
        now: DateTime<Utc>,
    ) -> bool {
        let changed = self.assignee_id != assignee;
        self.assignee_id = assignee;
        if let Some(priority) = priority {
            self.priority = priority;
        }
        self.updated_at = now;
        changed
    }

    pub fn resolution_time(&self) -> Option<Duration> {
        self.resolved_at.map(|at| at - self.created_at)
    }

    pub fn link(&self) -> String {
        format!("/issues/{}/", self.id)
    }
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub title: TicketTitle,
    pub description: TicketDescription,
    pub category: Category,
    pub priority: Priority,
    pub location: Location,
    pub image: Option<ImageAttachment>,
    pub reporter_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewTicket {
    /// Audit record written alongside the insert; `old_status` is empty for creations.
    pub fn creation_record(&self) -> AuditRecord {
        AuditRecord {
            old_status: None,
            new_status: TicketStatus::Pending,
            actor_id: Some(self.reporter_id),
            notes: String::new(),
            recorded_at: self.created_at,
        }
    }
}

/// A validated status change ready to be persisted together with its audit record.
///
/// Persistence must only succeed while the stored status still equals `expected_status`
/// and the assignee the permission check saw is still the one on record.
#[derive(Debug, Clone)]
pub struct TicketTransition {
    pub id: TicketId,
    pub expected_status: TicketStatus,
    pub expected_assignee: Option<UserId>,
    pub new_status: TicketStatus,
    pub resolution_notes: String,
    pub resolved_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub audit: AuditRecord,
}

impl TicketTransition {
    pub fn from_applied(ticket: &Ticket, previous: TicketStatus, audit: AuditRecord) -> Self {
        Self {
            id: ticket.id,
            expected_status: previous,
            expected_assignee: ticket.assignee_id,
            new_status: ticket.status,
            resolution_notes: ticket.resolution_notes.clone(),
            resolved_at: ticket.resolved_at,
            updated_at: ticket.updated_at,
            audit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssignmentUpdate {
    pub id: TicketId,
    pub assignee_id: Option<UserId>,
    pub priority: Priority,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssignmentUpdate {
    pub fn from_applied(ticket: &Ticket, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id: ticket.id,
            assignee_id: ticket.assignee_id,
            priority: ticket.priority,
            original_updated_at,
            updated_at: ticket.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

impl StatusCounts {
    pub const fn total(&self) -> u64 {
        self.pending + self.in_progress + self.resolved
    }

    pub const fn record(&mut self, status: TicketStatus, count: u64) {
        match status {
            TicketStatus::Pending => self.pending += count,
            TicketStatus::InProgress => self.in_progress += count,
            TicketStatus::Resolved => self.resolved += count,
        }
    }
}
