use crate::domain::audit::AuditRecord;
use crate::domain::errors::DomainResult;
use crate::domain::ticket::entity::{
    AssignmentUpdate, NewTicket, StatusCounts, Ticket, TicketTransition,
};
use crate::domain::ticket::specifications::TicketScope;
use crate::domain::ticket::value_objects::{Category, Priority, TicketId, TicketStatus};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct TicketFilter {
    pub scope: TicketScope,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub status: Option<TicketStatus>,
    pub limit: u32,
}

impl TicketFilter {
    pub const fn new(scope: TicketScope, limit: u32) -> Self {
        Self {
            scope,
            category: None,
            priority: None,
            status: None,
            limit,
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.scope.contains(ticket)
            && self.category.is_none_or(|c| c == ticket.category)
            && self.priority.is_none_or(|p| p == ticket.priority)
            && self.status.is_none_or(|s| s == ticket.status)
    }
}

#[async_trait]
pub trait TicketWriteRepository: Send + Sync {
    /// Insert the ticket and its creation audit record atomically.
    async fn insert(&self, ticket: NewTicket, audit: AuditRecord) -> DomainResult<Ticket>;

    /// Persist a status change and its audit record atomically.
    ///
    /// Fails with `DomainError::Conflict` when the stored status or assignee no
    /// longer match `transition.expected_status` and `transition.expected_assignee`.
    async fn apply_transition(&self, transition: TicketTransition) -> DomainResult<Ticket>;

    /// Fails with `DomainError::Conflict` when the ticket changed since it was read.
    async fn update_assignment(&self, update: AssignmentUpdate) -> DomainResult<Ticket>;
}

#[async_trait]
pub trait TicketReadRepository: Send + Sync {
    async fn find_by_id(&self, id: TicketId) -> DomainResult<Option<Ticket>>;
    async fn latest_reported_by(&self, reporter: UserId) -> DomainResult<Option<Ticket>>;
    /// Newest first.
    async fn list(&self, filter: &TicketFilter) -> DomainResult<Vec<Ticket>>;
    async fn count_by_status(&self, scope: TicketScope) -> DomainResult<StatusCounts>;
}
