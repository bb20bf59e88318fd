// src/application/commands/tickets/service.rs
use std::sync::Arc;

use super::locks::TicketLocks;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::notifications::NotificationDispatcher,
    },
    domain::{
        ticket::{Ticket, TicketId, TicketReadRepository, TicketWriteRepository},
        user::UserRepository,
    },
};

/// The ticket lifecycle: creation, assignment and status transitions.
pub struct TicketCommandService {
    pub(super) write_repo: Arc<dyn TicketWriteRepository>,
    pub(super) read_repo: Arc<dyn TicketReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) dispatcher: Arc<NotificationDispatcher>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) locks: TicketLocks,
}

impl TicketCommandService {
    pub fn new(
        write_repo: Arc<dyn TicketWriteRepository>,
        read_repo: Arc<dyn TicketReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        dispatcher: Arc<NotificationDispatcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            dispatcher,
            clock,
            locks: TicketLocks::default(),
        }
    }

    pub(super) async fn load(&self, id: TicketId) -> ApplicationResult<Ticket> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("ticket not found"))
    }
}
