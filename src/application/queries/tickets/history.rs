use super::TicketQueryService;
use crate::{
    application::{
        dto::{AuditEntryDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::ticket::TicketId,
};

impl TicketQueryService {
    /// Status history of a ticket the actor may view, newest first.
    pub async fn ticket_history(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<Vec<AuditEntryDto>> {
        let ticket = self.visible_ticket(actor, TicketId::new(id)?).await?;
        let entries = self.audit_repo.history(ticket.id).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
