use super::TicketQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TicketDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::ticket::{Ticket, TicketId, specifications::CanViewTicketSpec},
};

impl TicketQueryService {
    pub async fn get_ticket(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<TicketDto> {
        let ticket = self.visible_ticket(actor, TicketId::new(id)?).await?;
        Ok(ticket.into())
    }

    pub(super) async fn visible_ticket(
        &self,
        actor: &AuthenticatedUser,
        id: TicketId,
    ) -> ApplicationResult<Ticket> {
        let ticket = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("ticket not found"))?;

        if !CanViewTicketSpec::new(actor.role, actor.id, &ticket).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "you do not have access to this ticket",
            ));
        }
        Ok(ticket)
    }
}
