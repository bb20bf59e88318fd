use super::TicketQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TicketDto, TicketSummaryDto},
        error::ApplicationResult,
        queries::clamp_limit,
    },
    domain::ticket::{Category, Priority, TicketFilter, TicketScope, TicketStatus},
};

#[derive(Debug, Clone, Default)]
pub struct ListTicketsQuery {
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub status: Option<TicketStatus>,
    pub limit: Option<u32>,
}

impl TicketQueryService {
    /// Tickets the actor may see, newest first.
    pub async fn list_tickets(
        &self,
        actor: &AuthenticatedUser,
        query: ListTicketsQuery,
    ) -> ApplicationResult<Vec<TicketDto>> {
        let mut filter = TicketFilter::new(
            TicketScope::for_actor(actor.role, actor.id),
            clamp_limit(query.limit),
        );
        filter.category = query.category;
        filter.priority = query.priority;
        filter.status = query.status;

        let tickets = self.read_repo.list(&filter).await?;
        Ok(tickets.into_iter().map(Into::into).collect())
    }

    pub async fn ticket_summary(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<TicketSummaryDto> {
        let counts = self
            .read_repo
            .count_by_status(TicketScope::for_actor(actor.role, actor.id))
            .await?;
        Ok(counts.into())
    }
}
