// src/application/commands/tickets/assign.rs
use tracing::info;

use super::TicketCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TicketDto},
        error::{ApplicationError, ApplicationResult},
        services::email_templates::EmailKind,
    },
    domain::{
        ticket::{AssignmentUpdate, Priority, TicketId, specifications::CanAssignTicketSpec},
        user::UserId,
    },
};

#[derive(Debug, Clone)]
pub struct AssignTicketCommand {
    pub id: i64,
    pub assignee_id: Option<i64>,
    pub priority: Option<Priority>,
}

impl TicketCommandService {
    /// Set the assignee and priority. Metadata only: no audit entry is written.
    pub async fn assign_ticket(
        &self,
        actor: &AuthenticatedUser,
        command: AssignTicketCommand,
    ) -> ApplicationResult<TicketDto> {
        if !CanAssignTicketSpec::new(actor.role).is_satisfied() {
            return Err(ApplicationError::forbidden("only admins can assign tickets"));
        }
        let id = TicketId::new(command.id)?;
        let assignee = match command.assignee_id {
            Some(raw) => Some(self.resolve_assignee(UserId::new(raw)?).await?),
            None => None,
        };

        let guard = self.locks.acquire(id).await;
        let mut ticket = self.load(id).await?;
        let original_updated_at = ticket.updated_at;
        let changed = ticket.reassign(assignee, command.priority, self.clock.now());
        let ticket = self
            .write_repo
            .update_assignment(AssignmentUpdate::from_applied(&ticket, original_updated_at))
            .await?;
        drop(guard);

        if changed {
            info!(
                ticket_id = %ticket.id,
                assignee_id = ?ticket.assignee_id.map(i64::from),
                admin_id = %actor.id,
                "ticket assignee changed"
            );
            self.dispatcher.dispatch_email(EmailKind::Assigned, &ticket);
            let link = ticket.link();
            let title = ticket.title.as_str();
            self.dispatcher
                .dispatch(
                    ticket.reporter_id,
                    "Issue Assigned",
                    &format!("Issue \"{title}\" has been assigned."),
                    &link,
                )
                .await?;
            if let Some(assignee) = ticket.assignee_id {
                self.dispatcher
                    .dispatch(
                        assignee,
                        "New Assignment",
                        &format!("You have been assigned: {title}"),
                        &link,
                    )
                    .await?;
            }
        }

        Ok(ticket.into())
    }

    async fn resolve_assignee(&self, id: UserId) -> ApplicationResult<UserId> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::validation("assignee does not exist"))?;
        if !user.can_be_assigned() {
            return Err(ApplicationError::validation(
                "assignee must be an active maintenance staff member",
            ));
        }
        Ok(user.id)
    }
}
