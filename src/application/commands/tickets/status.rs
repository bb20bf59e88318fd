// src/application/commands/tickets/status.rs
use tracing::info;

use super::TicketCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TicketDto},
        error::{ApplicationError, ApplicationResult},
        services::email_templates::EmailKind,
    },
    domain::{
        audit::AuditRecord,
        errors::DomainError,
        ticket::{TicketId, TicketStatus, TicketTransition, specifications::CanUpdateStatusSpec},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateStatusCommand {
    pub id: i64,
    pub status: TicketStatus,
    pub notes: Option<String>,
}

impl TicketCommandService {
    pub async fn update_status(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateStatusCommand,
    ) -> ApplicationResult<TicketDto> {
        let id = TicketId::new(command.id)?;

        let guard = self.locks.acquire(id).await;
        let mut ticket = self.load(id).await?;
        if !CanUpdateStatusSpec::new(actor.role, actor.id, &ticket).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only admins or the assigned staff member can change this ticket",
            ));
        }

        let now = self.clock.now();
        let notes = command.notes.as_deref().map(str::trim).unwrap_or_default();
        let previous = ticket.transition(command.status, Some(notes), now)?;
        let audit = AuditRecord {
            old_status: Some(previous),
            new_status: ticket.status,
            actor_id: Some(actor.id),
            notes: notes.to_string(),
            recorded_at: now,
        };
        let ticket = self
            .write_repo
            .apply_transition(TicketTransition::from_applied(&ticket, previous, audit))
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => ApplicationError::invalid_transition(
                    "ticket changed concurrently; reload and retry",
                ),
                other => other.into(),
            })?;
        drop(guard);

        info!(
            ticket_id = %ticket.id,
            from = previous.as_str(),
            to = ticket.status.as_str(),
            actor_id = %actor.id,
            "ticket status changed"
        );

        self.dispatcher.dispatch_email(
            EmailKind::StatusChanged {
                from: previous,
                to: ticket.status,
            },
            &ticket,
        );
        if ticket.status == TicketStatus::Resolved {
            self.dispatcher.dispatch_email(EmailKind::Resolved, &ticket);
        }
        self.dispatcher
            .dispatch(
                ticket.reporter_id,
                "Status Update",
                &format!(
                    "Issue \"{}\" is now {}.",
                    ticket.title.as_str(),
                    ticket.status
                ),
                &ticket.link(),
            )
            .await?;

        Ok(ticket.into())
    }
}
