// src/application/commands/tickets/create.rs
use tracing::info;

use super::TicketCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TicketDto},
        error::{ApplicationError, ApplicationResult},
        services::email_templates::EmailKind,
    },
    domain::ticket::{
        Category, ImageAttachment, Location, NewTicket, Priority, TicketDescription, TicketTitle,
    },
};

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Default)]
pub struct CreateTicketCommand {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub location_building: Option<String>,
    pub location_room: Option<String>,
    pub image: Option<ImageUpload>,
}

impl TicketCommandService {
    pub async fn create_ticket(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTicketCommand,
    ) -> ApplicationResult<TicketDto> {
        let title = TicketTitle::new(command.title)?;
        let description = TicketDescription::new(command.description)?;
        let category = command
            .category
            .ok_or_else(|| ApplicationError::validation("category is required"))?;
        let location = Location::new(
            command.location_building.unwrap_or_default(),
            command.location_room.unwrap_or_default(),
        )?;
        let image = command
            .image
            .map(|upload| ImageAttachment::new(upload.file_name, upload.content_type, upload.size_bytes))
            .transpose()?;

        let draft = NewTicket {
            title,
            description,
            category,
            priority: command.priority.unwrap_or_default(),
            location,
            image,
            reporter_id: actor.id,
            created_at: self.clock.now(),
        };
        let audit = draft.creation_record();
        let ticket = self.write_repo.insert(draft, audit).await?;
        info!(ticket_id = %ticket.id, reporter_id = %actor.id, category = ticket.category.as_str(), "ticket created");

        self.dispatcher.dispatch_email(EmailKind::Submitted, &ticket);
        self.dispatcher
            .dispatch(
                ticket.reporter_id,
                "Issue Submitted",
                &format!("Your issue \"{}\" has been submitted.", ticket.title.as_str()),
                &ticket.link(),
            )
            .await?;

        Ok(ticket.into())
    }
}
