// src/application/services/email_templates.rs
use crate::domain::ticket::{Ticket, TicketStatus};

const SUBJECT_PREFIX: &str = "[CampusCare]";

/// Which ticket event an email describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    Submitted,
    Assigned,
    StatusChanged { from: TicketStatus, to: TicketStatus },
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Reporter,
    Assignee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub audience: Audience,
    pub subject: String,
    pub body: String,
}

impl EmailKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Assigned => "assigned",
            Self::StatusChanged { .. } => "status_changed",
            Self::Resolved => "resolved",
        }
    }

    /// Every message this event produces for `ticket`, reporter first.
    pub fn render(self, ticket: &Ticket) -> Vec<RenderedEmail> {
        let title = ticket.title.as_str();
        match self {
            Self::Submitted => vec![RenderedEmail {
                audience: Audience::Reporter,
                subject: format!("{SUBJECT_PREFIX} Issue Reported: {title}"),
                body: format!(
                    "Your issue \"{title}\" has been submitted successfully. We will look into it shortly."
                ),
            }],
            Self::Assigned => {
                let mut emails = vec![RenderedEmail {
                    audience: Audience::Reporter,
                    subject: format!("{SUBJECT_PREFIX} Issue Assigned: {title}"),
                    body: format!("Issue \"{title}\" has been assigned to maintenance staff."),
                }];
                if ticket.assignee_id.is_some() {
                    emails.push(RenderedEmail {
                        audience: Audience::Assignee,
                        subject: format!("{SUBJECT_PREFIX} New Assignment: {title}"),
                        body: format!("You have been assigned to resolve: {title}"),
                    });
                }
                emails
            }
            Self::StatusChanged { from, to } => vec![RenderedEmail {
                audience: Audience::Reporter,
                subject: format!("{SUBJECT_PREFIX} Status Update: {title} - {to}"),
                body: format!(
                    "Your issue \"{title}\" status has been updated from {from} to {to}."
                ),
            }],
            Self::Resolved => {
                let notes = ticket.resolution_notes.trim();
                let notes = if notes.is_empty() { "N/A" } else { notes };
                vec![RenderedEmail {
                    audience: Audience::Reporter,
                    subject: format!("{SUBJECT_PREFIX} Issue Resolved: {title}"),
                    body: format!(
                        "Your issue \"{title}\" has been resolved. Resolution notes: {notes}"
                    ),
                }]
            }
        }
    }
}
