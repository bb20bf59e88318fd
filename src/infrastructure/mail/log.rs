// src/infrastructure/mail/log.rs
use super::smtp::build_message;
use crate::application::ports::mail::{MailError, Mailer, OutgoingEmail};
use async_trait::async_trait;
use tracing::info;

/// Used when no SMTP relay is configured: validates the message and logs it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        build_message(&email)?;
        info!(
            to = ?email.to,
            subject = %email.subject,
            "smtp not configured, email logged instead of sent"
        );
        Ok(())
    }
}
