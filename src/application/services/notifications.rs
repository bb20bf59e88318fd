// src/application/services/notifications.rs
use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{
    application::{
        error::ApplicationResult,
        ports::{
            mail::{MailError, Mailer, OutgoingEmail},
            time::Clock,
        },
        services::email_templates::{Audience, EmailKind},
    },
    domain::{
        notification::{NewNotification, Notification, NotificationRepository},
        ticket::Ticket,
        user::{UserId, UserRepository},
    },
};

/// Fans ticket events out to the in-app inbox and to email.
///
/// In-app records are written inline and their failures propagate. Email is
/// sent from a spawned task bounded by `email_timeout`; its failures are
/// logged and dropped.
pub struct NotificationDispatcher {
    notifications: Arc<dyn NotificationRepository>,
    users: Arc<dyn UserRepository>,
    mailer: Arc<dyn Mailer>,
    clock: Arc<dyn Clock>,
    from_address: String,
    email_timeout: Duration,
}

impl NotificationDispatcher {
    pub fn new(
        notifications: Arc<dyn NotificationRepository>,
        users: Arc<dyn UserRepository>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        from_address: impl Into<String>,
        email_timeout: Duration,
    ) -> Self {
        Self {
            notifications,
            users,
            mailer,
            clock,
            from_address: from_address.into(),
            email_timeout,
        }
    }

    pub async fn dispatch(
        &self,
        recipient: UserId,
        title: &str,
        body: &str,
        link: &str,
    ) -> ApplicationResult<Notification> {
        let created = self
            .notifications
            .insert(NewNotification {
                recipient_id: recipient,
                title: title.to_string(),
                body: body.to_string(),
                link: link.to_string(),
                created_at: self.clock.now(),
            })
            .await?;
        debug!(recipient_id = %recipient, notification_id = created.id, "notification stored");
        Ok(created)
    }

    /// Queue the emails for `kind` and return immediately.
    ///
    /// The handle is only useful to tests; callers are free to drop it.
    pub fn dispatch_email(&self, kind: EmailKind, ticket: &Ticket) -> JoinHandle<()> {
        let job = EmailJob {
            users: Arc::clone(&self.users),
            mailer: Arc::clone(&self.mailer),
            from_address: self.from_address.clone(),
            timeout: self.email_timeout,
        };
        let ticket = ticket.clone();
        tokio::spawn(async move { job.run(kind, ticket).await })
    }
}

struct EmailJob {
    users: Arc<dyn UserRepository>,
    mailer: Arc<dyn Mailer>,
    from_address: String,
    timeout: Duration,
}

impl EmailJob {
    async fn run(self, kind: EmailKind, ticket: Ticket) {
        for rendered in kind.render(&ticket) {
            let recipient = match rendered.audience {
                Audience::Reporter => Some(ticket.reporter_id),
                Audience::Assignee => ticket.assignee_id,
            };
            let Some(recipient) = recipient else {
                continue;
            };
            let Some(address) = self.mailbox_of(recipient).await else {
                debug!(
                    ticket_id = %ticket.id,
                    recipient_id = %recipient,
                    kind = kind.as_str(),
                    "recipient has no email address, skipping"
                );
                continue;
            };

            let email = OutgoingEmail {
                subject: rendered.subject,
                body: rendered.body,
                from: self.from_address.clone(),
                to: vec![address],
            };
            let outcome = match tokio::time::timeout(self.timeout, self.mailer.send(email)).await {
                Ok(result) => result,
                Err(_) => Err(MailError::Timeout),
            };
            settle(kind, &ticket, recipient, outcome);
        }
    }

    async fn mailbox_of(&self, recipient: UserId) -> Option<String> {
        match self.users.find_by_id(recipient).await {
            Ok(user) => user.and_then(|u| u.mailbox().map(str::to_string)),
            Err(err) => {
                warn!(error = %err, recipient_id = %recipient, "recipient lookup failed");
                None
            }
        }
    }
}

fn settle(kind: EmailKind, ticket: &Ticket, recipient: UserId, outcome: Result<(), MailError>) {
    match outcome {
        Ok(()) => debug!(
            ticket_id = %ticket.id,
            recipient_id = %recipient,
            kind = kind.as_str(),
            "email sent"
        ),
        Err(err) => warn!(
            error = %err,
            ticket_id = %ticket.id,
            recipient_id = %recipient,
            kind = kind.as_str(),
            "email delivery failed"
        ),
    }
}
