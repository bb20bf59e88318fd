// src/application/services/mod.rs
pub mod email_templates;
pub mod notifications;

use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        ApplicationResult,
        commands::{
            chat::{ChatSettings, ResponseRouter},
            notifications::NotificationCommandService,
            tickets::TicketCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            assistant::AssistantBackend, mail::Mailer, rate_limit::ChatRateLimiter,
            security::TokenVerifier, time::Clock,
        },
        queries::{
            chat::ChatQueryService, notifications::NotificationQueryService,
            tickets::TicketQueryService,
        },
    },
    domain::{
        audit::AuditLogRepository,
        chat::{ChatExchangeRepository, FaqRepository, RuleBasedResponder},
        notification::NotificationRepository,
        ticket::{TicketReadRepository, TicketWriteRepository},
        user::UserRepository,
    },
};

use self::notifications::NotificationDispatcher;

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub chat: ChatSettings,
    pub from_address: String,
    pub email_timeout: Duration,
}

pub struct ApplicationServices {
    pub ticket_commands: Arc<TicketCommandService>,
    pub ticket_queries: Arc<TicketQueryService>,
    pub notification_commands: Arc<NotificationCommandService>,
    pub notification_queries: Arc<NotificationQueryService>,
    pub chat_router: Arc<ResponseRouter>,
    pub chat_queries: Arc<ChatQueryService>,
    token_verifier: Arc<dyn TokenVerifier>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: ServiceSettings,
        ticket_write_repo: Arc<dyn TicketWriteRepository>,
        ticket_read_repo: Arc<dyn TicketReadRepository>,
        audit_log_repo: Arc<dyn AuditLogRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        chat_repo: Arc<dyn ChatExchangeRepository>,
        faq_repo: Arc<dyn FaqRepository>,
        user_repo: Arc<dyn UserRepository>,
        mailer: Arc<dyn Mailer>,
        assistant_backends: Vec<Arc<dyn AssistantBackend>>,
        rate_limiter: Arc<dyn ChatRateLimiter>,
        token_verifier: Arc<dyn TokenVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let dispatcher = Arc::new(NotificationDispatcher::new(
            Arc::clone(&notification_repo),
            Arc::clone(&user_repo),
            mailer,
            Arc::clone(&clock),
            settings.from_address,
            settings.email_timeout,
        ));

        let ticket_commands = Arc::new(TicketCommandService::new(
            ticket_write_repo,
            Arc::clone(&ticket_read_repo),
            user_repo,
            dispatcher,
            Arc::clone(&clock),
        ));
        let ticket_queries = Arc::new(TicketQueryService::new(
            Arc::clone(&ticket_read_repo),
            audit_log_repo,
        ));

        let notification_commands =
            Arc::new(NotificationCommandService::new(Arc::clone(&notification_repo)));
        let notification_queries = Arc::new(NotificationQueryService::new(notification_repo));

        let rules = RuleBasedResponder::new(ticket_read_repo, faq_repo);
        let chat_router = Arc::new(ResponseRouter::new(
            settings.chat,
            assistant_backends,
            rules,
            rate_limiter,
            Arc::clone(&chat_repo),
            clock,
        ));
        let chat_queries = Arc::new(ChatQueryService::new(chat_repo));

        Self {
            ticket_commands,
            ticket_queries,
            notification_commands,
            notification_queries,
            chat_router,
            chat_queries,
            token_verifier,
        }
    }

    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        Arc::clone(&self.token_verifier)
    }

    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_verifier.authenticate(token).await
    }
}
