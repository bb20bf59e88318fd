// src/application/commands/chat/router.rs
use std::{sync::Arc, time::Duration};

use tracing::{debug, info, warn};

use crate::{
    application::{
        dto::{AuthenticatedUser, ChatReplyDto},
        error::{ApplicationError, ApplicationResult},
        ports::{
            assistant::{AssistantBackend, BackendError},
            rate_limit::ChatRateLimiter,
            time::Clock,
        },
    },
    domain::chat::{ChatBackend, ChatExchangeRepository, NewChatExchange, RuleBasedResponder},
};

#[derive(Debug, Clone, Copy)]
pub struct ChatSettings {
    pub enabled: bool,
    pub backend_timeout: Duration,
}

/// Produces exactly one answer per admitted chat message.
///
/// Remote backends are consulted in the order given; the first non-empty
/// answer wins and the rule engine answers when none do.
pub struct ResponseRouter {
    settings: ChatSettings,
    backends: Vec<Arc<dyn AssistantBackend>>,
    rules: RuleBasedResponder,
    limiter: Arc<dyn ChatRateLimiter>,
    exchanges: Arc<dyn ChatExchangeRepository>,
    clock: Arc<dyn Clock>,
}

impl ResponseRouter {
    pub fn new(
        settings: ChatSettings,
        backends: Vec<Arc<dyn AssistantBackend>>,
        rules: RuleBasedResponder,
        limiter: Arc<dyn ChatRateLimiter>,
        exchanges: Arc<dyn ChatExchangeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            backends,
            rules,
            limiter,
            exchanges,
            clock,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    pub async fn handle_message(
        &self,
        actor: &AuthenticatedUser,
        text: &str,
    ) -> ApplicationResult<ChatReplyDto> {
        if !self.settings.enabled {
            return Err(ApplicationError::forbidden("chatbot is disabled"));
        }
        let message = text.trim();
        if message.is_empty() {
            return Err(ApplicationError::validation("message cannot be empty"));
        }
        if !self.limiter.try_acquire(actor.id, self.clock.now()) {
            info!(user_id = %actor.id, "chat request rate limited");
            return Err(ApplicationError::rate_limited(
                "too many messages, please wait a minute",
            ));
        }

        let (response, backend) = self.answer(actor, message).await;
        let exchange = self
            .exchanges
            .append(NewChatExchange {
                user_id: actor.id,
                message: message.to_string(),
                response,
                backend,
                created_at: self.clock.now(),
            })
            .await?;
        debug!(user_id = %actor.id, backend = backend.as_str(), "chat exchange stored");

        Ok(exchange.into())
    }

    async fn answer(&self, actor: &AuthenticatedUser, message: &str) -> (String, ChatBackend) {
        for backend in &self.backends {
            let id = backend.id();
            let outcome =
                match tokio::time::timeout(self.settings.backend_timeout, backend.complete(message))
                    .await
                {
                    Ok(result) => result,
                    Err(_) => Err(BackendError::Timeout),
                };
            match outcome {
                Ok(text) if !text.trim().is_empty() => return (text.trim().to_string(), id),
                Ok(_) => debug!(backend = id.as_str(), "backend returned an empty answer"),
                Err(err) => warn!(error = %err, backend = id.as_str(), "assistant backend failed"),
            }
        }

        (
            self.rules.respond(actor.id, message).await,
            ChatBackend::RuleBased,
        )
    }
}
