use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, ChatExchangeDto},
        error::ApplicationResult,
    },
    domain::chat::ChatExchangeRepository,
};

const HISTORY_LEN: u32 = 20;

pub struct ChatQueryService {
    repo: Arc<dyn ChatExchangeRepository>,
}

impl ChatQueryService {
    pub fn new(repo: Arc<dyn ChatExchangeRepository>) -> Self {
        Self { repo }
    }

    /// The actor's most recent exchanges in conversation order.
    pub async fn history(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ChatExchangeDto>> {
        let mut recent = self.repo.recent_for_user(actor.id, HISTORY_LEN).await?;
        recent.reverse();
        Ok(recent.into_iter().map(Into::into).collect())
    }
}
