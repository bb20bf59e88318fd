use crate::domain::chat::ChatBackend;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend rejected the request with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("backend timed out")]
    Timeout,
}

/// A remote completion service. Only enabled backends are ever constructed.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    fn id(&self) -> ChatBackend;

    async fn complete(&self, message: &str) -> Result<String, BackendError>;
}
