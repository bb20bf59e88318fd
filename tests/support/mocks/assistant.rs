// tests/support/mocks/assistant.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use campuscare_core::{
    application::ports::assistant::{AssistantBackend, BackendError},
    domain::chat::ChatBackend,
};

#[derive(Debug, Clone)]
pub enum Script {
    Reply(String),
    Empty,
    Fail,
    Hang,
}

/// A remote backend whose behavior is fixed up front.
#[derive(Debug)]
pub struct ScriptedBackend {
    id: ChatBackend,
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new(id: ChatBackend, script: Script) -> Self {
        Self {
            id,
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(id: ChatBackend, text: &str) -> Self {
        Self::new(id, Script::Reply(text.into()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssistantBackend for ScriptedBackend {
    fn id(&self) -> ChatBackend {
        self.id
    }

    async fn complete(&self, _message: &str) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Empty => Ok("   ".into()),
            Script::Fail => Err(BackendError::Status(503)),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok("too late".into())
            }
        }
    }
}
