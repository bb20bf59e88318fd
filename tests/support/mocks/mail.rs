// tests/support/mocks/mail.rs
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use campuscare_core::application::ports::mail::{MailError, Mailer, OutgoingEmail};

/// Records every message instead of sending it.
#[derive(Debug, Default)]
pub struct CapturingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl CapturingMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn subjects(&self) -> Vec<String> {
        self.sent().into_iter().map(|e| e.subject).collect()
    }

    /// Email goes out from spawned tasks; poll until `count` messages arrived.
    pub async fn wait_for(&self, count: usize) -> Vec<OutgoingEmail> {
        for _ in 0..200 {
            if self.sent.lock().unwrap().len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        self.sent()
    }
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// The relay refuses everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::Transport("connection refused".into()))
    }
}

/// Never completes within any reasonable timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct HangingMailer;

#[async_trait]
impl Mailer for HangingMailer {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), MailError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }
}
