// src/infrastructure/assistant/mod.rs
mod gemini;
mod openai;

use std::time::Duration;

use crate::application::ports::assistant::BackendError;

pub use gemini::GeminiBackend;
pub use openai::OpenAiBackend;

pub(crate) const SYSTEM_PROMPT: &str = "You are CampusCare assistant for campus maintenance issues. Be concise. \
Help users report issues, track status, answer FAQs. Suggest checking Issues section for status. \
Guide to Submit Issue for new reports.";

fn http_client(timeout: Duration) -> Result<reqwest::Client, BackendError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| BackendError::Transport(e.to_string()))
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status.as_u16()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| BackendError::Decode(e.to_string()))
}

fn transport_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Transport(err.to_string())
    }
}
