// src/infrastructure/assistant/gemini.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{SYSTEM_PROMPT, http_client, read_json, transport_error};
use crate::{
    application::ports::assistant::{AssistantBackend, BackendError},
    domain::chat::ChatBackend,
};

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Google Gemini `generateContent`; the primary remote backend.
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        Ok(Self {
            client: http_client(timeout)?,
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

#[async_trait]
impl AssistantBackend for GeminiBackend {
    fn id(&self) -> ChatBackend {
        ChatBackend::RemoteA
    }

    async fn complete(&self, message: &str) -> Result<String, BackendError> {
        let prompt = format!("{SYSTEM_PROMPT}\n\nUser: {message}");
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(format!("{ENDPOINT}/{}:generateContent", self.model))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let parsed: GenerateResponse = read_json(response).await?;
        Ok(parsed.into_text())
    }
}
