// src/presentation/http/controllers/chat.rs
use crate::application::dto::{ChatExchangeDto, ChatReplyDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatMessageRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatEnabledResponse {
    pub enabled: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/chat/messages",
    request_body = ChatMessageRequest,
    responses(
        (status = 200, body = ChatReplyDto),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 403, body = crate::presentation::http::error::ErrorResponse),
        (status = 429, body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn send_message(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ChatMessageRequest>,
) -> HttpResult<Json<ChatReplyDto>> {
    let reply = state
        .services
        .chat_router
        .handle_message(&user, &payload.message)
        .await
        .into_http()?;
    Ok(Json(reply))
}

#[utoipa::path(
    get,
    path = "/api/v1/chat/history",
    responses((status = 200, body = [ChatExchangeDto])),
    tag = "Chat"
)]
pub async fn chat_history(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ChatExchangeDto>>> {
    let history = state
        .services
        .chat_queries
        .history(&user)
        .await
        .into_http()?;
    Ok(Json(history))
}

#[utoipa::path(
    get,
    path = "/api/v1/chat/enabled",
    responses((status = 200, body = ChatEnabledResponse)),
    tag = "Chat"
)]
pub async fn chat_enabled(Extension(state): Extension<HttpState>) -> Json<ChatEnabledResponse> {
    Json(ChatEnabledResponse {
        enabled: state.services.chat_router.is_enabled(),
    })
}
