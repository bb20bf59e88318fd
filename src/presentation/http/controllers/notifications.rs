// src/presentation/http/controllers/notifications.rs
use crate::application::dto::{NotificationDto, NotificationListDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotificationListParams {
    pub limit: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    params(NotificationListParams),
    responses((status = 200, body = NotificationListDto)),
    tag = "Notifications"
)]
pub async fn list_notifications(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<NotificationListParams>,
) -> HttpResult<Json<NotificationListDto>> {
    let list = state
        .services
        .notification_queries
        .list_notifications(&user, params.limit)
        .await
        .into_http()?;
    Ok(Json(list))
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    params(("id" = i64, Path)),
    responses(
        (status = 200, body = NotificationDto),
        (status = 404, body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notifications"
)]
pub async fn mark_read(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<NotificationDto>> {
    let notification = state
        .services
        .notification_commands
        .mark_read(&user, id)
        .await
        .into_http()?;
    Ok(Json(notification))
}
