// src/presentation/http/controllers/tickets.rs
use crate::application::{
    commands::tickets::{AssignTicketCommand, CreateTicketCommand, ImageUpload, UpdateStatusCommand},
    dto::{AuditEntryDto, TicketDto, TicketSummaryDto},
    queries::tickets::ListTicketsQuery,
};
use crate::domain::ticket::{Category, Priority, TicketStatus};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TicketListParams {
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub status: Option<TicketStatus>,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ImageUploadRequest {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTicketRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub location_building: Option<String>,
    pub location_room: Option<String>,
    pub image: Option<ImageUploadRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignTicketRequest {
    pub assignee_id: Option<i64>,
    pub priority: Option<Priority>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: TicketStatus,
    pub notes: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/tickets",
    params(TicketListParams),
    responses((status = 200, body = [TicketDto])),
    tag = "Tickets"
)]
pub async fn list_tickets(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<TicketListParams>,
) -> HttpResult<Json<Vec<TicketDto>>> {
    let query = ListTicketsQuery {
        category: params.category,
        priority: params.priority,
        status: params.status,
        limit: params.limit,
    };
    let tickets = state
        .services
        .ticket_queries
        .list_tickets(&user, query)
        .await
        .into_http()?;
    Ok(Json(tickets))
}

#[utoipa::path(
    post,
    path = "/api/v1/tickets",
    request_body = CreateTicketRequest,
    responses(
        (status = 201, body = TicketDto),
        (status = 400, body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tickets"
)]
pub async fn create_ticket(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateTicketRequest>,
) -> HttpResult<(StatusCode, Json<TicketDto>)> {
    let command = CreateTicketCommand {
        title: payload.title,
        description: payload.description,
        category: payload.category,
        priority: payload.priority,
        location_building: payload.location_building,
        location_room: payload.location_room,
        image: payload.image.map(|image| ImageUpload {
            file_name: image.file_name,
            content_type: image.content_type,
            size_bytes: image.size_bytes,
        }),
    };
    let ticket = state
        .services
        .ticket_commands
        .create_ticket(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

#[utoipa::path(
    get,
    path = "/api/v1/tickets/summary",
    responses((status = 200, body = TicketSummaryDto)),
    tag = "Tickets"
)]
pub async fn ticket_summary(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<TicketSummaryDto>> {
    let summary = state
        .services
        .ticket_queries
        .ticket_summary(&user)
        .await
        .into_http()?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/v1/tickets/{id}",
    params(("id" = i64, Path)),
    responses(
        (status = 200, body = TicketDto),
        (status = 403, body = crate::presentation::http::error::ErrorResponse),
        (status = 404, body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tickets"
)]
pub async fn get_ticket(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<TicketDto>> {
    let ticket = state
        .services
        .ticket_queries
        .get_ticket(&user, id)
        .await
        .into_http()?;
    Ok(Json(ticket))
}

#[utoipa::path(
    post,
    path = "/api/v1/tickets/{id}/assign",
    params(("id" = i64, Path)),
    request_body = AssignTicketRequest,
    responses(
        (status = 200, body = TicketDto),
        (status = 403, body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tickets"
)]
pub async fn assign_ticket(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<AssignTicketRequest>,
) -> HttpResult<Json<TicketDto>> {
    let ticket = state
        .services
        .ticket_commands
        .assign_ticket(
            &user,
            AssignTicketCommand {
                id,
                assignee_id: payload.assignee_id,
                priority: payload.priority,
            },
        )
        .await
        .into_http()?;
    Ok(Json(ticket))
}

#[utoipa::path(
    post,
    path = "/api/v1/tickets/{id}/status",
    params(("id" = i64, Path)),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, body = TicketDto),
        (status = 403, body = crate::presentation::http::error::ErrorResponse),
        (status = 422, body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Tickets"
)]
pub async fn update_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> HttpResult<Json<TicketDto>> {
    let ticket = state
        .services
        .ticket_commands
        .update_status(
            &user,
            UpdateStatusCommand {
                id,
                status: payload.status,
                notes: payload.notes,
            },
        )
        .await
        .into_http()?;
    Ok(Json(ticket))
}

#[utoipa::path(
    get,
    path = "/api/v1/tickets/{id}/history",
    params(("id" = i64, Path)),
    responses((status = 200, body = [AuditEntryDto])),
    tag = "Tickets"
)]
pub async fn ticket_history(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<AuditEntryDto>>> {
    let history = state
        .services
        .ticket_queries
        .ticket_history(&user, id)
        .await
        .into_http()?;
    Ok(Json(history))
}
