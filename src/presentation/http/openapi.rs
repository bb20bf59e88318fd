// src/presentation/http/openapi.rs
use crate::application::dto::{
    AuditEntryDto, ChatExchangeDto, ChatReplyDto, ImageAttachmentDto, NotificationDto,
    NotificationListDto, TicketDto, TicketSummaryDto,
};
use crate::domain::{
    chat::ChatBackend,
    ticket::{Category, Priority, TicketStatus},
};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::tickets::list_tickets,
        crate::presentation::http::controllers::tickets::create_ticket,
        crate::presentation::http::controllers::tickets::ticket_summary,
        crate::presentation::http::controllers::tickets::get_ticket,
        crate::presentation::http::controllers::tickets::assign_ticket,
        crate::presentation::http::controllers::tickets::update_status,
        crate::presentation::http::controllers::tickets::ticket_history,
        crate::presentation::http::controllers::notifications::list_notifications,
        crate::presentation::http::controllers::notifications::mark_read,
        crate::presentation::http::controllers::chat::send_message,
        crate::presentation::http::controllers::chat::chat_history,
        crate::presentation::http::controllers::chat::chat_enabled,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::tickets::CreateTicketRequest,
            crate::presentation::http::controllers::tickets::ImageUploadRequest,
            crate::presentation::http::controllers::tickets::AssignTicketRequest,
            crate::presentation::http::controllers::tickets::UpdateStatusRequest,
            crate::presentation::http::controllers::chat::ChatMessageRequest,
            crate::presentation::http::controllers::chat::ChatEnabledResponse,
            TicketDto,
            ImageAttachmentDto,
            TicketSummaryDto,
            AuditEntryDto,
            NotificationDto,
            NotificationListDto,
            ChatReplyDto,
            ChatExchangeDto,
            ChatBackend,
            Category,
            Priority,
            TicketStatus
        )
    ),
    tags(
        (name = "Tickets", description = "Facilities issue lifecycle"),
        (name = "Notifications", description = "In-app notification inbox"),
        (name = "Chat", description = "Campus assistant"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "CampusCare API",
        description = "Campus facilities issue tracker",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        servers.push(Server::new(url));
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
