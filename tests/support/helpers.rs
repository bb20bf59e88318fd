// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use campuscare_core::application::{
    commands::tickets::{AssignTicketCommand, CreateTicketCommand, UpdateStatusCommand},
    dto::{AuthenticatedUser, TicketDto},
};
use campuscare_core::domain::{
    ticket::{Category, TicketStatus},
    user::{Role, UserId},
};
use campuscare_core::presentation::http::routes::build_router_with_rate_limiter;
use serde_json::Value;

use super::builders::{TestApp, UserBuilder};
use super::mocks::InMemoryStore;

pub const STUDENT: i64 = 1;
pub const OTHER_STUDENT: i64 = 2;
pub const STAFF: i64 = 3;
pub const OTHER_STAFF: i64 = 4;
pub const ADMIN: i64 = 5;
pub const INACTIVE_STAFF: i64 = 6;
pub const MAILLESS_STUDENT: i64 = 7;

pub const STUDENT_EMAIL: &str = "user1@campus.test";
pub const STAFF_EMAIL: &str = "user3@campus.test";

pub fn seed_directory(store: &InMemoryStore) {
    store.add_user(UserBuilder::new(STUDENT, Role::Student).username("asha").build());
    store.add_user(UserBuilder::new(OTHER_STUDENT, Role::Student).build());
    store.add_user(UserBuilder::new(STAFF, Role::Maintenance).username("ravi").build());
    store.add_user(UserBuilder::new(OTHER_STAFF, Role::Maintenance).build());
    store.add_user(UserBuilder::new(ADMIN, Role::Admin).build());
    store.add_user(UserBuilder::new(INACTIVE_STAFF, Role::Maintenance).inactive().build());
    store.add_user(UserBuilder::new(MAILLESS_STUDENT, Role::Student).without_email().build());
}

pub fn actor(id: i64, role: Role) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(id).unwrap(), format!("user{id}"), role)
}

pub fn student() -> AuthenticatedUser {
    actor(STUDENT, Role::Student)
}

pub fn staff() -> AuthenticatedUser {
    actor(STAFF, Role::Maintenance)
}

pub fn admin() -> AuthenticatedUser {
    actor(ADMIN, Role::Admin)
}

pub fn leaking_tap() -> CreateTicketCommand {
    CreateTicketCommand {
        title: "Leaking tap".into(),
        description: "Tap in the second floor washroom will not stop running".into(),
        category: Some(Category::Plumbing),
        location_building: Some("Science Block".into()),
        location_room: Some("2F washroom".into()),
        ..CreateTicketCommand::default()
    }
}

/// A ticket reported by `STUDENT` and assigned to `STAFF`.
pub async fn assigned_ticket(app: &TestApp) -> TicketDto {
    let ticket = app
        .services
        .ticket_commands
        .create_ticket(&student(), leaking_tap())
        .await
        .unwrap();
    app.services
        .ticket_commands
        .assign_ticket(
            &admin(),
            AssignTicketCommand {
                id: ticket.id,
                assignee_id: Some(STAFF),
                priority: None,
            },
        )
        .await
        .unwrap()
}

pub fn status_change(id: i64, status: TicketStatus, notes: Option<&str>) -> UpdateStatusCommand {
    UpdateStatusCommand {
        id,
        status,
        notes: notes.map(str::to_string),
    }
}

pub fn make_test_router(app: &TestApp) -> axum::Router {
    build_router_with_rate_limiter(app.http_state(), false)
}

pub fn json_request(method: Method, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
