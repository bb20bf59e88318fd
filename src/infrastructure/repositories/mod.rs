// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_audit_log;
mod postgres_chat;
mod postgres_notification;
mod postgres_ticket;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_audit_log::PostgresAuditLogRepository;
pub use postgres_chat::{PostgresChatExchangeRepository, PostgresFaqRepository};
pub use postgres_notification::PostgresNotificationRepository;
pub use postgres_ticket::{PostgresTicketReadRepository, PostgresTicketWriteRepository};
pub use postgres_user::PostgresUserRepository;
