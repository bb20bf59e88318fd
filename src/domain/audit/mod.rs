pub mod entity;
pub mod repository;

pub use entity::{AuditEntry, AuditRecord, NewAuditEntry};
pub use repository::AuditLogRepository;
