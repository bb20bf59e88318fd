pub mod audit;
pub mod auth;
pub mod chat;
pub mod notifications;
pub mod tickets;

pub use audit::AuditEntryDto;
pub use auth::AuthenticatedUser;
pub use chat::{ChatExchangeDto, ChatReplyDto};
pub use notifications::{NotificationDto, NotificationListDto};
pub use tickets::{ImageAttachmentDto, TicketDto, TicketSummaryDto};
