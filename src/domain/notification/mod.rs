pub mod entity;
pub mod repository;

pub use entity::{NewNotification, Notification};
pub use repository::NotificationRepository;
