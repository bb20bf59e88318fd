pub mod classifier;
pub mod entity;
pub mod faq;
pub mod repository;
pub mod services;

pub use classifier::{Intent, detect_intent, suggest_category};
pub use entity::{ChatBackend, ChatExchange, NewChatExchange};
pub use faq::FaqEntry;
pub use repository::{ChatExchangeRepository, FaqRepository};
pub use services::RuleBasedResponder;
