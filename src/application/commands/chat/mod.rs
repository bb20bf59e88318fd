// src/application/commands/chat/mod.rs
mod router;

pub use router::{ChatSettings, ResponseRouter};
