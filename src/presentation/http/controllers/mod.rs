// src/presentation/http/controllers/mod.rs
pub mod chat;
pub mod notifications;
pub mod tickets;
