// src/application/commands/tickets/mod.rs
mod assign;
mod create;
mod locks;
mod service;
mod status;

pub use assign::AssignTicketCommand;
pub use create::{CreateTicketCommand, ImageUpload};
pub use service::TicketCommandService;
pub use status::UpdateStatusCommand;
