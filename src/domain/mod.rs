pub mod audit;
pub mod chat;
pub mod errors;
pub mod notification;
pub mod ticket;
pub mod user;
