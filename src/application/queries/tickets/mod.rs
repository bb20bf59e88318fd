mod get_by_id;
mod history;
mod list;
mod service;

pub use list::ListTicketsQuery;
pub use service::TicketQueryService;
