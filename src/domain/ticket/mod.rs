pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{AssignmentUpdate, NewTicket, StatusCounts, Ticket, TicketTransition};
pub use repository::{TicketFilter, TicketReadRepository, TicketWriteRepository};
pub use specifications::TicketScope;
pub use value_objects::{
    Category, ImageAttachment, Location, Priority, TicketDescription, TicketId, TicketStatus,
    TicketTitle,
};
