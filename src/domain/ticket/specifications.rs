use crate::domain::ticket::entity::Ticket;
use crate::domain::user::{Role, UserId};

pub struct CanViewTicketSpec<'a> {
    role: Role,
    user_id: UserId,
    ticket: &'a Ticket,
}

impl<'a> CanViewTicketSpec<'a> {
    pub const fn new(role: Role, user_id: UserId, ticket: &'a Ticket) -> Self {
        Self {
            role,
            user_id,
            ticket,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.role.is_admin()
            || self.ticket.reporter_id == self.user_id
            || (self.role.is_maintenance()
                && self
                    .ticket
                    .assignee_id
                    .is_none_or(|assignee| assignee == self.user_id))
    }
}

pub struct CanAssignTicketSpec {
    role: Role,
}

impl CanAssignTicketSpec {
    pub const fn new(role: Role) -> Self {
        Self { role }
    }

    pub const fn is_satisfied(&self) -> bool {
        self.role.is_admin()
    }
}

pub struct CanUpdateStatusSpec<'a> {
    role: Role,
    user_id: UserId,
    ticket: &'a Ticket,
}

impl<'a> CanUpdateStatusSpec<'a> {
    pub const fn new(role: Role, user_id: UserId, ticket: &'a Ticket) -> Self {
        Self {
            role,
            user_id,
            ticket,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.role.is_admin()
            || (self.role.is_maintenance() && self.ticket.assignee_id == Some(self.user_id))
    }
}

/// The slice of tickets an actor is allowed to browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketScope {
    All,
    AssignedToOrUnassigned(UserId),
    ReportedBy(UserId),
}

impl TicketScope {
    pub const fn for_actor(role: Role, user_id: UserId) -> Self {
        match role {
            Role::Admin => Self::All,
            Role::Maintenance => Self::AssignedToOrUnassigned(user_id),
            Role::Student => Self::ReportedBy(user_id),
        }
    }

    pub fn contains(&self, ticket: &Ticket) -> bool {
        match self {
            Self::All => true,
            Self::AssignedToOrUnassigned(user_id) => {
                ticket.assignee_id.is_none_or(|assignee| assignee == *user_id)
            }
            Self::ReportedBy(user_id) => ticket.reporter_id == *user_id,
        }
    }
}
