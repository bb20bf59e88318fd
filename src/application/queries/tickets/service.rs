use std::sync::Arc;

use crate::domain::{audit::AuditLogRepository, ticket::TicketReadRepository};

pub struct TicketQueryService {
    pub(super) read_repo: Arc<dyn TicketReadRepository>,
    pub(super) audit_repo: Arc<dyn AuditLogRepository>,
}

impl TicketQueryService {
    pub fn new(
        read_repo: Arc<dyn TicketReadRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
    ) -> Self {
        Self {
            read_repo,
            audit_repo,
        }
    }
}
