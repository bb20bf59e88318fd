// src/application/commands/tickets/locks.rs
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::ticket::TicketId;

/// In-process mutual exclusion per ticket. Distinct tickets never contend.
#[derive(Default)]
pub struct TicketLocks {
    slots: DashMap<TicketId, Arc<Mutex<()>>>,
}

impl TicketLocks {
    pub async fn acquire(&self, id: TicketId) -> TicketGuard<'_> {
        let slot = Arc::clone(self.slots.entry(id).or_default().value());
        let guard = slot.lock_owned().await;
        TicketGuard {
            locks: self,
            id,
            guard: Some(guard),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.len()
    }
}

pub struct TicketGuard<'a> {
    locks: &'a TicketLocks,
    id: TicketId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for TicketGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Waiters hold their own clone of the slot, so it survives until the last one leaves.
        self.locks
            .slots
            .remove_if(&self.id, |_, slot| Arc::strong_count(slot) == 1);
    }
}
