use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Per-actor admission control for chat requests.
///
/// Pruning the actor's window and admitting the new request must happen as one
/// atomic step per actor.
pub trait ChatRateLimiter: Send + Sync {
    /// Returns `true` and records `now` when the request is admitted.
    fn try_acquire(&self, user: UserId, now: DateTime<Utc>) -> bool;
}
