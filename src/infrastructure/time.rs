use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock backed by the host's UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
