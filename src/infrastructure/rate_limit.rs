// src/infrastructure/rate_limit.rs
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::{application::ports::rate_limit::ChatRateLimiter, domain::user::UserId};

/// Actors whose newest request left the window are dropped once per this many calls.
const SWEEP_EVERY: u64 = 256;

/// Sliding-window limiter keyed by actor.
///
/// The dashmap entry guard is held across prune-and-admit, so concurrent
/// requests from one actor are serialized while other actors proceed.
pub struct SlidingWindowRateLimiter {
    max_requests: usize,
    window: Duration,
    windows: DashMap<UserId, VecDeque<DateTime<Utc>>>,
    calls: AtomicU64,
}

impl SlidingWindowRateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: DashMap::new(),
            calls: AtomicU64::new(0),
        }
    }

    /// Forget actors with no request inside the window as of `now`.
    pub fn evict_idle(&self, now: DateTime<Utc>) {
        self.windows.retain(|_, stamps| {
            stamps
                .back()
                .is_some_and(|&newest| now - newest < self.window)
        });
    }

    pub fn tracked_actors(&self) -> usize {
        self.windows.len()
    }
}

impl ChatRateLimiter for SlidingWindowRateLimiter {
    fn try_acquire(&self, user: UserId, now: DateTime<Utc>) -> bool {
        // Must run before taking the entry guard below; retain locks every shard.
        if (self.calls.fetch_add(1, Ordering::Relaxed) + 1) % SWEEP_EVERY == 0 {
            self.evict_idle(now);
        }

        let mut stamps = self.windows.entry(user).or_default();
        while stamps
            .front()
            .is_some_and(|&oldest| now - oldest >= self.window)
        {
            stamps.pop_front();
        }
        if stamps.len() >= self.max_requests {
            return false;
        }
        stamps.push_back(now);
        true
    }
}
