//! Session clock for `touched` timestamps.

use std::sync::atomic::{AtomicI64, Ordering};

/// Millisecond clock that never reads the same instant twice.
///
/// Wraps the wall clock with an atomic high-water mark: each reading is
/// `max(wall_millis, previous + 1)`. Two calls within the same millisecond
/// still produce distinct, ordered values, which keeps `touched`
/// comparisons deterministic for back-to-back updates.
#[derive(Debug, Default)]
pub struct SessionClock {
    last: AtomicI64,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current time in milliseconds since the Unix epoch,
    /// strictly greater than every previous return value.
    pub fn now_millis(&self) -> i64 {
        let wall = chrono::Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = wall.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(observed) => prev = observed,
            }
        }
    }
}
