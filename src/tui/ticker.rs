//! Fixed-interval tick scheduler for the event loop.

use std::time::{Duration, Instant};

/// Tick length of the countdown.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Emits one tick per elapsed interval at a constant cadence.
///
/// Deadlines advance by exactly one interval per tick, so a slow frame
/// delays ticks but never drops or merges them.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// First tick fires one `interval` after `now`.
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    /// How long the loop may wait for input before the next tick is due.
    #[must_use]
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Number of ticks that have come due by `now`, advancing the schedule.
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut count = 0;
        while now >= self.next {
            count += 1;
            self.next += self.interval;
        }
        count
    }
}
