//! Minimum spacing between outbound requests

use std::time::Duration;
use tokio::time::Instant;

/// Tracks when the last outbound request was admitted
#[derive(Debug, Clone)]
pub struct RequestClock {
    last_request: Option<Instant>,
    min_interval: Duration,
}

impl RequestClock {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_request: None,
            min_interval,
        }
    }

    /// Record an admitted send at `now`
    pub fn stamp(&mut self, now: Instant) {
        self.last_request = Some(now);
    }

    pub fn last_request(&self) -> Option<Instant> {
        self.last_request
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Time left before the interval has elapsed, `None` once it has
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let last = self.last_request?;
        let elapsed = now.saturating_duration_since(last);
        self.min_interval.checked_sub(elapsed).filter(|d| !d.is_zero())
    }
}
