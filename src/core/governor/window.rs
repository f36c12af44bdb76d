//! Server-declared rate-limit window

use std::time::Duration;
use tokio::time::Instant;

/// Longest window a throttling response can open
pub const MAX_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Set when the endpoint throttles us, cleared lazily once `reset_at` passes
#[derive(Debug, Clone, Default)]
pub struct RateLimitWindow {
    reset_at: Option<Instant>,
}

impl RateLimitWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_limited(&self) -> bool {
        self.reset_at.is_some()
    }

    pub fn reset_at(&self) -> Option<Instant> {
        self.reset_at
    }

    /// Start a window of `duration` from `now`, capped at [`MAX_WINDOW`]
    ///
    /// `duration` must be non-zero so that `reset_at` lies in the future.
    /// Returns the length actually applied.
    pub fn limit_for(&mut self, now: Instant, duration: Duration) -> Duration {
        debug_assert!(!duration.is_zero());
        let duration = duration.min(MAX_WINDOW);
        self.reset_at = Some(now + duration);
        duration
    }

    /// Time left in an active window, `None` if not limited or already due
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let reset_at = self.reset_at?;
        (now < reset_at).then(|| reset_at - now)
    }

    /// Clear the window if `now` has reached `reset_at`; returns whether it cleared
    pub fn expire_if_due(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(reset_at) if now >= reset_at => {
                self.reset_at = None;
                true
            }
            _ => false,
        }
    }
}
