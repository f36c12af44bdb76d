//! Chat Request Governor
//!
//! Admission control for outbound chat requests. Two pieces of state are
//! consulted on every send: the [`RequestClock`] enforcing a minimum spacing
//! between sends, and the [`RateLimitWindow`] recorded when the endpoint
//! answers with HTTP 429. The window check always runs first.

mod clock;
mod types;
mod window;


pub use clock::RequestClock;
pub use types::{Admission, Denial, DenialCause, GovernorStatus, whole_seconds};
pub use window::{MAX_WINDOW, RateLimitWindow};

use crate::config::models::GovernorConfig;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Owns the request clock and the rate-limit window of one chat session
#[derive(Debug, Clone)]
pub struct Governor {
    clock: RequestClock,
    window: RateLimitWindow,
}

impl Governor {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            clock: RequestClock::new(min_interval),
            window: RateLimitWindow::new(),
        }
    }

    pub fn from_config(config: &GovernorConfig) -> Self {
        Self::new(config.min_interval())
    }

    pub fn clock(&self) -> &RequestClock {
        &self.clock
    }

    pub fn window(&self) -> &RateLimitWindow {
        &self.window
    }

    /// Decide whether a send may proceed at `now`
    ///
    /// The only mutation is clearing an expired rate-limit window, which is
    /// idempotent. The request clock is never touched.
    pub fn can_send(&mut self, now: Instant) -> Admission {
        if let Some(wait) = self.window.remaining(now) {
            return Admission::Denied(Denial {
                cause: DenialCause::RateLimited,
                wait,
            });
        }

        if self.window.expire_if_due(now) {
            debug!("Rate limit window expired");
        }

        if let Some(wait) = self.clock.remaining(now) {
            return Admission::Denied(Denial {
                cause: DenialCause::TooSoon,
                wait,
            });
        }

        Admission::Allowed
    }

    /// Admission check that stamps the clock when the send is allowed
    ///
    /// The stamp happens before any network call so that a burst of
    /// submissions cannot all pass while one call is outstanding.
    pub fn try_admit(&mut self, now: Instant) -> Admission {
        let admission = self.can_send(now);
        if admission.is_allowed() {
            self.clock.stamp(now);
        }
        admission
    }

    /// Record a throttling response observed at `now`
    ///
    /// A non-zero `hint` sets the window length, capped at [`MAX_WINDOW`].
    /// Otherwise the window lasts the minimum interval, rounded up to whole
    /// seconds. Returns the window length applied.
    pub fn record_throttle(&mut self, now: Instant, hint: Option<Duration>) -> Duration {
        let requested = hint
            .filter(|d| !d.is_zero())
            .unwrap_or_else(|| self.fallback_window());
        let applied = self.window.limit_for(now, requested);
        if applied < requested {
            warn!(
                "Throttle hint of {}s capped at {}s",
                whole_seconds(requested),
                whole_seconds(applied)
            );
        }
        warn!(
            "Endpoint throttled requests, blocking sends for {}s",
            whole_seconds(applied)
        );
        applied
    }

    fn fallback_window(&self) -> Duration {
        Duration::from_secs(whole_seconds(self.clock.min_interval()).max(1))
    }

    /// Read-only status for UI send controls
    pub fn status(&self, now: Instant) -> GovernorStatus {
        if let Some(remaining) = self.window.remaining(now) {
            return GovernorStatus::RateLimited { remaining };
        }
        match self.clock.remaining(now) {
            Some(remaining) => GovernorStatus::CoolingDown { remaining },
            None => GovernorStatus::Ready,
        }
    }
}

impl Default for Governor {
    fn default() -> Self {
        Self::from_config(&GovernorConfig::default())
    }
}
