//! Governor result types

use std::time::Duration;

/// Round a duration up to whole seconds; any non-zero duration is at least 1
pub fn whole_seconds(duration: Duration) -> u64 {
    duration.as_nanos().div_ceil(1_000_000_000) as u64
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Why a send was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialCause {
    /// The endpoint throttled us and the window has not expired
    RateLimited,
    /// The previous send was less than the minimum interval ago
    TooSoon,
}

/// A refused send and how long to wait before the next attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    pub cause: DenialCause,
    pub wait: Duration,
}

impl Denial {
    /// Countdown in whole seconds, rounded up
    pub fn wait_secs(&self) -> u64 {
        whole_seconds(self.wait)
    }

    /// User-facing explanation
    pub fn message(&self) -> String {
        let secs = self.wait_secs();
        match self.cause {
            DenialCause::RateLimited => format!(
                "Rate limit: Please wait {} second{} before trying again.",
                secs,
                plural(secs)
            ),
            DenialCause::TooSoon => format!(
                "Please wait {} second{} before sending another message.",
                secs,
                plural(secs)
            ),
        }
    }
}

/// Admission control decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Allowed,
    Denied(Denial),
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allowed)
    }

    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Admission::Allowed => None,
            Admission::Denied(denial) => Some(denial),
        }
    }

    /// User-facing reason, only present on denial
    pub fn reason(&self) -> Option<String> {
        self.denial().map(Denial::message)
    }
}

/// Read-only snapshot for UI send controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernorStatus {
    Ready,
    CoolingDown { remaining: Duration },
    RateLimited { remaining: Duration },
}

impl GovernorStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, GovernorStatus::Ready)
    }

    /// Whole seconds until a send may be admitted
    pub fn remaining_secs(&self) -> u64 {
        match self {
            GovernorStatus::Ready => 0,
            GovernorStatus::CoolingDown { remaining }
            | GovernorStatus::RateLimited { remaining } => whole_seconds(*remaining),
        }
    }
}

impl std::fmt::Display for GovernorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GovernorStatus::Ready => write!(f, "Send"),
            GovernorStatus::CoolingDown { .. } | GovernorStatus::RateLimited { .. } => {
                write!(f, "Wait {}s", self.remaining_secs())
            }
        }
    }
}
