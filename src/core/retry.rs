//! Bounded retry with exponential backoff
//!
//! Each transport attempt is classified into an [`AttemptOutcome`]; the
//! driver retries only `Retryable` outcomes and stops at the first
//! `Success` or `Terminal` one.

use crate::config::models::GovernorConfig;
use crate::core::providers::unified_provider::ProviderError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Tagged result of a single transport attempt
#[derive(Debug)]
pub enum AttemptOutcome<T> {
    Success(T),
    /// Server or network failure, worth another attempt
    Retryable(ProviderError),
    /// Throttling or client failure, retrying cannot help
    Terminal(ProviderError),
}

impl<T> From<Result<T, ProviderError>> for AttemptOutcome<T> {
    fn from(result: Result<T, ProviderError>) -> Self {
        match result {
            Ok(value) => AttemptOutcome::Success(value),
            Err(err) if err.is_retryable() => AttemptOutcome::Retryable(err),
            Err(err) => AttemptOutcome::Terminal(err),
        }
    }
}

/// Final result of a retried operation
#[derive(Debug)]
pub struct RetryReport<T> {
    pub result: Result<T, ProviderError>,
    /// Transport calls made, the first one included
    pub attempts: u32,
}

impl<T> RetryReport<T> {
    /// Number of calls made after the first one
    pub fn retries(&self) -> u32 {
        self.attempts.saturating_sub(1)
    }
}

/// Retry policy: `max_attempts` total calls, delay before retry *k* is
/// `base_delay * 2^(k-1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn from_config(config: &GovernorConfig) -> Self {
        Self::new(config.max_attempts, config.base_delay())
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Delay before retry `retry` (1-indexed)
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(31);
        self.base_delay.saturating_mul(1u32 << exponent)
    }

    /// Run `operation` until it succeeds, fails terminally, or attempts run out
    ///
    /// `operation` receives the 1-indexed attempt number. Backoff waits on
    /// `tokio::time::sleep` so other tasks keep running.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> RetryReport<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = AttemptOutcome<T>>,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt).await {
                AttemptOutcome::Success(value) => {
                    if attempt > 1 {
                        debug!("Retry succeeded on attempt {}", attempt);
                    }
                    return RetryReport {
                        result: Ok(value),
                        attempts: attempt,
                    };
                }
                AttemptOutcome::Terminal(err) => {
                    debug!("Attempt {} failed terminally: {}", attempt, err);
                    return RetryReport {
                        result: Err(err),
                        attempts: attempt,
                    };
                }
                AttemptOutcome::Retryable(err) => {
                    if attempt >= self.max_attempts {
                        warn!("Giving up after {} attempts: {}", attempt, err);
                        return RetryReport {
                            result: Err(err),
                            attempts: attempt,
                        };
                    }

                    let delay = self.delay_for_retry(attempt);
                    warn!(
                        "Attempt {}/{} failed: {}, retrying in {:?}",
                        attempt, self.max_attempts, err, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&GovernorConfig::default())
    }
}
