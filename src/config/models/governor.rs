//! Request governor configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Admission and retry settings for outbound chat requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GovernorConfig {
    /// Minimum spacing between two admitted sends
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
    /// Total transport attempts per turn, the first call included
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the first retry; doubles for each later retry
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: default_min_interval_ms(),
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

impl GovernorConfig {
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }
}
