//! Error handling for the chat client
//!
//! Setup paths (configuration, client construction) return [`ChatError`].
//! Per-turn transport failures use [`ProviderError`] and never escape a turn.

use crate::core::providers::unified_provider::ProviderError;
use thiserror::Error;

/// Result type alias for the chat client
pub type Result<T> = std::result::Result<T, ChatError>;

/// Main error type for the chat client
#[derive(Error, Debug)]
pub enum ChatError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Provider errors
    #[error("Provider error: {0}")]
    Provider(ProviderError),
}

impl From<ProviderError> for ChatError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration { message, .. } => ChatError::Config(message),
            other => ChatError::Provider(other),
        }
    }
}
