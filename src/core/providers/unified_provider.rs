//! Unified Provider Error Handling
//!
//! Single error type for everything a chat transport can report back.
//!
//! | Variant | Purpose | HTTP Status | Retryable |
//! |------|------|------------|--------|
//! | Authentication | API key rejected | 401 | No |
//! | PermissionDenied | Key lacks permission | 403 | No |
//! | RateLimit | Throttled by the endpoint | 429 | No (window is recorded instead) |
//! | InvalidRequest | Request rejected | 400 | No |
//! | ApiError | Any other status | 4xx / other | 5xx only |
//! | ProviderUnavailable | Server-side failure | 5xx | Yes |
//! | Network | Transport failure, no status | - | Yes |
//! | Timeout | Client timeout | - | Yes |
//! | Serialization | Request could not be encoded | - | No |
//! | Configuration | Bad client setup | - | No |
//!
//! Throttling is deliberately not retryable: the session records a
//! rate-limit window and refuses new sends until it expires.

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Permission denied for {provider}: {message}")]
    PermissionDenied {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        /// Server-provided hint in seconds
        retry_after: Option<u64>,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Provider {provider} is unavailable (status {status}): {message}")]
    ProviderUnavailable {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Serialization error for {provider}: {message}")]
    Serialization {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create authentication error
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create permission denied error
    pub fn permission_denied(provider: &'static str, message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            provider,
            message: message.into(),
        }
    }

    /// Create rate limit error
    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            provider,
            message: match retry_after {
                Some(seconds) => format!("Rate limit exceeded. Retry after {} seconds", seconds),
                None => "Rate limit exceeded".to_string(),
            },
            retry_after,
        }
    }

    /// Create invalid request error
    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create provider unavailable error for a 5xx status
    pub fn provider_unavailable(
        provider: &'static str,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::ProviderUnavailable {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Create API error with status code
    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Create serialization error
    pub fn serialization(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            provider,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Whether a bounded retry may help
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::ProviderUnavailable { .. } => true,

            Self::ApiError { status, .. } => matches!(*status, 500..=599),

            Self::RateLimit { .. }
            | Self::Authentication { .. }
            | Self::PermissionDenied { .. }
            | Self::InvalidRequest { .. }
            | Self::Serialization { .. }
            | Self::Configuration { .. } => false,
        }
    }

    /// Whether the endpoint throttled the call
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }

    /// Retry hint in seconds, if the endpoint sent one
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// HTTP status associated with the error, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::PermissionDenied { .. } => Some(403),
            Self::RateLimit { .. } => Some(429),
            Self::InvalidRequest { .. } => Some(400),
            Self::ProviderUnavailable { status, .. } | Self::ApiError { status, .. } => {
                Some(*status)
            }
            Self::Network { .. }
            | Self::Timeout { .. }
            | Self::Serialization { .. }
            | Self::Configuration { .. } => None,
        }
    }

    /// Get provider name
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::PermissionDenied { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ProviderUnavailable { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::Serialization { provider, .. }
            | Self::Configuration { provider, .. } => provider,
        }
    }
}
