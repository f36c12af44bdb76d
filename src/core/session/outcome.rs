//! Terminal outcomes of a chat turn

use std::time::Duration;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::TurnEvent;

/// Canned reply used when a 2xx response carries no usable text
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble processing that right now. Could you please rephrase your question?";

pub const EMPTY_MESSAGE: &str = "Please type a message before sending.";
pub const INVALID_REQUEST_MESSAGE: &str =
    "Invalid request. Please check your message and try again.";
pub const UNAUTHENTICATED_MESSAGE: &str =
    "Authentication error. Please check the API key configuration.";
pub const FORBIDDEN_MESSAGE: &str =
    "Access forbidden. The API key may not have the required permissions.";
pub const CLIENT_ERROR_MESSAGE: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";
pub const SERVER_ERROR_MESSAGE: &str =
    "Server error. The API is temporarily unavailable. Please try again in a few moments.";
pub const NETWORK_ERROR_MESSAGE: &str = "The chat service is temporarily unavailable. Please check your connection and try again later.";

/// Message shown when the endpoint throttled the turn
pub fn rate_limited_message(seconds: u64) -> String {
    format!(
        "Too many requests! The API is rate-limited. Please wait {} seconds before trying again.",
        seconds
    )
}

/// Discriminant of [`TurnOutcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Succeeded,
    Rejected,
    RateLimited,
    ServerError,
    ClientError,
    NetworkError,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Succeeded => "succeeded",
            OutcomeKind::Rejected => "rejected",
            OutcomeKind::RateLimited => "rate_limited",
            OutcomeKind::ServerError => "server_error",
            OutcomeKind::ClientError => "client_error",
            OutcomeKind::NetworkError => "network_error",
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which client-side failure ended the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    /// HTTP 400
    InvalidRequest,
    /// HTTP 401
    Unauthenticated,
    /// HTTP 403
    Forbidden,
    /// Any other non-retryable failure; `None` when no status was involved
    Other { status: Option<u16> },
}

impl ClientErrorKind {
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientErrorKind::InvalidRequest => INVALID_REQUEST_MESSAGE,
            ClientErrorKind::Unauthenticated => UNAUTHENTICATED_MESSAGE,
            ClientErrorKind::Forbidden => FORBIDDEN_MESSAGE,
            ClientErrorKind::Other { .. } => CLIENT_ERROR_MESSAGE,
        }
    }
}

/// How a turn ended; always renderable, never a raw technical error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Succeeded {
        text: String,
        /// `true` when `text` is [`FALLBACK_REPLY`]
        fallback: bool,
    },
    Rejected {
        user_message: String,
    },
    RateLimited {
        user_message: String,
        retry_after: Duration,
    },
    ServerError {
        user_message: String,
    },
    ClientError {
        kind: ClientErrorKind,
        user_message: String,
    },
    NetworkError {
        user_message: String,
    },
}

impl TurnOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            TurnOutcome::Succeeded { .. } => OutcomeKind::Succeeded,
            TurnOutcome::Rejected { .. } => OutcomeKind::Rejected,
            TurnOutcome::RateLimited { .. } => OutcomeKind::RateLimited,
            TurnOutcome::ServerError { .. } => OutcomeKind::ServerError,
            TurnOutcome::ClientError { .. } => OutcomeKind::ClientError,
            TurnOutcome::NetworkError { .. } => OutcomeKind::NetworkError,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TurnOutcome::Succeeded { .. })
    }

    /// Reply text on success, the user-facing message otherwise
    pub fn text(&self) -> &str {
        match self {
            TurnOutcome::Succeeded { text, .. } => text,
            TurnOutcome::Rejected { user_message }
            | TurnOutcome::RateLimited { user_message, .. }
            | TurnOutcome::ServerError { user_message }
            | TurnOutcome::ClientError { user_message, .. }
            | TurnOutcome::NetworkError { user_message } => user_message,
        }
    }

    pub(crate) fn rejected(user_message: impl Into<String>) -> Self {
        TurnOutcome::Rejected {
            user_message: user_message.into(),
        }
    }

    /// Classify a non-throttling transport failure
    pub(crate) fn from_failure(err: &ProviderError) -> Self {
        let client = |kind: ClientErrorKind| TurnOutcome::ClientError {
            kind,
            user_message: kind.user_message().to_string(),
        };

        match err {
            ProviderError::ProviderUnavailable { .. } => TurnOutcome::ServerError {
                user_message: SERVER_ERROR_MESSAGE.to_string(),
            },
            ProviderError::ApiError { status, .. } if (500..=599).contains(status) => {
                TurnOutcome::ServerError {
                    user_message: SERVER_ERROR_MESSAGE.to_string(),
                }
            }
            ProviderError::Network { .. } | ProviderError::Timeout { .. } => {
                TurnOutcome::NetworkError {
                    user_message: NETWORK_ERROR_MESSAGE.to_string(),
                }
            }
            ProviderError::InvalidRequest { .. } => client(ClientErrorKind::InvalidRequest),
            ProviderError::Authentication { .. } => client(ClientErrorKind::Unauthenticated),
            ProviderError::PermissionDenied { .. } => client(ClientErrorKind::Forbidden),
            ProviderError::ApiError { status, .. } => client(ClientErrorKind::Other {
                status: Some(*status),
            }),
            ProviderError::RateLimit { .. } => client(ClientErrorKind::Other { status: Some(429) }),
            ProviderError::Serialization { .. } | ProviderError::Configuration { .. } => {
                client(ClientErrorKind::Other { status: None })
            }
        }
    }

    /// Observer notification for this outcome
    pub fn to_event(&self) -> TurnEvent {
        match self {
            TurnOutcome::Succeeded { text, .. } => TurnEvent::Succeeded { text: text.clone() },
            TurnOutcome::Rejected { user_message } => TurnEvent::Rejected {
                user_message: user_message.clone(),
            },
            other => TurnEvent::Failed {
                kind: other.kind(),
                user_message: other.text().to_string(),
            },
        }
    }
}
