//! Chat transport trait

use async_trait::async_trait;

use crate::core::conversation::Turn;
use crate::core::providers::unified_provider::ProviderError;

/// Everything a transport needs to ask for the next reply
#[derive(Debug, Clone, Copy)]
pub struct ChatContext<'a> {
    /// Persona system text
    pub system_text: &'a str,
    /// Completed exchanges so far
    pub history: &'a [Turn],
    /// The new user message
    pub message: &'a str,
}

/// A successful response
///
/// `text` is `None` when the endpoint answered 2xx but the reply field was
/// missing, empty or unparseable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    pub text: Option<String>,
}

impl ChatReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn missing() -> Self {
        Self { text: None }
    }
}

/// One outbound call to a generative-language endpoint
///
/// Implementations classify failures into [`ProviderError`] variants; the
/// session decides what to retry from that classification.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Perform a single call, no retries
    async fn send(&self, context: &ChatContext<'_>) -> Result<ChatReply, ProviderError>;
}
