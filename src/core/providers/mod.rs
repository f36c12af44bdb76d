//! Provider implementations
//!
//! Each provider implements [`ChatTransport`](crate::core::traits::ChatTransport)
//! and reports failures as [`ProviderError`].

pub mod gemini;
pub mod unified_provider;

pub use gemini::{GeminiClient, GeminiConfig};
pub use unified_provider::ProviderError;
