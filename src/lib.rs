//! # persona-chat
//!
//! A chat widget client that speaks as a configured persona through the
//! Gemini `generateContent` API, with client-side admission control.
//!
//! ## Features
//!
//! - **Request governor**: minimum spacing between sends plus a rate-limit
//!   window recorded from HTTP 429 responses
//! - **Bounded retry**: exponential backoff for server and network failures only
//! - **Classified outcomes**: every turn ends in a user-presentable [`TurnOutcome`]
//! - **Pluggable seams**: [`ChatTransport`] for the endpoint, [`TurnObserver`] for rendering
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use persona_chat::{ChatSession, Config, GeminiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/chat.yaml").await?;
//!     let client = GeminiClient::new(config.gemini.clone())?;
//!     let mut session = ChatSession::from_config(client, &config);
//!
//!     let outcome = session.submit("Hello!").await;
//!     println!("{}", outcome.text());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{ChatError, Result};

pub use core::conversation::{ConversationLog, Role, Turn};
pub use core::governor::{Admission, Governor, GovernorStatus};
pub use core::persona::Persona;
pub use core::providers::{GeminiClient, GeminiConfig, ProviderError};
pub use core::retry::RetryPolicy;
pub use core::session::{ChatSession, OutcomeKind, TurnOutcome};
pub use core::traits::{ChatContext, ChatReply, ChatTransport, TurnEvent, TurnObserver};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Crate description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
