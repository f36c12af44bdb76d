//! Google Gemini Provider
//!
//! Chat transport for the Google AI Studio `generateContent` endpoint.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::{GeminiError, GeminiErrorMapper};
pub use models::{GenerateContentRequest, GenerateContentResponse};
