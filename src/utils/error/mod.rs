//! Error handling utilities

pub mod error;

// Re-export commonly used types
pub use error::*;
