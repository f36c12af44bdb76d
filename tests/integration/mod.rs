//! Integration tests for persona-chat
//!
//! These tests run the public API against a local mock endpoint.

pub mod config_tests;
pub mod gemini_transport_tests;
pub mod session_tests;
