//! Common test utilities for persona-chat

pub mod fixtures;
pub mod gemini;

pub use fixtures::{TEST_API_KEY, TEST_MODEL, fast_governor, test_config, test_persona};
pub use gemini::{MockGemini, success_body};
