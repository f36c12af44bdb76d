//! Core functionality for the chat widget
//!
//! Admission control, retry, conversation state and the send pipeline
//! that ties them to a transport.

pub mod conversation;
pub mod governor;
pub mod persona;
pub mod providers;
pub mod retry;
pub mod session;
pub mod traits;
