//! Core traits module
//!
//! The two seams of a chat session: the outbound transport and the UI
//! observers that render turn events.

pub mod observer;
pub mod transport;

pub use observer::*;
pub use transport::*;
