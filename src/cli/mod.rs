//! Terminal front end
//!
//! Argument parsing, the event renderer and the interactive loop used by
//! the `persona-chat` binary.

pub mod args;
pub mod renderer;
pub mod repl;

pub use args::Args;
pub use renderer::{TerminalRenderer, format_history};
pub use repl::{Command, run};
