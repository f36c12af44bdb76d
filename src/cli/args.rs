//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

use crate::utils::logging::LogFormat;

/// Chat with a configured persona from the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "persona-chat", version, about)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(
        short,
        long,
        env = "PERSONA_CHAT_CONFIG",
        default_value = "config/chat.yaml"
    )]
    pub config: PathBuf,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "PERSONA_CHAT_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Send a single message, print the outcome and exit
    #[arg(short, long)]
    pub message: Option<String>,
}

impl Args {
    pub fn log_format(&self) -> LogFormat {
        if self.json_logs {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}
