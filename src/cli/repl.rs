//! Interactive chat loop

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::core::session::ChatSession;
use crate::core::traits::ChatTransport;
use crate::utils::error::Result;

use super::renderer::format_history;

pub const HELP_TEXT: &str = "Commands: /status, /history, /help, /quit";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Message(String),
    Status,
    History,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "/quit" | "/exit" => Command::Quit,
            "/status" => Command::Status,
            "/history" => Command::History,
            "/help" => Command::Help,
            other if other.starts_with('/') => Command::Unknown(other.to_string()),
            other => Command::Message(other.to_string()),
        }
    }
}

/// Read lines from `input` and drive `session` until `/quit` or end of input
pub async fn run<T, R>(session: &mut ChatSession<T>, input: R) -> Result<()>
where
    T: ChatTransport,
    R: AsyncBufRead + Unpin,
{
    println!("Chatting with {}. {}", session.persona().name(), HELP_TEXT);
    let mut lines = input.lines();

    loop {
        print!("[{}] > ", session.status());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{}", HELP_TEXT),
            Command::Status => println!("{}", status_line(session)),
            Command::History => {
                println!("{}", format_history(session.log(), session.persona().name()))
            }
            Command::Unknown(command) => {
                println!("Unknown command {}. {}", command, HELP_TEXT)
            }
            Command::Message(message) => {
                // The renderer observer prints the outcome
                let outcome = session.submit(&message).await;
                debug!(outcome = %outcome.kind(), "Turn rendered");
            }
        }
    }

    Ok(())
}

fn status_line<T: ChatTransport>(session: &ChatSession<T>) -> String {
    let status = session.status();
    if status.is_ready() {
        "Ready to send.".to_string()
    } else {
        format!("Next send in {}s.", status.remaining_secs())
    }
}
