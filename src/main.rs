//! persona-chat - terminal chat with a configured persona

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use persona_chat::cli::{self, Args, TerminalRenderer};
use persona_chat::utils::logging::init_tracing;
use persona_chat::{ChatSession, Config, GeminiClient};
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_format());

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = Config::from_file(&args.config)
        .await
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    let client = GeminiClient::new(config.gemini.clone()).context("Failed to create client")?;
    info!(model = %config.gemini.model, "Gemini client ready");

    let renderer = TerminalRenderer::new(config.persona.name.clone());
    let mut session = ChatSession::from_config(client, &config).with_observer(renderer);

    if let Some(message) = args.message {
        let outcome = session.submit(&message).await;
        return Ok(if outcome.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    cli::run(&mut session, BufReader::new(tokio::io::stdin())).await?;
    Ok(ExitCode::SUCCESS)
}
