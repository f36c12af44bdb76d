//! Logging setup and log sanitization

use regex::Regex;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `default_level` when it is set. Logs go to stderr so
/// they never interleave with the chat transcript on stdout.
pub fn init_tracing(default_level: &str, format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    // A second init (tests, embedding) is not an error worth surfacing.
    let _ = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

fn api_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)((?:[?&]key|api[_-]?key)\s*[=:]\s*)[^&\s)'\x22]+")
            .unwrap_or_else(|e| panic!("invalid api key pattern: {}", e))
    })
}

/// Redact API key values from URLs and messages before they are logged
pub fn redact_api_key(input: &str) -> String {
    api_key_pattern()
        .replace_all(input, "${1}***REDACTED***")
        .into_owned()
}
