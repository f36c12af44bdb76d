//! Gemini Error Handling
//!
//! Maps non-2xx responses onto [`ProviderError`] and extracts the
//! throttling hint a 429 may carry.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde_json::Value;

use crate::core::providers::unified_provider::ProviderError;

pub type GeminiError = ProviderError;

const PROVIDER: &str = "gemini";

/// Maps HTTP failures to provider errors
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    /// Classify a non-2xx response
    ///
    /// For 429 the `retry-after` header wins over any delay found in the body.
    pub fn from_http_status(status: u16, header_retry_after: Option<u64>, body: &str) -> ProviderError {
        let message = Self::error_message(body).unwrap_or_else(|| format!("HTTP {}", status));
        match status {
            400 => ProviderError::invalid_request(PROVIDER, message),
            401 => ProviderError::authentication(PROVIDER, message),
            403 => ProviderError::permission_denied(PROVIDER, message),
            429 => {
                let retry_after = header_retry_after
                    .filter(|secs| *secs > 0)
                    .or_else(|| Self::extract_retry_after(body));
                ProviderError::RateLimit {
                    provider: PROVIDER,
                    message,
                    retry_after,
                }
            }
            500..=599 => ProviderError::provider_unavailable(PROVIDER, status, message),
            _ => ProviderError::api_error(PROVIDER, status, message),
        }
    }

    /// `retry-after` as integer seconds; zero or unparseable counts as absent
    pub fn parse_retry_after_header(headers: &HeaderMap) -> Option<u64> {
        headers
            .get(RETRY_AFTER)?
            .to_str()
            .ok()?
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
    }

    /// Retry hint from an error body
    fn extract_retry_after(body: &str) -> Option<u64> {
        let json: Value = serde_json::from_str(body).ok()?;
        if let Some(error) = json.get("error") {
            return Self::extract_retry_after_from_error(error);
        }
        json.get("retry_after")?.as_u64().filter(|secs| *secs > 0)
    }

    fn extract_retry_after_from_error(error: &Value) -> Option<u64> {
        if let Some(secs) = error.get("retry_after").and_then(Value::as_u64) {
            return Some(secs).filter(|secs| *secs > 0);
        }

        error
            .get("details")?
            .as_array()?
            .iter()
            .filter_map(|detail| detail.get("retryDelay").and_then(Value::as_str))
            .find_map(parse_duration_secs)
    }

    /// `error.message` from a Google API error body
    fn error_message(body: &str) -> Option<String> {
        let json: Value = serde_json::from_str(body).ok()?;
        json.get("error")?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }
}

/// Parse a protobuf duration such as `"17s"` or `"1.5s"`, rounding up
///
/// Values beyond `u64::MAX` seconds saturate; the governor caps the window.
fn parse_duration_secs(value: &str) -> Option<u64> {
    let secs: f64 = value.trim().strip_suffix('s')?.parse().ok()?;
    if !secs.is_finite() || secs <= 0.0 {
        return None;
    }
    Some(secs.ceil() as u64)
}

pub fn gemini_network_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::network(PROVIDER, msg.into())
}

pub fn gemini_timeout_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::timeout(PROVIDER, msg.into())
}

pub fn gemini_config_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::configuration(PROVIDER, msg.into())
}

pub fn gemini_serialization_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::serialization(PROVIDER, msg.into())
}
