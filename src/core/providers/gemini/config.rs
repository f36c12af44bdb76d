//! Gemini Configuration Module

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Google AI Studio host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v1beta";
/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Connection settings for the Gemini `generateContent` endpoint
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: Option<String>,

    /// Base URL
    pub base_url: String,

    /// API version
    pub api_version: String,

    /// Model id
    pub model: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Connect timeout in seconds
    pub connect_timeout: u64,

    /// Proxy URL
    pub proxy_url: Option<String>,

    /// Log request and response bodies at debug level
    pub debug: bool,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("proxy_url", &self.proxy_url)
            .field("debug", &self.debug)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: 60,
            connect_timeout: 10,
            proxy_url: None,
            debug: false,
        }
    }
}

impl GeminiConfig {
    /// Create a Google AI Studio configuration
    pub fn new_google_ai(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.request_timeout = timeout_secs;
        self
    }

    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Endpoint URL for a model operation, without the key parameter
    pub fn get_endpoint(&self, operation: &str) -> String {
        format!(
            "{}/{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            self.model,
            operation
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}
