//! Gemini Client
//!
//! One `generateContent` call per [`ChatTransport::send`]. Retries and
//! admission are the session's job.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use tracing::{debug, warn};

use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::{ChatContext, ChatReply, ChatTransport};
use crate::utils::logging::redact_api_key;

use super::config::GeminiConfig;
use super::error::{
    GeminiErrorMapper, gemini_config_error, gemini_network_error, gemini_serialization_error,
    gemini_timeout_error,
};
use super::models::{GenerateContentRequest, GenerateContentResponse};

const OPERATION: &str = "generateContent";

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    api_key: String,
    http_client: Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| gemini_config_error("API key is required"))?;

        let mut builder = ClientBuilder::new()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout());

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| gemini_config_error(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder
            .build()
            .map_err(|e| gemini_config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            api_key,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Request body for a turn
    pub fn build_request(&self, context: &ChatContext<'_>) -> GenerateContentRequest {
        GenerateContentRequest::from_context(context)
    }

    async fn generate(&self, body: &GenerateContentRequest) -> Result<ChatReply, ProviderError> {
        let url = self.config.get_endpoint(OPERATION);

        if self.config.debug {
            debug!("Gemini request URL: {}", url);
            debug!(
                "Gemini request body: {}",
                serde_json::to_string_pretty(body)
                    .map_err(|e| gemini_serialization_error(e.to_string()))?
            );
        }

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> Result<ChatReply, ProviderError> {
        let status = response.status();
        let retry_after = GeminiErrorMapper::parse_retry_after_header(response.headers());
        let response_text = response.text().await.map_err(|e| {
            gemini_network_error(format!(
                "Failed to read response: {}",
                redact_api_key(&e.to_string())
            ))
        })?;

        if self.config.debug {
            debug!("Gemini response status: {}", status);
            debug!("Gemini response body: {}", response_text);
        }

        if !status.is_success() {
            return Err(GeminiErrorMapper::from_http_status(
                status.as_u16(),
                retry_after,
                &response_text,
            ));
        }

        match serde_json::from_str::<GenerateContentResponse>(&response_text) {
            Ok(parsed) => Ok(parsed
                .reply_text()
                .map(ChatReply::text)
                .unwrap_or_else(ChatReply::missing)),
            Err(e) => {
                warn!("Failed to parse Gemini response: {}", e);
                Ok(ChatReply::missing())
            }
        }
    }
}

fn map_send_error(err: reqwest::Error) -> ProviderError {
    let message = redact_api_key(&err.to_string());
    if err.is_timeout() {
        gemini_timeout_error(message)
    } else {
        gemini_network_error(message)
    }
}

#[async_trait]
impl ChatTransport for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn send(&self, context: &ChatContext<'_>) -> Result<ChatReply, ProviderError> {
        let body = self.build_request(context);
        self.generate(&body).await
    }
}
