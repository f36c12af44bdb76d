//! Local stand-in for the Gemini endpoint

use persona_chat::GeminiClient;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, Request};

use super::fixtures::{TEST_API_KEY, TEST_MODEL, test_config};

/// A `generateContent` body carrying `text` as the reply
pub fn success_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

pub struct MockGemini {
    pub server: MockServer,
}

impl MockGemini {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Matches the `generateContent` call for the test model and key
    pub fn generate_content() -> MockBuilder {
        Mock::given(method("POST"))
            .and(path(format!("/v1beta/models/{}:generateContent", TEST_MODEL)))
            .and(query_param("key", TEST_API_KEY))
    }

    pub fn client(&self) -> GeminiClient {
        GeminiClient::new(test_config(&self.server.uri()).gemini).unwrap()
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
