//! Gemini transport against a mock endpoint

use persona_chat::{ChatContext, ChatTransport, GeminiClient, ProviderError, Turn};
use serde_json::{Value, json};
use wiremock::ResponseTemplate;
use wiremock::matchers::body_partial_json;

use crate::common::{MockGemini, TEST_API_KEY, success_body, test_config};

fn context<'a>(history: &'a [Turn], message: &'a str) -> ChatContext<'a> {
    ChatContext {
        system_text: "You are Ada Lovelace.",
        history,
        message,
    }
}

#[tokio::test]
async fn test_request_carries_persona_history_and_generation_config() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .and(body_partial_json(json!({
            "systemInstruction": {"parts": [{"text": "You are Ada Lovelace."}]},
            "generationConfig": {"temperature": 0.7, "topK": 40, "topP": 0.95, "maxOutputTokens": 200}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Good day!")))
        .expect(1)
        .mount(&gemini.server)
        .await;

    let history = vec![Turn::user("Hello"), Turn::model("Hi there")];
    let reply = gemini
        .client()
        .send(&context(&history, "Who are you?"))
        .await
        .unwrap();

    assert_eq!(reply.text.as_deref(), Some("Good day!"));

    let requests = gemini.requests().await;
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body["contents"],
        json!([
            {"role": "user", "parts": [{"text": "Hello"}]},
            {"role": "model", "parts": [{"text": "Hi there"}]},
            {"role": "user", "parts": [{"text": "Who are you?"}]}
        ])
    );
}

#[tokio::test]
async fn test_missing_reply_field_is_not_an_error() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"candidates": [{"finishReason": "SAFETY"}]})),
        )
        .mount(&gemini.server)
        .await;

    let reply = gemini.client().send(&context(&[], "hi")).await.unwrap();

    assert!(reply.text.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_not_an_error() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&gemini.server)
        .await;

    let reply = gemini.client().send(&context(&[], "hi")).await.unwrap();

    assert!(reply.text.is_none());
}

#[tokio::test]
async fn test_rate_limit_header_hint() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&gemini.server)
        .await;

    let err = gemini.client().send(&context(&[], "hi")).await.unwrap_err();

    assert!(err.is_rate_limit());
    assert_eq!(err.retry_delay(), Some(30));
}

#[tokio::test]
async fn test_rate_limit_body_hint() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED",
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.RetryInfo",
                    "retryDelay": "17s"
                }]
            }
        })))
        .mount(&gemini.server)
        .await;

    let err = gemini.client().send(&context(&[], "hi")).await.unwrap_err();

    assert_eq!(err.retry_delay(), Some(17));
}

#[tokio::test]
async fn test_status_classification() {
    let cases = [
        (400u16, "InvalidRequest"),
        (401, "Authentication"),
        (403, "PermissionDenied"),
        (404, "ApiError"),
        (500, "ProviderUnavailable"),
        (503, "ProviderUnavailable"),
    ];

    for (status, expected) in cases {
        let gemini = MockGemini::start().await;
        MockGemini::generate_content()
            .respond_with(ResponseTemplate::new(status))
            .mount(&gemini.server)
            .await;

        let err = gemini.client().send(&context(&[], "hi")).await.unwrap_err();

        let actual = match &err {
            ProviderError::InvalidRequest { .. } => "InvalidRequest",
            ProviderError::Authentication { .. } => "Authentication",
            ProviderError::PermissionDenied { .. } => "PermissionDenied",
            ProviderError::ApiError { .. } => "ApiError",
            ProviderError::ProviderUnavailable { .. } => "ProviderUnavailable",
            _ => "other",
        };
        assert_eq!(actual, expected, "status {}", status);
        assert_eq!(err.is_retryable(), status >= 500, "status {}", status);
    }
}

#[tokio::test]
async fn test_network_failure_is_retryable_and_redacted() {
    // Nothing listens on port 1
    let client = GeminiClient::new(test_config("http://127.0.0.1:1").gemini).unwrap();

    let err = client.send(&context(&[], "hi")).await.unwrap_err();

    assert!(err.is_retryable());
    assert!(err.http_status().is_none());
    assert!(!err.to_string().contains(TEST_API_KEY));
}
