//! Full chat turns through the session pipeline

use mockall::{Sequence, mock, predicate::eq};
use persona_chat::core::governor::MAX_WINDOW;
use persona_chat::core::session::{FALLBACK_REPLY, SERVER_ERROR_MESSAGE, rate_limited_message};
use persona_chat::{ChatSession, OutcomeKind, Role, TurnEvent, TurnObserver, TurnOutcome};
use serde_json::json;
use std::time::Duration;
use wiremock::ResponseTemplate;

use crate::common::{MockGemini, fast_governor, success_body, test_persona};

mock! {
    pub Observer {}

    impl TurnObserver for Observer {
        fn on_event(&self, event: &TurnEvent);
    }
}

fn session(gemini: &MockGemini) -> ChatSession<persona_chat::GeminiClient> {
    ChatSession::new(gemini.client(), test_persona(), &fast_governor())
}

#[tokio::test]
async fn test_successful_turn() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Delighted to meet you.")))
        .expect(1)
        .mount(&gemini.server)
        .await;

    let mut observer = MockObserver::new();
    let mut seq = Sequence::new();
    observer
        .expect_on_event()
        .with(eq(TurnEvent::Admitted))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    observer
        .expect_on_event()
        .with(eq(TurnEvent::Succeeded {
            text: "Delighted to meet you.".to_string(),
        }))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut session = session(&gemini).with_observer(observer);
    let outcome = session.submit("Hello Ada").await;

    assert!(outcome.is_success());
    let roles: Vec<Role> = session.log().iter().map(|turn| turn.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Model]);
}

#[tokio::test]
async fn test_server_error_retried_once_then_succeeds() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&gemini.server)
        .await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Second time lucky")))
        .mount(&gemini.server)
        .await;

    let mut session = session(&gemini);
    let outcome = session.submit("Hello").await;

    assert_eq!(outcome.text(), "Second time lucky");
    assert_eq!(gemini.requests().await.len(), 2);
}

#[tokio::test]
async fn test_server_errors_exhaust_retries() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&gemini.server)
        .await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("too late")))
        .mount(&gemini.server)
        .await;

    let mut session = session(&gemini);
    let outcome = session.submit("Hello").await;

    assert_eq!(
        outcome,
        TurnOutcome::ServerError {
            user_message: SERVER_ERROR_MESSAGE.to_string(),
        }
    );
    assert_eq!(gemini.requests().await.len(), 2);
    assert!(session.log().is_empty());
}

#[tokio::test]
async fn test_rate_limited_turn_blocks_next_send() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .expect(1)
        .mount(&gemini.server)
        .await;

    let mut observer = MockObserver::new();
    observer
        .expect_on_event()
        .withf(|event| matches!(event, TurnEvent::Admitted))
        .times(1)
        .return_const(());
    observer
        .expect_on_event()
        .withf(|event| {
            matches!(
                event,
                TurnEvent::Failed {
                    kind: OutcomeKind::RateLimited,
                    ..
                }
            )
        })
        .times(1)
        .return_const(());
    observer
        .expect_on_event()
        .withf(|event| matches!(event, TurnEvent::Rejected { user_message } if user_message.starts_with("Rate limit:")))
        .times(1)
        .return_const(());

    let mut session = session(&gemini).with_observer(observer);

    let outcome = session.submit("Hello").await;
    assert_eq!(
        outcome,
        TurnOutcome::RateLimited {
            user_message: rate_limited_message(30),
            retry_after: Duration::from_secs(30),
        }
    );

    let outcome = session.submit("Hello again").await;
    assert_eq!(outcome.kind(), OutcomeKind::Rejected);
    assert_eq!(gemini.requests().await.len(), 1);
    assert_eq!(session.status().remaining_secs(), 30);
}

async fn assert_capped_window(response: ResponseTemplate) {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(response)
        .expect(1)
        .mount(&gemini.server)
        .await;

    let mut session = session(&gemini);
    let outcome = session.submit("Hello").await;

    assert_eq!(
        outcome,
        TurnOutcome::RateLimited {
            user_message: rate_limited_message(86_400),
            retry_after: MAX_WINDOW,
        }
    );
    assert!(session.governor().window().is_limited());
}

#[tokio::test]
async fn test_oversized_retry_after_header_is_capped() {
    assert_capped_window(
        ResponseTemplate::new(429).insert_header("retry-after", "18446744073709551615"),
    )
    .await;
}

#[tokio::test]
async fn test_oversized_body_retry_delay_is_capped() {
    assert_capped_window(ResponseTemplate::new(429).set_body_json(json!({
        "error": {"details": [{"retryDelay": "1e300s"}]}
    })))
    .await;
}

#[tokio::test]
async fn test_malformed_reply_uses_fallback() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&gemini.server)
        .await;

    let mut session = session(&gemini);
    let outcome = session.submit("Hello").await;

    assert_eq!(
        outcome,
        TurnOutcome::Succeeded {
            text: FALLBACK_REPLY.to_string(),
            fallback: true,
        }
    );
}

#[tokio::test]
async fn test_unauthenticated_is_not_retried() {
    let gemini = MockGemini::start().await;
    MockGemini::generate_content()
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&gemini.server)
        .await;

    let mut session = session(&gemini);
    let outcome = session.submit("Hello").await;

    assert_eq!(outcome.kind(), OutcomeKind::ClientError);
    assert!(outcome.text().contains("Authentication"));
}
