//! Chat session: the send pipeline
//!
//! One [`ChatSession::submit`] call is one turn:
//! `Idle -> Admitted -> InFlight -> {Succeeded | RateLimited | ServerError | ClientError | NetworkError}`.
//! Every failure is converted into a [`TurnOutcome`] here; nothing escapes
//! to the caller as an error.

mod outcome;


pub use outcome::*;

use std::time::Duration;
use tokio::time::Instant;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::config::models::GovernorConfig;
use crate::core::conversation::{ConversationLog, Turn};
use crate::core::governor::{Admission, Governor, GovernorStatus, whole_seconds};
use crate::core::persona::Persona;
use crate::core::retry::{AttemptOutcome, RetryPolicy};
use crate::core::traits::{ChatContext, ChatTransport, TurnEvent, TurnObserver};
use crate::utils::logging::redact_api_key;

/// A chat widget's state: governor, history and the transport it talks through
///
/// `submit` takes `&mut self`, so a session has at most one turn in flight
/// and its governor state is never read and written concurrently.
pub struct ChatSession<T: ChatTransport> {
    transport: T,
    persona: Persona,
    governor: Governor,
    retry: RetryPolicy,
    log: ConversationLog,
    observers: Vec<Box<dyn TurnObserver + Send>>,
}

impl<T: ChatTransport> ChatSession<T> {
    pub fn new(transport: T, persona: Persona, config: &GovernorConfig) -> Self {
        Self {
            transport,
            persona,
            governor: Governor::from_config(config),
            retry: RetryPolicy::from_config(config),
            log: ConversationLog::new(),
            observers: Vec::new(),
        }
    }

    pub fn from_config(transport: T, config: &Config) -> Self {
        Self::new(
            transport,
            Persona::from_config(&config.persona),
            &config.governor,
        )
    }

    pub fn with_observer(mut self, observer: impl TurnObserver + Send + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    pub fn add_observer(&mut self, observer: impl TurnObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn governor(&self) -> &Governor {
        &self.governor
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Admission check at the current time, without sending
    pub fn can_send(&mut self) -> Admission {
        self.governor.can_send(Instant::now())
    }

    /// Send-control status at the current time
    pub fn status(&self) -> GovernorStatus {
        self.governor.status(Instant::now())
    }

    /// Run one turn to its terminal outcome
    pub async fn submit(&mut self, input: &str) -> TurnOutcome {
        let turn_id = Uuid::new_v4();
        let span = info_span!("turn", %turn_id, provider = self.transport.name());
        self.run_turn(input).instrument(span).await
    }

    async fn run_turn(&mut self, input: &str) -> TurnOutcome {
        let message = input.trim();
        if message.is_empty() {
            return self.finish(TurnOutcome::rejected(EMPTY_MESSAGE));
        }

        if let Admission::Denied(denial) = self.governor.try_admit(Instant::now()) {
            debug!(cause = ?denial.cause, wait_secs = denial.wait_secs(), "Send refused");
            return self.finish(TurnOutcome::rejected(denial.message()));
        }
        self.notify(&TurnEvent::Admitted);

        let context = ChatContext {
            system_text: self.persona.system_text(),
            history: self.log.turns(),
            message,
        };
        let context = &context;
        let transport = &self.transport;
        let report = self
            .retry
            .run(move |attempt| async move {
                debug!(attempt, "Sending chat request");
                AttemptOutcome::from(transport.send(context).await)
            })
            .await;

        let outcome = match report.result {
            Ok(reply) => {
                let (text, fallback) = match reply.text {
                    Some(text) => (text, false),
                    None => {
                        warn!("Response carried no reply text, using fallback");
                        (FALLBACK_REPLY.to_string(), true)
                    }
                };
                self.log
                    .push_exchange(Turn::user(message), Turn::model(text.clone()));
                TurnOutcome::Succeeded { text, fallback }
            }
            Err(err) if err.is_rate_limit() => {
                let hint = err.retry_delay().map(Duration::from_secs);
                let applied = self.governor.record_throttle(Instant::now(), hint);
                TurnOutcome::RateLimited {
                    user_message: rate_limited_message(whole_seconds(applied)),
                    retry_after: applied,
                }
            }
            Err(err) => {
                error!(
                    provider = err.provider(),
                    status = ?err.http_status(),
                    attempts = report.attempts,
                    "Chat request failed: {}",
                    redact_api_key(&err.to_string())
                );
                TurnOutcome::from_failure(&err)
            }
        };

        self.finish(outcome)
    }

    fn finish(&self, outcome: TurnOutcome) -> TurnOutcome {
        info!(outcome = %outcome.kind(), "Turn finished");
        self.notify(&outcome.to_event());
        outcome
    }

    fn notify(&self, event: &TurnEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}
