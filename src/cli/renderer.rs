//! Terminal rendering of turn events

use crate::core::conversation::{ConversationLog, Role};
use crate::core::traits::{TurnEvent, TurnObserver};

/// Prints chat bubbles to stdout
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    persona_name: String,
}

impl TerminalRenderer {
    pub fn new(persona_name: impl Into<String>) -> Self {
        Self {
            persona_name: persona_name.into(),
        }
    }

    /// Text shown for an event
    pub fn format_event(&self, event: &TurnEvent) -> String {
        match event {
            TurnEvent::Admitted => format!("{} is typing...", self.persona_name),
            TurnEvent::Succeeded { text } => format!("{}: {}", self.persona_name, text),
            TurnEvent::Rejected { user_message } => format!("! {}", user_message),
            TurnEvent::Failed { user_message, .. } => format!("! {}", user_message),
        }
    }
}

impl TurnObserver for TerminalRenderer {
    fn on_event(&self, event: &TurnEvent) {
        println!("{}", self.format_event(event));
    }
}

/// One line per turn, oldest first
pub fn format_history(log: &ConversationLog, persona_name: &str) -> String {
    if log.is_empty() {
        return "(no messages yet)".to_string();
    }

    log.iter()
        .map(|turn| {
            let speaker = match turn.role {
                Role::User => "You",
                Role::Model => persona_name,
            };
            format!(
                "[{}] {}: {}",
                turn.created_at.format("%H:%M:%S"),
                speaker,
                turn.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
