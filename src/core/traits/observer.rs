//! Turn event notifications

use crate::core::session::OutcomeKind;

/// Discrete notifications emitted while a turn progresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// Admission passed; the request is about to go out
    Admitted,
    /// Admission refused the send
    Rejected { user_message: String },
    /// A reply is ready to show
    Succeeded { text: String },
    /// The turn ended in a classified failure
    Failed {
        kind: OutcomeKind,
        user_message: String,
    },
}

/// Receives turn events synchronously, in order
///
/// Observers only render; they have no access to the governor.
pub trait TurnObserver {
    fn on_event(&self, event: &TurnEvent);
}
