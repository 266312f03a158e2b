//! Error types for vocab-core.

use thiserror::Error;

use crate::quiz::Phase;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised by the quiz session engine.
///
/// Every variant is a caller bug: an operation invoked outside the phase it
/// is defined for, or a session rebuilt from data that breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("cannot start a quiz without words")]
    EmptyQuizSet,

    #[error("{operation} is not allowed while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("no abort confirmation is pending")]
    NoAbortPending,

    #[error("inconsistent session state: {0}")]
    InconsistentState(&'static str),
}
