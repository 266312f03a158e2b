//! Quiz session engine.
//!
//! A session walks a fixed word set one question at a time:
//! `AwaitingAnswer -> ShowingResult -> (AwaitingAnswer | Finished)`.
//! Transitions take the current state by reference and return the next
//! state, so a rejected transition leaves the caller's state untouched.

pub mod session;
pub mod summary;
pub mod view;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use session::{AbortOutcome, AnswerResult, SessionState};
pub use summary::{score_percent, QuizSummary, ReviewItem, ScoreTier};
pub use view::{Progress, QuestionView, ResultView, SessionView};

/// Primary phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingAnswer,
    ShowingResult,
    Finished,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingAnswer => "awaiting_answer",
            Self::ShowingResult => "showing_result",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
