//! Session state and its transitions.

use serde::{Deserialize, Serialize};

use super::summary::QuizSummary;
use super::view::SessionView;
use super::Phase;
use crate::error::{QuizError, Result};
use crate::matching::answers_match;
use crate::types::Word;

/// Outcome of one answered question. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub word: Word,
    /// Trimmed input as typed (case preserved).
    pub user_answer: String,
    pub is_correct: bool,
}

/// Returned by [`SessionState::confirm_abort`]. The caller discards the
/// session and returns to category selection; it is never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbortOutcome {
    /// Questions answered before the abort.
    pub answered: usize,
}

/// In-memory state of one quiz attempt.
///
/// Invariants:
/// - `words` is non-empty and `current_index < words.len()`
/// - `results.len()` is `current_index` while awaiting an answer and
///   `current_index + 1` afterwards
/// - `Finished` only follows the last question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionStateRepr")]
pub struct SessionState {
    words: Vec<Word>,
    current_index: usize,
    results: Vec<AnswerResult>,
    phase: Phase,
    pending_abort: bool,
}

/// Unchecked wire form, validated before it becomes a `SessionState`.
#[derive(Deserialize)]
struct SessionStateRepr {
    words: Vec<Word>,
    current_index: usize,
    results: Vec<AnswerResult>,
    phase: Phase,
    #[serde(default)]
    pending_abort: bool,
}

impl TryFrom<SessionStateRepr> for SessionState {
    type Error = QuizError;

    fn try_from(repr: SessionStateRepr) -> Result<Self> {
        let len = repr.words.len();
        if len == 0 {
            return Err(QuizError::EmptyQuizSet);
        }
        if repr.current_index >= len {
            return Err(QuizError::InconsistentState("current index out of range"));
        }

        let expected_results = match repr.phase {
            Phase::AwaitingAnswer => repr.current_index,
            Phase::ShowingResult => repr.current_index + 1,
            Phase::Finished => {
                if repr.current_index != len - 1 {
                    return Err(QuizError::InconsistentState(
                        "finished before the last question",
                    ));
                }
                len
            }
        };
        if repr.results.len() != expected_results {
            return Err(QuizError::InconsistentState(
                "result count does not match progress",
            ));
        }
        for (result, word) in repr.results.iter().zip(&repr.words) {
            if result.word != *word {
                return Err(QuizError::InconsistentState(
                    "result does not match its question",
                ));
            }
            if result.is_correct != answers_match(&result.user_answer, &word.spell) {
                return Err(QuizError::InconsistentState(
                    "result grading does not match the answer",
                ));
            }
        }
        if repr.pending_abort && repr.phase == Phase::Finished {
            return Err(QuizError::InconsistentState(
                "abort pending on a finished quiz",
            ));
        }

        Ok(Self {
            words: repr.words,
            current_index: repr.current_index,
            results: repr.results,
            phase: repr.phase,
            pending_abort: repr.pending_abort,
        })
    }
}

impl SessionState {
    /// Start a session over `words`, in the given order.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(QuizError::EmptyQuizSet);
        }

        Ok(Self {
            words,
            current_index: 0,
            results: Vec::new(),
            phase: Phase::AwaitingAnswer,
            pending_abort: false,
        })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn results(&self) -> &[AnswerResult] {
        &self.results
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending_abort(&self) -> bool {
        self.pending_abort
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.words.len()
    }

    /// The word being asked, or shown after answering.
    pub fn current_word(&self) -> &Word {
        &self.words[self.current_index]
    }

    /// Most recently recorded answer.
    pub fn last_result(&self) -> Option<&AnswerResult> {
        self.results.last()
    }

    /// Grade `raw_input` against the current word and show the result.
    pub fn submit_answer(&self, raw_input: &str) -> Result<Self> {
        self.require(Phase::AwaitingAnswer, "submit_answer")?;

        let word = self.current_word().clone();
        let is_correct = answers_match(raw_input, &word.spell);

        let mut next = self.clone();
        next.results.push(AnswerResult {
            word,
            user_answer: raw_input.trim().to_string(),
            is_correct,
        });
        next.phase = Phase::ShowingResult;
        Ok(next)
    }

    /// Move to the next question, or finish after the last one.
    pub fn advance(&self) -> Result<Self> {
        self.require(Phase::ShowingResult, "advance")?;

        let mut next = self.clone();
        if self.is_last_question() {
            next.phase = Phase::Finished;
        } else {
            next.current_index += 1;
            next.phase = Phase::AwaitingAnswer;
        }
        Ok(next)
    }

    /// Open the abort confirmation without touching quiz progress.
    pub fn request_abort(&self) -> Result<Self> {
        if self.is_finished() {
            return Err(QuizError::InvalidPhase {
                operation: "request_abort",
                phase: self.phase,
            });
        }

        let mut next = self.clone();
        next.pending_abort = true;
        Ok(next)
    }

    /// Dismiss the abort confirmation.
    pub fn cancel_abort(&self) -> Self {
        let mut next = self.clone();
        next.pending_abort = false;
        next
    }

    /// Abandon the session. The caller drops the state and navigates away.
    pub fn confirm_abort(&self) -> Result<AbortOutcome> {
        if !self.pending_abort {
            return Err(QuizError::NoAbortPending);
        }

        Ok(AbortOutcome {
            answered: self.results.len(),
        })
    }

    /// Score a finished session.
    pub fn summarize(&self) -> Result<QuizSummary> {
        self.require(Phase::Finished, "summarize")?;
        Ok(QuizSummary::from_results(&self.results))
    }

    /// Render-ready view of the current state.
    pub fn snapshot(&self) -> SessionView {
        SessionView::from_state(self)
    }

    fn require(&self, phase: Phase, operation: &'static str) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(QuizError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }
}
