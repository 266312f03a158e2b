//! Render-ready snapshot of a session.

use serde::{Deserialize, Serialize};

use super::session::SessionState;
use super::summary::{QuizSummary, NO_ANSWER_PLACEHOLDER};
use super::Phase;
use crate::matching::mask_meaning;

const NEXT_LABEL: &str = "次へ";
const RESULTS_LABEL: &str = "結果を見る";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based number of the current question.
    pub question_number: usize,
    pub total: usize,
    pub percent: u32,
}

/// The question as asked, with the answer hidden from its meanings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub prompt: String,
    pub other_meanings: Vec<String>,
}

/// Feedback for the answer just submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub is_correct: bool,
    pub spell: String,
    pub user_answer: String,
    pub meaning: String,
    pub next_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: Phase,
    pub progress: Progress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultView>,
    pub pending_abort: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<QuizSummary>,
}

impl SessionView {
    pub fn from_state(state: &SessionState) -> Self {
        let word = state.current_word();
        let total = state.total();
        let question_number = state.current_index() + 1;

        let progress = Progress {
            question_number,
            total,
            percent: (question_number * 100 / total) as u32,
        };

        let question = (state.phase() == Phase::AwaitingAnswer).then(|| QuestionView {
            prompt: mask_meaning(word.primary_meaning(), &word.spell),
            other_meanings: word
                .other_meanings()
                .iter()
                .map(|m| mask_meaning(m, &word.spell))
                .collect(),
        });

        let result = match (state.phase(), state.last_result()) {
            (Phase::ShowingResult, Some(last)) => Some(ResultView {
                is_correct: last.is_correct,
                spell: last.word.spell.clone(),
                user_answer: if last.user_answer.is_empty() {
                    NO_ANSWER_PLACEHOLDER.to_string()
                } else {
                    last.user_answer.clone()
                },
                meaning: last.word.primary_meaning().to_string(),
                next_label: if state.is_last_question() {
                    RESULTS_LABEL
                } else {
                    NEXT_LABEL
                }
                .to_string(),
            }),
            _ => None,
        };

        let summary = state.summarize().ok();

        Self {
            phase: state.phase(),
            progress,
            question,
            result,
            pending_abort: state.pending_abort(),
            summary,
        }
    }
}
