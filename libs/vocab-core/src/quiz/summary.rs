//! Scoring for finished sessions.

use serde::{Deserialize, Serialize};

use super::session::AnswerResult;

/// Shown in the review list when the answer was left blank.
pub const NO_ANSWER_PLACEHOLDER: &str = "(未入力)";

/// Scores at or above this earn the celebratory effect.
pub const CELEBRATION_THRESHOLD: u32 = 80;

/// Percentage of correct answers, rounded half up.
///
/// Computed in integer arithmetic, so 5 of 8 (62.5%) gives 63. An empty
/// result set scores 0.
pub fn score_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

/// Feedback band for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Good,
    NeedsReview,
}

impl ScoreTier {
    pub fn from_score(score: u32) -> Self {
        if score >= CELEBRATION_THRESHOLD {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else {
            Self::NeedsReview
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "素晴らしい！完璧です！",
            Self::Good => "よくできました！",
            Self::NeedsReview => "復習して再挑戦しましょう！",
        }
    }
}

/// One line of the post-quiz review list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub meaning: String,
    pub spell: String,
    pub user_answer: String,
    pub is_correct: bool,
}

impl From<&AnswerResult> for ReviewItem {
    fn from(result: &AnswerResult) -> Self {
        let user_answer = if result.user_answer.is_empty() {
            NO_ANSWER_PLACEHOLDER.to_string()
        } else {
            result.user_answer.clone()
        };

        Self {
            meaning: result.word.primary_meaning().to_string(),
            spell: result.word.spell.clone(),
            user_answer,
            is_correct: result.is_correct,
        }
    }
}

/// Final score of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub correct_count: usize,
    pub total: usize,
    pub score_percent: u32,
    pub tier: ScoreTier,
    pub message: String,
    pub celebrate: bool,
    pub review: Vec<ReviewItem>,
}

impl QuizSummary {
    pub fn from_results(results: &[AnswerResult]) -> Self {
        let correct_count = results.iter().filter(|r| r.is_correct).count();
        let total = results.len();
        let score_percent = score_percent(correct_count, total);
        let tier = ScoreTier::from_score(score_percent);

        Self {
            correct_count,
            total,
            score_percent,
            tier,
            message: tier.message().to_string(),
            celebrate: score_percent >= CELEBRATION_THRESHOLD,
            review: results.iter().map(ReviewItem::from).collect(),
        }
    }
}
