//! Core vocabulary quiz library shared by the backend and its tests.
//!
//! Provides:
//! - Grade labels and the category listing policy
//! - Answer normalization and meaning masking
//! - A Fisher-Yates shuffle over an injectable random source
//! - The quiz session engine (phases, transitions, scoring)

pub mod catalog;
pub mod error;
pub mod grade;
pub mod matching;
pub mod quiz;
pub mod shuffle;
pub mod types;

pub use catalog::{group_by_grade, is_listed, visible_categories, GradeGroup};
pub use error::{QuizError, Result};
pub use grade::grade_label;
pub use matching::{answers_match, mask_meaning, normalize_answer};
pub use quiz::{
    AbortOutcome, AnswerResult, Phase, QuizSummary, ReviewItem, ScoreTier, SessionState,
    SessionView,
};
pub use shuffle::{shuffle, shuffled};
pub use types::{Category, CategoryKey, Grade, Word};
