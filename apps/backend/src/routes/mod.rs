//! HTTP endpoints

pub mod home;
pub mod quiz;
pub mod words;

use crate::error::{ApiError, Result};

pub const HOME_PATH: &str = "/api";
pub const WORDS_PATH: &str = "/api/words";
pub const QUIZ_PATH: &str = "/api/quiz";
pub const QUIZ_START_PATH: &str = "/api/quiz/start";
pub const QUIZ_ANSWER_PATH: &str = "/api/quiz/answer";
pub const QUIZ_ADVANCE_PATH: &str = "/api/quiz/advance";
pub const QUIZ_ABORT_PATH: &str = "/api/quiz/abort";
pub const QUIZ_ABORT_CANCEL_PATH: &str = "/api/quiz/abort/cancel";
pub const QUIZ_ABORT_CONFIRM_PATH: &str = "/api/quiz/abort/confirm";
pub const QUIZ_SUMMARY_PATH: &str = "/api/quiz/summary";

/// Parse an optional integer query parameter. Blank values count as absent.
pub(crate) fn parse_param(name: &str, value: Option<&str>) -> Result<Option<i32>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("{} must be an integer, got {:?}", name, v))),
    }
}
