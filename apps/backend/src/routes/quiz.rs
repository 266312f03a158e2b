//! Quiz endpoints
//!
//! The service keeps no session store. `start` hands the client a
//! `SessionState`, and every later call posts that state back together
//! with the user's intent.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use vocab_core::catalog::QUIZ_WORD_LIMIT;
use vocab_core::{grade_label, group_by_grade, shuffled, visible_categories, SessionState};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::{parse_param, QUIZ_PATH, QUIZ_START_PATH};
use crate::AppState;

/// GET /api/quiz
/// Category selection for the quiz
pub async fn categories(State(state): State<AppState>) -> Result<Json<QuizCategoriesResponse>> {
    let categories = visible_categories(state.source.list_categories().await?);
    let grades = group_by_grade(&categories)
        .into_iter()
        .map(|group| GradeSection::from_group(group, QUIZ_START_PATH, None))
        .collect();

    Ok(Json(QuizCategoriesResponse { grades }))
}

/// GET /api/quiz/start?grade&category
/// Draws up to 20 words in random order and opens a session
pub async fn start(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Response> {
    let grade = parse_param("grade", query.grade.as_deref())?;
    let category = parse_param("category", query.category.as_deref())?;
    let (Some(grade), Some(id)) = (grade, category) else {
        return Ok(Redirect::to(QUIZ_PATH).into_response());
    };
    let key = CategoryKey { grade, id };

    let (entries, category) = tokio::try_join!(
        state.source.list_words(WordFilter::for_quiz(key), QUIZ_WORD_LIMIT),
        state.source.get_category(key),
    )?;
    let category = category
        .ok_or_else(|| ApiError::NotFound(format!("Category {}/{}", key.grade, key.id)))?;

    let header = QuizHeader {
        grade: category.grade,
        category: category.id,
        grade_label: grade_label(category.grade),
        label: category.label,
        restart: format!("{}?grade={}&category={}", QUIZ_START_PATH, key.grade, key.id),
    };

    if entries.is_empty() {
        tracing::info!("No quiz words for grade {} category {}", key.grade, key.id);
        return Ok(Json(QuizStartResponse::Empty {
            header,
            title: "クイズデータがありません".to_string(),
            message: "このカテゴリには単語が登録されていません。".to_string(),
            back: QUIZ_PATH.to_string(),
        })
        .into_response());
    }

    let words: Vec<Word> = entries.into_iter().map(|e| e.word).collect();
    let session = SessionState::new(shuffled(words, &mut rand::rng()))?;
    tracing::info!(
        "Started quiz for grade {} category {} with {} words",
        key.grade,
        key.id,
        session.total()
    );

    let view = session.snapshot();
    Ok(Json(QuizStartResponse::Ready {
        header,
        state: session,
        view,
    })
    .into_response())
}

/// POST /api/quiz/answer
pub async fn answer(Json(payload): Json<AnswerRequest>) -> Result<Json<SessionResponse>> {
    let next = payload.state.submit_answer(&payload.answer)?;
    Ok(Json(next.into()))
}

/// POST /api/quiz/advance
pub async fn advance(Json(payload): Json<SessionRequest>) -> Result<Json<SessionResponse>> {
    let next = payload.state.advance()?;
    Ok(Json(next.into()))
}

/// POST /api/quiz/abort
/// Opens the quit confirmation
pub async fn request_abort(
    Json(payload): Json<SessionRequest>,
) -> Result<Json<SessionResponse>> {
    let next = payload.state.request_abort()?;
    Ok(Json(next.into()))
}

/// POST /api/quiz/abort/cancel
pub async fn cancel_abort(Json(payload): Json<SessionRequest>) -> Json<SessionResponse> {
    Json(payload.state.cancel_abort().into())
}

/// POST /api/quiz/abort/confirm
/// The session is dropped unscored; the client returns to category selection
pub async fn confirm_abort(Json(payload): Json<SessionRequest>) -> Result<Json<AbortResponse>> {
    let outcome = payload.state.confirm_abort()?;
    tracing::info!("Quiz aborted after {} answers", outcome.answered);

    Ok(Json(AbortResponse {
        redirect: QUIZ_PATH.to_string(),
        answered: outcome.answered,
    }))
}

/// POST /api/quiz/summary
pub async fn summary(Json(payload): Json<SessionRequest>) -> Result<Json<SummaryResponse>> {
    let summary = payload.state.summarize()?;

    Ok(Json(SummaryResponse {
        summary,
        choose_another: QUIZ_PATH.to_string(),
    }))
}
