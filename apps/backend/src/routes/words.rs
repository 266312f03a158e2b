//! Word browsing endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use vocab_core::catalog::BROWSE_WORD_LIMIT;
use vocab_core::{group_by_grade, visible_categories};

use crate::error::Result;
use crate::models::*;
use crate::routes::{parse_param, WORDS_PATH};
use crate::AppState;

/// GET /api/words?grade&category
/// Visible categories grouped by grade, plus up to 50 matching words
pub async fn browse(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<BrowseResponse>> {
    let grade = parse_param("grade", query.grade.as_deref())?;
    let category = parse_param("category", query.category.as_deref())?;
    let filter = WordFilter { grade, category };

    let (categories, entries) = tokio::try_join!(
        state.source.list_categories(),
        state.source.list_words(filter, BROWSE_WORD_LIMIT),
    )?;

    let active = match (grade, category) {
        (Some(grade), Some(id)) => Some(CategoryKey { grade, id }),
        _ => None,
    };
    let grades = group_by_grade(&visible_categories(categories))
        .into_iter()
        .map(|group| GradeSection::from_group(group, WORDS_PATH, active))
        .collect();

    let count = entries.len();
    let message = if count > 0 {
        format!("{}件の単語（最大{}件まで表示）", count, BROWSE_WORD_LIMIT)
    } else {
        "単語が見つかりません".to_string()
    };

    Ok(Json(BrowseResponse {
        grades,
        filter: BrowseFilter { grade, category },
        clear_filter: (!filter.is_empty()).then(|| WORDS_PATH.to_string()),
        count,
        message,
        words: entries.into_iter().map(BrowseWord::from).collect(),
    }))
}
