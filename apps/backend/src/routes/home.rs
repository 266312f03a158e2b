//! Home endpoint

use axum::Json;

use crate::models::{HomeResponse, NavLink};
use crate::routes::{QUIZ_PATH, WORDS_PATH};

/// GET /api
/// Entry points into browsing and quizzing
pub async fn index() -> Json<HomeResponse> {
    Json(HomeResponse {
        title: "英単語学習".to_string(),
        links: vec![
            NavLink {
                href: WORDS_PATH.to_string(),
                title: "単語一覧".to_string(),
                description: "学年・カテゴリ別に英単語を閲覧できます".to_string(),
            },
            NavLink {
                href: QUIZ_PATH.to_string(),
                title: "クイズに挑戦".to_string(),
                description: "英単語のスペルを当てるクイズで実力をチェック".to_string(),
            },
        ],
    })
}
