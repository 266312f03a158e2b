//! Database models and API types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from vocab-core
pub use vocab_core::types::{Category, CategoryKey, Grade, Word};
use vocab_core::{grade_label, GradeGroup, QuizSummary, SessionState, SessionView};

// === Database Entity Types ===

/// Category row in `english.english_categories`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCategory {
    pub grade: i32,
    pub id: i32,
    pub label: String,
}

impl DbCategory {
    pub fn to_core_category(&self) -> Category {
        Category::new(self.grade, self.id, self.label.clone())
    }
}

/// Spelling row joined with its meanings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWord {
    pub id: i64,
    pub spell: String,
    pub grade: i32,
    pub category: i32,
    pub meanings: Vec<String>,
}

impl DbWord {
    pub fn into_entry(self) -> WordEntry {
        WordEntry {
            grade: self.grade,
            category: self.category,
            word: Word::new(self.id, self.spell, self.meanings),
        }
    }
}

// === Data source types ===

/// Word together with where it is filed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub grade: Grade,
    pub category: i32,
    pub word: Word,
}

/// Equality filters for word listings. `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordFilter {
    pub grade: Option<Grade>,
    pub category: Option<i32>,
}

impl WordFilter {
    pub fn for_quiz(key: CategoryKey) -> Self {
        Self {
            grade: Some(key.grade),
            category: Some(key.id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.grade.is_none() && self.category.is_none()
    }
}

// === API Request/Response Types ===

/// Grade/category query string. Values arrive as text; empty means absent.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CategoryQuery {
    pub grade: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryLink {
    pub grade: Grade,
    pub id: i32,
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GradeSection {
    pub grade: Grade,
    pub label: String,
    pub categories: Vec<CategoryLink>,
}

impl GradeSection {
    /// Build a section whose links point at `base` with grade/category
    /// parameters.
    pub fn from_group(group: GradeGroup, base: &str, active: Option<CategoryKey>) -> Self {
        let categories = group
            .categories
            .into_iter()
            .map(|c| CategoryLink {
                href: format!("{}?grade={}&category={}", base, c.grade, c.id),
                active: active == Some(c.key()),
                grade: c.grade,
                id: c.id,
                label: c.label,
            })
            .collect();

        Self {
            grade: group.grade,
            label: group.label,
            categories,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrowseWord {
    pub id: i64,
    pub spell: String,
    pub grade: Grade,
    pub grade_label: String,
    pub category: i32,
    pub meanings: Vec<String>,
}

impl From<WordEntry> for BrowseWord {
    fn from(entry: WordEntry) -> Self {
        Self {
            id: entry.word.id,
            spell: entry.word.spell,
            grade_label: grade_label(entry.grade),
            grade: entry.grade,
            category: entry.category,
            meanings: entry.word.meanings,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrowseFilter {
    pub grade: Option<Grade>,
    pub category: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrowseResponse {
    pub grades: Vec<GradeSection>,
    pub filter: BrowseFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_filter: Option<String>,
    pub count: usize,
    pub message: String,
    pub words: Vec<BrowseWord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizCategoriesResponse {
    pub grades: Vec<GradeSection>,
}

/// Header shown above a running quiz.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizHeader {
    pub grade: Grade,
    pub category: i32,
    pub label: String,
    pub grade_label: String,
    pub restart: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuizStartResponse {
    Ready {
        header: QuizHeader,
        state: SessionState,
        view: SessionView,
    },
    Empty {
        header: QuizHeader,
        title: String,
        message: String,
        back: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionRequest {
    pub state: SessionState,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub state: SessionState,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub state: SessionState,
    pub view: SessionView,
}

impl From<SessionState> for SessionResponse {
    fn from(state: SessionState) -> Self {
        let view = state.snapshot();
        Self { state, view }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AbortResponse {
    pub redirect: String,
    pub answered: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: QuizSummary,
    pub choose_another: String,
}
