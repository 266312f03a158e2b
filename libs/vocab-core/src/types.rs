//! Core types for the vocabulary quiz.

use serde::{Deserialize, Serialize};

/// School-year band used to bucket vocabulary difficulty (1-6 in practice).
pub type Grade = i32;

/// A vocabulary word with its expected spelling and one or more meanings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub spell: String,
    pub meanings: Vec<String>,
}

impl Word {
    pub fn new(id: i64, spell: impl Into<String>, meanings: Vec<String>) -> Self {
        Self {
            id,
            spell: spell.into(),
            meanings,
        }
    }

    /// The meaning shown as the question prompt.
    pub fn primary_meaning(&self) -> &str {
        self.meanings.first().map(String::as_str).unwrap_or_default()
    }

    /// Meanings after the first, shown as hints.
    pub fn other_meanings(&self) -> &[String] {
        self.meanings.get(1..).unwrap_or_default()
    }
}

/// Topical grouping of words within a grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub grade: Grade,
    pub id: i32,
    pub label: String,
}

impl Category {
    pub fn new(grade: Grade, id: i32, label: impl Into<String>) -> Self {
        Self {
            grade,
            id,
            label: label.into(),
        }
    }

    pub fn key(&self) -> CategoryKey {
        CategoryKey {
            grade: self.grade,
            id: self.id,
        }
    }
}

/// Grade + category pair identifying a quiz word set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryKey {
    pub grade: Grade,
    pub id: i32,
}
