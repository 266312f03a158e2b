//! Category listing policy and query caps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grade::grade_label;
use crate::types::{Category, Grade};

/// Maximum number of words returned by the browse listing.
pub const BROWSE_WORD_LIMIT: u32 = 50;

/// Maximum number of words drawn for one quiz session.
pub const QUIZ_WORD_LIMIT: u32 = 20;

/// Senior grade whose trailing categories are disabled.
const DISABLED_GRADE: Grade = 6;
const DISABLED_CATEGORY_IDS: [i32; 3] = [16, 17, 18];

/// Whether a category may be offered for browsing or quizzing.
///
/// Grade 0 and id 0 are placeholder records; grade 6 categories 16-18 are
/// disabled.
pub fn is_listed(category: &Category) -> bool {
    if category.grade == 0 || category.id == 0 {
        return false;
    }
    !(category.grade == DISABLED_GRADE && DISABLED_CATEGORY_IDS.contains(&category.id))
}

/// Apply the listing policy and order by grade, then id.
pub fn visible_categories(categories: Vec<Category>) -> Vec<Category> {
    let mut visible: Vec<Category> = categories.into_iter().filter(is_listed).collect();
    visible.sort_by_key(Category::key);
    visible
}

/// Categories of one grade, as shown in the selection views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeGroup {
    pub grade: Grade,
    pub label: String,
    pub categories: Vec<Category>,
}

/// Group categories by grade, ascending, keeping their relative order.
pub fn group_by_grade(categories: &[Category]) -> Vec<GradeGroup> {
    let mut by_grade: BTreeMap<Grade, Vec<Category>> = BTreeMap::new();
    for category in categories {
        by_grade
            .entry(category.grade)
            .or_default()
            .push(category.clone());
    }

    by_grade
        .into_iter()
        .map(|(grade, categories)| GradeGroup {
            grade,
            label: grade_label(grade),
            categories,
        })
        .collect()
}
