//! Display labels for school grades.

use crate::types::Grade;

/// Resolve the display label for a grade.
///
/// Grades 1-3 are junior high school years and 4-6 are senior high school
/// years. Any other value falls back to a generic label carrying the number.
pub fn grade_label(grade: Grade) -> String {
    let label = match grade {
        1 => "中学1年生",
        2 => "中学2年生",
        3 => "中学3年生",
        4 => "高校1年生",
        5 => "高校2年生",
        6 => "高校3年生",
        other => return format!("学年 {}", other),
    };
    label.to_string()
}
