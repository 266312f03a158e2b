//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use vocab_quiz_backend::models::{Category, Word, WordEntry};

use super::MemorySource;

/// Build a word entry filed under `grade`/`category`.
pub fn entry(id: i64, grade: i32, category: i32, spell: &str, meanings: &[&str]) -> WordEntry {
    WordEntry {
        grade,
        category,
        word: Word::new(
            id,
            spell,
            meanings.iter().map(|m| m.to_string()).collect(),
        ),
    }
}

/// Categories including the placeholder and disabled records.
pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new(6, 17, "無効カテゴリ17"),
        Category::new(1, 2, "食べ物"),
        Category::new(0, 1, "プレースホルダー"),
        Category::new(1, 1, "動物"),
        Category::new(1, 0, "未分類"),
        Category::new(2, 1, "天気"),
        Category::new(6, 15, "熟語"),
        Category::new(6, 16, "無効カテゴリ16"),
        Category::new(6, 18, "無効カテゴリ18"),
    ]
}

/// Sample vocabulary:
/// - grade 1 / category 1: "dog" and "cat", plus a spelling without meanings
/// - grade 1 / category 2: 25 food words
/// - grade 2 / category 1: no words
/// - grade 6 / category 15: one idiom
pub fn sample_source() -> MemorySource {
    let mut words = vec![
        entry(1, 1, 1, "dog", &["a common pet"]),
        entry(2, 1, 1, "cat", &["a small feline", "a Cat-like person"]),
        entry(3, 1, 1, "ghost", &[]),
        entry(500, 6, 15, "look after", &["世話をする"]),
    ];
    words.extend(numbered_words(100, 1, 2, "food", 25));

    MemorySource {
        categories: sample_categories(),
        words,
        fail: false,
    }
}

/// `count` words `<prefix>0..` starting at id `first_id`.
pub fn numbered_words(
    first_id: i64,
    grade: i32,
    category: i32,
    prefix: &str,
    count: usize,
) -> Vec<WordEntry> {
    (0..count)
        .map(|i| {
            let spell = format!("{}{}", prefix, i);
            let meaning = format!("意味 {}", i);
            entry(first_id + i as i64, grade, category, &spell, &[meaning.as_str()])
        })
        .collect()
}

/// Create an answer request body.
pub fn answer_request(state: &serde_json::Value, answer: &str) -> serde_json::Value {
    json!({ "state": state, "answer": answer })
}

/// Create a request body carrying only the session state.
pub fn session_request(state: &serde_json::Value) -> serde_json::Value {
    json!({ "state": state })
}

/// Spelling of the word the session is currently on.
pub fn current_spell(state: &serde_json::Value) -> String {
    let index = state["current_index"].as_u64().unwrap() as usize;
    state["words"][index]["spell"].as_str().unwrap().to_string()
}
