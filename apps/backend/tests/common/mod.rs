//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - MemorySource, an in-memory vocabulary source
//! - TestContext for building the router over a source
//! - Database helpers for the tests that need PostgreSQL
//!
//! # Requirements
//! Only the tests marked `#[ignore = "requires database"]` need a running
//! PostgreSQL database (set DATABASE_URL env var).

pub mod fixtures;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;

use vocab_quiz_backend::db::{Database, VocabularySource};
use vocab_quiz_backend::error::{ApiError, Result};
use vocab_quiz_backend::models::{Category, CategoryKey, WordEntry, WordFilter};
use vocab_quiz_backend::{router, AppState};

/// Vocabulary source backed by plain vectors.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub categories: Vec<Category>,
    pub words: Vec<WordEntry>,
    pub fail: bool,
}

impl MemorySource {
    /// A source whose every query fails like a dropped connection.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(ApiError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl VocabularySource for MemorySource {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        let mut categories = self.categories.clone();
        categories.sort_by_key(Category::key);
        Ok(categories)
    }

    async fn get_category(&self, key: CategoryKey) -> Result<Option<Category>> {
        self.check()?;
        Ok(self.categories.iter().find(|c| c.key() == key).cloned())
    }

    async fn list_words(&self, filter: WordFilter, limit: u32) -> Result<Vec<WordEntry>> {
        self.check()?;
        let mut words: Vec<WordEntry> = self
            .words
            .iter()
            .filter(|e| filter_matches(&filter, e) && !e.word.meanings.is_empty())
            .cloned()
            .collect();
        words.sort_by_key(|e| e.word.id);
        words.truncate(limit as usize);
        Ok(words)
    }
}

/// Equality filter the SQL `WHERE` clause applies; `None` matches everything.
fn filter_matches(filter: &WordFilter, entry: &WordEntry) -> bool {
    filter.grade.map_or(true, |g| g == entry.grade)
        && filter.category.map_or(true, |c| c == entry.category)
}

/// Test context holding the router under test.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context over the sample vocabulary.
    pub fn new() -> Self {
        Self::with_source(fixtures::sample_source())
    }

    /// Create a context over any source.
    pub fn with_source(source: impl VocabularySource + 'static) -> Self {
        Self {
            app: router(AppState::new(source)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}

/// Connect to the test database and run migrations.
///
/// # Panics
/// Panics if DATABASE_URL is not set or database connection fails.
pub async fn connect_test_database() -> Database {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    let db = Database::connect(&database_url, 5)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    db
}

/// Insert a category with a unique grade so tests do not collide.
pub async fn seed_category(db: &Database, grade: i32, id: i32, label: &str) {
    sqlx::query(
        r#"
        INSERT INTO english.english_categories (grade, id, label)
        VALUES ($1, $2, $3)
        ON CONFLICT (grade, id) DO UPDATE SET label = EXCLUDED.label
        "#,
    )
    .bind(grade)
    .bind(id)
    .bind(label)
    .execute(db.pool())
    .await
    .expect("Failed to seed category");
}

/// Insert a spelling with its meanings and return its id.
pub async fn seed_word(db: &Database, grade: i32, category: i32, spell: &str, meanings: &[&str]) -> i64 {
    let (spell_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO english.english_spells (spell, grade, category)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(spell)
    .bind(grade)
    .bind(category)
    .fetch_one(db.pool())
    .await
    .expect("Failed to seed spelling");

    for meaning in meanings {
        let (mean_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO english.english_means (mean)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(*meaning)
        .fetch_one(db.pool())
        .await
        .expect("Failed to seed meaning");

        sqlx::query(
            r#"
            INSERT INTO english.english_relations (spell_id, mean_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(spell_id)
        .bind(mean_id)
        .execute(db.pool())
        .await
        .expect("Failed to seed relation");
    }

    spell_id
}

/// Remove everything seeded under a grade.
pub async fn cleanup_grade(db: &Database, grade: i32) {
    // Relations cascade with their spellings; meanings are left orphaned
    // and removed afterwards.
    let _ = sqlx::query("DELETE FROM english.english_spells WHERE grade = $1")
        .bind(grade)
        .execute(db.pool())
        .await;

    let _ = sqlx::query(
        r#"
        DELETE FROM english.english_means m
        WHERE NOT EXISTS (
            SELECT 1 FROM english.english_relations r WHERE r.mean_id = m.id
        )
        "#,
    )
    .execute(db.pool())
    .await;

    let _ = sqlx::query("DELETE FROM english.english_categories WHERE grade = $1")
        .bind(grade)
        .execute(db.pool())
        .await;
}
