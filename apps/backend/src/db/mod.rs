//! Vocabulary data source and its PostgreSQL implementation

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::{ApiError, Result};
use crate::models::*;

/// Read access to the vocabulary tables.
///
/// Implementations return whole result sets or an error, never a partial
/// listing.
#[async_trait]
pub trait VocabularySource: Send + Sync {
    /// All categories, ordered by grade then id, placeholders included.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// A single category, if it exists.
    async fn get_category(&self, key: CategoryKey) -> Result<Option<Category>>;

    /// Words with at least one meaning, ordered by id, capped at `limit`.
    async fn list_words(&self, filter: WordFilter, limit: u32) -> Result<Vec<WordEntry>>;
}

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl VocabularySource for Database {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query_as::<_, DbCategory>(
            r#"
            SELECT grade, id, label
            FROM english.english_categories
            ORDER BY grade ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(DbCategory::to_core_category).collect())
    }

    async fn get_category(&self, key: CategoryKey) -> Result<Option<Category>> {
        let row = sqlx::query_as::<_, DbCategory>(
            r#"
            SELECT grade, id, label
            FROM english.english_categories
            WHERE grade = $1 AND id = $2
            "#,
        )
        .bind(key.grade)
        .bind(key.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.to_core_category()))
    }

    async fn list_words(&self, filter: WordFilter, limit: u32) -> Result<Vec<WordEntry>> {
        // Inner joins drop spellings that have no meaning attached.
        let rows = sqlx::query_as::<_, DbWord>(
            r#"
            SELECT s.id, s.spell, s.grade, s.category,
                   array_agg(m.mean ORDER BY m.id) AS meanings
            FROM english.english_spells s
            JOIN english.english_relations r ON r.spell_id = s.id
            JOIN english.english_means m ON m.id = r.mean_id
            WHERE ($1::INTEGER IS NULL OR s.grade = $1)
              AND ($2::INTEGER IS NULL OR s.category = $2)
            GROUP BY s.id, s.spell, s.grade, s.category
            ORDER BY s.id ASC
            LIMIT $3
            "#,
        )
        .bind(filter.grade)
        .bind(filter.category)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DbWord::into_entry).collect())
    }
}
