//! Author database repository

use anyhow::Result;
use sqlx::SqlitePool;

/// Author record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthorRecord {
    pub id: i64,
    pub name: String,
}

pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all authors
    pub async fn list(&self) -> Result<Vec<AuthorRecord>> {
        let records = sqlx::query_as::<_, AuthorRecord>(
            r#"
            SELECT id, name
            FROM authors
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Get an author by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<AuthorRecord>> {
        let record = sqlx::query_as::<_, AuthorRecord>(
            r#"
            SELECT id, name
            FROM authors
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Search authors by name (case-insensitive substring match)
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<AuthorRecord>> {
        let search_pattern = format!("%{}%", query.to_lowercase());
        let records = sqlx::query_as::<_, AuthorRecord>(
            r#"
            SELECT id, name
            FROM authors
            WHERE LOWER(name) LIKE ?
            ORDER BY id
            "#,
        )
        .bind(&search_pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Fetch several authors in one query (used by the batch loader)
    pub async fn list_by_ids(&self, ids: &[i64]) -> Result<Vec<AuthorRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders: Vec<String> = (1..=ids.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "SELECT id, name FROM authors WHERE id IN ({}) ORDER BY id",
            placeholders.join(", ")
        );

        let mut query = sqlx::query_as::<_, AuthorRecord>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        let records = query.fetch_all(&self.pool).await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::db::schema::ensure_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await;
        for (id, name) in [(1i64, "Ursula Vernon"), (2, "Marijn Haverbeke")] {
            sqlx::query("INSERT INTO authors (id, name) VALUES (?, ?)")
                .bind(id)
                .bind(name)
                .execute(&pool)
                .await
                .unwrap();
        }
        pool
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let repo = Database::new(seeded_pool().await).authors();

        let hits = repo.search_by_name("URSULA").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ursula Vernon");

        let hits = repo.search_by_name("ver").await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn list_by_ids_skips_unknown_ids() {
        let repo = Database::new(seeded_pool().await).authors();

        let records = repo.list_by_ids(&[2, 99]).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 2);

        assert!(repo.list_by_ids(&[]).await.unwrap().is_empty());
    }
}
