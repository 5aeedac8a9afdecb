//! Book database repository

use anyhow::Result;
use sqlx::SqlitePool;

/// Book record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
}

/// Input for creating a book
#[derive(Debug)]
pub struct CreateBook {
    pub title: String,
    pub author_id: i64,
}

pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn list(&self) -> Result<Vec<BookRecord>> {
        let records = sqlx::query_as::<_, BookRecord>(
            r#"
            SELECT id, title, author_id
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<BookRecord>> {
        let record = sqlx::query_as::<_, BookRecord>(
            r#"
            SELECT id, title, author_id
            FROM books
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Search books by title (case-insensitive substring match)
    pub async fn search_by_title(&self, query: &str) -> Result<Vec<BookRecord>> {
        let search_pattern = format!("%{}%", query.to_lowercase());
        let records = sqlx::query_as::<_, BookRecord>(
            r#"
            SELECT id, title, author_id
            FROM books
            WHERE LOWER(title) LIKE ?
            ORDER BY id
            "#,
        )
        .bind(&search_pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Fetch several books in one query (used by the batch loader)
    pub async fn list_by_ids(&self, ids: &[i64]) -> Result<Vec<BookRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders: Vec<String> = (1..=ids.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "SELECT id, title, author_id FROM books WHERE id IN ({}) ORDER BY id",
            placeholders.join(", ")
        );

        let mut query = sqlx::query_as::<_, BookRecord>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        let records = query.fetch_all(&self.pool).await?;

        Ok(records)
    }

    /// Fetch the books of several authors in one query (used by the batch loader)
    pub async fn list_by_author_ids(&self, author_ids: &[i64]) -> Result<Vec<BookRecord>> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders: Vec<String> =
            (1..=author_ids.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "SELECT id, title, author_id FROM books WHERE author_id IN ({}) ORDER BY id",
            placeholders.join(", ")
        );

        let mut query = sqlx::query_as::<_, BookRecord>(&sql);
        for author_id in author_ids {
            query = query.bind(author_id);
        }

        let records = query.fetch_all(&self.pool).await?;

        Ok(records)
    }

    /// Create a new book
    pub async fn create(&self, input: CreateBook) -> Result<BookRecord> {
        let record = sqlx::query_as::<_, BookRecord>(
            r#"
            INSERT INTO books (title, author_id)
            VALUES (?, ?)
            RETURNING id, title, author_id
            "#,
        )
        .bind(&input.title)
        .bind(input.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
