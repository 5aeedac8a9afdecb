//! Review database repository

use anyhow::Result;
use sqlx::SqlitePool;

/// Review record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewRecord {
    pub id: i64,
    pub book_id: i64,
    pub reviewer_name: String,
    pub rating: i64,
    pub comment: Option<String>,
    pub verified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Filter options for querying reviews
///
/// All fields are optional; present fields are combined with AND. The
/// reviewer name matches as a case-insensitive substring, the others match
/// exactly.
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub rating: Option<i64>,
    pub verified: Option<bool>,
    pub reviewer_name: Option<String>,
}

pub struct ReviewRepository {
    pool: SqlitePool,
}

impl ReviewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List reviews matching a filter (an empty filter returns everything)
    pub async fn list(&self, filter: ReviewFilter) -> Result<Vec<ReviewRecord>> {
        // Build the WHERE clause dynamically
        let mut conditions = Vec::new();

        if filter.rating.is_some() {
            conditions.push("rating = ?".to_string());
        }

        if filter.verified.is_some() {
            conditions.push("verified = ?".to_string());
        }

        if filter.reviewer_name.is_some() {
            conditions.push("LOWER(reviewer_name) LIKE ?".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT id, book_id, reviewer_name, rating, comment, verified, created_at
             FROM reviews {} ORDER BY id",
            where_clause
        );

        let mut query = sqlx::query_as::<_, ReviewRecord>(&sql);

        if let Some(rating) = filter.rating {
            query = query.bind(rating);
        }
        if let Some(verified) = filter.verified {
            query = query.bind(verified);
        }
        if let Some(ref reviewer_name) = filter.reviewer_name {
            query = query.bind(format!("%{}%", reviewer_name.to_lowercase()));
        }

        let records = query.fetch_all(&self.pool).await?;

        Ok(records)
    }
}
