//! Database connection and operations

pub mod authors;
pub mod books;
pub mod reviews;
pub mod schema;
pub mod seed;

use std::str::FromStr;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use authors::{AuthorRecord, AuthorRepository};
pub use books::{BookRecord, BookRepository, CreateBook};
pub use reviews::{ReviewFilter, ReviewRecord, ReviewRepository};
pub use schema::ensure_schema;
pub use seed::run_seeds;

/// Database wrapper providing connection pool access
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database wrapper from an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new database connection pool
    ///
    /// For `sqlite::memory:` URLs the pool is pinned to a single connection
    /// that is never reaped: every pooled in-memory connection is a separate
    /// empty database, so a larger pool would lose the schema between
    /// queries.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let is_memory = url.contains(":memory:") || url.contains("mode=memory");
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(options)
                .await?
        };

        Ok(Self { pool })
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get an author repository
    pub fn authors(&self) -> AuthorRepository {
        AuthorRepository::new(self.pool.clone())
    }

    /// Get a book repository
    pub fn books(&self) -> BookRepository {
        BookRepository::new(self.pool.clone())
    }

    /// Get a review repository
    pub fn reviews(&self) -> ReviewRepository {
        ReviewRepository::new(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_database_keeps_schema_across_queries() {
        let db = Database::connect("sqlite::memory:", 10).await.unwrap();
        ensure_schema(db.pool()).await;
        run_seeds(db.pool()).await;

        for _ in 0..5 {
            let books = db.books().list().await.unwrap();
            assert_eq!(books.len(), 4);
        }
    }

    #[tokio::test]
    async fn connect_creates_missing_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        let url = format!("sqlite://{}", path.display());

        {
            let db = Database::connect(&url, 2).await.unwrap();
            ensure_schema(db.pool()).await;
            run_seeds(db.pool()).await;
        }

        let db = Database::connect(&url, 2).await.unwrap();
        let authors = db.authors().list().await.unwrap();
        assert_eq!(authors.len(), 3);
    }
}
