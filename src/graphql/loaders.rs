//! GraphQL DataLoaders for batching database queries
//!
//! DataLoaders solve the N+1 problem by collecting multiple requests
//! for related entities and executing them in a single batch query.
//!
//! The pattern works as follows:
//! 1. When GraphQL resolves `authors { books { ... } }`, each Author's
//!    books resolver calls `loader.load_one(author_id)`
//! 2. DataLoader batches these calls within the same request tick
//! 3. A single SQL query fetches all books for all authors:
//!    `SELECT ... FROM books WHERE author_id IN (...)`
//! 4. Results are grouped by author_id and returned to each resolver
//!
//! Compare with `Author.booksWithDelay`, which resolves one author at a
//! time and shows what the N+1 shape costs.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;

use crate::db::Database;
use crate::graphql::helpers::{author_record_to_graphql, book_record_to_graphql};
use crate::graphql::types::{Author, Book};

/// Batches `Author.books` lookups. Authors without books map to an empty
/// list rather than a missing key.
pub struct BooksByAuthorLoader {
    db: Database,
}

impl BooksByAuthorLoader {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Loader<i64> for BooksByAuthorLoader {
    type Value = Vec<Book>;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        tracing::info!("Batch loading books for {} authors", keys.len());

        let records = self
            .db
            .books()
            .list_by_author_ids(keys)
            .await
            .map_err(Arc::new)?;
        let total_loaded = records.len();

        // Group results by author, pre-seeding every key with an empty list
        let mut result: HashMap<i64, Vec<Book>> =
            keys.iter().map(|k| (*k, Vec::new())).collect();

        for record in records {
            if let Some(books) = result.get_mut(&record.author_id) {
                books.push(book_record_to_graphql(record));
            }
        }

        tracing::debug!(total_loaded = total_loaded, "Batch load complete");

        Ok(result)
    }
}

/// Batches `Book.author` lookups.
pub struct AuthorLoader {
    db: Database,
}

impl AuthorLoader {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Loader<i64> for AuthorLoader {
    type Value = Author;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        tracing::debug!(author_count = keys.len(), "Batch loading authors");

        let records = self.db.authors().list_by_ids(keys).await.map_err(Arc::new)?;

        Ok(records
            .into_iter()
            .map(|r| (r.id, author_record_to_graphql(r)))
            .collect())
    }
}

/// Batches `Review.book` lookups.
pub struct BookLoader {
    db: Database,
}

impl BookLoader {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Loader<i64> for BookLoader {
    type Value = Book;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        tracing::debug!(book_count = keys.len(), "Batch loading books");

        let records = self.db.books().list_by_ids(keys).await.map_err(Arc::new)?;

        Ok(records
            .into_iter()
            .map(|r| (r.id, book_record_to_graphql(r)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_schema, run_seeds};

    async fn seeded_db() -> Database {
        let db = Database::connect("sqlite::memory:", 1).await.unwrap();
        ensure_schema(db.pool()).await;
        run_seeds(db.pool()).await;
        db
    }

    #[tokio::test]
    async fn books_by_author_groups_and_defaults_to_empty() {
        let loader = BooksByAuthorLoader::new(seeded_db().await);

        let result = loader.load(&[1, 3, 99]).await.unwrap();

        assert_eq!(result[&1].len(), 1);
        assert_eq!(result[&3].len(), 2);
        assert!(result[&99].is_empty());
    }

    #[tokio::test]
    async fn author_loader_omits_unknown_keys() {
        let loader = AuthorLoader::new(seeded_db().await);

        let result = loader.load(&[2, 99]).await.unwrap();

        assert_eq!(result[&2].name, "Mara Bos");
        assert!(!result.contains_key(&99));
    }
}
