//! Pre-seed data for initial database setup.
//!
//! Runs after schema creation to insert the demo catalog (authors, books,
//! reviews). Uses INSERT OR IGNORE with fixed ids so re-runs are idempotent
//! (existing rows are preserved) and the demo client can rely on book 1
//! existing.

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Result of running seed operations.
#[derive(Debug, Default)]
pub struct SeedResult {
    pub tables_seeded: Vec<String>,
    pub errors: Vec<String>,
}

/// Seed the demo authors.
async fn seed_authors(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    #[derive(Debug)]
    struct AuthorRow {
        id: i64,
        name: &'static str,
    }

    let rows: &[AuthorRow] = &[
        AuthorRow {
            id: 1,
            name: "Michael Kerrisk",
        },
        AuthorRow {
            id: 2,
            name: "Mara Bos",
        },
        AuthorRow {
            id: 3,
            name: "Jon Gjengset",
        },
    ];

    let mut inserted = 0u64;

    for row in rows {
        let r = sqlx::query(r#"INSERT OR IGNORE INTO authors (id, name) VALUES (?, ?)"#)
            .bind(row.id)
            .bind(row.name)
            .execute(pool)
            .await?;

        if r.rows_affected() > 0 {
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// Seed the demo books.
async fn seed_books(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    #[derive(Debug)]
    struct BookRow {
        id: i64,
        title: &'static str,
        author_id: i64,
    }

    let rows: &[BookRow] = &[
        BookRow {
            id: 1,
            title: "The Linux Programming Interface",
            author_id: 1,
        },
        BookRow {
            id: 2,
            title: "Rust Atomics and Locks",
            author_id: 2,
        },
        BookRow {
            id: 3,
            title: "Rust for Rustaceans",
            author_id: 3,
        },
        BookRow {
            id: 4,
            title: "Learning Async Rust",
            author_id: 3,
        },
    ];

    let mut inserted = 0u64;

    for row in rows {
        let r = sqlx::query(
            r#"INSERT OR IGNORE INTO books (id, title, author_id) VALUES (?, ?, ?)"#,
        )
        .bind(row.id)
        .bind(row.title)
        .bind(row.author_id)
        .execute(pool)
        .await?;

        if r.rows_affected() > 0 {
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// Seed the demo reviews. Timestamps are relative to seed time so the data
/// always looks recent.
async fn seed_reviews(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    #[derive(Debug)]
    struct ReviewRow {
        id: i64,
        book_id: i64,
        reviewer_name: &'static str,
        rating: i64,
        comment: &'static str,
        verified: bool,
        days_ago: i64,
    }

    let rows: &[ReviewRow] = &[
        // The Linux Programming Interface
        ReviewRow {
            id: 1,
            book_id: 1,
            reviewer_name: "Sarah Chen",
            rating: 5,
            comment: "Exceptional deep dive into Linux systems programming! Michael's expertise shines through every chapter.",
            verified: true,
            days_ago: 5,
        },
        ReviewRow {
            id: 2,
            book_id: 1,
            reviewer_name: "Mike Johnson",
            rating: 5,
            comment: "A masterpiece on the Linux API. The examples are practical and the concepts are explained brilliantly!",
            verified: true,
            days_ago: 10,
        },
        // Rust Atomics and Locks
        ReviewRow {
            id: 3,
            book_id: 2,
            reviewer_name: "John Smith",
            rating: 5,
            comment: "Mara delivers a perfect guide to low-level concurrency. Clear, concise, and incredibly practical!",
            verified: true,
            days_ago: 2,
        },
        ReviewRow {
            id: 4,
            book_id: 2,
            reviewer_name: "Anonymous",
            rating: 5,
            comment: "Comprehensive coverage from basics to advanced topics. A must-read for any Rust developer!",
            verified: false,
            days_ago: 15,
        },
        // Rust for Rustaceans
        ReviewRow {
            id: 5,
            book_id: 3,
            reviewer_name: "Linda Martinez",
            rating: 5,
            comment: "Jon's expertise makes intermediate Rust approachable and exciting. Best technical book I've read this year!",
            verified: true,
            days_ago: 7,
        },
        // Learning Async Rust
        ReviewRow {
            id: 6,
            book_id: 4,
            reviewer_name: "David Wilson",
            rating: 5,
            comment: "Fantastic coverage of async Rust! Jon makes complex topics easy to understand.",
            verified: true,
            days_ago: 1,
        },
        ReviewRow {
            id: 7,
            book_id: 4,
            reviewer_name: "Sarah Chen",
            rating: 5,
            comment: "Perfect balance of theory and practice. The examples are gold!",
            verified: true,
            days_ago: 3,
        },
        ReviewRow {
            id: 8,
            book_id: 4,
            reviewer_name: "Bob",
            rating: 5,
            comment: "Comprehensive and well-structured. A perfect guide for all skill levels!",
            verified: false,
            days_ago: 20,
        },
    ];

    let mut inserted = 0u64;

    for row in rows {
        let created_at = Utc::now() - Duration::days(row.days_ago);
        let r = sqlx::query(
            r#"INSERT OR IGNORE INTO reviews
               (id, book_id, reviewer_name, rating, comment, verified, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(row.id)
        .bind(row.book_id)
        .bind(row.reviewer_name)
        .bind(row.rating)
        .bind(row.comment)
        .bind(row.verified)
        .bind(created_at)
        .execute(pool)
        .await?;

        if r.rows_affected() > 0 {
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// Run all seed operations. Individual table failures are collected rather
/// than aborting the remaining seeds.
pub async fn run_seeds(pool: &SqlitePool) -> SeedResult {
    let mut result = SeedResult::default();

    for (table, count) in [
        ("authors", seed_authors(pool).await),
        ("books", seed_books(pool).await),
        ("reviews", seed_reviews(pool).await),
    ] {
        match count {
            Ok(n) => {
                if n > 0 {
                    debug!(table = table, count = n, "Seeded table");
                    result.tables_seeded.push(format!("{} ({} rows)", table, n));
                }
            }
            Err(e) => {
                let msg = format!("Seed {}: {}", table, e);
                warn!("{}", msg);
                result.errors.push(msg);
            }
        }
    }

    if !result.tables_seeded.is_empty() {
        info!(tables = ?result.tables_seeded, "Pre-seed data applied");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::ensure_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await;
        pool
    }

    #[tokio::test]
    async fn seeds_full_catalog_once() {
        let pool = memory_pool().await;

        let result = run_seeds(&pool).await;
        assert!(result.errors.is_empty());
        assert_eq!(
            result.tables_seeded,
            vec!["authors (3 rows)", "books (4 rows)", "reviews (8 rows)"]
        );

        let (books,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(books, 4);
    }

    #[tokio::test]
    async fn reseeding_is_a_no_op() {
        let pool = memory_pool().await;

        run_seeds(&pool).await;
        let second = run_seeds(&pool).await;

        assert!(second.tables_seeded.is_empty());
        assert!(second.errors.is_empty());

        let (reviews,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(reviews, 8);
    }

    #[tokio::test]
    async fn seed_preserves_modified_rows() {
        let pool = memory_pool().await;
        run_seeds(&pool).await;

        sqlx::query("UPDATE books SET title = 'Renamed' WHERE id = 1")
            .execute(&pool)
            .await
            .unwrap();
        run_seeds(&pool).await;

        let (title,): (String,) = sqlx::query_as("SELECT title FROM books WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(title, "Renamed");
    }
}
