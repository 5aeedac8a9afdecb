//! Static schema creation for the book catalog
//!
//! The schema is three fixed tables (authors, books, reviews) created with
//! CREATE TABLE IF NOT EXISTS, so startup is idempotent against an existing
//! database file. Does NOT handle column renames or type changes.

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Result of a schema sync operation
#[derive(Debug, Default)]
pub struct SchemaSyncResult {
    pub tables_created: Vec<String>,
    pub errors: Vec<String>,
}

/// Check if a table exists in the database
async fn table_exists(pool: &SqlitePool, table_name: &str) -> Result<bool, sqlx::Error> {
    let result: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")
            .bind(table_name)
            .fetch_optional(pool)
            .await?;

    Ok(result.is_some())
}

const AUTHORS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS authors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
"#;

const BOOKS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author_id INTEGER NOT NULL REFERENCES authors(id)
    )
"#;

const REVIEWS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS reviews (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        book_id INTEGER NOT NULL REFERENCES books(id),
        reviewer_name TEXT NOT NULL,
        rating INTEGER NOT NULL,
        comment TEXT,
        verified INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    )
"#;

/// Create all catalog tables that are missing.
///
/// Tables are created in dependency order (authors before books before
/// reviews) so the foreign key references always resolve.
pub async fn ensure_schema(pool: &SqlitePool) -> SchemaSyncResult {
    let mut result = SchemaSyncResult::default();

    for (table, sql) in [
        ("authors", AUTHORS_SQL),
        ("books", BOOKS_SQL),
        ("reviews", REVIEWS_SQL),
    ] {
        let existed = table_exists(pool, table).await.unwrap_or(false);
        debug!("Ensuring table {}", table);

        match sqlx::query(sql.trim()).execute(pool).await {
            Ok(_) => {
                if !existed {
                    info!("Created table: {}", table);
                    result.tables_created.push(table.to_string());
                }
            }
            Err(e) => {
                let msg = format!("Failed to create table {}: {}", table, e);
                warn!("{}", msg);
                result.errors.push(msg);
            }
        }
    }

    result
}
