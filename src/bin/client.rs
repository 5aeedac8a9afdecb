//! Demo GraphQL client that fetches one book and logs it.
//!
//! Start the server first, then run this binary. The endpoint defaults to
//! the local server and can be overridden with GRAPHQL_URL.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FIND_BOOK_BY_ID: &str = r#"
query findBookById($id: Int!) {
    book(id: $id) {
        id
        title
        author {
            id
            name
        }
    }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphQLEnvelope {
    data: Option<BookData>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct BookData {
    book: Option<Book>,
}

#[derive(Debug, Deserialize)]
struct Book {
    id: i64,
    title: String,
    author: Author,
}

#[derive(Debug, Deserialize)]
struct Author {
    id: i64,
    name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let endpoint = std::env::var("GRAPHQL_URL")
        .unwrap_or_else(|_| "http://localhost:8080/graphql".to_string());

    info!("Retrieving book synchronously from {}", endpoint);

    let client = Client::new();
    let response = client
        .post(&endpoint)
        .json(&json!({
            "query": FIND_BOOK_BY_ID,
            "variables": { "id": 1 },
        }))
        .send()
        .await
        .context("Failed to reach the GraphQL endpoint")?;

    if !response.status().is_success() {
        anyhow::bail!("GraphQL request failed with status: {}", response.status());
    }

    let envelope: GraphQLEnvelope = response
        .json()
        .await
        .context("Failed to parse GraphQL response")?;

    if let Some(err) = envelope.errors.first() {
        anyhow::bail!("GraphQL error: {}", err.message);
    }

    let book = envelope
        .data
        .and_then(|d| d.book)
        .context("Book 1 not found")?;

    info!(
        id = book.id,
        title = %book.title,
        author_id = book.author.id,
        author = %book.author.name,
        "Book retrieved"
    );

    Ok(())
}
