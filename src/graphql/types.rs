//! GraphQL type definitions
//!
//! These types mirror the database records but are decorated with
//! async-graphql attributes. Relation fields resolve through the batch
//! loaders registered on the schema.

use std::time::Duration;

use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, Union};

use crate::db;
use crate::graphql::loaders::{AuthorLoader, BookLoader, BooksByAuthorLoader};

/// An author in the catalog
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let loader = ctx.data_unchecked::<DataLoader<BooksByAuthorLoader>>();
        let books = loader.load_one(self.id).await?.unwrap_or_default();
        Ok(books)
    }

    /// Books fetched one author at a time, as if from a slow remote service.
    /// Takes a full second per author and always comes back empty; it exists
    /// to make the cost of unbatched resolution visible next to `books`.
    async fn books_with_delay(&self) -> Vec<Book> {
        tracing::info!("Retrieving books for author {}", self.name);
        tokio::time::sleep(Duration::from_secs(1)).await;
        Vec::new()
    }
}

/// A book in the catalog
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Book {
    pub id: i64,
    pub title: String,
    #[graphql(skip)]
    pub author_id: i64,
}

#[ComplexObject]
impl Book {
    /// The book's author
    async fn author(&self, ctx: &Context<'_>) -> Result<Author> {
        let loader = ctx.data_unchecked::<DataLoader<AuthorLoader>>();
        let author = loader.load_one(self.author_id).await?.ok_or_else(|| {
            async_graphql::Error::new(format!("Author {} not found", self.author_id))
        })?;
        Ok(author)
    }
}

/// A reader review of a book
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Review {
    pub id: i64,
    #[graphql(skip)]
    pub book_id: i64,
    pub reviewer_name: String,
    pub rating: i64,
    pub comment: Option<String>,
    pub verified: bool,
    /// When the review was written (RFC 3339)
    pub created_at: String,
}

#[ComplexObject]
impl Review {
    /// The reviewed book
    async fn book(&self, ctx: &Context<'_>) -> Result<Book> {
        let loader = ctx.data_unchecked::<DataLoader<BookLoader>>();
        let book = loader.load_one(self.book_id).await?.ok_or_else(|| {
            async_graphql::Error::new(format!("Book {} not found", self.book_id))
        })?;
        Ok(book)
    }
}

/// A full-text search hit, either an author or a book
#[derive(Debug, Clone, Union)]
pub enum SearchItem {
    Author(Author),
    Book(Book),
}

/// Input for adding a book to the catalog
#[derive(Debug, InputObject)]
pub struct BookInput {
    pub title: String,
    pub author_id: i64,
}

/// Filter options for the reviews query
///
/// Present fields are combined with AND; the reviewer name matches as a
/// case-insensitive substring, the others match exactly.
#[derive(Debug, Default, InputObject)]
#[graphql(name = "ReviewFilter")]
pub struct ReviewFilterInput {
    pub rating: Option<i64>,
    pub verified: Option<bool>,
    pub reviewer_name: Option<String>,
}

impl From<ReviewFilterInput> for db::ReviewFilter {
    fn from(filter: ReviewFilterInput) -> Self {
        Self {
            rating: filter.rating,
            verified: filter.verified,
            reviewer_name: filter.reviewer_name,
        }
    }
}
