//! GraphQL schema assembly
//!
//! This is the single API surface for the bookshelf backend. Queries and
//! mutations live in domain-specific modules under `queries/` and
//! `mutations/` and are merged into the roots here.

use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::db::Database;

use super::loaders::{AuthorLoader, BookLoader, BooksByAuthorLoader};
use super::mutations::BookMutations;
use super::queries::{AuthorQueries, BookQueries, ReviewQueries, SearchQueries};

/// The GraphQL schema type
pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AuthorQueries, BookQueries, ReviewQueries, SearchQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(BookMutations);

/// Build the GraphQL schema with all resolvers and batch loaders
pub fn build_schema(db: Database) -> BookshelfSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(DataLoader::new(
        BooksByAuthorLoader::new(db.clone()),
        tokio::spawn,
    ))
    .data(DataLoader::new(AuthorLoader::new(db.clone()), tokio::spawn))
    .data(DataLoader::new(BookLoader::new(db.clone()), tokio::spawn))
    .data(db)
    .finish()
}
