//! GraphQL API for the book catalog
//!
//! This module provides a GraphQL API using async-graphql with queries and
//! mutations over HTTP.
//!
//! Queries and mutations are organized as domain-specific files under
//! `queries/` and `mutations/`. Each file defines a struct with
//! `#[derive(Default)]` and an `#[Object]` impl, and `schema.rs` combines
//! them into QueryRoot/MutationRoot with `#[derive(MergedObject)]`.

pub mod helpers;
pub mod loaders;
pub mod mutations;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{BookshelfSchema, build_schema};
