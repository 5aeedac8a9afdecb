//! API route definitions
//!
//! The primary API is GraphQL at /graphql; the REST surface is limited to
//! health probes.

pub mod health;
