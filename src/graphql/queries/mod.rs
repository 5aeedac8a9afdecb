pub mod authors;
pub mod books;
pub mod reviews;
pub mod search;

pub use authors::AuthorQueries;
pub use books::BookQueries;
pub use reviews::ReviewQueries;
pub use search::SearchQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::db::*;
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::types::*;
}
