use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Get all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db
            .books()
            .list()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(records.into_iter().map(book_record_to_graphql).collect())
    }

    /// Get a specific book by ID
    async fn book(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Book>> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .books()
            .get_by_id(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(record.map(book_record_to_graphql))
    }
}
