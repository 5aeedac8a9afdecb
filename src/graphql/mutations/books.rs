use super::prelude::*;

#[derive(Default)]
pub struct BookMutations;

#[Object]
impl BookMutations {
    /// Add a new book for an existing author
    async fn add_book(&self, ctx: &Context<'_>, book_input: BookInput) -> Result<Book> {
        let db = ctx.data_unchecked::<Database>();

        let author = db
            .authors()
            .get_by_id(book_input.author_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?
            .ok_or_else(|| {
                async_graphql::Error::new(format!("Author {} not found", book_input.author_id))
            })?;

        let record = db
            .books()
            .create(CreateBook {
                title: book_input.title,
                author_id: author.id,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        tracing::info!(book_id = record.id, "Added book '{}'", record.title);
        Ok(book_record_to_graphql(record))
    }
}
