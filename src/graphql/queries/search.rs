use super::prelude::*;

#[derive(Default)]
pub struct SearchQueries;

#[Object]
impl SearchQueries {
    /// Search authors and books by a text fragment (case-insensitive).
    /// Matching authors come first, then matching books.
    async fn search(&self, ctx: &Context<'_>, text: String) -> Result<Vec<SearchItem>> {
        let db = ctx.data_unchecked::<Database>();
        tracing::debug!("Searching for '{}'", text);

        let mut results = Vec::new();

        let authors = db
            .authors()
            .search_by_name(&text)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        results.extend(
            authors
                .into_iter()
                .map(|r| SearchItem::Author(author_record_to_graphql(r))),
        );

        let books = db
            .books()
            .search_by_title(&text)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        results.extend(
            books
                .into_iter()
                .map(|r| SearchItem::Book(book_record_to_graphql(r))),
        );

        Ok(results)
    }
}
