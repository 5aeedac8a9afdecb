use super::prelude::*;

#[derive(Default)]
pub struct ReviewQueries;

#[Object]
impl ReviewQueries {
    /// Get reviews, optionally narrowed by a filter. With no filter every
    /// review is returned.
    async fn reviews(
        &self,
        ctx: &Context<'_>,
        filter: Option<ReviewFilterInput>,
    ) -> Result<Vec<Review>> {
        let db = ctx.data_unchecked::<Database>();
        tracing::info!("Searching for reviews with filter: {:?}", filter);

        let records = db
            .reviews()
            .list(filter.map(Into::into).unwrap_or_default())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        tracing::info!("Found {} reviews", records.len());
        Ok(records.into_iter().map(review_record_to_graphql).collect())
    }
}
