use futures_util::TryStreamExt;
use mongodb::{Collection, bson::Document};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::page::Page;
use crate::query::ListQuery;

/// Runs `query` against `collection`, with `scope` taking precedence over
/// client conditions.
#[instrument(skip_all, fields(collection = %collection.name()))]
pub async fn find_page<T>(
    collection: &Collection<T>,
    query: &ListQuery,
    scope: Document,
) -> mongodb::error::Result<Page<T>>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let filter = query.filter_document(scope);
    let total = collection.count_documents(filter.clone()).await?;
    if query.pagination.skip() >= total {
        tracing::debug!(total, page = query.pagination.page, "Page past the last match");
        return Ok(Page::new(Vec::new(), total, &query.pagination));
    }

    let mut find = collection
        .find(filter)
        .sort(query.sort_document())
        .skip(query.pagination.skip());
    if let Some(limit) = query.pagination.limit {
        find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
    }
    let items: Vec<T> = find.await?.try_collect().await?;

    tracing::debug!(total, returned = items.len(), "List query executed");
    Ok(Page::new(items, total, &query.pagination))
}
