use async_trait::async_trait;
use chrono::{DateTime, Utc};
use list_query::{ListQuery, Page};
use uuid::Uuid;

use crate::error::ReceiptResult;
use crate::models::{Receipt, ReceiptStatus};

/// Persistence for one kind of receipt.
///
/// Writes that depend on the lifecycle are conditional on the stored
/// status still being `draft`, so two concurrent transitions cannot both
/// succeed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReceiptRepository<T: Receipt>: Send + Sync {
    async fn insert(&self, receipt: T) -> ReceiptResult<T>;

    async fn find_by_id(&self, id: Uuid) -> ReceiptResult<Option<T>>;

    async fn list(&self, query: ListQuery) -> ReceiptResult<Page<T>>;

    /// Replaces a receipt that is still a draft. `false` when no draft
    /// with that id exists.
    async fn replace_draft(&self, receipt: T) -> ReceiptResult<bool>;

    /// Moves a draft to `status`, returning the updated receipt, or `None`
    /// when no draft with that id exists.
    async fn transition(
        &self,
        id: Uuid,
        status: ReceiptStatus,
        at: DateTime<Utc>,
    ) -> ReceiptResult<Option<T>>;
}
