//! Receipt Service - lifecycle rules and reference checks

use database::mongodb::timestamp;
use domain_catalog::{CatalogRepository, CatalogService};
use list_query::{ListQuery, Page, PaginationConfig};
use serde_json::Value;
use std::{marker::PhantomData, sync::Arc};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ReceiptError, ReceiptResult};
use crate::models::{Receipt, ReceiptStatus};
use crate::repository::ReceiptRepository;

/// Business rules for one kind of receipt.
///
/// Every write checks that the referenced branch, supplier (import only)
/// and product items exist. Only drafts may change; approve and cancel
/// are one-way.
pub struct ReceiptService<T, R, C>
where
    T: Receipt,
    R: ReceiptRepository<T>,
    C: CatalogRepository,
{
    repository: Arc<R>,
    catalog: CatalogService<C>,
    pagination: PaginationConfig,
    _receipt: PhantomData<fn() -> T>,
}

impl<T, R, C> ReceiptService<T, R, C>
where
    T: Receipt,
    R: ReceiptRepository<T>,
    C: CatalogRepository,
{
    pub fn new(repository: R, catalog: CatalogService<C>, pagination: PaginationConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            catalog,
            pagination,
            _receipt: PhantomData,
        }
    }

    #[instrument(skip(self, input), fields(kind = T::LABEL))]
    pub async fn create(&self, input: T::Create, created_by: Uuid) -> ReceiptResult<T> {
        input.validate()?;

        let receipt = T::new(input, created_by);
        self.check_references(&receipt).await?;
        self.repository.insert(receipt).await
    }

    #[instrument(skip(self), fields(kind = T::LABEL))]
    pub async fn get(&self, id: Uuid) -> ReceiptResult<T> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ReceiptError::NotFound { label: T::LABEL, id })
    }

    /// Lists receipts from raw query-string pairs, applying the `fields`
    /// projection when present.
    #[instrument(skip(self, pairs), fields(kind = T::LABEL))]
    pub async fn list(&self, pairs: &[(String, String)]) -> ReceiptResult<Page<Value>> {
        let query = ListQuery::parse(pairs, &T::filter_schema(), &self.pagination)?;
        let fields = query.fields.clone();
        let page = self.repository.list(query).await?;
        Ok(page.project(fields.as_deref())?)
    }

    #[instrument(skip(self, update), fields(kind = T::LABEL))]
    pub async fn update(&self, id: Uuid, update: T::Update) -> ReceiptResult<T> {
        update.validate()?;

        let mut receipt = self.get(id).await?;
        self.ensure_draft(&receipt)?;

        receipt.apply_update(update);
        self.check_references(&receipt).await?;

        if !self.repository.replace_draft(receipt.clone()).await? {
            // Approved or cancelled since it was read.
            return Err(self.conflict_or_missing(id).await);
        }
        Ok(receipt)
    }

    #[instrument(skip(self), fields(kind = T::LABEL))]
    pub async fn approve(&self, id: Uuid) -> ReceiptResult<T> {
        self.transition(id, ReceiptStatus::Approved).await
    }

    #[instrument(skip(self), fields(kind = T::LABEL))]
    pub async fn cancel(&self, id: Uuid) -> ReceiptResult<T> {
        self.transition(id, ReceiptStatus::Cancelled).await
    }

    async fn transition(&self, id: Uuid, status: ReceiptStatus) -> ReceiptResult<T> {
        match self.repository.transition(id, status, timestamp::now()).await? {
            Some(receipt) => Ok(receipt),
            None => Err(self.conflict_or_missing(id).await),
        }
    }

    fn ensure_draft(&self, receipt: &T) -> ReceiptResult<()> {
        match receipt.status() {
            ReceiptStatus::Draft => Ok(()),
            status => Err(ReceiptError::NotDraft {
                label: T::LABEL,
                id: receipt.id(),
                status,
            }),
        }
    }

    /// Explains why a draft-only write matched nothing.
    async fn conflict_or_missing(&self, id: Uuid) -> ReceiptError {
        match self.get(id).await {
            Ok(receipt) => match self.ensure_draft(&receipt) {
                Err(err) => err,
                // Back to draft is impossible, so this is a lost race on a deleted receipt.
                Ok(()) => ReceiptError::NotFound { label: T::LABEL, id },
            },
            Err(err) => err,
        }
    }

    async fn check_references(&self, receipt: &T) -> ReceiptResult<()> {
        self.catalog.require_branch(receipt.branch_id()).await?;
        if let Some(supplier_id) = receipt.supplier_id() {
            self.catalog.require_supplier(supplier_id).await?;
        }
        self.catalog
            .require_product_items(&receipt.product_item_ids())
            .await?;
        Ok(())
    }
}

impl<T, R, C> Clone for ReceiptService<T, R, C>
where
    T: Receipt,
    R: ReceiptRepository<T>,
    C: CatalogRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            catalog: self.catalog.clone(),
            pagination: self.pagination,
            _receipt: PhantomData,
        }
    }
}
