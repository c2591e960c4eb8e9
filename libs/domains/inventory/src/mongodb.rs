//! MongoDB implementation of ReceiptRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::mongodb::{to_bson_datetime, uuid_to_bson};
use list_query::{ListQuery, Page, find_page};
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc},
    options::{IndexOptions, ReturnDocument},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ReceiptResult;
use crate::models::{Receipt, ReceiptStatus};
use crate::repository::ReceiptRepository;

/// Receipts of kind `T`, stored in `T::COLLECTION`.
pub struct MongoReceiptRepository<T: Receipt> {
    collection: Collection<T>,
}

impl<T: Receipt> MongoReceiptRepository<T> {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<T>(T::COLLECTION),
        }
    }

    pub async fn init_indexes(&self) -> ReceiptResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "status": 1, "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_status_created".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "branchId": 1, "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_branch_created".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!(collection = T::COLLECTION, "Receipt indexes created successfully");
        Ok(())
    }

    fn draft_filter(id: Uuid) -> Document {
        doc! {
            "_id": uuid_to_bson(id),
            "status": ReceiptStatus::Draft.to_string(),
        }
    }

    fn transition_update(status: ReceiptStatus, at: DateTime<Utc>) -> Document {
        let at = to_bson_datetime(at);
        let mut set = doc! {
            "status": status.to_string(),
            "updatedAt": at.clone(),
        };
        if let Some(field) = status.timestamp_field() {
            set.insert(field, at);
        }
        doc! { "$set": set }
    }
}

#[async_trait]
impl<T: Receipt> ReceiptRepository<T> for MongoReceiptRepository<T> {
    #[instrument(skip(self, receipt), fields(collection = T::COLLECTION))]
    async fn insert(&self, receipt: T) -> ReceiptResult<T> {
        self.collection.insert_one(&receipt).await?;

        tracing::info!(receipt_id = %receipt.id(), "Receipt created successfully");
        Ok(receipt)
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn find_by_id(&self, id: Uuid) -> ReceiptResult<Option<T>> {
        let filter = doc! { "_id": uuid_to_bson(id) };
        Ok(self.collection.find_one(filter).await?)
    }

    #[instrument(skip(self, query), fields(collection = T::COLLECTION))]
    async fn list(&self, query: ListQuery) -> ReceiptResult<Page<T>> {
        Ok(find_page(&self.collection, &query, Document::new()).await?)
    }

    #[instrument(skip(self, receipt), fields(collection = T::COLLECTION))]
    async fn replace_draft(&self, receipt: T) -> ReceiptResult<bool> {
        let id = receipt.id();
        let result = self
            .collection
            .replace_one(Self::draft_filter(id), &receipt)
            .await?;

        if result.matched_count > 0 {
            tracing::info!(receipt_id = %id, "Receipt updated successfully");
        }
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn transition(
        &self,
        id: Uuid,
        status: ReceiptStatus,
        at: DateTime<Utc>,
    ) -> ReceiptResult<Option<T>> {
        let updated = self
            .collection
            .find_one_and_update(Self::draft_filter(id), Self::transition_update(status, at))
            .return_document(ReturnDocument::After)
            .await?;

        if updated.is_some() {
            tracing::info!(receipt_id = %id, status = %status, "Receipt status changed");
        }
        Ok(updated)
    }
}
