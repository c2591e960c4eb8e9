//! MongoDB implementation of CatalogRepository

use async_trait::async_trait;
use database::mongodb::{id_filter, timestamp, to_bson_datetime, uuid_to_bson};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc},
    options::IndexOptions,
};
use std::collections::HashSet;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Branch, Order, Product, ProductItem, RatingSummary, Supplier};
use crate::repository::CatalogRepository;

pub struct MongoCatalogRepository {
    products: Collection<Product>,
    product_items: Collection<ProductItem>,
    branches: Collection<Branch>,
    suppliers: Collection<Supplier>,
    orders: Collection<Order>,
}

impl MongoCatalogRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            products: db.collection("products"),
            product_items: db.collection("productItems"),
            branches: db.collection("branches"),
            suppliers: db.collection("suppliers"),
            orders: db.collection("orders"),
        }
    }

    /// Lookup indexes used by review creation.
    pub async fn init_indexes(&self) -> CatalogResult<()> {
        self.product_items
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "productId": 1 })
                    .options(
                        IndexOptions::builder()
                            .name("idx_product_id".to_string())
                            .build(),
                    )
                    .build(),
            )
            .await?;

        self.orders
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "userId": 1, "status": 1 })
                    .options(
                        IndexOptions::builder()
                            .name("idx_user_status".to_string())
                            .build(),
                    )
                    .build(),
            )
            .await?;

        tracing::info!("Catalog indexes created successfully");
        Ok(())
    }

    fn rating_update(summary: RatingSummary) -> Document {
        let review_count = i64::try_from(summary.review_count).unwrap_or(i64::MAX);
        doc! {
            "$set": {
                "ratingAvg": summary.rating_avg,
                "reviewCount": review_count,
                "updatedAt": to_bson_datetime(timestamp::now()),
            }
        }
    }
}

#[async_trait]
impl CatalogRepository for MongoCatalogRepository {
    #[instrument(skip(self))]
    async fn find_product_item(&self, id: Uuid) -> CatalogResult<Option<ProductItem>> {
        Ok(self.product_items.find_one(id_filter(id)).await?)
    }

    #[instrument(skip(self))]
    async fn find_order(&self, id: Uuid) -> CatalogResult<Option<Order>> {
        Ok(self.orders.find_one(id_filter(id)).await?)
    }

    #[instrument(skip(self))]
    async fn product_exists(&self, id: Uuid) -> CatalogResult<bool> {
        Ok(self.products.count_documents(id_filter(id)).await? > 0)
    }

    #[instrument(skip(self))]
    async fn branch_exists(&self, id: Uuid) -> CatalogResult<bool> {
        Ok(self.branches.count_documents(id_filter(id)).await? > 0)
    }

    #[instrument(skip(self))]
    async fn supplier_exists(&self, id: Uuid) -> CatalogResult<bool> {
        Ok(self.suppliers.count_documents(id_filter(id)).await? > 0)
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn missing_product_items(&self, ids: Vec<Uuid>) -> CatalogResult<Vec<Uuid>> {
        let wanted: Vec<Bson> = ids.iter().copied().map(uuid_to_bson).collect();
        let found: HashSet<Uuid> = self
            .product_items
            .find(doc! { "_id": { "$in": wanted } })
            .await?
            .map_ok(|item| item.id)
            .try_collect()
            .await?;

        let mut missing: Vec<Uuid> = ids.into_iter().filter(|id| !found.contains(id)).collect();
        missing.dedup();
        Ok(missing)
    }

    #[instrument(skip(self))]
    async fn set_product_item_rating(
        &self,
        id: Uuid,
        summary: RatingSummary,
    ) -> CatalogResult<()> {
        let result = self
            .product_items
            .update_one(id_filter(id), Self::rating_update(summary))
            .await?;
        if result.matched_count == 0 {
            return Err(CatalogError::ProductItemNotFound(id));
        }

        tracing::info!(product_item_id = %id, rating_avg = summary.rating_avg, review_count = summary.review_count, "Product item rating updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_product_rating(&self, id: Uuid, summary: RatingSummary) -> CatalogResult<()> {
        let result = self
            .products
            .update_one(id_filter(id), Self::rating_update(summary))
            .await?;
        if result.matched_count == 0 {
            return Err(CatalogError::ProductNotFound(id));
        }

        tracing::info!(product_id = %id, rating_avg = summary.rating_avg, review_count = summary.review_count, "Product rating updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_update_overwrites_both_fields() {
        let update = MongoCatalogRepository::rating_update(RatingSummary::new(13.0 / 3.0, 3));
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_f64("ratingAvg").unwrap(), 13.0 / 3.0);
        assert_eq!(set.get_i64("reviewCount").unwrap(), 3);
        assert!(set.get_datetime("updatedAt").is_ok());
    }
}
