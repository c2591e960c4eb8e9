//! MongoDB implementations of ReviewRepository and WishlistRepository

use async_trait::async_trait;
use database::mongodb::{id_filter, is_duplicate_key_error, uuid_to_bson};
use domain_catalog::RatingSummary;
use futures_util::TryStreamExt;
use list_query::{ListQuery, Page, find_page};
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc},
    options::IndexOptions,
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ReviewError, ReviewResult};
use crate::models::{Review, WishlistEntry};
use crate::repository::{RatingTarget, ReviewRepository, ReviewScope, WishlistRepository};

const REVIEWS: &str = "reviews";
const WISHLISTS: &str = "wishlists";

#[derive(Debug, Deserialize)]
struct RatingAggregate {
    avg: Option<f64>,
    count: i64,
}

pub struct MongoReviewRepository {
    collection: Collection<Review>,
}

impl MongoReviewRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(REVIEWS),
        }
    }

    pub async fn init_indexes(&self) -> ReviewResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "userId": 1, "productItemId": 1, "orderId": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_user_item_order_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "productId": 1, "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_product_created".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "productItemId": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_product_item".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Review indexes created successfully");
        Ok(())
    }

    fn summary_pipeline(target: RatingTarget) -> Vec<Document> {
        vec![
            doc! { "$match": target.filter() },
            doc! {
                "$group": {
                    "_id": null,
                    "avg": { "$avg": "$rating" },
                    "count": { "$sum": 1 },
                }
            },
        ]
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    #[instrument(skip(self, review), fields(review_id = %review.id))]
    async fn insert(&self, review: Review) -> ReviewResult<Review> {
        match self.collection.insert_one(&review).await {
            Ok(_) => {
                tracing::info!(product_item_id = %review.product_item_id, "Review created successfully");
                Ok(review)
            }
            Err(e) if is_duplicate_key_error(&e) => Err(ReviewError::AlreadyReviewed),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> ReviewResult<Option<Review>> {
        Ok(self.collection.find_one(id_filter(id)).await?)
    }

    #[instrument(skip(self, query))]
    async fn list(&self, query: ListQuery, scope: ReviewScope) -> ReviewResult<Page<Review>> {
        Ok(find_page(&self.collection, &query, scope.filter()).await?)
    }

    #[instrument(skip(self, review), fields(review_id = %review.id))]
    async fn replace(&self, review: Review) -> ReviewResult<bool> {
        let result = self
            .collection
            .replace_one(id_filter(review.id), &review)
            .await?;

        if result.matched_count > 0 {
            tracing::info!("Review updated successfully");
        }
        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ReviewResult<bool> {
        let result = self.collection.delete_one(id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!("Review deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn rating_summary(&self, target: RatingTarget) -> ReviewResult<RatingSummary> {
        let mut cursor = self
            .collection
            .aggregate(Self::summary_pipeline(target))
            .with_type::<RatingAggregate>()
            .await?;

        let summary = match cursor.try_next().await? {
            Some(RatingAggregate { avg: Some(avg), count }) => {
                RatingSummary::new(avg, u64::try_from(count).unwrap_or_default())
            }
            _ => RatingSummary::default(),
        };
        Ok(summary)
    }
}

pub struct MongoWishlistRepository {
    collection: Collection<WishlistEntry>,
}

impl MongoWishlistRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(WISHLISTS),
        }
    }

    pub async fn init_indexes(&self) -> ReviewResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "userId": 1, "productItemId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_user_item_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("Wishlist indexes created successfully");
        Ok(())
    }

    fn pair_filter(user_id: Uuid, product_item_id: Uuid) -> Document {
        doc! {
            "userId": uuid_to_bson(user_id),
            "productItemId": uuid_to_bson(product_item_id),
        }
    }
}

#[async_trait]
impl WishlistRepository for MongoWishlistRepository {
    #[instrument(skip(self))]
    async fn remove(&self, user_id: Uuid, product_item_id: Uuid) -> ReviewResult<bool> {
        let result = self
            .collection
            .delete_one(Self::pair_filter(user_id, product_item_id))
            .await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self, entry), fields(user_id = %entry.user_id, product_item_id = %entry.product_item_id))]
    async fn insert(&self, entry: WishlistEntry) -> ReviewResult<bool> {
        match self.collection.insert_one(&entry).await {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key_error(&e) => {
                tracing::debug!("Wishlist entry already present");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, query))]
    async fn list(&self, query: ListQuery, user_id: Uuid) -> ReviewResult<Page<WishlistEntry>> {
        let scope = doc! { "userId": uuid_to_bson(user_id) };
        Ok(find_page(&self.collection, &query, scope).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_pipeline_matches_target() {
        let id = Uuid::now_v7();
        let pipeline = MongoReviewRepository::summary_pipeline(RatingTarget::Product(id));
        let stage = pipeline[0].get_document("$match").unwrap();
        assert_eq!(stage.get("productId"), Some(&uuid_to_bson(id)));

        let pipeline = MongoReviewRepository::summary_pipeline(RatingTarget::ProductItem(id));
        let stage = pipeline[0].get_document("$match").unwrap();
        assert_eq!(stage.get("productItemId"), Some(&uuid_to_bson(id)));
        assert!(pipeline[1].get_document("$group").is_ok());
    }

    #[test]
    fn test_pair_filter() {
        let user = Uuid::now_v7();
        let item = Uuid::now_v7();
        let filter = MongoWishlistRepository::pair_filter(user, item);
        assert_eq!(filter.get("userId"), Some(&uuid_to_bson(user)));
        assert_eq!(filter.get("productItemId"), Some(&uuid_to_bson(item)));
    }
}
