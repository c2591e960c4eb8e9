use async_trait::async_trait;
use database::mongodb::uuid_to_bson;
use domain_catalog::RatingSummary;
use list_query::{ListQuery, Page};
use mongodb::bson::{Document, doc};
use uuid::Uuid;

use crate::error::ReviewResult;
use crate::models::{Review, WishlistEntry};

/// Which reviews a list request may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewScope {
    Product(Uuid),
    User(Uuid),
}

impl ReviewScope {
    pub fn filter(&self) -> Document {
        match self {
            ReviewScope::Product(id) => doc! { "productId": uuid_to_bson(*id) },
            ReviewScope::User(id) => doc! { "userId": uuid_to_bson(*id) },
        }
    }
}

/// Entity whose rating aggregate is computed over its reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTarget {
    ProductItem(Uuid),
    Product(Uuid),
}

impl RatingTarget {
    pub fn filter(&self) -> Document {
        match self {
            RatingTarget::ProductItem(id) => doc! { "productItemId": uuid_to_bson(*id) },
            RatingTarget::Product(id) => doc! { "productId": uuid_to_bson(*id) },
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Fails with `AlreadyReviewed` when the `(user, item, order)` triple exists.
    async fn insert(&self, review: Review) -> ReviewResult<Review>;

    async fn find_by_id(&self, id: Uuid) -> ReviewResult<Option<Review>>;

    async fn list(&self, query: ListQuery, scope: ReviewScope) -> ReviewResult<Page<Review>>;

    /// `false` when the review no longer exists.
    async fn replace(&self, review: Review) -> ReviewResult<bool>;

    async fn delete(&self, id: Uuid) -> ReviewResult<bool>;

    /// Average and count over every review of `target`; `(0, 0)` with none.
    async fn rating_summary(&self, target: RatingTarget) -> ReviewResult<RatingSummary>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// `true` when an entry was deleted.
    async fn remove(&self, user_id: Uuid, product_item_id: Uuid) -> ReviewResult<bool>;

    /// `false` when the pair already exists.
    async fn insert(&self, entry: WishlistEntry) -> ReviewResult<bool>;

    async fn list(&self, query: ListQuery, user_id: Uuid) -> ReviewResult<Page<WishlistEntry>>;
}
