//! Review and wishlist business rules

use domain_catalog::{CatalogRepository, CatalogService};
use list_query::{ListQuery, Page, PaginationConfig};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ReviewError, ReviewResult};
use crate::models::{
    CreateReview, Review, ToggleWishlist, UpdateReview, WishlistAction, WishlistEntry,
    WishlistToggle,
};
use crate::repository::{RatingTarget, ReviewRepository, ReviewScope, WishlistRepository};

/// Reviews of delivered order lines, plus the rating aggregates they feed.
///
/// Every write that can change a rating recomputes `ratingAvg` and
/// `reviewCount` on the reviewed product item and its parent product.
pub struct ReviewService<R: ReviewRepository, C: CatalogRepository> {
    repository: Arc<R>,
    catalog: CatalogService<C>,
    pagination: PaginationConfig,
}

impl<R: ReviewRepository, C: CatalogRepository> ReviewService<R, C> {
    pub fn new(repository: R, catalog: CatalogService<C>, pagination: PaginationConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            catalog,
            pagination,
        }
    }

    /// Creates a review for an item of one of the caller's delivered orders.
    #[instrument(skip(self, input), fields(product_item_id = %input.product_item_id, order_id = %input.order_id))]
    pub async fn create(&self, input: CreateReview, user_id: Uuid) -> ReviewResult<Review> {
        input.validate()?;

        let item = self.catalog.product_item(input.product_item_id).await?;
        let order = self.catalog.order(input.order_id).await?;

        if order.user_id != user_id {
            return Err(ReviewError::NotOrderOwner(order.id));
        }
        if !order.contains_item(item.id) {
            return Err(ReviewError::ItemNotInOrder {
                order_id: order.id,
                product_item_id: item.id,
            });
        }
        if !order.is_delivered() {
            return Err(ReviewError::OrderNotDelivered(order.id));
        }

        let review = self
            .repository
            .insert(Review::new(input, user_id, item.product_id))
            .await?;
        self.refresh_ratings(&review).await?;
        Ok(review)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ReviewResult<Review> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ReviewError::NotFound(id))
    }

    /// Public listing of a product's reviews.
    #[instrument(skip(self, pairs))]
    pub async fn list_for_product(
        &self,
        product_id: Uuid,
        pairs: &[(String, String)],
    ) -> ReviewResult<Page<Value>> {
        self.catalog.require_product(product_id).await?;
        self.list(pairs, ReviewScope::Product(product_id)).await
    }

    #[instrument(skip(self, pairs))]
    pub async fn list_mine(
        &self,
        user_id: Uuid,
        pairs: &[(String, String)],
    ) -> ReviewResult<Page<Value>> {
        self.list(pairs, ReviewScope::User(user_id)).await
    }

    #[instrument(skip(self, update))]
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        update: UpdateReview,
    ) -> ReviewResult<Review> {
        update.validate()?;

        let mut review = self.get(id).await?;
        Self::ensure_author(&review, user_id)?;

        let rating_changed = review.apply_update(update);
        if !self.repository.replace(review.clone()).await? {
            return Err(ReviewError::NotFound(id));
        }
        if rating_changed {
            self.refresh_ratings(&review).await?;
        }
        Ok(review)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> ReviewResult<Review> {
        let review = self.get(id).await?;
        Self::ensure_author(&review, user_id)?;

        if !self.repository.delete(id).await? {
            return Err(ReviewError::NotFound(id));
        }
        self.refresh_ratings(&review).await?;
        Ok(review)
    }

    async fn list(&self, pairs: &[(String, String)], scope: ReviewScope) -> ReviewResult<Page<Value>> {
        let query = ListQuery::parse(pairs, &Review::filter_schema(), &self.pagination)?;
        let fields = query.fields.clone();
        let page = self.repository.list(query, scope).await?;
        Ok(page.project(fields.as_deref())?)
    }

    fn ensure_author(review: &Review, user_id: Uuid) -> ReviewResult<()> {
        if review.user_id != user_id {
            return Err(ReviewError::NotAuthor);
        }
        Ok(())
    }

    /// Recomputes both aggregates from the stored reviews and overwrites them.
    async fn refresh_ratings(&self, review: &Review) -> ReviewResult<()> {
        let item = self
            .repository
            .rating_summary(RatingTarget::ProductItem(review.product_item_id))
            .await?;
        let product = self
            .repository
            .rating_summary(RatingTarget::Product(review.product_id))
            .await?;

        self.catalog
            .update_ratings(review.product_item_id, item, review.product_id, product)
            .await?;
        tracing::info!(
            product_item_id = %review.product_item_id,
            item_rating = item.rating_avg,
            item_reviews = item.review_count,
            product_id = %review.product_id,
            product_rating = product.rating_avg,
            "Ratings refreshed"
        );
        Ok(())
    }
}

impl<R: ReviewRepository, C: CatalogRepository> Clone for ReviewService<R, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            catalog: self.catalog.clone(),
            pagination: self.pagination,
        }
    }
}

/// Per-user wishlist with toggle semantics.
pub struct WishlistService<W: WishlistRepository, C: CatalogRepository> {
    repository: Arc<W>,
    catalog: CatalogService<C>,
    pagination: PaginationConfig,
}

impl<W: WishlistRepository, C: CatalogRepository> WishlistService<W, C> {
    pub fn new(repository: W, catalog: CatalogService<C>, pagination: PaginationConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            catalog,
            pagination,
        }
    }

    /// Removes the item when present, otherwise adds it.
    ///
    /// An insert that loses a race with a concurrent toggle still reports
    /// `added`: the item is in the wishlist either way.
    #[instrument(skip(self, input), fields(product_item_id = %input.product_item_id))]
    pub async fn toggle(&self, user_id: Uuid, input: ToggleWishlist) -> ReviewResult<WishlistToggle> {
        let item_id = input.product_item_id;

        if self.repository.remove(user_id, item_id).await? {
            tracing::info!(user_id = %user_id, "Removed from wishlist");
            return Ok(WishlistToggle::new(item_id, WishlistAction::Removed));
        }

        let item = self.catalog.product_item(item_id).await?;
        let inserted = self
            .repository
            .insert(WishlistEntry::new(user_id, item.id, item.product_id))
            .await?;
        tracing::info!(user_id = %user_id, inserted, "Added to wishlist");
        Ok(WishlistToggle::new(item_id, WishlistAction::Added))
    }

    #[instrument(skip(self, pairs))]
    pub async fn list(&self, user_id: Uuid, pairs: &[(String, String)]) -> ReviewResult<Page<Value>> {
        let query = ListQuery::parse(pairs, &WishlistEntry::filter_schema(), &self.pagination)?;
        let fields = query.fields.clone();
        let page = self.repository.list(query, user_id).await?;
        Ok(page.project(fields.as_deref())?)
    }
}

impl<W: WishlistRepository, C: CatalogRepository> Clone for WishlistService<W, C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            catalog: self.catalog.clone(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockReviewRepository, MockWishlistRepository};
    use domain_catalog::{
        CatalogError, MockCatalogRepository, Order, OrderItem, OrderStatus, ProductItem,
        RatingSummary,
    };
    use mockall::predicate::eq;
    use std::sync::Mutex;

    struct Fixture {
        user_id: Uuid,
        product_id: Uuid,
        item: ProductItem,
        order: Order,
    }

    impl Fixture {
        fn new() -> Self {
            let user_id = Uuid::now_v7();
            let product_id = Uuid::now_v7();
            let item = ProductItem {
                id: Uuid::now_v7(),
                product_id,
                sku: "SKU-001".to_string(),
                price: 150_000.0,
                rating_avg: 0.0,
                review_count: 0,
            };
            let order = Order {
                id: Uuid::now_v7(),
                user_id,
                items: vec![OrderItem {
                    product_item_id: item.id,
                    quantity: 1,
                }],
                status: OrderStatus::Delivered,
            };
            Self {
                user_id,
                product_id,
                item,
                order,
            }
        }

        fn input(&self, rating: u8) -> CreateReview {
            CreateReview {
                product_item_id: self.item.id,
                order_id: self.order.id,
                rating,
                comment: "Sản phẩm rất tốt".to_string(),
            }
        }

        fn review(&self, rating: u8) -> Review {
            Review::new(self.input(rating), self.user_id, self.product_id)
        }

        fn catalog(&self) -> MockCatalogRepository {
            let mut catalog = MockCatalogRepository::new();
            let item = self.item.clone();
            catalog
                .expect_find_product_item()
                .returning(move |_| Ok(Some(item.clone())));
            let order = self.order.clone();
            catalog
                .expect_find_order()
                .returning(move |_| Ok(Some(order.clone())));
            catalog
        }
    }

    fn service(
        repo: MockReviewRepository,
        catalog: MockCatalogRepository,
    ) -> ReviewService<MockReviewRepository, MockCatalogRepository> {
        ReviewService::new(repo, CatalogService::new(catalog), PaginationConfig::default())
    }

    #[tokio::test]
    async fn test_create_recomputes_aggregates_from_all_reviews() {
        let fx = Fixture::new();

        // Two earlier reviews (5 and 5) plus the new one (4).
        let stored = Arc::new(Mutex::new(vec![5u8, 5]));
        let mut repo = MockReviewRepository::new();
        let on_insert = Arc::clone(&stored);
        repo.expect_insert().times(1).returning(move |review| {
            on_insert.lock().unwrap().push(review.rating);
            Ok(review)
        });
        let on_summary = Arc::clone(&stored);
        repo.expect_rating_summary().times(2).returning(move |_| {
            let ratings = on_summary.lock().unwrap();
            let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
            Ok(RatingSummary::new(
                f64::from(sum) / ratings.len() as f64,
                ratings.len() as u64,
            ))
        });

        let mut catalog = fx.catalog();
        let expected = RatingSummary::new(14.0 / 3.0, 3);
        assert_eq!(expected.rating_avg, 14.0 / 3.0);
        catalog
            .expect_set_product_item_rating()
            .with(eq(fx.item.id), eq(expected))
            .times(1)
            .returning(|_, _| Ok(()));
        catalog
            .expect_set_product_rating()
            .with(eq(fx.product_id), eq(expected))
            .times(1)
            .returning(|_, _| Ok(()));

        let review = service(repo, catalog)
            .create(fx.input(4), fx.user_id)
            .await
            .unwrap();
        assert_eq!(review.product_id, fx.product_id);
        assert_eq!(review.rating, 4);
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_rating_before_lookup() {
        let fx = Fixture::new();
        let err = service(MockReviewRepository::new(), MockCatalogRepository::new())
            .create(fx.input(6), fx.user_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_requires_order_owner() {
        let fx = Fixture::new();
        let err = service(MockReviewRepository::new(), fx.catalog())
            .create(fx.input(5), Uuid::now_v7())
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::NotOrderOwner(id) if id == fx.order.id));
    }

    #[tokio::test]
    async fn test_create_requires_delivered_order() {
        let mut fx = Fixture::new();
        fx.order.status = OrderStatus::Shipping;
        let err = service(MockReviewRepository::new(), fx.catalog())
            .create(fx.input(5), fx.user_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::OrderNotDelivered(_)));
    }

    #[tokio::test]
    async fn test_create_requires_item_in_order() {
        let mut fx = Fixture::new();
        fx.order.items[0].product_item_id = Uuid::now_v7();
        let err = service(MockReviewRepository::new(), fx.catalog())
            .create(fx.input(5), fx.user_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::ItemNotInOrder { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_review_skips_aggregation() {
        let fx = Fixture::new();
        let mut repo = MockReviewRepository::new();
        repo.expect_insert()
            .returning(|_| Err(ReviewError::AlreadyReviewed));
        repo.expect_rating_summary().never();

        let err = service(repo, fx.catalog())
            .create(fx.input(5), fx.user_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::AlreadyReviewed));
    }

    #[tokio::test]
    async fn test_non_author_cannot_update_or_delete() {
        let fx = Fixture::new();
        let review = fx.review(4);
        let id = review.id;

        let mut repo = MockReviewRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(review.clone())));
        repo.expect_replace().never();
        repo.expect_delete().never();
        let service = service(repo, MockCatalogRepository::new());

        let stranger = Uuid::now_v7();
        let err = service
            .update(
                id,
                stranger,
                UpdateReview {
                    rating: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::NotAuthor));

        let err = service.delete(id, stranger).await.unwrap_err();
        assert!(matches!(err, ReviewError::NotAuthor));
    }

    #[tokio::test]
    async fn test_comment_only_update_keeps_aggregates() {
        let fx = Fixture::new();
        let review = fx.review(4);
        let id = review.id;

        let mut repo = MockReviewRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(review.clone())));
        repo.expect_replace().times(1).returning(|_| Ok(true));
        repo.expect_rating_summary().never();

        let updated = service(repo, MockCatalogRepository::new())
            .update(
                id,
                fx.user_id,
                UpdateReview {
                    comment: Some("Dùng tốt sau một tháng".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.rating, 4);
        assert_eq!(updated.comment, "Dùng tốt sau một tháng");
    }

    #[tokio::test]
    async fn test_delete_last_review_resets_aggregates() {
        let fx = Fixture::new();
        let review = fx.review(2);
        let id = review.id;

        let mut repo = MockReviewRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(review.clone())));
        repo.expect_delete().with(eq(id)).returning(|_| Ok(true));
        repo.expect_rating_summary()
            .times(2)
            .returning(|_| Ok(RatingSummary::default()));

        let mut catalog = MockCatalogRepository::new();
        catalog
            .expect_set_product_item_rating()
            .with(eq(fx.item.id), eq(RatingSummary::default()))
            .returning(|_, _| Ok(()));
        catalog
            .expect_set_product_rating()
            .with(eq(fx.product_id), eq(RatingSummary::default()))
            .returning(|_, _| Ok(()));

        service(repo, catalog).delete(id, fx.user_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_for_unknown_product_is_not_found() {
        let mut catalog = MockCatalogRepository::new();
        catalog.expect_product_exists().returning(|_| Ok(false));
        let mut repo = MockReviewRepository::new();
        repo.expect_list().never();

        let err = service(repo, catalog)
            .list_for_product(Uuid::now_v7(), &[])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ReviewError::Catalog(CatalogError::ProductNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_mine_is_scoped_to_caller() {
        let user_id = Uuid::now_v7();
        let mut repo = MockReviewRepository::new();
        repo.expect_list()
            .withf(move |query, scope| {
                *scope == ReviewScope::User(user_id) && query.pagination.limit == Some(2)
            })
            .returning(|query, _| Ok(Page::new(vec![], 0, &query.pagination)));

        let pairs = vec![("limit".to_string(), "2".to_string())];
        let page = service(repo, MockCatalogRepository::new())
            .list_mine(user_id, &pairs)
            .await
            .unwrap();
        assert_eq!(page.total, 0);
    }

    fn wishlist(
        repo: MockWishlistRepository,
        catalog: MockCatalogRepository,
    ) -> WishlistService<MockWishlistRepository, MockCatalogRepository> {
        WishlistService::new(repo, CatalogService::new(catalog), PaginationConfig::default())
    }

    #[tokio::test]
    async fn test_toggle_removes_existing_entry() {
        let fx = Fixture::new();
        let mut repo = MockWishlistRepository::new();
        repo.expect_remove()
            .with(eq(fx.user_id), eq(fx.item.id))
            .returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let outcome = wishlist(repo, MockCatalogRepository::new())
            .toggle(
                fx.user_id,
                ToggleWishlist {
                    product_item_id: fx.item.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome.action, WishlistAction::Removed);
        assert!(!outcome.in_wishlist);
    }

    #[tokio::test]
    async fn test_toggle_adds_missing_entry_with_product() {
        let fx = Fixture::new();
        let product_id = fx.product_id;
        let mut repo = MockWishlistRepository::new();
        repo.expect_remove().returning(|_, _| Ok(false));
        repo.expect_insert()
            .withf(move |entry| entry.product_id == product_id)
            .times(1)
            .returning(|_| Ok(true));

        let outcome = wishlist(repo, fx.catalog())
            .toggle(
                fx.user_id,
                ToggleWishlist {
                    product_item_id: fx.item.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome.action, WishlistAction::Added);
        assert!(outcome.in_wishlist);
    }

    #[tokio::test]
    async fn test_toggle_race_on_insert_reports_added() {
        let fx = Fixture::new();
        let mut repo = MockWishlistRepository::new();
        repo.expect_remove().returning(|_, _| Ok(false));
        repo.expect_insert().returning(|_| Ok(false));

        let outcome = wishlist(repo, fx.catalog())
            .toggle(
                fx.user_id,
                ToggleWishlist {
                    product_item_id: fx.item.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome.action, WishlistAction::Added);
    }

    #[tokio::test]
    async fn test_toggle_unknown_item_is_not_found() {
        let mut repo = MockWishlistRepository::new();
        repo.expect_remove().returning(|_, _| Ok(false));
        repo.expect_insert().never();
        let mut catalog = MockCatalogRepository::new();
        catalog.expect_find_product_item().returning(|_| Ok(None));

        let err = wishlist(repo, catalog)
            .toggle(
                Uuid::now_v7(),
                ToggleWishlist {
                    product_item_id: Uuid::now_v7(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ReviewError::Catalog(CatalogError::ProductItemNotFound(_))
        ));
    }
}
