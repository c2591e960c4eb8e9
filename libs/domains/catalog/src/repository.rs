use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{Order, ProductItem, RatingSummary};

/// Lookups into catalog collections owned by other services, plus the
/// rating aggregates this service maintains on them.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_product_item(&self, id: Uuid) -> CatalogResult<Option<ProductItem>>;

    async fn find_order(&self, id: Uuid) -> CatalogResult<Option<Order>>;

    async fn product_exists(&self, id: Uuid) -> CatalogResult<bool>;

    async fn branch_exists(&self, id: Uuid) -> CatalogResult<bool>;

    async fn supplier_exists(&self, id: Uuid) -> CatalogResult<bool>;

    /// Ids from `ids` with no matching product item.
    async fn missing_product_items(&self, ids: Vec<Uuid>) -> CatalogResult<Vec<Uuid>>;

    /// Overwrites `ratingAvg` / `reviewCount` of a product item.
    async fn set_product_item_rating(&self, id: Uuid, summary: RatingSummary)
    -> CatalogResult<()>;

    /// Overwrites `ratingAvg` / `reviewCount` of a product.
    async fn set_product_rating(&self, id: Uuid, summary: RatingSummary) -> CatalogResult<()>;
}
