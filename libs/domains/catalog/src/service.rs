//! Existence checks and rating aggregates over the catalog.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Order, ProductItem, RatingSummary};
use crate::repository::CatalogRepository;

pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn product_item(&self, id: Uuid) -> CatalogResult<ProductItem> {
        self.repository
            .find_product_item(id)
            .await?
            .ok_or(CatalogError::ProductItemNotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn order(&self, id: Uuid) -> CatalogResult<Order> {
        self.repository
            .find_order(id)
            .await?
            .ok_or(CatalogError::OrderNotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn require_product(&self, id: Uuid) -> CatalogResult<()> {
        if !self.repository.product_exists(id).await? {
            return Err(CatalogError::ProductNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn require_branch(&self, id: Uuid) -> CatalogResult<()> {
        if !self.repository.branch_exists(id).await? {
            return Err(CatalogError::BranchNotFound(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn require_supplier(&self, id: Uuid) -> CatalogResult<()> {
        if !self.repository.supplier_exists(id).await? {
            return Err(CatalogError::SupplierNotFound(id));
        }
        Ok(())
    }

    /// Fails on the first id with no product item.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn require_product_items(&self, ids: &[Uuid]) -> CatalogResult<()> {
        let missing = self.repository.missing_product_items(ids.to_vec()).await?;
        match missing.first() {
            Some(id) => Err(CatalogError::ProductItemNotFound(*id)),
            None => Ok(()),
        }
    }

    /// Stores freshly computed aggregates on a product item and its product.
    #[instrument(skip(self))]
    pub async fn update_ratings(
        &self,
        product_item_id: Uuid,
        item: RatingSummary,
        product_id: Uuid,
        product: RatingSummary,
    ) -> CatalogResult<()> {
        self.repository
            .set_product_item_rating(product_item_id, item)
            .await?;
        self.repository.set_product_rating(product_id, product).await
    }
}

impl<R: CatalogRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCatalogRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_missing_product_item_is_not_found() {
        let mut mock_repo = MockCatalogRepository::new();
        let id = Uuid::now_v7();
        mock_repo
            .expect_find_product_item()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = CatalogService::new(mock_repo);
        let err = service.product_item(id).await.unwrap_err();
        assert!(matches!(err, CatalogError::ProductItemNotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_require_product_items_reports_first_missing() {
        let mut mock_repo = MockCatalogRepository::new();
        let present = Uuid::now_v7();
        let absent = Uuid::now_v7();
        mock_repo
            .expect_missing_product_items()
            .with(eq(vec![present, absent]))
            .returning(move |_| Ok(vec![absent]));

        let service = CatalogService::new(mock_repo);
        let err = service
            .require_product_items(&[present, absent])
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::ProductItemNotFound(id) if id == absent));
    }

    #[tokio::test]
    async fn test_require_branch_and_supplier() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo.expect_branch_exists().returning(|_| Ok(true));
        mock_repo.expect_supplier_exists().returning(|_| Ok(false));

        let service = CatalogService::new(mock_repo);
        assert!(service.require_branch(Uuid::now_v7()).await.is_ok());
        assert!(matches!(
            service.require_supplier(Uuid::now_v7()).await,
            Err(CatalogError::SupplierNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_ratings_writes_item_then_product() {
        let mut mock_repo = MockCatalogRepository::new();
        let item_id = Uuid::now_v7();
        let product_id = Uuid::now_v7();
        let item = RatingSummary::new(4.5, 2);
        let product = RatingSummary::new(4.0, 5);

        let mut seq = mockall::Sequence::new();
        mock_repo
            .expect_set_product_item_rating()
            .with(eq(item_id), eq(item))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        mock_repo
            .expect_set_product_rating()
            .with(eq(product_id), eq(product))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let service = CatalogService::new(mock_repo);
        service
            .update_ratings(item_id, item, product_id, product)
            .await
            .unwrap();
    }
}
