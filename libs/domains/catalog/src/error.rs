use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Không tìm thấy sản phẩm: {0}")]
    ProductNotFound(Uuid),

    #[error("Không tìm thấy biến thể sản phẩm: {0}")]
    ProductItemNotFound(Uuid),

    #[error("Không tìm thấy chi nhánh: {0}")]
    BranchNotFound(Uuid),

    #[error("Không tìm thấy nhà cung cấp: {0}")]
    SupplierNotFound(Uuid),

    #[error("Không tìm thấy đơn hàng: {0}")]
    OrderNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
