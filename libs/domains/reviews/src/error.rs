use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_catalog::CatalogError;
use list_query::QueryError;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Không tìm thấy đánh giá: {0}")]
    NotFound(Uuid),

    #[error("Bạn chỉ có thể sửa hoặc xóa đánh giá của chính mình")]
    NotAuthor,

    #[error("Đơn hàng {0} không thuộc về bạn")]
    NotOrderOwner(Uuid),

    #[error("Đơn hàng {order_id} không chứa sản phẩm {product_item_id}")]
    ItemNotInOrder { order_id: Uuid, product_item_id: Uuid },

    #[error("Đơn hàng {0} chưa được giao, chưa thể đánh giá")]
    OrderNotDelivered(Uuid),

    #[error("Bạn đã đánh giá sản phẩm này cho đơn hàng này")]
    AlreadyReviewed,

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ReviewResult<T> = Result<T, ReviewError>;

impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::NotFound(_) => AppError::NotFound(err.to_string()),
            ReviewError::NotAuthor | ReviewError::NotOrderOwner(_) => {
                AppError::Forbidden(err.to_string())
            }
            ReviewError::ItemNotInOrder { .. } | ReviewError::OrderNotDelivered(_) => {
                AppError::BadRequest(err.to_string())
            }
            ReviewError::AlreadyReviewed => AppError::Conflict(err.to_string()),
            ReviewError::Validation(e) => AppError::ValidationError(e),
            ReviewError::Query(e) => e.into(),
            ReviewError::Catalog(CatalogError::Database(e)) => AppError::Database(e),
            ReviewError::Catalog(e) => AppError::NotFound(e.to_string()),
            ReviewError::Database(e) => AppError::Database(e),
            ReviewError::Serialization(e) => AppError::SerdeJson(e),
        }
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
