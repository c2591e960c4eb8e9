use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_catalog::CatalogError;
use list_query::QueryError;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::models::ReceiptStatus;

#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("Không tìm thấy {label}: {id}")]
    NotFound { label: &'static str, id: Uuid },

    /// Only drafts can be edited, approved or cancelled.
    #[error("{label} {id} đang ở trạng thái '{status}', chỉ phiếu nháp mới được thay đổi")]
    NotDraft {
        label: &'static str,
        id: Uuid,
        status: ReceiptStatus,
    },

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

pub type ReceiptResult<T> = Result<T, ReceiptError>;

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        match err {
            ReceiptError::NotFound { .. } => AppError::NotFound(err.to_string()),
            ReceiptError::NotDraft { .. } => AppError::Conflict(err.to_string()),
            ReceiptError::Validation(e) => AppError::ValidationError(e),
            ReceiptError::Query(e) => e.into(),
            ReceiptError::Catalog(CatalogError::Database(e)) => AppError::Database(e),
            ReceiptError::Catalog(e) => AppError::NotFound(e.to_string()),
            ReceiptError::Database(e) => AppError::Database(e),
            ReceiptError::Serialization(e) => AppError::SerdeJson(e),
        }
    }
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
