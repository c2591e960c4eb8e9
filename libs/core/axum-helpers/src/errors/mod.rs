pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::mongodb::is_duplicate_key_error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "success": false,
///   "code": 1008,
///   "error": "CONFLICT",
///   "message": "Phiếu đã được duyệt",
///   "details": null
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Structured details (e.g. validation field errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            success: false,
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details,
        }
    }
}

/// Error type every handler returns; renders as [`ErrorResponse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Status, code, message and details of the rendered response.
    fn parts(self) -> (StatusCode, ErrorCode, String, Option<Value>) {
        match self {
            AppError::SerdeJson(e) => {
                tracing::error!(error_code = ErrorCode::SerdeJsonError.code(), error = ?e, "JSON serialization error");
                internal(ErrorCode::SerdeJsonError)
            }
            AppError::Database(e) if is_duplicate_key_error(&e) => {
                tracing::info!(error_code = ErrorCode::DuplicateKey.code(), error = %e, "Duplicate key");
                (
                    StatusCode::CONFLICT,
                    ErrorCode::DuplicateKey,
                    ErrorCode::DuplicateKey.default_message().to_string(),
                    None,
                )
            }
            AppError::Database(e) => {
                tracing::error!(error_code = ErrorCode::DatabaseError.code(), error = ?e, "Database error");
                internal(ErrorCode::DatabaseError)
            }
            // Well-formed JSON that does not fit the target type is a validation failure.
            AppError::JsonExtractorRejection(JsonRejection::JsonDataError(e)) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), error = %e, "Body does not match schema");
                (StatusCode::BAD_REQUEST, ErrorCode::ValidationError, e.body_text(), None)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = ErrorCode::InvalidJson.code(), error = %e, "JSON extraction error");
                (e.status(), ErrorCode::InvalidJson, e.body_text(), None)
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), error = %e, "Validation error");
                let details = serde_json::to_value(&e).ok();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message().to_string(),
                    details,
                )
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), id = %raw, "Invalid id");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidId,
                    format!("{}: {}", ErrorCode::InvalidId.default_message(), raw),
                    None,
                )
            }
            AppError::InvalidQuery(msg) => client(StatusCode::BAD_REQUEST, ErrorCode::InvalidQuery, msg),
            AppError::BadRequest(msg) => client(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg),
            AppError::Unauthorized(msg) => client(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, msg),
            AppError::Forbidden(msg) => client(StatusCode::FORBIDDEN, ErrorCode::Forbidden, msg),
            AppError::NotFound(msg) => client(StatusCode::NOT_FOUND, ErrorCode::NotFound, msg),
            AppError::Conflict(msg) => client(StatusCode::CONFLICT, ErrorCode::Conflict, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = ErrorCode::InternalError.code(), "Internal server error: {}", msg);
                internal(ErrorCode::InternalError)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(error_code = ErrorCode::ServiceUnavailable.code(), "Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::ServiceUnavailable, msg, None)
            }
        }
    }
}

fn client(status: StatusCode, code: ErrorCode, msg: String) -> (StatusCode, ErrorCode, String, Option<Value>) {
    tracing::info!(error_code = code.code(), status = status.as_u16(), "{}", msg);
    let message = if msg.is_empty() {
        code.default_message().to_string()
    } else {
        msg
    };
    (status, code, message, None)
}

// Internal failures never leak their cause to the client.
fn internal(code: ErrorCode) -> (StatusCode, ErrorCode, String, Option<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        code,
        code.default_message().to_string(),
        None,
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();
        (status, Json(ErrorResponse::new(code, message, details))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
