//! Error codes shared by every error body the API returns.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidId;
//! assert_eq!(code.as_str(), "INVALID_ID");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable identifier, integer code and default (Vietnamese) message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    BadRequest,
    ValidationError,
    /// Malformed identifier in a path or query parameter
    InvalidId,
    InvalidJson,
    /// Unusable list query (bad operator or value)
    InvalidQuery,
    NotFound,
    Unauthorized,
    Forbidden,
    /// Write conflicts with the current state of the resource
    Conflict,
    /// Unique index rejected the write
    DuplicateKey,

    // Server errors
    InternalError,
    ServiceUnavailable,

    // Database errors (2000-2999)
    DatabaseError,

    // Serialization errors (5000s)
    SerdeJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Conflict => "CONFLICT",
            Self::DuplicateKey => "DUPLICATE_KEY",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code for logs and dashboards.
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1000,
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::InvalidJson => 1003,
            Self::InvalidQuery => 1004,
            Self::NotFound => 1005,
            Self::Unauthorized => 1006,
            Self::Forbidden => 1007,
            Self::Conflict => 1008,
            Self::DuplicateKey => 1009,
            Self::InternalError => 1500,
            Self::ServiceUnavailable => 1503,
            Self::DatabaseError => 2001,
            Self::SerdeJsonError => 5001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Yêu cầu không hợp lệ",
            Self::ValidationError => "Dữ liệu không hợp lệ",
            Self::InvalidId => "ID không hợp lệ",
            Self::InvalidJson => "Dữ liệu JSON không hợp lệ",
            Self::InvalidQuery => "Tham số truy vấn không hợp lệ",
            Self::NotFound => "Không tìm thấy tài nguyên",
            Self::Unauthorized => "Bạn cần đăng nhập để tiếp tục",
            Self::Forbidden => "Bạn không có quyền thực hiện thao tác này",
            Self::Conflict => "Xung đột với trạng thái hiện tại của dữ liệu",
            Self::DuplicateKey => "Dữ liệu đã tồn tại",
            Self::InternalError => "Lỗi máy chủ nội bộ",
            Self::ServiceUnavailable => "Dịch vụ tạm thời không khả dụng",
            Self::DatabaseError => "Lỗi cơ sở dữ liệu",
            Self::SerdeJsonError => "Lỗi xử lý dữ liệu JSON",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
