use axum_helpers::AppError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Toán tử '{op}' không tồn tại (trường '{field}')")]
    UnknownOperator { field: String, op: String },

    #[error("Toán tử '{op}' không được hỗ trợ cho trường '{field}'")]
    OperatorNotAllowed { field: String, op: String },

    #[error("Giá trị '{value}' của trường '{field}' không hợp lệ, cần {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("{value}")]
    InvalidId { field: String, value: String },
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidId { value, .. } => AppError::InvalidId(value),
            other => AppError::InvalidQuery(other.to_string()),
        }
    }
}
