//! Request extractors that reject with [`AppError`](crate::errors::AppError) bodies.

pub mod query_pairs;
pub mod uuid_path;
pub mod validated_json;

pub use query_pairs::QueryPairs;
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
