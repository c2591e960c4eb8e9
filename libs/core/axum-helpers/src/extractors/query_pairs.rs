//! Raw query-string pairs, in request order.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Decoded `key=value` pairs, keeping repeated keys and bracketed names
/// such as `rating[gte]`.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidQuery(e.body_text()).into_response())?;
        Ok(QueryPairs(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> QueryPairs {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        QueryPairs::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_keeps_order_and_brackets() {
        let QueryPairs(pairs) = extract("/reviews?rating%5Bgte%5D=4&sort=-rating,createdAt&page=2").await;
        assert_eq!(
            pairs,
            vec![
                ("rating[gte]".to_string(), "4".to_string()),
                ("sort".to_string(), "-rating,createdAt".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_query() {
        let QueryPairs(pairs) = extract("/wishlist").await;
        assert!(pairs.is_empty());
    }
}
