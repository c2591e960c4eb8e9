//! HTTP handlers for receipts. Every route requires an admin caller.

pub mod export;
pub mod import;

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        middleware,
    };
    use axum_helpers::{JwtAuth, JwtConfig, Role, optional_jwt_auth_middleware};
    use domain_catalog::{CatalogService, MockCatalogRepository};
    use http_body_util::BodyExt;
    use list_query::PaginationConfig;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::models::{ExportReceipt, Receipt, ReceiptStatus};
    use crate::repository::MockReceiptRepository;
    use crate::service::ReceiptService;

    const SECRET: &str = "inventory-handler-tests-secret-0123456789";

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new(SECRET).unwrap())
    }

    fn bearer(roles: &[Role]) -> String {
        format!("Bearer {}", auth().create_token(Uuid::now_v7(), roles).unwrap())
    }

    fn app(repo: MockReceiptRepository<ExportReceipt>) -> Router {
        let mut catalog = MockCatalogRepository::new();
        catalog.expect_branch_exists().returning(|_| Ok(true));
        catalog
            .expect_missing_product_items()
            .returning(|_| Ok(vec![]));

        let service = ReceiptService::new(
            repo,
            CatalogService::new(catalog),
            PaginationConfig::default(),
        );
        super::export::router(service)
            .layer(middleware::from_fn_with_state(auth(), optional_jwt_auth_middleware))
    }

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn create_request(token: Option<String>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn export_body() -> Value {
        json!({
            "branchId": Uuid::now_v7(),
            "items": [{"productItemId": Uuid::now_v7(), "quantity": 3}],
            "reason": "damaged",
            "note": "Hàng vỡ khi vận chuyển"
        })
    }

    #[tokio::test]
    async fn test_create_export_receipt_echoes_fields() {
        let mut repo = MockReceiptRepository::<ExportReceipt>::new();
        repo.expect_insert().times(1).returning(Ok);

        let body = export_body();
        let response = app(repo)
            .oneshot(create_request(Some(bearer(&[Role::Admin])), body.clone()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response.into_body()).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["items"], body["items"]);
        assert_eq!(json["data"]["reason"], "damaged");
        assert_eq!(json["data"]["note"], body["note"]);
        assert_eq!(json["data"]["status"], "draft");
    }

    #[tokio::test]
    async fn test_create_requires_token() {
        let response = app(MockReceiptRepository::new())
            .oneshot(create_request(None, export_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_requires_admin() {
        let response = app(MockReceiptRepository::new())
            .oneshot(create_request(Some(bearer(&[Role::User])), export_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = json_body(response.into_body()).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_reason() {
        let mut body = export_body();
        body["reason"] = json!("lost");
        let response = app(MockReceiptRepository::new())
            .oneshot(create_request(Some(bearer(&[Role::Admin])), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response.into_body()).await;
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_approve_twice_conflicts() {
        let mut approved = ExportReceipt::new(
            serde_json::from_value(export_body()).unwrap(),
            Uuid::now_v7(),
        );
        approved.status = ReceiptStatus::Approved;
        let id = approved.id;

        let mut repo = MockReceiptRepository::<ExportReceipt>::new();
        repo.expect_transition().returning(|_, _, _| Ok(None));
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(approved.clone())));

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/{id}/approve"))
            .header(header::AUTHORIZATION, bearer(&[Role::Admin]))
            .body(Body::empty())
            .unwrap();
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = json_body(response.into_body()).await;
        assert_eq!(json["error"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_get_with_malformed_id() {
        let request = Request::builder()
            .uri("/not-a-uuid")
            .header(header::AUTHORIZATION, bearer(&[Role::Admin]))
            .body(Body::empty())
            .unwrap();
        let response = app(MockReceiptRepository::new())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response.into_body()).await;
        assert_eq!(json["error"], "INVALID_ID");
    }
}
