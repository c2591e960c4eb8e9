//! Handler tests for the inventory domain against a real MongoDB.
//!
//! These drive the receipt routers end to end (JSON in, JSON out, status
//! codes) with the Mongo repositories behind them. They need Docker, so
//! they are ignored by default: `cargo test -- --ignored`.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::{Router, middleware};
use axum_helpers::{JwtAuth, JwtConfig, Role, optional_jwt_auth_middleware};
use domain_catalog::{Branch, CatalogService, MongoCatalogRepository, ProductItem, Supplier};
use domain_inventory::{ImportReceipt, MongoReceiptRepository, ReceiptService, handlers};
use http_body_util::BodyExt;
use list_query::PaginationConfig;
use mongodb::Database;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestMongo};
use tower::ServiceExt; // For oneshot()

const SECRET: &str = "inventory-integration-tests-secret-0123456789";

struct Fixture {
    branch: Branch,
    supplier: Supplier,
    item: ProductItem,
}

async fn seed(db: &Database, builder: &TestDataBuilder) -> Fixture {
    let branch = Branch {
        id: builder.id("branch"),
        name: builder.name("branch", "hcm"),
    };
    let supplier = Supplier {
        id: builder.id("supplier"),
        name: builder.name("supplier", "main"),
    };
    let item = ProductItem {
        id: builder.id("product-item"),
        product_id: builder.id("product"),
        sku: builder.name("sku", "m"),
        price: 250_000.0,
        rating_avg: 0.0,
        review_count: 0,
    };
    db.collection::<Branch>("branches").insert_one(&branch).await.unwrap();
    db.collection::<Supplier>("suppliers").insert_one(&supplier).await.unwrap();
    db.collection::<ProductItem>("productItems").insert_one(&item).await.unwrap();
    Fixture { branch, supplier, item }
}

async fn import_app(db: &Database) -> Router {
    let receipts = MongoReceiptRepository::<ImportReceipt>::new(db);
    receipts.init_indexes().await.unwrap();
    let catalog = CatalogService::new(MongoCatalogRepository::new(db));
    let service = ReceiptService::new(receipts, catalog, PaginationConfig::default());

    let auth = JwtAuth::new(&JwtConfig::new(SECRET).unwrap());
    handlers::import::router(service)
        .layer(middleware::from_fn_with_state(auth, optional_jwt_auth_middleware))
}

fn admin_token() -> String {
    let auth = JwtAuth::new(&JwtConfig::new(SECRET).unwrap());
    format!("Bearer {}", auth.create_token(uuid::Uuid::now_v7(), &[Role::Admin]).unwrap())
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, admin_token())
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_import_receipt_lifecycle() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("import_lifecycle");
    let db = mongo.database(&builder.database_name());
    let fixture = seed(&db, &builder).await;
    let app = import_app(&db).await;

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/",
            Some(json!({
                "supplierId": fixture.supplier.id,
                "branchId": fixture.branch.id,
                "items": [{"productItemId": fixture.item.id, "quantity": 4, "purchasePrice": 150000.0}],
                "paymentMethod": "bank_transfer",
                "note": "Nhập hàng đầu tháng"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = json_body(response.into_body()).await;
    assert_eq!(created["data"]["totalAmount"], 600000.0);
    let id = created["data"]["_id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(request("PUT", &format!("/{id}/approve"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let approved = json_body(response.into_body()).await;
    assert_eq!(approved["data"]["status"], "approved");
    assert!(approved["data"]["approvedAt"].is_string());

    // Terminal states cannot change.
    let response = app
        .clone()
        .oneshot(request("PUT", &format!("/{id}/cancel"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(request("PUT", &format!("/{id}"), Some(json!({"note": "Sửa"}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_import_receipt_unknown_supplier() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("import_unknown_supplier");
    let db = mongo.database(&builder.database_name());
    let fixture = seed(&db, &builder).await;

    let response = import_app(&db)
        .await
        .oneshot(request(
            "POST",
            "/",
            Some(json!({
                "supplierId": builder.id("nobody"),
                "branchId": fixture.branch.id,
                "items": [{"productItemId": fixture.item.id, "quantity": 1, "purchasePrice": 10.0}],
                "paymentMethod": "cash"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_paginates_and_filters() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("import_list");
    let db = mongo.database(&builder.database_name());
    let fixture = seed(&db, &builder).await;
    let app = import_app(&db).await;

    for quantity in 1..=5 {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/",
                Some(json!({
                    "supplierId": fixture.supplier.id,
                    "branchId": fixture.branch.id,
                    "items": [{"productItemId": fixture.item.id, "quantity": quantity, "purchasePrice": 100.0}],
                    "paymentMethod": "cash"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(request("GET", "/?limit=2&page=2&sort=totalAmount", None))
        .await
        .unwrap();
    let page = json_body(response.into_body()).await;
    assert_eq!(page["data"]["total"], 5);
    assert_eq!(page["data"]["totalPages"], 3);
    let amounts: Vec<f64> = page["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["totalAmount"].as_f64().unwrap())
        .collect();
    assert_eq!(amounts, vec![300.0, 400.0]);

    let response = app
        .clone()
        .oneshot(request("GET", "/?totalAmount%5Bgte%5D=400&limit=0", None))
        .await
        .unwrap();
    let page = json_body(response.into_body()).await;
    assert_eq!(page["data"]["total"], 2);
    assert_eq!(page["data"]["items"].as_array().unwrap().len(), 2);

    let response = app
        .oneshot(request("GET", "/?status%5Bregex%5D=dr", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
