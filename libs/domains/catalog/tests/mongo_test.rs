//! MongoDB integration tests for the catalog repository.
//!
//! Run with `cargo test -- --ignored` on a machine with Docker.

use domain_catalog::{
    CatalogRepository, CatalogService, MongoCatalogRepository, Product, ProductItem, RatingSummary,
};
use mongodb::Database;
use test_utils::{TestDataBuilder, TestMongo};

async fn seed(db: &Database, builder: &TestDataBuilder) -> (ProductItem, Product) {
    let product = Product {
        id: builder.id("product"),
        name: builder.name("product", "shirt"),
        rating_avg: 0.0,
        review_count: 0,
    };
    let item = ProductItem {
        id: builder.id("product-item"),
        product_id: product.id,
        sku: builder.name("sku", "m"),
        price: 199_000.0,
        rating_avg: 0.0,
        review_count: 0,
    };
    db.collection::<Product>("products")
        .insert_one(&product)
        .await
        .unwrap();
    db.collection::<ProductItem>("productItems")
        .insert_one(&item)
        .await
        .unwrap();
    (item, product)
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_lookup_and_missing_items() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("catalog_lookup");
    let db = mongo.database(&builder.database_name());
    let (item, product) = seed(&db, &builder).await;

    let repo = MongoCatalogRepository::new(&db);
    repo.init_indexes().await.unwrap();

    let found = repo.find_product_item(item.id).await.unwrap().unwrap();
    assert_eq!(found.product_id, product.id);
    assert!(repo.product_exists(product.id).await.unwrap());

    let ghost = builder.id("ghost");
    let missing = repo
        .missing_product_items(vec![item.id, ghost])
        .await
        .unwrap();
    assert_eq!(missing, vec![ghost]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ratings_are_overwritten() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("catalog_ratings");
    let db = mongo.database(&builder.database_name());
    let (item, product) = seed(&db, &builder).await;

    let service = CatalogService::new(MongoCatalogRepository::new(&db));
    service
        .update_ratings(
            item.id,
            RatingSummary::new(14.0 / 3.0, 3),
            product.id,
            RatingSummary::new(4.5, 2),
        )
        .await
        .unwrap();

    let stored = service.product_item(item.id).await.unwrap();
    assert_eq!(stored.rating_avg, 14.0 / 3.0);
    assert_eq!(stored.review_count, 3);
}
