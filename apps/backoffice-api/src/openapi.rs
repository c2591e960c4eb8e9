//! OpenAPI documentation configuration

use axum_helpers::BearerAuthAddon;
use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Backoffice API",
        version = "0.1.0",
        description = "Inventory receipts, product reviews and wishlists over MongoDB"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/import-receipts", api = domain_inventory::handlers::import::ApiDoc),
        (path = "/api/export-receipts", api = domain_inventory::handlers::export::ApiDoc),
        (path = "/api/reviews", api = domain_reviews::handlers::reviews::ApiDoc),
        (path = "/api/wishlist", api = domain_reviews::handlers::wishlist::ApiDoc)
    ),
    modifiers(&BearerAuthAddon)
)]
pub struct ApiDoc;
