//! API routes, nested under `/api` by `axum_helpers::create_router`.

pub mod export_receipts;
pub mod health;
pub mod import_receipts;
pub mod reviews;
pub mod wishlist;

use axum::{Router, middleware};
use axum_helpers::optional_jwt_auth_middleware;
use domain_catalog::{CatalogService, MongoCatalogRepository};

use crate::state::AppState;

/// Every domain router plus `/ready`.
///
/// Bearer tokens are verified once here; the `CurrentUser` and `AdminUser`
/// extractors decide per route whether a caller is required.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/import-receipts", import_receipts::router(state))
        .nest("/export-receipts", export_receipts::router(state))
        .nest("/reviews", reviews::router(state))
        .nest("/wishlist", wishlist::router(state))
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            optional_jwt_auth_middleware,
        ))
        .merge(health::router(state.clone()))
}

fn catalog(state: &AppState) -> CatalogService<MongoCatalogRepository> {
    CatalogService::new(MongoCatalogRepository::new(&state.db))
}

/// Creates the indexes every collection relies on, uniqueness included.
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    MongoCatalogRepository::new(&state.db).init_indexes().await?;
    import_receipts::repository(state).init_indexes().await?;
    export_receipts::repository(state).init_indexes().await?;
    reviews::repository(state).init_indexes().await?;
    wishlist::repository(state).init_indexes().await?;
    Ok(())
}
