use axum::Router;
use domain_reviews::{MongoWishlistRepository, WishlistService, handlers};

use crate::state::AppState;

pub fn repository(state: &AppState) -> MongoWishlistRepository {
    MongoWishlistRepository::new(&state.db)
}

pub fn router(state: &AppState) -> Router {
    let service = WishlistService::new(
        repository(state),
        super::catalog(state),
        state.config.pagination,
    );
    handlers::wishlist::router(service)
}
