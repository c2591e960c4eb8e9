//! Reviews API routes

use axum::Router;
use domain_reviews::{MongoReviewRepository, ReviewService, handlers};

use crate::state::AppState;

pub fn repository(state: &AppState) -> MongoReviewRepository {
    MongoReviewRepository::new(&state.db)
}

pub fn router(state: &AppState) -> Router {
    let service = ReviewService::new(
        repository(state),
        super::catalog(state),
        state.config.pagination,
    );
    handlers::reviews::router(service)
}
