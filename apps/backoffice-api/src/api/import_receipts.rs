use axum::Router;
use domain_inventory::{ImportReceipt, MongoReceiptRepository, ReceiptService, handlers};

use crate::state::AppState;

pub fn repository(state: &AppState) -> MongoReceiptRepository<ImportReceipt> {
    MongoReceiptRepository::new(&state.db)
}

pub fn router(state: &AppState) -> Router {
    let service = ReceiptService::new(
        repository(state),
        super::catalog(state),
        state.config.pagination,
    );
    handlers::import::router(service)
}
