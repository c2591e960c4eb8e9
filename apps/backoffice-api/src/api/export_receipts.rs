use axum::Router;
use domain_inventory::{ExportReceipt, MongoReceiptRepository, ReceiptService, handlers};

use crate::state::AppState;

pub fn repository(state: &AppState) -> MongoReceiptRepository<ExportReceipt> {
    MongoReceiptRepository::new(&state.db)
}

pub fn router(state: &AppState) -> Router {
    let service = ReceiptService::new(
        repository(state),
        super::catalog(state),
        state.config.pagination,
    );
    handlers::export::router(service)
}
