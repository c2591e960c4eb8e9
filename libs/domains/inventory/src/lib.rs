//! Inventory Domain
//!
//! Import (stock-in) and export (stock-out) receipts for branches. Both kinds
//! share one lifecycle and one generic repository/service, parameterised by
//! the [`Receipt`] trait.
//!
//! ```text
//! draft ──approve──▶ approved
//!   │
//!   └───cancel───▶ cancelled
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{CatalogService, MongoCatalogRepository};
//! use domain_inventory::{ExportReceipt, MongoReceiptRepository, ReceiptService, handlers};
//! use list_query::PaginationConfig;
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("backoffice");
//!
//! let receipts = MongoReceiptRepository::<ExportReceipt>::new(&db);
//! let catalog = CatalogService::new(MongoCatalogRepository::new(&db));
//! let service = ReceiptService::new(receipts, catalog, PaginationConfig::default());
//!
//! let router = handlers::export::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use crate::mongodb::MongoReceiptRepository;
pub use error::{ReceiptError, ReceiptResult};
pub use models::{
    CreateExportReceipt, CreateImportReceipt, ExportReason, ExportReceipt, ExportReceiptItem,
    ImportReceipt, ImportReceiptItem, PaymentMethod, Receipt, ReceiptStatus, UpdateExportReceipt,
    UpdateImportReceipt,
};
pub use repository::ReceiptRepository;
pub use service::ReceiptService;
