//! Catalog read model shared by the back-office slices.
//!
//! Products, product items, branches, suppliers and orders are owned by other
//! services; this crate only looks them up and keeps the denormalized
//! `ratingAvg` / `reviewCount` fields of products and product items in sync
//! with their reviews.

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use crate::mongodb::MongoCatalogRepository;
pub use error::{CatalogError, CatalogResult};
pub use models::{
    Branch, Order, OrderItem, OrderStatus, Product, ProductItem, RatingSummary, Supplier,
};
pub use repository::CatalogRepository;
#[cfg(any(test, feature = "mock"))]
pub use repository::MockCatalogRepository;
pub use service::CatalogService;
