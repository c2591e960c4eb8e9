//! Query-string driven list queries over MongoDB collections.
//!
//! A request such as
//!
//! ```text
//! GET /reviews/{productId}?rating[gte]=4&sort=-rating,createdAt&page=2&limit=10&fields=rating,comment
//! ```
//!
//! is parsed against a per-endpoint [`FilterSchema`] into a [`ListQuery`]:
//! typed conditions, a sort order, [`Pagination`] and an optional projection.
//! [`find_page`] runs it and returns a [`Page`] whose `total` ignores
//! pagination.
//!
//! Reserved keys: `page`, `limit`, `sort`, `fields`. Every other key is a
//! filter, either `field=value` (equality) or `field[op]=value` with `op` from
//! [`Operator`].

pub mod config;
pub mod error;
pub mod filter;
pub mod mongo;
pub mod operator;
pub mod page;
pub mod params;
pub mod query;
pub mod schema;

pub use config::PaginationConfig;
pub use error::QueryError;
pub use mongo::find_page;
pub use operator::{Operator, OperatorSet};
pub use page::Page;
pub use params::ListParams;
pub use query::{Condition, ListQuery, Pagination, SortDirection};
pub use schema::{FieldKind, FilterSchema};
