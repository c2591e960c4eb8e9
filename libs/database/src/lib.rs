//! MongoDB connection management shared by the back-office services.
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::{mongodb, RetryConfig};
//!
//! let config = mongodb::MongoConfig::from_env()?;
//! let client = mongodb::connect_from_config_with_retry(&config, Some(RetryConfig::default())).await?;
//! let db = client.database(&config.database);
//! ```

pub mod error;
pub mod mongodb;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult};
pub use retry::{RetryConfig, retry, retry_with_backoff};
