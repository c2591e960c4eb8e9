//! Connection, ping, stored id/timestamp forms and error classification for MongoDB.

mod config;
mod connector;
mod errors;
mod ids;
pub mod timestamp;

pub use config::MongoConfig;
pub use connector::{connect, connect_from_config, connect_from_config_with_retry, ping};
pub use errors::{DUPLICATE_KEY_CODE, is_duplicate_key_error};
pub use ids::{id_filter, uuid_to_bson};
pub use timestamp::to_bson_datetime;

pub use mongodb::{Client, Collection, Database};
