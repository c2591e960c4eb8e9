//! Reviews Domain
//!
//! Buyer reviews of product items and per-user wishlists.
//!
//! A review needs a delivered order owned by the reviewer that contains the
//! reviewed item, and `(user, productItem, order)` is unique. After every
//! write that can move a rating, the average and count are recomputed from
//! the stored reviews and written to both the product item and its parent
//! product in the catalog.
//!
//! The wishlist is a toggle: posting an item that is present removes it,
//! otherwise it is added.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use crate::mongodb::{MongoReviewRepository, MongoWishlistRepository};
pub use error::{ReviewError, ReviewResult};
pub use models::{
    CreateReview, Review, ToggleWishlist, UpdateReview, WishlistAction, WishlistEntry,
    WishlistToggle,
};
pub use repository::{RatingTarget, ReviewRepository, ReviewScope, WishlistRepository};
pub use service::{ReviewService, WishlistService};
