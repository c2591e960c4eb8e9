use chrono::{DateTime, Utc};
use database::mongodb::timestamp;
use list_query::{FieldKind, FilterSchema, OperatorSet};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A buyer's review of one product item from one delivered order.
///
/// `(userId, productItemId, orderId)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub user_id: Uuid,
    /// Parent product of `productItemId`, copied at creation
    pub product_id: Uuid,
    pub product_item_id: Uuid,
    pub order_id: Uuid,
    pub rating: u8,
    pub comment: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub product_item_id: Uuid,
    pub order_id: Uuid,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[validate(length(min = 5, max = 1000))]
    pub comment: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
    #[validate(length(min = 5, max = 1000))]
    pub comment: Option<String>,
}

impl Review {
    pub fn new(input: CreateReview, user_id: Uuid, product_id: Uuid) -> Self {
        let now = timestamp::now();
        Self {
            id: Uuid::now_v7(),
            user_id,
            product_id,
            product_item_id: input.product_item_id,
            order_id: input.order_id,
            rating: input.rating,
            comment: input.comment,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the update; `true` when the rating changed.
    pub fn apply_update(&mut self, update: UpdateReview) -> bool {
        let mut rating_changed = false;
        if let Some(rating) = update.rating {
            rating_changed = rating != self.rating;
            self.rating = rating;
        }
        if let Some(comment) = update.comment {
            self.comment = comment;
        }
        self.updated_at = timestamp::now();
        rating_changed
    }

    pub fn filter_schema() -> FilterSchema {
        FilterSchema::new(OperatorSet::Comparison)
            .field("rating", FieldKind::Integer)
            .field("productItemId", FieldKind::Id)
            .field("orderId", FieldKind::Id)
            .field("userId", FieldKind::Id)
            .field("createdAt", FieldKind::DateTime)
    }
}

/// One product item in a user's wishlist; `(userId, productItemId)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_item_id: Uuid,
    pub product_id: Uuid,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl WishlistEntry {
    pub fn new(user_id: Uuid, product_item_id: Uuid, product_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            product_item_id,
            product_id,
            created_at: timestamp::now(),
        }
    }

    pub fn filter_schema() -> FilterSchema {
        FilterSchema::new(OperatorSet::Comparison)
            .field("productItemId", FieldKind::Id)
            .field("productId", FieldKind::Id)
            .field("createdAt", FieldKind::DateTime)
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleWishlist {
    pub product_item_id: Uuid,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WishlistAction {
    Added,
    Removed,
}

/// Outcome of a wishlist toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistToggle {
    pub product_item_id: Uuid,
    pub action: WishlistAction,
    /// Whether the item is in the wishlist after the toggle
    pub in_wishlist: bool,
}

impl WishlistToggle {
    pub fn new(product_item_id: Uuid, action: WishlistAction) -> Self {
        Self {
            product_item_id,
            action,
            in_wishlist: action == WishlistAction::Added,
        }
    }
}
