use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// Parent product. Only the fields this service reads or maintains.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    /// Mean rating over every review of every item of this product
    #[serde(default)]
    pub rating_avg: f64,
    #[serde(default)]
    pub review_count: u64,
}

/// Purchasable variant of a product (size, color...).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub product_id: Uuid,
    pub sku: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub rating_avg: f64,
    #[serde(default)]
    pub review_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Branch {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipping,
    Delivered,
    Cancelled,
    /// Any status introduced by the order service later
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_item_id: Uuid,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
}

impl Order {
    pub fn contains_item(&self, product_item_id: Uuid) -> bool {
        self.items
            .iter()
            .any(|item| item.product_item_id == product_item_id)
    }

    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }
}

/// Average and count of the ratings of one product or product item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub rating_avg: f64,
    pub review_count: u64,
}

impl RatingSummary {
    /// Keeps the mean exactly as aggregated. No reviews means `(0, 0)`.
    pub fn new(mean: f64, count: u64) -> Self {
        if count == 0 || !mean.is_finite() {
            return Self::default();
        }
        Self {
            rating_avg: mean,
            review_count: count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rating_summary_keeps_exact_mean() {
        let ratings = [5.0, 5.0, 4.0];
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        let summary = RatingSummary::new(mean, 3);
        assert_eq!(summary.rating_avg, mean);
        assert_eq!(summary.review_count, 3);
        assert_eq!(RatingSummary::new(3.25, 4).rating_avg, 3.25);
    }

    #[test]
    fn test_rating_summary_empty() {
        assert_eq!(RatingSummary::new(0.0, 0), RatingSummary::default());
        assert_eq!(RatingSummary::new(f64::NAN, 2), RatingSummary::default());
    }

    #[test]
    fn test_order_lookups() {
        let item = Uuid::now_v7();
        let order: Order = serde_json::from_value(json!({
            "_id": Uuid::now_v7(),
            "userId": Uuid::now_v7(),
            "items": [{"productItemId": item, "quantity": 2}],
            "status": "delivered"
        }))
        .unwrap();
        assert!(order.contains_item(item));
        assert!(!order.contains_item(Uuid::now_v7()));
        assert!(order.is_delivered());
    }

    #[test]
    fn test_unknown_order_status() {
        let status: OrderStatus = serde_json::from_value(json!("returned")).unwrap();
        assert_eq!(status, OrderStatus::Unknown);
    }

    #[test]
    fn test_product_item_defaults_missing_aggregates() {
        let item: ProductItem = serde_json::from_value(json!({
            "_id": Uuid::now_v7(),
            "productId": Uuid::now_v7(),
            "sku": "TS-RED-M"
        }))
        .unwrap();
        assert_eq!(item.review_count, 0);
        assert_eq!(item.rating_avg, 0.0);
    }
}
