use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why a product broadcast was raised
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    BackInStock,
    LowStock,
    OutOfStock,
    PriceDrop,
    PriceIncrease,
    Sale,
    NewFeature,
    NewShade,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductNotificationEvent {
    pub product_id: String,
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ProductNotificationEvent {
    pub fn new(product_id: impl Into<String>, kind: NotificationKind, message: String) -> Self {
        Self {
            product_id: product_id.into(),
            kind,
            message,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPaidEvent {
    pub order_id: Uuid,
    pub receipt_id: Uuid,
    pub payment_method: String,
    pub item_count: usize,
    pub total: f64,
    pub timestamp: i64,
}

impl OrderPaidEvent {
    /// Compact JSON payload for log lines
    pub fn to_payload(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"order_id\":\"{}\"}}", self.order_id))
    }
}
