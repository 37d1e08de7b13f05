use chrono::{DateTime, Utc};
use fsa_catalog::CosmeticProduct;
use fsa_core::payment::PaymentReceipt;
use fsa_shared::models::events::OrderPaidEvent;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use uuid::Uuid;

/// Order status in the checkout lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Failed,
}

/// One purchased product, priced at checkout time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub description: String,
    pub unit_price: f64,
}

impl From<&CosmeticProduct> for OrderLine {
    fn from(product: &CosmeticProduct) -> Self {
        Self {
            description: product.description(),
            unit_price: product.unit_cost,
        }
    }
}

/// A checkout of the whole cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_method: Option<String>,
    pub receipt_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(lines: Vec<OrderLine>) -> Self {
        let now = Utc::now();
        let total = lines.iter().map(|l| l.unit_price).sum();
        Self {
            id: Uuid::new_v4(),
            lines,
            total,
            status: OrderStatus::Pending,
            payment_method: None,
            receipt_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_status(&mut self, new_status: OrderStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }

    /// Attach the gateway receipt and move to Paid
    pub fn mark_paid(&mut self, receipt: &PaymentReceipt) {
        self.payment_method = Some(receipt.payment_method.clone());
        self.receipt_id = Some(receipt.id);
        self.update_status(OrderStatus::Paid);
    }

    /// Event for downstream consumers; only paid orders have one
    pub fn paid_event(&self) -> Option<OrderPaidEvent> {
        if self.status != OrderStatus::Paid {
            return None;
        }
        Some(OrderPaidEvent {
            order_id: self.id,
            receipt_id: self.receipt_id?,
            payment_method: self.payment_method.clone()?,
            item_count: self.lines.len(),
            total: self.total,
            timestamp: self.updated_at.timestamp(),
        })
    }

    pub fn summary(&self) -> String {
        let mut out = String::from("Items purchased:");
        for line in &self.lines {
            let _ = write!(out, "\n   • {}", line.description);
        }
        let _ = write!(out, "\nTotal: ${:.2}", self.total);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsa_catalog::ProductCategory;
    use fsa_core::payment::PaymentStatus;

    fn receipt(amount: f64) -> PaymentReceipt {
        PaymentReceipt {
            id: Uuid::new_v4(),
            amount,
            payment_method: "QR Payment".to_string(),
            details: "QR via Kaspi Bank".to_string(),
            status: PaymentStatus::Succeeded,
            processed_at: Utc::now(),
        }
    }

    #[test]
    fn test_order_totals_lines() {
        let lipstick = ProductCategory::Lipstick.create("red");
        let mascara = ProductCategory::Mascara.create("waterproof");
        let order = Order::new(vec![OrderLine::from(&lipstick), OrderLine::from(&mascara)]);

        assert_eq!(order.status, OrderStatus::Pending);
        assert!((order.total - 44.98).abs() < 1e-9);
        assert!(order.summary().ends_with("Total: $44.98"));
        assert!(order.paid_event().is_none());
    }

    #[test]
    fn test_paid_order_emits_event() {
        let blush = ProductCategory::Blush.create("peach");
        let mut order = Order::new(vec![OrderLine::from(&blush)]);
        let receipt = receipt(order.total);

        order.mark_paid(&receipt);

        assert_eq!(order.status, OrderStatus::Paid);
        let event = order.paid_event().unwrap();
        assert_eq!(event.order_id, order.id);
        assert_eq!(event.receipt_id, receipt.id);
        assert_eq!(event.payment_method, "QR Payment");
        assert_eq!(event.item_count, 1);
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        assert_eq!(serde_json::to_string(&OrderStatus::Paid).unwrap(), "\"PAID\"");
    }
}
