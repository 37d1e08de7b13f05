use fsa_catalog::CosmeticProduct;
use fsa_core::payment::{strategy_from_details, PaymentContext, PaymentLatency, PaymentStrategy};
use fsa_core::CoreError;
use fsa_store::{ProductManagement, StoreError};
use std::fmt::Write;
use std::sync::Arc;

use crate::models::{Order, OrderLine, OrderStatus};

/// Shopping cart plus payment selection; turns a cart into a paid order
#[derive(Default)]
pub struct OrderProcessor {
    cart: Vec<CosmeticProduct>,
    payment: PaymentContext,
    latency: PaymentLatency,
    orders: Vec<Order>,
}

impl OrderProcessor {
    pub fn new(latency: PaymentLatency) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    pub fn add_to_cart(&mut self, product: CosmeticProduct) {
        tracing::info!("Added to cart: {}", product.description());
        self.cart.push(product);
    }

    /// Add the factory product behind a catalog listing; the listing must be in stock
    pub fn add_to_cart_by_id(&mut self, product_id: &str, products: &ProductManagement) -> Result<(), OrderError> {
        if !products.is_product_available(product_id) {
            tracing::warn!("Product not available: {}", product_id);
            return Err(OrderError::ProductUnavailable(product_id.to_string()));
        }
        let product = products.create_cosmetic_product(product_id)?;
        self.add_to_cart(product);
        Ok(())
    }

    pub fn cart(&self) -> &[CosmeticProduct] {
        &self.cart
    }

    pub fn cart_size(&self) -> usize {
        self.cart.len()
    }

    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.iter().map(|p| p.unit_cost).sum()
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_report(&self) -> String {
        let mut out = String::from("SHOPPING CART:\n================");
        if self.cart.is_empty() {
            out.push_str("\nCart is empty");
            return out;
        }

        for (i, product) in self.cart.iter().enumerate() {
            let _ = write!(out, "\n{}. {} - ${:.2}", i + 1, product.description(), product.unit_cost);
        }
        let _ = write!(out, "\nSubtotal: ${:.2}", self.cart_total());
        if self.payment.has_strategy() {
            let _ = write!(out, "\nPayment Method: {}", self.payment.current_strategy_info());
        }
        out
    }

    /// Select a payment method by name ("applepay", "creditcard", "qr").
    /// On error the previous selection is kept.
    pub fn set_payment_method(&mut self, kind: &str, details: &[&str]) -> Result<(), OrderError> {
        let strategy = strategy_from_details(kind, details, &self.latency)?;
        self.set_payment_strategy(strategy);
        Ok(())
    }

    pub fn set_payment_strategy(&mut self, strategy: Arc<dyn PaymentStrategy>) {
        self.payment.set_payment_strategy(strategy);
    }

    pub fn clear_payment_method(&mut self) {
        self.payment.clear();
    }

    pub fn payment_info(&self) -> String {
        if !self.payment.has_strategy() {
            return "No payment method selected".to_string();
        }
        self.payment.current_strategy_info()
    }

    pub fn payment_context(&self) -> &PaymentContext {
        &self.payment
    }

    /// Charge the cart total with the selected method.
    /// The cart is cleared only when the payment succeeds.
    pub async fn process_order(&mut self) -> Result<Order, OrderError> {
        if self.cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        if !self.payment.has_strategy() {
            return Err(OrderError::Payment(CoreError::NotConfigured("payment strategy".to_string())));
        }

        let mut order = Order::new(self.cart.iter().map(OrderLine::from).collect());
        tracing::info!(
            order_id = %order.id,
            "Processing order: ${:.2} via {}",
            order.total,
            self.payment.current_strategy_info()
        );

        match self.payment.execute_payment(order.total).await {
            Ok(receipt) => {
                order.mark_paid(&receipt);
                if let Some(event) = order.paid_event() {
                    tracing::info!(payload = %event.to_payload(), "Order paid");
                }
                self.cart.clear();
                self.orders.push(order.clone());
                Ok(order)
            }
            Err(e) => {
                order.update_status(OrderStatus::Failed);
                tracing::warn!(order_id = %order.id, "Order processing failed: {}", e);
                self.orders.push(order);
                Err(OrderError::Payment(e))
            }
        }
    }

    /// Every order attempted, paid or failed, oldest first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Product not available: {0}")]
    ProductUnavailable(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Payment error: {0}")]
    Payment(#[from] CoreError),
}
