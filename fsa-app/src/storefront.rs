use fsa_catalog::bundle::create_beauty_set;
use fsa_catalog::{BeautySet, BeautySetKind, CosmeticProduct, LogChannel, NotificationChannel, ServiceNode, ServiceOption};
use fsa_order::{Order, OrderProcessor};
use fsa_shared::models::events::ProductNotificationEvent;
use fsa_store::{Config, ProductManagement};
use std::fmt::Write;

use crate::error::{AppError, AppResult};

/// Single entry point over catalog, ordering and beauty sets
pub struct Storefront {
    config: Config,
    products: ProductManagement,
    orders: OrderProcessor,
}

impl Storefront {
    /// Alerts go to the log
    pub fn new(config: Config) -> Self {
        Self::with_channel(config, Box::new(LogChannel))
    }

    pub fn with_channel(config: Config, channel: Box<dyn NotificationChannel>) -> Self {
        let products = ProductManagement::from_config(&config.notifications, channel);
        let orders = OrderProcessor::new(config.payment.latency());
        Self {
            config,
            products,
            orders,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn products(&self) -> &ProductManagement {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut ProductManagement {
        &mut self.products
    }

    pub fn orders(&self) -> &OrderProcessor {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut OrderProcessor {
        &mut self.orders
    }

    pub fn browse_products(&self) -> String {
        self.products.display_catalog()
    }

    pub fn add_to_cart(&mut self, product_id: &str) -> AppResult<()> {
        self.orders.add_to_cart_by_id(product_id, &self.products)?;
        Ok(())
    }

    pub fn show_cart(&self) -> String {
        self.orders.cart_report()
    }

    pub fn set_payment_method(&mut self, kind: &str, details: &[&str]) -> AppResult<()> {
        self.orders.set_payment_method(kind, details)?;
        Ok(())
    }

    pub async fn checkout(&mut self) -> AppResult<Order> {
        let order = self.orders.process_order().await?;
        tracing::info!("Thank you for shopping at {}!", self.config.store.name);
        Ok(order)
    }

    pub fn setup_product_notification(&mut self, product_id: &str, customer_name: &str) -> AppResult<bool> {
        Ok(self.products.setup_product_notification(product_id, customer_name)?)
    }

    pub fn update_product_stock(&mut self, product_id: &str, new_stock: u32) -> AppResult<Vec<ProductNotificationEvent>> {
        Ok(self.products.update_product_stock(product_id, new_stock)?)
    }

    pub fn update_product_price(&mut self, product_id: &str, new_price: f64) -> AppResult<Vec<ProductNotificationEvent>> {
        Ok(self.products.update_product_price(product_id, new_price)?)
    }

    /// Complete set of a named kind ("beginner", "professional", "gift")
    pub fn create_beauty_set(&self, kind: &str) -> AppResult<BeautySet> {
        let kind = BeautySetKind::parse(kind).ok_or_else(|| AppError::UnknownSetKind(kind.to_string()))?;
        Ok(create_beauty_set(kind)?)
    }

    /// Wrap a product in the given add-ons, in order
    pub fn service_package(&self, product: CosmeticProduct, services: &[ServiceOption]) -> ServiceNode {
        ServiceNode::base(product).with_services(services)
    }

    pub fn store_info(&self) -> String {
        let mut out = format!("{} STORE INFORMATION\n==============================", self.config.store.name.to_uppercase());
        let _ = write!(out, "\nTotal products: {}", self.products.product_count());
        out.push_str("\nAvailable payment methods: Apple Pay, Credit Card, QR");
        out.push_str("\nServices: Gift Wrap, Express Delivery, Personalization, Sample Kit, Beauty Consultation");
        out.push_str("\nBeauty sets: Beginner, Professional, Gift");
        let _ = write!(out, "\nStore motto: {}", self.config.store.motto);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsa_catalog::ProductCategory;

    fn storefront() -> Storefront {
        let mut config = Config::default();
        config.payment.apple_pay_latency_ms = 0;
        config.payment.credit_card_latency_ms = 0;
        config.payment.qr_latency_ms = 0;
        Storefront::new(config)
    }

    #[test]
    fn test_store_info() {
        let store = storefront();
        let info = store.store_info();

        assert!(info.starts_with("FSA_BEAUTY STORE INFORMATION"));
        assert!(info.contains("Total products: 8"));
        assert!(info.ends_with("Store motto: Beauty powered by Design Patterns!"));
    }

    #[test]
    fn test_unknown_set_kind() {
        let store = storefront();

        assert!(matches!(store.create_beauty_set("deluxe"), Err(AppError::UnknownSetKind(_))));
        assert_eq!(store.create_beauty_set("Gift").unwrap().name, "FSA Perfect Gift Set");
    }

    #[test]
    fn test_service_package() {
        let store = storefront();
        let package = store.service_package(
            ProductCategory::Lipstick.create("red"),
            &[
                ServiceOption::GiftWrap { style: "Luxury".to_string() },
                ServiceOption::SampleKit { kit_type: "Beauty Sampler".to_string() },
                ServiceOption::Consultation { minutes: 30 },
            ],
        );

        assert_eq!(package.depth(), 3);
        assert!((package.cost() - (24.99 + 19.99 + 4.99 + 15.0)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_checkout_flow() {
        let mut store = storefront();
        store.add_to_cart("LIP001").unwrap();
        store.add_to_cart("MASC002").unwrap();

        assert!(matches!(store.checkout().await, Err(AppError::Order(_))));

        store.set_payment_method("creditcard", &["4111222233334444", "Demo User", "12/26", "123"]).unwrap();
        let order = store.checkout().await.unwrap();

        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.payment_method.as_deref(), Some("Credit Card"));
        assert!(store.show_cart().ends_with("Cart is empty"));
    }
}
