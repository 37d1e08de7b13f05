use fsa_catalog::customer::NotificationPreferences;
use fsa_catalog::product::resolve_from_name;
use fsa_catalog::{CosmeticProduct, NotificationChannel, ProductSubject};
use fsa_shared::models::events::ProductNotificationEvent;
use std::fmt::Write;

use crate::app_config::NotificationConfig;
use crate::catalog_repo::CatalogRepository;
use crate::customer_repo::CustomerDirectory;
use crate::error::{StoreError, StoreResult};

/// Catalog and customer operations behind one entry point
pub struct ProductManagement {
    catalog: CatalogRepository,
    customers: CustomerDirectory,
}

/// Seeded catalog and customers, alerts to the log
impl Default for ProductManagement {
    fn default() -> Self {
        Self::new(CatalogRepository::seeded(), CustomerDirectory::default())
    }
}

impl ProductManagement {
    pub fn new(catalog: CatalogRepository, customers: CustomerDirectory) -> Self {
        Self { catalog, customers }
    }

    /// Seeded catalog and customers, with customer preferences taken from config
    pub fn from_config(config: &NotificationConfig, channel: Box<dyn NotificationChannel>) -> Self {
        let preferences = NotificationPreferences {
            email: config.email_by_default,
            sms: config.sms_by_default,
        };
        Self::new(CatalogRepository::seeded(), CustomerDirectory::seeded(preferences, channel))
    }

    pub fn catalog(&self) -> &CatalogRepository {
        &self.catalog
    }

    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> &mut CustomerDirectory {
        &mut self.customers
    }

    pub fn product(&self, product_id: &str) -> StoreResult<&ProductSubject> {
        self.catalog
            .lookup(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))
    }

    fn product_mut(&mut self, product_id: &str) -> StoreResult<&mut ProductSubject> {
        self.catalog
            .lookup_mut(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))
    }

    fn customer_id(&self, customer_name: &str) -> StoreResult<String> {
        self.customers
            .find_by_name(customer_name)
            .map(|c| c.id.clone())
            .ok_or_else(|| StoreError::CustomerNotFound(customer_name.to_string()))
    }

    pub fn display_catalog(&self) -> String {
        let mut out = String::from("FSA_BEAUTY PRODUCT CATALOG:\n=============================");
        for product in self.catalog.list() {
            let _ = write!(
                out,
                "\n{} | {} | ${:.2} | Stock: {}",
                product.id,
                product.name,
                product.price(),
                product.stock()
            );
        }
        out
    }

    /// Factory product matching a catalog listing
    pub fn create_cosmetic_product(&self, product_id: &str) -> StoreResult<CosmeticProduct> {
        let product = self.product(product_id)?;
        Ok(resolve_from_name(&product.name))
    }

    /// Subscribe a customer (by name) to a product's changes.
    /// Returns false when the customer was already watching.
    pub fn setup_product_notification(&mut self, product_id: &str, customer_name: &str) -> StoreResult<bool> {
        let customer_id = self.customer_id(customer_name)?;
        let product = self.product_mut(product_id)?;
        let added = product.register_observer(&customer_id);
        if added {
            tracing::info!("{} will be notified about {}", customer_name, product.name);
        }
        Ok(added)
    }

    pub fn remove_product_notification(&mut self, product_id: &str, customer_name: &str) -> StoreResult<bool> {
        let customer_id = self.customer_id(customer_name)?;
        Ok(self.product_mut(product_id)?.remove_observer(&customer_id))
    }

    pub fn update_product_stock(&mut self, product_id: &str, new_stock: u32) -> StoreResult<Vec<ProductNotificationEvent>> {
        let product = self
            .catalog
            .lookup_mut(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;
        tracing::info!("Updating stock for {} to {}", product.name, new_stock);
        Ok(product.set_stock(new_stock, &mut self.customers))
    }

    pub fn update_product_price(&mut self, product_id: &str, new_price: f64) -> StoreResult<Vec<ProductNotificationEvent>> {
        let product = self
            .catalog
            .lookup_mut(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;
        tracing::info!("Updating price for {} to ${:.2}", product.name, new_price);
        Ok(product.set_price(new_price, &mut self.customers))
    }

    pub fn start_sale(&mut self, product_id: &str, discount_percent: f64) -> StoreResult<Vec<ProductNotificationEvent>> {
        let product = self
            .catalog
            .lookup_mut(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;
        tracing::info!("Starting {:.1}% sale on {}", discount_percent, product.name);
        Ok(product.set_on_sale(true, discount_percent, &mut self.customers))
    }

    pub fn end_sale(&mut self, product_id: &str) -> StoreResult<()> {
        let product = self
            .catalog
            .lookup_mut(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;
        tracing::info!("Ending sale on {}", product.name);
        product.set_on_sale(false, 0.0, &mut self.customers);
        Ok(())
    }

    pub fn announce_new_shade(&mut self, product_id: &str, shade: &str) -> StoreResult<Option<ProductNotificationEvent>> {
        let product = self
            .catalog
            .lookup(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;
        Ok(product.announce_new_shade(shade, &mut self.customers))
    }

    pub fn announce_feature(&mut self, product_id: &str, feature: &str) -> StoreResult<Option<ProductNotificationEvent>> {
        let product = self
            .catalog
            .lookup(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;
        Ok(product.announce_feature(feature, &mut self.customers))
    }

    pub fn is_product_available(&self, product_id: &str) -> bool {
        self.catalog.is_available(product_id)
    }

    pub fn available_product_ids(&self) -> Vec<String> {
        self.catalog.product_ids()
    }

    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsa_shared::models::events::NotificationKind;

    fn history(store: &ProductManagement, name: &str) -> Vec<String> {
        store.customers().find_by_name(name).unwrap().notification_history().to_vec()
    }

    #[test]
    fn test_default_store_is_seeded() {
        let store = ProductManagement::default();

        assert_eq!(store.product_count(), 8);
        assert_eq!(store.customers().len(), 3);
        assert!(store.is_product_available("LIP001"));
    }

    #[test]
    fn test_display_catalog_lists_every_product() {
        let store = ProductManagement::default();
        let report = store.display_catalog();

        assert_eq!(report.lines().count(), 2 + 8);
        assert!(report.contains("LIP001 | Luxury Lipstick (Red) | $24.99 | Stock: 10"));
        assert!(report.contains("MASC001 | Volume Mascara (Waterproof) | $19.99 | Stock: 15"));
    }

    #[test]
    fn test_notification_setup_errors() {
        let mut store = ProductManagement::default();

        assert!(matches!(
            store.setup_product_notification("NAIL001", "Alice"),
            Err(StoreError::ProductNotFound(_))
        ));
        assert!(matches!(
            store.setup_product_notification("LIP001", "Dave"),
            Err(StoreError::CustomerNotFound(_))
        ));
        assert!(store.setup_product_notification("LIP001", "Alice").unwrap());
        assert!(!store.setup_product_notification("LIP001", "Alice").unwrap());
        assert_eq!(store.product("LIP001").unwrap().observer_count(), 1);
    }

    #[test]
    fn test_stock_updates_reach_watchers_only() {
        let mut store = ProductManagement::default();
        store.setup_product_notification("LIP001", "Alice").unwrap();
        store.setup_product_notification("BLUSH002", "Carol").unwrap();

        let events = store.update_product_stock("LIP001", 0).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, NotificationKind::OutOfStock);

        let events = store.update_product_stock("LIP001", 5).unwrap();
        assert_eq!(events[0].kind, NotificationKind::BackInStock);

        store.update_product_stock("BLUSH002", 2).unwrap();

        assert_eq!(history(&store, "Alice").len(), 2);
        assert_eq!(
            history(&store, "Carol"),
            vec!["Low stock alert! 'Soft Blush (Peach)' has only 2 items left.".to_string()]
        );
        assert!(history(&store, "Bob").is_empty());
        assert!(!store.is_product_available("NAIL001"));
    }

    #[test]
    fn test_price_drop_and_sale() {
        let mut store = ProductManagement::default();
        store.setup_product_notification("MASC001", "Bob").unwrap();

        let events = store.update_product_price("MASC001", 15.99).unwrap();
        assert_eq!(events[0].kind, NotificationKind::PriceDrop);
        assert!(history(&store, "Bob")[0].starts_with("Price drop! 'Volume Mascara (Waterproof)' is now $15.99"));

        let events = store.start_sale("MASC001", 20.0).unwrap();
        assert_eq!(events[0].kind, NotificationKind::Sale);
        assert!(store.product("MASC001").unwrap().is_on_sale());

        store.end_sale("MASC001").unwrap();
        assert!(!store.product("MASC001").unwrap().is_on_sale());
        assert_eq!(history(&store, "Bob").len(), 2);
    }

    #[test]
    fn test_removed_watcher_hears_nothing() {
        let mut store = ProductManagement::default();
        store.setup_product_notification("LIP003", "Bob").unwrap();
        assert!(store.remove_product_notification("LIP003", "Bob").unwrap());
        assert!(!store.remove_product_notification("LIP003", "Bob").unwrap());

        let events = store.update_product_stock("LIP003", 0).unwrap();
        assert!(events.is_empty());
        assert!(store.announce_new_shade("LIP003", "Coral").unwrap().is_none());
        assert!(history(&store, "Bob").is_empty());
    }

    #[test]
    fn test_create_cosmetic_product_from_listing() {
        let store = ProductManagement::default();

        let blush = store.create_cosmetic_product("BLUSH002").unwrap();
        assert_eq!(blush.color, "Peach");
        let lipstick = store.create_cosmetic_product("LIP002").unwrap();
        assert_eq!(lipstick.color, "Brown");
        assert!(store.create_cosmetic_product("NAIL001").is_err());
    }

    #[test]
    fn test_from_config_sets_preferences() {
        let config = NotificationConfig {
            email_by_default: false,
            sms_by_default: true,
        };
        let store = ProductManagement::from_config(&config, Box::new(fsa_catalog::LogChannel));

        let alice = store.customers().find_by_name("Alice").unwrap();
        assert!(!alice.preferences.email);
        assert!(alice.preferences.sms);
        assert_eq!(store.product_count(), 8);
        assert_eq!(store.available_product_ids().len(), 8);
    }
}
