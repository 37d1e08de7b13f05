use fsa_shared::models::events::{NotificationKind, ProductNotificationEvent};
use serde::{Deserialize, Serialize};

/// Stock at or below this (and above zero) triggers a low-stock alert
pub const LOW_STOCK_THRESHOLD: u32 = 3;

/// Looks up observers by id and hands them a message.
///
/// Subjects only hold ids; the registry owns the observers, so an observer
/// removed from the registry is silently skipped.
pub trait ObserverRegistry {
    /// Returns false when no observer with that id exists
    fn deliver(&mut self, observer_id: &str, message: &str) -> bool;
}

/// Broadcasts raised by a stock change, in emission order
pub fn stock_notifications(name: &str, previous: u32, current: u32) -> Vec<(NotificationKind, String)> {
    let mut notes = Vec::new();
    if previous == current {
        return notes;
    }

    if previous == 0 && current > 0 {
        notes.push((
            NotificationKind::BackInStock,
            format!("Product '{}' is back in stock! Only {} items available.", name, current),
        ));
    }

    // May co-fire with back-in-stock on a 0 -> 1..=3 restock
    if current > 0 && current <= LOW_STOCK_THRESHOLD {
        notes.push((
            NotificationKind::LowStock,
            format!("Low stock alert! '{}' has only {} items left.", name, current),
        ));
    }

    if previous > 0 && current == 0 {
        notes.push((
            NotificationKind::OutOfStock,
            format!("Sorry! '{}' is now out of stock. We'll notify you when it's back.", name),
        ));
    }

    notes
}

/// Broadcast raised by a price change plus the discount to persist on a drop
pub fn price_notification(name: &str, previous: f64, current: f64) -> Option<(NotificationKind, String, Option<f64>)> {
    if current < previous {
        let discount = (previous - current) / previous * 100.0;
        Some((
            NotificationKind::PriceDrop,
            format!("Price drop! '{}' is now ${:.2} ({:.1}% off)!", name, current, discount),
            Some(discount),
        ))
    } else if current > previous {
        Some((
            NotificationKind::PriceIncrease,
            format!("Price update: '{}' is now ${:.2}", name, current),
            None,
        ))
    } else {
        None
    }
}

/// A catalog product that customers can watch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSubject {
    pub id: String,
    pub name: String,
    pub brand: String,
    price: f64,
    stock: u32,
    on_sale: bool,
    discount_percent: f64,
    #[serde(deserialize_with = "unique_observers")]
    observers: Vec<String>,
}

/// Drops repeated ids, keeping first-registration order
fn unique_observers<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let ids = Vec::<String>::deserialize(deserializer)?;
    let mut unique: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    Ok(unique)
}

impl ProductSubject {
    pub fn new(id: impl Into<String>, name: impl Into<String>, brand: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            price: price.max(0.0),
            stock,
            on_sale: false,
            discount_percent: 0.0,
            observers: Vec::new(),
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn is_on_sale(&self) -> bool {
        self.on_sale
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn observer_ids(&self) -> &[String] {
        &self.observers
    }

    /// Idempotent; returns true if the observer was newly added
    pub fn register_observer(&mut self, observer_id: &str) -> bool {
        if self.observers.iter().any(|id| id == observer_id) {
            return false;
        }
        self.observers.push(observer_id.to_string());
        tracing::info!("{} started watching {}", observer_id, self.name);
        true
    }

    /// No-op for an observer that is not registered
    pub fn remove_observer(&mut self, observer_id: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|id| id != observer_id);
        let removed = self.observers.len() != before;
        if removed {
            tracing::info!("{} stopped watching {}", observer_id, self.name);
        }
        removed
    }

    pub fn clear_observers(&mut self) {
        tracing::info!("Clearing all observers from {}", self.name);
        self.observers.clear();
    }

    /// Deliver `message` to every observer in registration order.
    /// Does nothing at all when nobody is watching.
    pub fn notify_observers<R>(&self, kind: NotificationKind, message: String, registry: &mut R) -> Option<ProductNotificationEvent>
    where
        R: ObserverRegistry + ?Sized,
    {
        if self.observers.is_empty() {
            return None;
        }

        tracing::info!(product = %self.id, ?kind, "Notifying {} observer(s) about {}", self.observers.len(), self.name);
        for observer_id in &self.observers {
            if !registry.deliver(observer_id, &message) {
                tracing::warn!("Observer {} of {} is no longer registered", observer_id, self.id);
            }
        }

        Some(ProductNotificationEvent::new(self.id.clone(), kind, message))
    }

    fn broadcast_all<R>(&self, notes: Vec<(NotificationKind, String)>, registry: &mut R) -> Vec<ProductNotificationEvent>
    where
        R: ObserverRegistry + ?Sized,
    {
        notes
            .into_iter()
            .filter_map(|(kind, message)| self.notify_observers(kind, message, registry))
            .collect()
    }

    /// Apply a stock level and broadcast any resulting alerts
    pub fn set_stock<R>(&mut self, new_stock: u32, registry: &mut R) -> Vec<ProductNotificationEvent>
    where
        R: ObserverRegistry + ?Sized,
    {
        let previous = self.stock;
        self.stock = new_stock;
        let notes = stock_notifications(&self.name, previous, new_stock);
        self.broadcast_all(notes, registry)
    }

    /// Apply a price and broadcast a drop or increase. A drop persists its discount.
    pub fn set_price<R>(&mut self, new_price: f64, registry: &mut R) -> Vec<ProductNotificationEvent>
    where
        R: ObserverRegistry + ?Sized,
    {
        let new_price = new_price.max(0.0);
        let previous = self.price;
        self.price = new_price;

        let Some((kind, message, discount)) = price_notification(&self.name, previous, new_price) else {
            return Vec::new();
        };
        if let Some(discount) = discount {
            self.discount_percent = discount;
        }
        self.broadcast_all(vec![(kind, message)], registry)
    }

    /// Starting a sale always announces the sale price; ending one is silent
    pub fn set_on_sale<R>(&mut self, on_sale: bool, discount_percent: f64, registry: &mut R) -> Vec<ProductNotificationEvent>
    where
        R: ObserverRegistry + ?Sized,
    {
        self.on_sale = on_sale;
        self.discount_percent = discount_percent;

        if !on_sale {
            return Vec::new();
        }

        let sale_price = self.sale_price();
        let message = format!(
            "SALE! '{}' is now ${:.2} ({:.1}% off)!",
            self.name, sale_price, discount_percent
        );
        self.broadcast_all(vec![(NotificationKind::Sale, message)], registry)
    }

    /// Price after the current discount
    pub fn sale_price(&self) -> f64 {
        self.price * (1.0 - self.discount_percent / 100.0)
    }

    pub fn announce_feature<R>(&self, feature: &str, registry: &mut R) -> Option<ProductNotificationEvent>
    where
        R: ObserverRegistry + ?Sized,
    {
        let message = format!("New feature! '{}' now includes: {}", self.name, feature);
        self.notify_observers(NotificationKind::NewFeature, message, registry)
    }

    pub fn announce_new_shade<R>(&self, shade: &str, registry: &mut R) -> Option<ProductNotificationEvent>
    where
        R: ObserverRegistry + ?Sized,
    {
        let message = format!("New shade available! '{}' now comes in {}", self.name, shade);
        self.notify_observers(NotificationKind::NewShade, message, registry)
    }

    pub fn product_info(&self) -> String {
        format!(
            "Product[ID: {}, Name: {}, Brand: {}, Price: ${:.2}, Stock: {}, OnSale: {}]",
            self.id, self.name, self.brand, self.price, self.stock, self.on_sale
        )
    }
}
