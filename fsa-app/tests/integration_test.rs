use fsa_app::{demo, AppError, Storefront};
use fsa_catalog::NotificationChannel;
use fsa_shared::models::events::NotificationKind;
use fsa_store::Config;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Outbox(Arc<Mutex<Vec<(String, String)>>>);

impl NotificationChannel for Outbox {
    fn send_email(&self, recipient: &str, message: &str) {
        self.0.lock().unwrap().push((recipient.to_string(), message.to_string()));
    }

    fn send_sms(&self, recipient: &str, message: &str) {
        self.0.lock().unwrap().push((recipient.to_string(), message.to_string()));
    }
}

fn instant_config() -> Config {
    let mut config = Config::default();
    config.payment.apple_pay_latency_ms = 0;
    config.payment.credit_card_latency_ms = 0;
    config.payment.qr_latency_ms = 0;
    config
}

#[tokio::test]
async fn test_full_demo_run() {
    let outbox = Outbox::default();
    let mut store = Storefront::with_channel(instant_config(), Box::new(outbox.clone()));
    let mut out = Vec::new();

    demo::run(&mut store, &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Total products: 8"));
    assert!(text.contains("FSA Professional Makeup Collection"));
    assert!(text.contains("   + Personal Card (Elegant font, message: \"Happy Birthday!\"): $3.99"));
    assert!(text.contains("Complete demo scenario finished"));

    // Items from the facade section stay in the cart for the final checkout
    let order = store.orders().orders().last().unwrap();
    assert_eq!(order.lines.len(), 5);
    assert_eq!(order.payment_method.as_deref(), Some("Apple Pay"));
    assert!(store.orders().is_cart_empty());

    let sent = outbox.0.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].0, "alice@email.com");
    assert!(sent[0].1.contains("is now out of stock"));
    assert_eq!(sent[1].0, "bob@email.com");
    assert!(sent[1].1.starts_with("Price drop! 'Volume Mascara (Waterproof)' is now $17.99"));
}

#[tokio::test]
async fn test_restock_fan_out_in_registration_order() {
    let outbox = Outbox::default();
    let mut store = Storefront::with_channel(instant_config(), Box::new(outbox.clone()));

    store.setup_product_notification("BLUSH003", "Carol").unwrap();
    store.setup_product_notification("BLUSH003", "Alice").unwrap();
    store.update_product_stock("BLUSH003", 0).unwrap();

    let events = store.update_product_stock("BLUSH003", 2).unwrap();
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![NotificationKind::BackInStock, NotificationKind::LowStock]);

    let sent = outbox.0.lock().unwrap();
    let recipients: Vec<_> = sent.iter().map(|(to, _)| to.as_str()).collect();
    assert_eq!(
        recipients,
        vec![
            "carol@email.com",
            "alice@email.com",
            "carol@email.com",
            "alice@email.com",
            "carol@email.com",
            "alice@email.com",
        ]
    );
}

#[tokio::test]
async fn test_out_of_stock_product_cannot_be_bought() {
    let mut store = Storefront::new(instant_config());
    store.update_product_stock("LIP003", 0).unwrap();

    let err = store.add_to_cart("LIP003").unwrap_err();
    assert!(matches!(err, AppError::Order(_)));

    store.add_to_cart("LIP002").unwrap();
    store.set_payment_method("qr", &["QR1234567890", "Kaspi Bank"]).unwrap();
    let order = store.checkout().await.unwrap();

    assert!((order.total - 24.99).abs() < 1e-9);
    assert!(order.summary().contains("Color: Brown"));
}

#[test]
fn test_unknown_ids_surface_as_errors() {
    let mut store = Storefront::new(instant_config());

    assert!(matches!(store.update_product_price("NAIL001", 9.99), Err(AppError::Store(_))));
    assert!(matches!(store.setup_product_notification("LIP001", "Mallory"), Err(AppError::Store(_))));
    assert!(matches!(store.set_payment_method("cash", &[]), Err(AppError::Order(_))));
}
