//! Console walk-through of the storefront: one section per collaborator,
//! then an end-to-end shopping scenario.

use fsa_catalog::product::BRAND;
use fsa_catalog::{BeautySetDirector, BeautySetKind, Customer, LogChannel, ProductCategory, ProductSubject, ServiceNode, ServiceOption};
use fsa_core::payment::{ApplePayPayment, CreditCardPayment, PaymentContext, PaymentStrategy, QrPayment};
use fsa_shared::models::events::ProductNotificationEvent;
use fsa_store::CustomerDirectory;
use std::io::Write;
use std::sync::Arc;

use crate::error::AppResult;
use crate::storefront::Storefront;

fn heading<W: Write>(out: &mut W, title: &str) -> AppResult<()> {
    writeln!(out, "\n{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    Ok(())
}

fn write_events<W: Write>(out: &mut W, events: &[ProductNotificationEvent]) -> AppResult<()> {
    for event in events {
        writeln!(out, "   -> [{:?}] {}", event.kind, event.message)?;
    }
    Ok(())
}

pub fn show_store_info<W: Write>(store: &Storefront, out: &mut W) -> AppResult<()> {
    writeln!(out, "\n{}", store.store_info())?;
    Ok(())
}

pub async fn demonstrate_all_patterns<W: Write>(store: &mut Storefront, out: &mut W) -> AppResult<()> {
    heading(out, "FSA_BEAUTY - ALL 6 DESIGN PATTERNS")?;

    demonstrate_factory(out)?;
    demonstrate_observer(out)?;
    demonstrate_builder(out)?;
    demonstrate_strategy(store, out).await?;
    demonstrate_decorator(out)?;
    demonstrate_facade(store, out)?;

    writeln!(out, "\nAll 6 design patterns demonstrated")?;
    Ok(())
}

fn demonstrate_factory<W: Write>(out: &mut W) -> AppResult<()> {
    heading(out, "1. FACTORY METHOD")?;
    for (category, variant) in [
        (ProductCategory::Lipstick, "red"),
        (ProductCategory::Mascara, "waterproof"),
        (ProductCategory::Blush, "peach"),
    ] {
        let product = category.create(variant);
        writeln!(out, "\n{} created:\n{}", category.factory_type(), product.info())?;
    }
    Ok(())
}

fn demonstrate_observer<W: Write>(out: &mut W) -> AppResult<()> {
    heading(out, "2. OBSERVER")?;

    let mut customers = CustomerDirectory::new(Box::new(LogChannel));
    customers.add(Customer::new("OBS001", "Alice", "alice@email.com"));
    customers.add(Customer::new("OBS002", "Bob", "bob@email.com"));

    let mut lipstick = ProductSubject::new("LIP_DEMO", "Demo Lipstick", BRAND, 24.99, 5);
    let mut mascara = ProductSubject::new("MASC_DEMO", "Demo Mascara", BRAND, 19.99, 10);
    lipstick.register_observer("OBS001");
    lipstick.register_observer("OBS002");
    mascara.register_observer("OBS001");

    writeln!(out, "Demo Lipstick stock -> 2")?;
    write_events(out, &lipstick.set_stock(2, &mut customers))?;
    writeln!(out, "Demo Lipstick price -> $19.99")?;
    write_events(out, &lipstick.set_price(19.99, &mut customers))?;
    writeln!(out, "Demo Mascara stock -> 0")?;
    write_events(out, &mascara.set_stock(0, &mut customers))?;

    for customer in customers.list() {
        writeln!(out, "{} received {} notification(s)", customer.name, customer.notification_count())?;
    }
    Ok(())
}

fn demonstrate_builder<W: Write>(out: &mut W) -> AppResult<()> {
    heading(out, "3. BUILDER")?;

    let mut director = BeautySetDirector::new();
    for kind in [BeautySetKind::Beginner, BeautySetKind::Professional] {
        director.set_builder(kind.builder());
        let set = director.construct()?;
        writeln!(out, "\n{}", set.set_description())?;
    }

    director.set_builder(BeautySetKind::Gift.builder());
    let quick = director.construct_quick()?;
    writeln!(out, "\nQuick build:\n{}", quick.set_description())?;
    Ok(())
}

async fn demonstrate_strategy<W: Write>(store: &Storefront, out: &mut W) -> AppResult<()> {
    heading(out, "4. STRATEGY")?;

    let latency = store.config().payment.latency();
    let strategies: [Arc<dyn PaymentStrategy>; 3] = [
        Arc::new(ApplePayPayment::new("token123", "iPhone").with_latency(latency.apple_pay)),
        Arc::new(
            CreditCardPayment::new("4111111111111111", "John Doe", "12/25", "123").with_latency(latency.credit_card),
        ),
        Arc::new(QrPayment::new("QRCODE123", "Kaspi Bank").with_latency(latency.qr)),
    ];

    let mut context = PaymentContext::new();
    for strategy in strategies {
        context.set_payment_strategy(strategy);
        let receipt = context.execute_payment(50.0).await?;
        writeln!(
            out,
            "{}: ${:.2} {:?} (receipt {})",
            receipt.payment_method, receipt.amount, receipt.status, receipt.id
        )?;
    }
    Ok(())
}

fn demonstrate_decorator<W: Write>(out: &mut W) -> AppResult<()> {
    heading(out, "5. DECORATOR")?;

    let mut service = ServiceNode::base(ProductCategory::Lipstick.create("red"));
    writeln!(out, "\nBase product:\n{}\nCost: ${:.2}", service.service_details(), service.cost())?;

    let steps = [
        ("With Premium Gift Wrap", ServiceOption::GiftWrap { style: "Premium".to_string() }),
        ("With Express Delivery", ServiceOption::ExpressDelivery { days: 1 }),
        (
            "With Personalization",
            ServiceOption::Personalization {
                message: "Happy Birthday!".to_string(),
                font: "Elegant".to_string(),
            },
        ),
    ];
    for (title, option) in steps {
        service = option.wrap(service);
        writeln!(out, "\n{}:\n{}\nCost: ${:.2}", title, service.service_details(), service.cost())?;
    }

    let full = service.sample_kit("Luxury Trial Kit").consultation(30);
    writeln!(out, "\nFull premium package: {}", full.description())?;
    writeln!(out, "{}\nFinal Cost: ${:.2}", full.service_details(), full.cost())?;
    Ok(())
}

fn demonstrate_facade<W: Write>(store: &mut Storefront, out: &mut W) -> AppResult<()> {
    heading(out, "6. FACADE")?;

    writeln!(out, "\n{}", store.browse_products())?;
    store.add_to_cart("LIP001")?;
    store.add_to_cart("MASC001")?;
    writeln!(out, "\n{}", store.show_cart())?;

    store.set_payment_method("creditcard", &["4111222233334444", "Demo User", "12/26", "123"])?;
    writeln!(out, "Payment method set: {}", store.orders().payment_info())?;

    let set = store.create_beauty_set("gift")?;
    writeln!(out, "\n{}", set.set_description())?;
    Ok(())
}

/// Browsing through checkout, with watchers notified afterwards
pub async fn run_complete_scenario<W: Write>(store: &mut Storefront, out: &mut W) -> AppResult<()> {
    heading(out, "COMPLETE FSA_BEAUTY SHOPPING SCENARIO")?;

    writeln!(out, "\n1. Browsing products...\n{}", store.browse_products())?;

    writeln!(out, "\n2. Setting up notifications...")?;
    for (product_id, customer) in [("LIP001", "Alice"), ("MASC001", "Bob")] {
        store.setup_product_notification(product_id, customer)?;
        writeln!(out, "{} will be notified about {}", customer, store.products().product(product_id)?.name)?;
    }

    writeln!(out, "\n3. Creating beauty set...")?;
    writeln!(out, "{}", store.create_beauty_set("beginner")?.set_description())?;

    writeln!(out, "\n4. Shopping experience...")?;
    for product_id in ["LIP001", "MASC001", "BLUSH002"] {
        store.add_to_cart(product_id)?;
    }
    writeln!(out, "{}", store.show_cart())?;

    writeln!(out, "\n5. Selecting payment...")?;
    store.set_payment_method("applepay", &["ap1_demo_token", "iPhone 15"])?;
    writeln!(out, "Payment method set: {}", store.orders().payment_info())?;

    writeln!(out, "\n6. Adding premium services...")?;
    let package = store.service_package(
        ProductCategory::Lipstick.create("red"),
        &[
            ServiceOption::GiftWrap { style: "Luxury".to_string() },
            ServiceOption::SampleKit { kit_type: "Beauty Sampler".to_string() },
            ServiceOption::Consultation { minutes: 30 },
        ],
    );
    writeln!(out, "Premium service package:\n{}\nCost: ${:.2}", package.service_details(), package.cost())?;

    writeln!(out, "\n7. Final checkout...")?;
    let order = store.checkout().await?;
    writeln!(out, "ORDER {} PROCESSED SUCCESSFULLY!\n{}", order.id, order.summary())?;

    writeln!(out, "\n8. Observer notifications in action...")?;
    write_events(out, &store.update_product_stock("LIP001", 0)?)?;
    write_events(out, &store.update_product_price("MASC001", 17.99)?)?;

    writeln!(out, "\nComplete demo scenario finished")?;
    Ok(())
}

/// Store info, the pattern walk-through, then the shopping scenario
pub async fn run<W: Write>(store: &mut Storefront, out: &mut W) -> AppResult<()> {
    show_store_info(store, out)?;
    demonstrate_all_patterns(store, out).await?;
    run_complete_scenario(store, out).await?;

    writeln!(out, "\n{}", "=".repeat(50))?;
    writeln!(out, "Thank you for visiting {}!", store.config().store.name)?;
    writeln!(out, "{}", "=".repeat(50))?;
    Ok(())
}
