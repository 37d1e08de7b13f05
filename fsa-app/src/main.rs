use fsa_app::{demo, Storefront};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "fsa_app=info,fsa_store=info,fsa_catalog=info,fsa_order=info,fsa_core=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = fsa_store::Config::load()?;
    tracing::info!("Starting {} storefront", config.store.name);

    println!("Welcome to {}!", config.store.name);
    println!("Your Premium Cosmetics Brand");

    let mut store = Storefront::new(config);
    let stdout = std::io::stdout();
    demo::run(&mut store, &mut stdout.lock()).await?;

    Ok(())
}
