//! Ticket purchase demo binary
//!
//! Fills the catalog, books a seat with a combo and prints the summary.

use anyhow::Context;
use cinema_core::environment::SystemClock;
use ticket_purchase::{Config, MovieCatalog, scenario};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticket_purchase=info,cinema_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting ticket purchase demo");

    // Load configuration
    let config = Config::from_env();
    info!(
        customer = %config.customer,
        hall = config.hall.number,
        snacks = ?config.hall.snacks,
        "Configuration loaded"
    );

    let catalog = MovieCatalog::new();
    let purchase = scenario::run(&config, &catalog, &SystemClock)
        .context("ticket purchase failed")?;

    purchase.show_summary();
    info!(movies = catalog.len(), "Ticket purchase demo complete");
    Ok(())
}
