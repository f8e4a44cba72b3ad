mod reconcile;
mod sync;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "agsync")]
#[command(about = "Sync supplier stock, weights and barcodes into a Shopify catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Push feed stock levels and scraped weights/barcodes to the catalog (default).
    Sync,
    /// Locate and scrape one SKU on the supplier site; no catalog calls.
    Scrape {
        /// Supplier SKU to search for.
        sku: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = agsync_core::load_app_config()?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "loaded configuration");

    let result = match cli.command.unwrap_or(Commands::Sync) {
        Commands::Sync => sync::run_sync(&config).await,
        Commands::Scrape { sku } => sync::scrape_one(&config, &sku).await,
    };

    if let Err(e) = &result {
        tracing::error!(error = %format!("{e:#}"), "run aborted");
    }
    result
}

/// `RUST_LOG` wins when set; otherwise `AGSYNC_LOG_LEVEL`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
