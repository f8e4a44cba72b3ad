//! Run orchestration: build clients, resolve the fatal preconditions, then
//! hand every feed record to the [`Reconciler`].

use std::time::Duration;

use anyhow::Context;

use agsync_core::{parse_cookie_str, parse_weight, AppConfig};
use agsync_shopify::ShopifyAdminClient;
use agsync_supplier::{ProductLocator, SupplierClient, WebDriverLocator};

use crate::reconcile::Reconciler;

fn build_supplier_client(config: &AppConfig) -> anyhow::Result<SupplierClient> {
    let cookies = parse_cookie_str(&config.supplier_cookies);
    if cookies.is_empty() {
        tracing::warn!("AGLINE_COOKIES is empty; product pages may hide weight and barcode");
    }
    SupplierClient::new(
        config.request_timeout_secs,
        &config.web_user_agent,
        &cookies,
    )
    .context("failed to build supplier client")
}

fn build_locator(config: &AppConfig) -> anyhow::Result<WebDriverLocator> {
    WebDriverLocator::new(
        &config.webdriver_url,
        &config.supplier_url,
        Duration::from_secs(config.search_settle_secs),
    )
    .context("failed to build WebDriver locator")
}

/// One full sync run.
///
/// Aborts (returns `Err`) only when no stock location qualifies or the
/// catalog index cannot be built. A feed failure is logged and ends the run
/// cleanly since there is nothing to reconcile.
pub(crate) async fn run_sync(config: &AppConfig) -> anyhow::Result<()> {
    if config.shopify_access_token.is_empty() || config.shopify_shop.is_empty() {
        tracing::warn!("SHOPIFY_ACCESS_TOKEN or SHOPIFY_SHOP is empty; catalog calls will fail");
    }

    let catalog = ShopifyAdminClient::new(
        &config.shopify_shop,
        &config.shopify_access_token,
        &config.shopify_api_version,
    )
    .context("failed to build Shopify client")?;
    let supplier = build_supplier_client(config)?;
    let locator = build_locator(config)?;

    let location = catalog
        .resolve_location()
        .await
        .context("cannot resolve a stock location")?;

    let records = match supplier.fetch_feed(&config.feed_url).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "stock feed unavailable; nothing to sync");
            return Ok(());
        }
    };
    tracing::info!(records = records.len(), "read stock feed");

    let index = catalog
        .build_index(config.variants_page_size)
        .await
        .context("cannot build catalog SKU index")?;

    Reconciler::new(&catalog, &supplier, &locator)
        .run(&records, &index, &location)
        .await;

    Ok(())
}

/// Diagnostic: locate and scrape a single SKU and print what was found.
pub(crate) async fn scrape_one(config: &AppConfig, sku: &str) -> anyhow::Result<()> {
    let supplier = build_supplier_client(config)?;
    let locator = build_locator(config)?;

    let Some(url) = locator.locate_product(sku).await else {
        anyhow::bail!("no supplier product page found for SKU {sku}");
    };
    let scraped = supplier.scrape(&url, sku).await;
    let weight_kg = scraped
        .weight
        .as_deref()
        .and_then(|raw| parse_weight(raw).ok())
        .map(|w| w.value);

    let report = serde_json::json!({
        "sku": sku,
        "url": url,
        "scraped": scraped,
        "weight_kg": weight_kg,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
