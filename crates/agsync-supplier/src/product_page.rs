//! Weight and barcode extraction from supplier product pages.
//!
//! Product pages list every pack size of a product as a row in a variations
//! table. The row for a SKU is found by a case-insensitive substring match on
//! its SKU cell, because the cell often carries extra text
//! (`"SKU: ABC-123 (blue)"`).

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use agsync_core::EnrichmentData;

use crate::client::SupplierClient;
use crate::error::SupplierError;

static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid row selector"));
static SKU_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.skucol").expect("valid sku cell selector"));
static WEIGHT_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.weight_col").expect("valid weight cell selector"));
static BARCODE_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.barcode_col").expect("valid barcode cell selector"));

impl SupplierClient {
    /// Scrapes weight and barcode for `sku` from a product page.
    ///
    /// Fails soft: a transport error, non-2xx status, or missing row is logged
    /// and returns empty [`EnrichmentData`].
    pub async fn scrape(&self, url: &str, sku: &str) -> EnrichmentData {
        let html = match self.fetch_product_page(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(sku, url, error = %e, "product page fetch failed");
                return EnrichmentData::default();
            }
        };

        extract_enrichment(&html, sku).unwrap_or_else(|| {
            tracing::warn!(sku, url, "no table row on product page matches SKU");
            EnrichmentData::default()
        })
    }

    async fn fetch_product_page(&self, url: &str) -> Result<String, SupplierError> {
        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml");
        if let Some(cookie) = &self.cookie_header {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SupplierError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Finds the first table row whose SKU cell contains `sku` (both sides
/// lowercased) and returns its weight and barcode cell text.
///
/// Returns `None` when no row matches. A matching row with a missing or
/// blank weight/barcode cell yields `None` for that field.
#[must_use]
pub fn extract_enrichment(html: &str, sku: &str) -> Option<EnrichmentData> {
    let needle = sku.to_lowercase();
    let document = Html::parse_document(html);

    document
        .select(&ROW)
        .find(|row| {
            row.select(&SKU_CELL)
                .next()
                .is_some_and(|cell| cell_text(cell).to_lowercase().contains(&needle))
        })
        .map(|row| EnrichmentData {
            weight: first_cell_text(row, &WEIGHT_CELL),
            barcode: first_cell_text(row, &BARCODE_CELL),
        })
}

fn first_cell_text(row: ElementRef<'_>, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(cell_text)
        .filter(|text| !text.is_empty())
}

/// Cell text with each text node trimmed and the pieces joined.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().map(str::trim).collect()
}
