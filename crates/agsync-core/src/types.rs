//! Records shared by the feed, catalog, and scraper stages of a sync run.
//!
//! Everything here is built fresh per run and dropped when the run ends.

use serde::Serialize;

/// One data row of the supplier stock feed, as read.
///
/// Both fields are kept as trimmed text; validity is decided by
/// [`FeedRecord::stock_level`] when the row is reconciled, not when it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRecord {
    /// Case-sensitive join key against the catalog index.
    pub sku: String,
    /// Raw `Available` column text.
    pub available: String,
}

impl FeedRecord {
    #[must_use]
    pub fn new(sku: &str, available: &str) -> Self {
        Self {
            sku: sku.trim().to_owned(),
            available: available.trim().to_owned(),
        }
    }

    /// Returns the stock count if the row is actionable.
    ///
    /// A row is actionable when its SKU is non-empty and `available` is made
    /// up solely of ASCII decimal digits. A digit string too large for `u64`
    /// is also rejected.
    #[must_use]
    pub fn stock_level(&self) -> Option<u64> {
        if self.sku.is_empty()
            || self.available.is_empty()
            || !self.available.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        self.available.parse::<u64>().ok()
    }
}

/// A storefront variant reachable by SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogVariant {
    pub sku: String,
    pub variant_id: i64,
    /// Required for inventory-level and barcode mutations.
    pub inventory_item_id: i64,
}

/// The stock location all inventory mutations target during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: i64,
    pub name: String,
}

/// Weight and barcode text scraped from a supplier product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentData {
    pub weight: Option<String>,
    pub barcode: Option<String>,
}

impl EnrichmentData {
    /// `true` when neither field was recovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.barcode.is_none()
    }
}
