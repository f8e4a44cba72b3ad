//! Per-record reconciliation of feed stock against the catalog.
//!
//! Each record moves through: validity check, catalog lookup, stock push,
//! product page lookup and scrape, then weight/barcode pushes. Every catalog
//! or scrape failure is logged and absorbed; nothing here can abort a run.

use agsync_core::{parse_weight, CatalogVariant, FeedRecord, Location};
use agsync_shopify::{CatalogIndex, ShopifyAdminClient};
use agsync_supplier::{ProductLocator, SupplierClient};

/// Result of a single catalog write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Push {
    Applied,
    Failed,
    /// The scraped value did not validate; no call was made.
    Rejected,
    /// Nothing was scraped for this field; no call was made.
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Enrichment {
    NoProductPage,
    NothingScraped,
    Enriched { weight: Push, barcode: Push },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordOutcome {
    /// Empty SKU or non-numeric `Available`.
    SkippedInvalid,
    /// SKU not carried by this catalog.
    SkippedUnmatched,
    Done { stock: Push, enrichment: Enrichment },
}

/// Counters logged once at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub records: usize,
    pub skipped_invalid: usize,
    pub skipped_unmatched: usize,
    pub stock_pushed: usize,
    pub stock_failed: usize,
    pub no_product_page: usize,
    pub nothing_scraped: usize,
    pub enriched: usize,
    pub weight_pushed: usize,
    pub weight_rejected: usize,
    pub weight_failed: usize,
    pub barcode_pushed: usize,
    pub barcode_failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: RecordOutcome) {
        self.records += 1;
        let (stock, enrichment) = match outcome {
            RecordOutcome::SkippedInvalid => {
                self.skipped_invalid += 1;
                return;
            }
            RecordOutcome::SkippedUnmatched => {
                self.skipped_unmatched += 1;
                return;
            }
            RecordOutcome::Done { stock, enrichment } => (stock, enrichment),
        };

        match stock {
            Push::Applied => self.stock_pushed += 1,
            Push::Failed => self.stock_failed += 1,
            Push::Rejected | Push::Absent => {}
        }

        match enrichment {
            Enrichment::NoProductPage => self.no_product_page += 1,
            Enrichment::NothingScraped => self.nothing_scraped += 1,
            Enrichment::Enriched { weight, barcode } => {
                self.enriched += 1;
                match weight {
                    Push::Applied => self.weight_pushed += 1,
                    Push::Failed => self.weight_failed += 1,
                    Push::Rejected => self.weight_rejected += 1,
                    Push::Absent => {}
                }
                match barcode {
                    Push::Applied => self.barcode_pushed += 1,
                    Push::Failed => self.barcode_failed += 1,
                    Push::Rejected | Push::Absent => {}
                }
            }
        }
    }
}

pub(crate) struct Reconciler<'a, L> {
    catalog: &'a ShopifyAdminClient,
    supplier: &'a SupplierClient,
    locator: &'a L,
}

impl<'a, L: ProductLocator> Reconciler<'a, L> {
    pub(crate) fn new(
        catalog: &'a ShopifyAdminClient,
        supplier: &'a SupplierClient,
        locator: &'a L,
    ) -> Self {
        Self {
            catalog,
            supplier,
            locator,
        }
    }

    /// Reconciles every record in feed order, one at a time.
    pub(crate) async fn run(
        &self,
        records: &[FeedRecord],
        index: &CatalogIndex,
        location: &Location,
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        for record in records {
            let outcome = self.process_record(record, index, location).await;
            summary.record(outcome);
        }

        tracing::info!(
            records = summary.records,
            skipped_invalid = summary.skipped_invalid,
            skipped_unmatched = summary.skipped_unmatched,
            stock_pushed = summary.stock_pushed,
            stock_failed = summary.stock_failed,
            no_product_page = summary.no_product_page,
            nothing_scraped = summary.nothing_scraped,
            enriched = summary.enriched,
            weight_pushed = summary.weight_pushed,
            weight_rejected = summary.weight_rejected,
            weight_failed = summary.weight_failed,
            barcode_pushed = summary.barcode_pushed,
            barcode_failed = summary.barcode_failed,
            "sync run complete"
        );
        summary
    }

    pub(crate) async fn process_record(
        &self,
        record: &FeedRecord,
        index: &CatalogIndex,
        location: &Location,
    ) -> RecordOutcome {
        let Some(available) = record.stock_level() else {
            tracing::debug!(sku = %record.sku, available = %record.available, "skipping invalid feed row");
            return RecordOutcome::SkippedInvalid;
        };

        // Feed SKUs missing from the catalog are expected, not errors.
        let Some(variant) = index.get(&record.sku) else {
            tracing::debug!(sku = %record.sku, "SKU not in catalog");
            return RecordOutcome::SkippedUnmatched;
        };

        let stock = match self
            .catalog
            .set_inventory_level(location.id, variant.inventory_item_id, available)
            .await
        {
            Ok(()) => {
                tracing::info!(sku = %variant.sku, available, "updated stock level");
                Push::Applied
            }
            Err(e) => {
                tracing::error!(sku = %variant.sku, available, error = %e, "failed to update stock level");
                Push::Failed
            }
        };

        let enrichment = self.enrich(variant).await;
        RecordOutcome::Done { stock, enrichment }
    }

    async fn enrich(&self, variant: &CatalogVariant) -> Enrichment {
        let sku = variant.sku.as_str();
        let Some(url) = self.locator.locate_product(sku).await else {
            tracing::debug!(sku, "no supplier product page; stock only");
            return Enrichment::NoProductPage;
        };

        let scraped = self.supplier.scrape(&url, sku).await;
        tracing::info!(
            sku,
            url = %url,
            weight = ?scraped.weight,
            barcode = ?scraped.barcode,
            "scraped product page"
        );
        if scraped.is_empty() {
            return Enrichment::NothingScraped;
        }

        // Two independent calls: a weight failure never blocks the barcode.
        let weight = match scraped.weight.as_deref() {
            Some(raw) => self.push_weight(variant, raw).await,
            None => Push::Absent,
        };
        let barcode = match scraped.barcode.as_deref() {
            Some(barcode) => self.push_barcode(variant, barcode).await,
            None => Push::Absent,
        };

        Enrichment::Enriched { weight, barcode }
    }

    async fn push_weight(&self, variant: &CatalogVariant, raw: &str) -> Push {
        let weight = match parse_weight(raw) {
            Ok(weight) => weight,
            Err(e) => {
                tracing::warn!(sku = %variant.sku, error = %e, "weight not applied");
                return Push::Rejected;
            }
        };

        match self
            .catalog
            .update_variant_weight(variant.variant_id, &weight)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    sku = %variant.sku,
                    weight = weight.value,
                    unit = %weight.unit,
                    "updated variant weight"
                );
                Push::Applied
            }
            Err(e) => {
                tracing::error!(sku = %variant.sku, error = %e, "failed to update variant weight");
                Push::Failed
            }
        }
    }

    async fn push_barcode(&self, variant: &CatalogVariant, barcode: &str) -> Push {
        match self
            .catalog
            .update_inventory_item_barcode(variant.inventory_item_id, barcode)
            .await
        {
            Ok(()) => {
                tracing::info!(sku = %variant.sku, barcode, "updated barcode");
                Push::Applied
            }
            Err(e) => {
                tracing::error!(sku = %variant.sku, error = %e, "failed to update barcode");
                Push::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
