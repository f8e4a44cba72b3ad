//! Supplier stock feed: one CSV download per run.

use agsync_core::FeedRecord;

use crate::client::SupplierClient;
use crate::error::SupplierError;

const SKU_COLUMN: &str = "SKU";
const AVAILABLE_COLUMN: &str = "Available";

impl SupplierClient {
    /// Downloads and parses the stock feed. Single attempt, no retry.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierError::FeedUnavailable`] on transport failure, a
    /// non-2xx status, or a body that cannot be read. The body is always
    /// decoded as UTF-8, whatever charset the server declares; invalid
    /// sequences become U+FFFD.
    pub async fn fetch_feed(&self, url: &str) -> Result<Vec<FeedRecord>, SupplierError> {
        let unavailable = |reason: String| SupplierError::FeedUnavailable {
            url: url.to_owned(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/csv,text/plain;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP status {}", status.as_u16())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        Ok(parse_feed(&String::from_utf8_lossy(&bytes)))
    }
}

/// Parses feed CSV text into records, one per data row.
///
/// Columns are located by the header names `SKU` and `Available`. Missing
/// columns and short rows yield empty values rather than errors; such rows
/// are filtered out later by [`FeedRecord::stock_level`]. Rows the CSV
/// reader cannot decode are skipped with a warning.
#[must_use]
pub fn parse_feed(body: &str) -> Vec<FeedRecord> {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "stock feed header row is unreadable");
            return Vec::new();
        }
    };
    tracing::debug!(headers = ?headers.iter().collect::<Vec<_>>(), "stock feed header");

    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let sku_col = column(SKU_COLUMN);
    let available_col = column(AVAILABLE_COLUMN);
    if sku_col.is_none() || available_col.is_none() {
        tracing::warn!(
            sku_column = sku_col.is_some(),
            available_column = available_col.is_some(),
            "stock feed is missing an expected column; affected rows will be skipped"
        );
    }

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        match result {
            Ok(row) => {
                let field = |col: Option<usize>| col.and_then(|i| row.get(i)).unwrap_or("");
                records.push(FeedRecord::new(field(sku_col), field(available_col)));
            }
            Err(e) => {
                // +2: 1-based, plus the header row.
                tracing::warn!(line = index + 2, error = %e, "skipping unreadable feed row");
            }
        }
    }

    records
}
