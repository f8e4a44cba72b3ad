//! HTTP client for the supplier's public website.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;

use agsync_core::cookie_header;

use crate::error::SupplierError;

/// Client for plain HTTP fetches from the supplier: the stock feed and
/// product pages.
///
/// Requests are bounded by the configured timeout. The session cookies are
/// only attached to product-page requests; the feed is public.
pub struct SupplierClient {
    pub(crate) client: Client,
    pub(crate) cookie_header: Option<String>,
}

impl SupplierClient {
    /// # Errors
    ///
    /// Returns [`SupplierError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        cookies: &BTreeMap<String, String>,
    ) -> Result<Self, SupplierError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            cookie_header: cookie_header(cookies),
        })
    }
}
