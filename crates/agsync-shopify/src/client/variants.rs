//! Catalog index build over the paginated variants listing.

use crate::error::CatalogError;
use crate::index::CatalogIndex;
use crate::pagination::extract_next_link;
use crate::types::VariantsResponse;

use super::ShopifyAdminClient;

impl ShopifyAdminClient {
    /// Builds the SKU index by walking every page of `variants.json`.
    ///
    /// Starts at `variants.json?limit={page_size}` and follows the `Link`
    /// header's `rel="next"` URL until none is advertised. There is no page
    /// cap; termination relies on Shopify dropping the next link.
    ///
    /// **All-or-nothing**: if any page fails, variants gathered from earlier
    /// pages are discarded. A partial index would silently skip stock updates
    /// for every SKU on the missing pages.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CatalogUnavailable`] carrying the 1-based page
    /// number and the underlying failure.
    pub async fn build_index(&self, page_size: u32) -> Result<CatalogIndex, CatalogError> {
        let mut index = CatalogIndex::new();
        let mut url = self.endpoint(&format!("variants.json?limit={page_size}"))?;
        let mut page = 0usize;

        loop {
            page += 1;
            let unavailable = move |source: CatalogError| CatalogError::CatalogUnavailable {
                page,
                source: Box::new(source),
            };

            let (response, link_header) = self
                .get_page::<VariantsResponse>(&url, "variants page")
                .await
                .map_err(unavailable)?;

            let listed = response.variants.len();
            let indexed = index.extend_from_page(response.variants);
            tracing::debug!(page, listed, indexed, "indexed catalog variants page");

            match extract_next_link(link_header.as_deref()) {
                Some(next) => url = self.endpoint(&next).map_err(unavailable)?,
                None => break,
            }
        }

        tracing::info!(skus = index.len(), pages = page, "built catalog SKU index");
        Ok(index)
    }
}
