//! Stock location resolution.

use agsync_core::Location;

use crate::error::CatalogError;
use crate::types::{LocationsResponse, ShopifyLocation};

use super::ShopifyAdminClient;

/// Returns the first location, in response order, whose inventory can be set
/// directly (see [`ShopifyLocation::is_merchant_managed`]).
#[must_use]
pub fn select_location(locations: &[ShopifyLocation]) -> Option<&ShopifyLocation> {
    locations.iter().find(|loc| loc.is_merchant_managed())
}

impl ShopifyAdminClient {
    /// Lists the shop's locations in the order Shopify returns them.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure, non-2xx status, or an
    /// unparseable body.
    pub async fn list_locations(&self) -> Result<Vec<ShopifyLocation>, CatalogError> {
        let url = self.endpoint("locations.json")?;
        let (response, _) = self
            .get_page::<LocationsResponse>(&url, "locations")
            .await?;
        Ok(response.locations)
    }

    /// Picks the single stock location used for every inventory mutation in
    /// this run.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::LocationsUnavailable`] if the locations call fails.
    /// - [`CatalogError::NoLocationAvailable`] if every location is legacy or
    ///   backed by a fulfillment service.
    pub async fn resolve_location(&self) -> Result<Location, CatalogError> {
        let locations =
            self.list_locations()
                .await
                .map_err(|e| CatalogError::LocationsUnavailable {
                    source: Box::new(e),
                })?;

        let Some(selected) = select_location(&locations) else {
            return Err(CatalogError::NoLocationAvailable {
                considered: locations.len(),
            });
        };

        tracing::info!(
            location_id = selected.id,
            location = %selected.name,
            "using stock location"
        );

        Ok(Location {
            id: selected.id,
            name: selected.name.clone(),
        })
    }
}
