//! Shopify Admin REST payloads used by the sync.
//!
//! Only the fields the sync reads or writes are modelled; everything else in
//! the Admin API responses is ignored by serde.
//!
//! ### Locations
//! `legacy` is always present in observed responses. `fulfillment_service`
//! is usually absent; when present it is the handle of the app that owns the
//! location (e.g. `"amazon-mcf"`). Locations owned by a fulfillment app
//! cannot be written to with `inventory_levels/set`.
//!
//! ### Variants
//! `sku` is `null` or `""` for variants the merchant never assigned a SKU.
//! `inventory_item_id` lives in a different ID space from the variant `id`.

use serde::{Deserialize, Serialize};

/// Response from `GET /locations.json`.
#[derive(Debug, Deserialize)]
pub struct LocationsResponse {
    #[serde(default)]
    pub locations: Vec<ShopifyLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyLocation {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub legacy: bool,

    #[serde(default)]
    pub fulfillment_service: Option<String>,
}

impl ShopifyLocation {
    /// `true` when inventory at this location can be set directly: the
    /// location is not legacy and no fulfillment service backs it.
    #[must_use]
    pub fn is_merchant_managed(&self) -> bool {
        !self.legacy
            && self
                .fulfillment_service
                .as_deref()
                .is_none_or(str::is_empty)
    }
}

/// Response from `GET /variants.json`.
#[derive(Debug, Deserialize)]
pub struct VariantsResponse {
    #[serde(default)]
    pub variants: Vec<ShopifyVariant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyVariant {
    pub id: i64,

    #[serde(default)]
    pub sku: Option<String>,

    pub inventory_item_id: i64,
}

/// Body for `POST /inventory_levels/set.json`.
#[derive(Debug, Serialize)]
pub struct InventoryLevelSet {
    pub location_id: i64,
    pub inventory_item_id: i64,
    pub available: u64,
}

/// Body for `PUT /variants/{id}.json`.
#[derive(Debug, Serialize)]
pub struct VariantUpdate {
    pub variant: VariantWeightPatch,
}

#[derive(Debug, Serialize)]
pub struct VariantWeightPatch {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<&'static str>,
}

/// Body for `PUT /inventory_items/{id}.json`.
#[derive(Debug, Serialize)]
pub struct InventoryItemUpdate {
    pub inventory_item: InventoryItemPatch,
}

#[derive(Debug, Serialize)]
pub struct InventoryItemPatch {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}
