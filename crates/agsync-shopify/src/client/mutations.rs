//! Catalog writes: stock level, variant weight, inventory item barcode.
//!
//! Each write is a single independent call. Callers decide how to report a
//! failure; nothing here retries.

use agsync_core::Weight;

use crate::error::CatalogError;
use crate::types::{
    InventoryItemPatch, InventoryItemUpdate, InventoryLevelSet, VariantUpdate, VariantWeightPatch,
};

use super::ShopifyAdminClient;

impl ShopifyAdminClient {
    /// Overwrites the available quantity of an inventory item at a location.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or non-2xx status.
    pub async fn set_inventory_level(
        &self,
        location_id: i64,
        inventory_item_id: i64,
        available: u64,
    ) -> Result<(), CatalogError> {
        let url = self.endpoint("inventory_levels/set.json")?;
        let body = InventoryLevelSet {
            location_id,
            inventory_item_id,
            available,
        };
        self.send(self.client.post(url.clone()).json(&body), &url)
            .await?;
        Ok(())
    }

    /// Sets a variant's shipping weight.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or non-2xx status.
    pub async fn update_variant_weight(
        &self,
        variant_id: i64,
        weight: &Weight,
    ) -> Result<(), CatalogError> {
        let url = self.endpoint(&format!("variants/{variant_id}.json"))?;
        let body = VariantUpdate {
            variant: VariantWeightPatch {
                id: variant_id,
                weight: Some(weight.value),
                weight_unit: Some(weight.unit.as_str()),
            },
        };
        self.send(self.client.put(url.clone()).json(&body), &url)
            .await?;
        Ok(())
    }

    /// Sets the barcode on an inventory item.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or non-2xx status.
    pub async fn update_inventory_item_barcode(
        &self,
        inventory_item_id: i64,
        barcode: &str,
    ) -> Result<(), CatalogError> {
        let url = self.endpoint(&format!("inventory_items/{inventory_item_id}.json"))?;
        let body = InventoryItemUpdate {
            inventory_item: InventoryItemPatch {
                id: inventory_item_id,
                barcode: Some(barcode.to_owned()),
            },
        };
        self.send(self.client.put(url.clone()).json(&body), &url)
            .await?;
        Ok(())
    }
}
