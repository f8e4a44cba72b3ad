//! In-memory SKU index over the catalog's variants.

use std::collections::HashMap;

use agsync_core::CatalogVariant;

use crate::types::ShopifyVariant;

/// SKU to variant mapping built once per run and read-only afterwards.
///
/// Keys are trimmed SKUs and match feed SKUs case-sensitively. When the
/// catalog lists a SKU more than once, the variant seen last wins.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    variants: HashMap<String, CatalogVariant>,
}

impl CatalogIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one page of variants in response order.
    ///
    /// Variants without a SKU (null, empty, or whitespace) are not reachable
    /// by SKU and are dropped. Returns how many variants were indexed.
    pub fn extend_from_page(&mut self, page: Vec<ShopifyVariant>) -> usize {
        let mut indexed = 0;
        for variant in page {
            let Some(sku) = variant
                .sku
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
            else {
                continue;
            };
            let sku = sku.to_owned();
            self.variants.insert(
                sku.clone(),
                CatalogVariant {
                    sku,
                    variant_id: variant.id,
                    inventory_item_id: variant.inventory_item_id,
                },
            );
            indexed += 1;
        }
        indexed
    }

    #[must_use]
    pub fn get(&self, sku: &str) -> Option<&CatalogVariant> {
        self.variants.get(sku)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl FromIterator<CatalogVariant> for CatalogIndex {
    fn from_iter<I: IntoIterator<Item = CatalogVariant>>(iter: I) -> Self {
        Self {
            variants: iter
                .into_iter()
                .map(|variant| (variant.sku.clone(), variant))
                .collect(),
        }
    }
}
