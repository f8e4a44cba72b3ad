pub mod client;
pub mod error;
pub mod index;
pub mod pagination;
pub mod types;

pub use client::ShopifyAdminClient;
pub use error::CatalogError;
pub use index::CatalogIndex;
pub use types::{ShopifyLocation, ShopifyVariant};
