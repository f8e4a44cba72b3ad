pub mod client;
pub mod error;
pub mod feed;
pub mod locator;
pub mod product_page;

pub use client::SupplierClient;
pub use error::SupplierError;
pub use feed::parse_feed;
pub use locator::{is_product_page, ProductLocator, WebDriverLocator};
pub use product_page::extract_enrichment;
