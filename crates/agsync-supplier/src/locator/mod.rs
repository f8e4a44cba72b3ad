//! Product page discovery on the supplier site.
//!
//! The supplier exposes no search API. A product page is found by typing
//! the SKU into the site search in a real browser and seeing where the site
//! redirects. An exact SKU hit lands on the product page itself; anything
//! else (results list, no-results page, error) counts as not found.

mod webdriver;

use std::future::Future;

pub use webdriver::WebDriverLocator;

/// Path segment present in every supplier product page URL.
const PRODUCT_PATH_MARKER: &str = "/product/";

/// Finds the supplier product page for a SKU.
///
/// Implementations never fail: any problem reaching the page is logged and
/// reported as `None`, so one bad SKU cannot abort a run.
pub trait ProductLocator {
    fn locate_product(&self, sku: &str) -> impl Future<Output = Option<String>>;
}

/// `true` if `url` points at a supplier product page.
#[must_use]
pub fn is_product_page(url: &str) -> bool {
    url.contains(PRODUCT_PATH_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_urls_are_recognised() {
        assert!(is_product_page(
            "https://www.agline.com/product/poly-pipe-fitting-25mm/"
        ));
    }

    #[test]
    fn search_and_landing_urls_are_not() {
        assert!(!is_product_page("https://www.agline.com/?s=ABC-1&post_type=product"));
        assert!(!is_product_page("https://www.agline.com/"));
        assert!(!is_product_page("https://www.agline.com/products/"));
    }
}
