//! Admin API root construction for a configured shop.

use reqwest::Url;

use crate::error::CatalogError;

/// Builds the Admin API root URL for `shop` and `api_version`.
///
/// `shop` is normally a bare domain (`"example.myshopify.com"`) and is
/// reached over HTTPS. A value that already carries an `http://` or
/// `https://` scheme is used as-is, and any path on it is discarded.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidShopUrl`] if the shop does not form a URL
/// with a host.
pub fn admin_base_url(shop: &str, api_version: &str) -> Result<Url, CatalogError> {
    let shop = shop.trim().trim_end_matches('/');
    let raw = if shop.starts_with("http://") || shop.starts_with("https://") {
        shop.to_owned()
    } else {
        format!("https://{shop}")
    };

    let invalid = |reason: String| CatalogError::InvalidShopUrl {
        shop: shop.to_owned(),
        reason,
    };

    let parsed = Url::parse(&raw).map_err(|e| invalid(e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_owned()));
    }

    let origin = parsed.origin().ascii_serialization();
    let api_version = api_version.trim().trim_matches('/');
    Url::parse(&format!("{origin}/admin/api/{api_version}/")).map_err(|e| invalid(e.to_string()))
}
