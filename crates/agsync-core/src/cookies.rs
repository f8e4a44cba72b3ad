//! Supplier-site cookie handling.
//!
//! The supplier session is copied out of a logged-in browser as a raw
//! `Cookie` header value (`name=value; other=value2`). It is parsed once at
//! startup and re-rendered onto every product-page request.

use std::collections::BTreeMap;

/// Parses a raw cookie string into name/value pairs.
///
/// Splits on `;`, trims each pair, and splits on the first `=`. Pairs without
/// an `=` are dropped. When a name appears more than once the last value wins.
#[must_use]
pub fn parse_cookie_str(raw: &str) -> BTreeMap<String, String> {
    let mut cookies = BTreeMap::new();
    for pair in raw.split(';') {
        let pair = pair.trim();
        if let Some((name, value)) = pair.split_once('=') {
            cookies.insert(name.to_owned(), value.to_owned());
        }
    }
    cookies
}

/// Renders parsed cookies back into a single `Cookie` header value.
///
/// Returns `None` when there are no cookies so callers can omit the header.
#[must_use]
pub fn cookie_header(cookies: &BTreeMap<String, String>) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    Some(
        cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; "),
    )
}
