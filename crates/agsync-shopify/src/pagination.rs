//! Shopify cursor-based pagination via the `Link` response header.
//!
//! The Admin API advertises adjacent pages in the `Link` header. The sync
//! follows the `rel="next"` URL verbatim until it disappears.
//!
//! ## Header format
//!
//! Single next link:
//! ```text
//! <https://shop.myshopify.com/admin/api/2024-04/variants.json?limit=250&page_info=CURSOR>; rel="next"
//! ```
//!
//! Combined previous and next:
//! ```text
//! <https://.../variants.json?limit=250&page_info=PREV>; rel="previous",
//! <https://.../variants.json?limit=250&page_info=NEXT>; rel="next"
//! ```

/// Parses a `Link` header value and returns the URL of the next page.
///
/// Returns `None` if the header is absent or has no `rel="next"` segment.
#[must_use]
pub fn extract_next_link(link_header: Option<&str>) -> Option<String> {
    let header = link_header?;

    for segment in header.split(',') {
        let segment = segment.trim();
        if !segment.contains(r#"rel="next""#) {
            continue;
        }
        return extract_angle_bracket_url(segment).map(str::to_owned);
    }

    None
}

/// Extracts the URL between `<` and `>` in a link directive segment.
fn extract_angle_bracket_url(segment: &str) -> Option<&str> {
    let start = segment.find('<')? + 1;
    let end = segment.find('>')?;
    if start >= end {
        return None;
    }
    Some(&segment[start..end])
}
