use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_environment() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.shopify_access_token, "");
    assert_eq!(cfg.shopify_shop, "");
    assert_eq!(cfg.shopify_api_version, "2024-04");
    assert_eq!(cfg.supplier_cookies, "");
    assert_eq!(cfg.feed_url, "https://www.agline.com/stock-level-csv/");
    assert_eq!(cfg.supplier_url, "https://www.agline.com/");
    assert_eq!(cfg.webdriver_url, "http://localhost:9515");
    assert_eq!(cfg.search_settle_secs, 5);
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.variants_page_size, 250);
    assert_eq!(cfg.web_user_agent, "Mozilla/5.0");
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_app_config_reads_credentials() {
    let mut map = HashMap::new();
    map.insert("SHOPIFY_ACCESS_TOKEN", "shpat_secret");
    map.insert("SHOPIFY_SHOP", "example.myshopify.com");
    map.insert("AGLINE_COOKIES", "session=abc; cart=1");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.shopify_access_token, "shpat_secret");
    assert_eq!(cfg.shopify_shop, "example.myshopify.com");
    assert_eq!(cfg.supplier_cookies, "session=abc; cart=1");
}

#[test]
fn debug_output_redacts_secrets() {
    let mut map = HashMap::new();
    map.insert("SHOPIFY_ACCESS_TOKEN", "shpat_secret");
    map.insert("AGLINE_COOKIES", "session=abc");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("shpat_secret"), "token leaked: {rendered}");
    assert!(!rendered.contains("session=abc"), "cookies leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn search_settle_secs_override() {
    let mut map = HashMap::new();
    map.insert("AGSYNC_SEARCH_SETTLE_SECS", "8");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search_settle_secs, 8);
}

#[test]
fn search_settle_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("AGSYNC_SEARCH_SETTLE_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AGSYNC_SEARCH_SETTLE_SECS"),
        "expected InvalidEnvVar(AGSYNC_SEARCH_SETTLE_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("AGSYNC_REQUEST_TIMEOUT_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AGSYNC_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(AGSYNC_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn variants_page_size_override() {
    let mut map = HashMap::new();
    map.insert("AGSYNC_VARIANTS_PAGE_SIZE", "50");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.variants_page_size, 50);
}

#[test]
fn variants_page_size_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("AGSYNC_VARIANTS_PAGE_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AGSYNC_VARIANTS_PAGE_SIZE"),
        "expected InvalidEnvVar(AGSYNC_VARIANTS_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn endpoint_overrides_are_used_verbatim() {
    let mut map = HashMap::new();
    map.insert("AGSYNC_FEED_URL", "http://127.0.0.1:9000/feed.csv");
    map.insert("AGSYNC_SUPPLIER_URL", "http://127.0.0.1:9000/");
    map.insert("AGSYNC_WEBDRIVER_URL", "http://127.0.0.1:4444");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_url, "http://127.0.0.1:9000/feed.csv");
    assert_eq!(cfg.supplier_url, "http://127.0.0.1:9000/");
    assert_eq!(cfg.webdriver_url, "http://127.0.0.1:4444");
}
