use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric setting cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric setting cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Credentials (`SHOPIFY_ACCESS_TOKEN`, `SHOPIFY_SHOP`, `AGLINE_COOKIES`) are
/// not validated here: an empty value is carried through and the first
/// request that needs it fails at the transport layer.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let shopify_access_token = or_default("SHOPIFY_ACCESS_TOKEN", "");
    let shopify_shop = or_default("SHOPIFY_SHOP", "");
    let shopify_api_version = or_default("SHOPIFY_API_VERSION", "2024-04");
    let supplier_cookies = or_default("AGLINE_COOKIES", "");

    let feed_url = or_default("AGSYNC_FEED_URL", "https://www.agline.com/stock-level-csv/");
    let supplier_url = or_default("AGSYNC_SUPPLIER_URL", "https://www.agline.com/");
    let webdriver_url = or_default("AGSYNC_WEBDRIVER_URL", "http://localhost:9515");

    let search_settle_secs = parse_u64("AGSYNC_SEARCH_SETTLE_SECS", "5")?;
    let request_timeout_secs = parse_u64("AGSYNC_REQUEST_TIMEOUT_SECS", "10")?;
    let variants_page_size = parse_u32("AGSYNC_VARIANTS_PAGE_SIZE", "250")?;
    if variants_page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "AGSYNC_VARIANTS_PAGE_SIZE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }

    let web_user_agent = or_default("AGSYNC_WEB_USER_AGENT", "Mozilla/5.0");
    let log_level = or_default("AGSYNC_LOG_LEVEL", "info");

    Ok(AppConfig {
        shopify_access_token,
        shopify_shop,
        shopify_api_version,
        supplier_cookies,
        feed_url,
        supplier_url,
        webdriver_url,
        search_settle_secs,
        request_timeout_secs,
        variants_page_size,
        web_user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
