#[derive(Clone)]
pub struct AppConfig {
    pub shopify_access_token: String,
    pub shopify_shop: String,
    pub shopify_api_version: String,
    pub supplier_cookies: String,
    pub feed_url: String,
    pub supplier_url: String,
    pub webdriver_url: String,
    pub search_settle_secs: u64,
    pub request_timeout_secs: u64,
    pub variants_page_size: u32,
    pub web_user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |value: &str| if value.is_empty() { "[unset]" } else { "[redacted]" };
        f.debug_struct("AppConfig")
            .field(
                "shopify_access_token",
                &redact(&self.shopify_access_token),
            )
            .field("shopify_shop", &self.shopify_shop)
            .field("shopify_api_version", &self.shopify_api_version)
            .field("supplier_cookies", &redact(&self.supplier_cookies))
            .field("feed_url", &self.feed_url)
            .field("supplier_url", &self.supplier_url)
            .field("webdriver_url", &self.webdriver_url)
            .field("search_settle_secs", &self.search_settle_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("variants_page_size", &self.variants_page_size)
            .field("web_user_agent", &self.web_user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
