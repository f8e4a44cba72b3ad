//! HTTP client for the Shopify Admin REST API.

mod base_url;
mod locations;
mod mutations;
mod variants;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;

pub use base_url::admin_base_url;
pub use locations::select_location;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Longest response body kept in an [`CatalogError::UnexpectedStatus`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Client for one shop's Admin REST API.
///
/// Every call is attempted exactly once; a non-2xx status surfaces as
/// [`CatalogError::UnexpectedStatus`] carrying the response body Shopify
/// returned. Catalog calls carry no request timeout.
pub struct ShopifyAdminClient {
    client: Client,
    access_token: String,
    base_url: Url,
}

impl ShopifyAdminClient {
    /// Creates a client for `shop` (a `*.myshopify.com` domain, or a full
    /// origin such as `http://127.0.0.1:8080` for tests).
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    /// - [`CatalogError::InvalidShopUrl`] if `shop` does not form a valid URL.
    pub fn new(shop: &str, access_token: &str, api_version: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent("agsync/0.1 (inventory-sync)")
            .build()?;
        let base_url = admin_base_url(shop, api_version)?;
        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            base_url,
        })
    }

    /// Resolves `path` (or an absolute URL) against the Admin API root.
    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidUrl {
                url: path.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Sends an authenticated request, turning non-2xx into an error.
    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, CatalogError> {
        let response = request
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body: truncate_body(&body),
            });
        }

        Ok(response)
    }

    /// Fetches one JSON page, returning it with the raw `Link` header.
    async fn get_page<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<(T, Option<String>), CatalogError> {
        let response = self.send(self.client.get(url.clone()), url).await?;

        // Extract the Link header before consuming the response body.
        let link_header = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await?;
        let parsed = serde_json::from_str::<T>(&body).map_err(|e| CatalogError::Deserialize {
            context: format!("{context} from {url}"),
            source: e,
        })?;

        Ok((parsed, link_header))
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_owned(),
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
