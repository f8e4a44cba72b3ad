//! Site search driven through a W3C WebDriver server (e.g. `chromedriver`).
//!
//! Every lookup opens a fresh headless session, runs the search, waits a
//! fixed settle delay, reads the current URL, and closes the session. The
//! site gives no signal that the post-search navigation has finished, so the
//! delay is a guess: too short and a slow redirect reads as "not found".

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde_json::{json, Value};

use crate::error::SupplierError;

use super::{is_product_page, ProductLocator};

const CHROME_ARGS: [&str; 3] = ["--no-sandbox", "--disable-dev-shm-usage", "--headless=new"];

/// Fills the site search box with `arguments[0]` and submits the form.
const SEARCH_SCRIPT: &str = r"
const input = document.querySelector('input.search-field');
const form = document.querySelector('form.search-form');
if (!input || !form) {
    throw new Error('site search form not found');
}
input.value = arguments[0];
form.submit();
";

pub struct WebDriverLocator {
    client: Client,
    webdriver_url: Url,
    landing_url: String,
    settle: Duration,
}

impl WebDriverLocator {
    /// Creates a locator that drives the WebDriver server at `webdriver_url`
    /// and starts every search from `landing_url`.
    ///
    /// # Errors
    ///
    /// - [`SupplierError::Http`] if the `reqwest::Client` cannot be built.
    /// - [`SupplierError::InvalidUrl`] if `webdriver_url` is not a valid URL.
    pub fn new(
        webdriver_url: &str,
        landing_url: &str,
        settle: Duration,
    ) -> Result<Self, SupplierError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        // Trailing slash so `join` appends rather than replacing the last segment.
        let normalised = format!("{}/", webdriver_url.trim_end_matches('/'));
        let webdriver_url = Url::parse(&normalised).map_err(|e| SupplierError::InvalidUrl {
            url: webdriver_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            webdriver_url,
            landing_url: landing_url.to_owned(),
            settle,
        })
    }

    /// Runs one search and returns the URL the browser settled on.
    ///
    /// The session is closed whether or not the search succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierError`] if session creation or any browser command
    /// fails.
    pub async fn search(&self, sku: &str) -> Result<String, SupplierError> {
        let session_id = self.new_session().await?;
        let outcome = self.search_in_session(&session_id, sku).await;

        let close = format!("session/{session_id}");
        if let Err(e) = self.command(Method::DELETE, &close, None).await {
            tracing::debug!(session_id = %session_id, error = %e, "failed to close WebDriver session");
        }

        outcome
    }

    async fn search_in_session(&self, session_id: &str, sku: &str) -> Result<String, SupplierError> {
        self.command(
            Method::POST,
            &format!("session/{session_id}/url"),
            Some(json!({ "url": self.landing_url })),
        )
        .await?;

        self.command(
            Method::POST,
            &format!("session/{session_id}/execute/sync"),
            Some(json!({ "script": SEARCH_SCRIPT, "args": [sku] })),
        )
        .await?;

        tokio::time::sleep(self.settle).await;

        let current = self
            .command(Method::GET, &format!("session/{session_id}/url"), None)
            .await?;
        current
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| SupplierError::WebDriver {
                command: "get current url".to_owned(),
                reason: format!("expected a string, got {current}"),
            })
    }

    async fn new_session(&self) -> Result<String, SupplierError> {
        let capabilities = json!({
            "capabilities": {
                "alwaysMatch": {
                    "browserName": "chrome",
                    "goog:chromeOptions": { "args": CHROME_ARGS }
                }
            }
        });
        let value = self
            .command(Method::POST, "session", Some(capabilities))
            .await?;
        value
            .get("sessionId")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| SupplierError::WebDriver {
                command: "new session".to_owned(),
                reason: "response carried no sessionId".to_owned(),
            })
    }

    /// Sends one WebDriver command and returns the response's `value` member.
    async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, SupplierError> {
        let command = format!("{method} {path}");
        let url = self
            .webdriver_url
            .join(path)
            .map_err(|e| SupplierError::InvalidUrl {
                url: path.to_owned(),
                reason: e.to_string(),
            })?;

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        let status = response.status();
        let payload = response.json::<Value>().await.unwrap_or(Value::Null);
        let value = payload.get("value").cloned().unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(SupplierError::WebDriver {
                command,
                reason: describe_failure(status.as_u16(), &value),
            });
        }

        Ok(value)
    }
}

impl ProductLocator for WebDriverLocator {
    async fn locate_product(&self, sku: &str) -> Option<String> {
        match self.search(sku).await {
            Ok(url) if is_product_page(&url) => Some(url),
            Ok(url) => {
                tracing::warn!(sku, url = %url, "site search did not land on a product page");
                None
            }
            Err(e) => {
                tracing::warn!(sku, error = %e, "site search failed");
                None
            }
        }
    }
}

/// Renders a WebDriver error `value` (`{"error": ..., "message": ...}`).
fn describe_failure(status: u16, value: &Value) -> String {
    let error = value.get("error").and_then(Value::as_str);
    let message = value.get("message").and_then(Value::as_str);
    match (error, message) {
        (Some(error), Some(message)) => format!("HTTP {status}: {error}: {message}"),
        (Some(error), None) => format!("HTTP {status}: {error}"),
        _ => format!("HTTP {status}"),
    }
}
