use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}: {body}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    #[error("invalid shop \"{shop}\": {reason}")]
    InvalidShopUrl { shop: String, reason: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("could not list stock locations: {source}")]
    LocationsUnavailable {
        #[source]
        source: Box<CatalogError>,
    },

    #[error("no usable stock location among {considered} returned (all legacy or fulfillment-service backed)")]
    NoLocationAvailable { considered: usize },

    #[error("catalog variants page {page} unavailable: {source}")]
    CatalogUnavailable {
        page: usize,
        #[source]
        source: Box<CatalogError>,
    },
}
