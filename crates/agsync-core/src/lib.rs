pub mod app_config;
pub mod config;
pub mod cookies;
pub mod types;
pub mod weight;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use cookies::{cookie_header, parse_cookie_str};
pub use types::{CatalogVariant, EnrichmentData, FeedRecord, Location};
pub use weight::{parse_weight, Weight, WeightParseError, WeightUnit};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
