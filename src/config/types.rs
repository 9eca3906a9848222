use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Image API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the image API (e.g., "https://api.thecatapi.com/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value sent as the `x-api-key` header.
    #[serde(default)]
    pub api_key: Option<String>,
    /// User identifier attached to favorites.
    #[serde(default)]
    pub sub_id: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Defaults applied to every image-list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Page counter value at mount (default: 50).
    #[serde(default = "default_initial_page_size")]
    pub initial_page_size: u32,
    /// Sort order: "RANDOM", "ASC" or "DESC".
    #[serde(default = "default_order")]
    pub order: String,
    /// Only return images with breed information attached.
    #[serde(default)]
    pub has_breeds: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path. Defaults to `<data_dir>/catgallery/catgallery.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

pub(super) const VALID_ORDERS: [&str; 3] = ["RANDOM", "ASC", "DESC"];

fn default_base_url() -> String {
    "https://api.thecatapi.com/v1".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_initial_page_size() -> u32 {
    50
}

fn default_order() -> String {
    "RANDOM".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            sub_id: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            initial_page_size: default_initial_page_size(),
            order: default_order(),
            has_breeds: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: default_log_filter(),
        }
    }
}
