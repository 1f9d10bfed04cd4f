use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storefront: StorefrontConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Remote API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Consumer-facing behavior of the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Window in which repeated add-to-cart calls are coalesced.
    #[serde(default = "default_add_to_cart_debounce_ms")]
    pub add_to_cart_debounce_ms: u64,
    /// Number of products shown as featured on the landing page.
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
    /// Default page size for product listings.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Guest account used by the "log in as a guest" flow.
///
/// Environment variables take precedence over these values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Where the auth token is persisted between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Explicit token file; defaults to the platform data directory.
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_add_to_cart_debounce_ms() -> u64 {
    300
}

fn default_featured_count() -> usize {
    4
}

fn default_page_size() -> u32 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            add_to_cart_debounce_ms: default_add_to_cart_debounce_ms(),
            featured_count: default_featured_count(),
            page_size: default_page_size(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl StorefrontConfig {
    pub fn add_to_cart_debounce(&self) -> Duration {
        Duration::from_millis(self.add_to_cart_debounce_ms)
    }
}

impl StorageConfig {
    /// Resolved token file location.
    ///
    /// Uses `<data_dir>/trendy-store/token` via `dirs::data_dir()`,
    /// falling back to the current directory.
    pub fn token_path(&self) -> PathBuf {
        self.token_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("trendy-store")
                .join("token")
        })
    }
}
