//! Configuration loading and credential handling.

mod credentials;
mod loader;
mod types;

pub use credentials::{DemoCredentialStatus, SecureString, DEMO_EMAIL_ENV, DEMO_PASSWORD_ENV};
pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, Config, DemoConfig, StorageConfig, StorefrontConfig};
