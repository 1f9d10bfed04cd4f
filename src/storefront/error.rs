use thiserror::Error;

use crate::api::RequestError;
use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build API client: {0}")]
    Client(#[from] RequestError),

    #[error("Guest login unavailable: {reason}")]
    DemoCredentials { reason: String },
}
