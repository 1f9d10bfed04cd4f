//! HTTP client wrapper for the storefront API.
//!
//! Every slice operation goes through [`ApiClient`]. It attaches the bearer
//! token, turns non-2xx responses into [`RequestError::Response`] with the
//! server's message, and never retries or caches.

mod client;
mod endpoints;
mod error;

pub use client::{ApiClient, ApiRequest};
pub use error::{extract_error_message, RequestError};
