//! Secret handling and demo credential resolution.

use crate::config::types::DemoConfig;
use crate::domain::UserCredential;

/// Environment variable holding the guest account email.
pub const DEMO_EMAIL_ENV: &str = "TRENDY_STORE_DEMO_EMAIL";
/// Environment variable holding the guest account password.
pub const DEMO_PASSWORD_ENV: &str = "TRENDY_STORE_DEMO_PASSWORD";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of demo credential resolution.
#[derive(Debug, Clone)]
pub enum DemoCredentialStatus {
    /// Both email and password resolved.
    Configured(UserCredential),
    /// Email or password is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl DemoConfig {
    /// Resolve the guest credentials, preferring the environment.
    ///
    /// This is called on-demand and NOT cached.
    pub fn resolve(&self) -> DemoCredentialStatus {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    fn resolve_with(&self, env: impl Fn(&str) -> Option<String>) -> DemoCredentialStatus {
        let pick = |var: &str, fallback: &Option<String>| {
            env(var)
                .or_else(|| fallback.clone())
                .filter(|value| !value.is_empty())
        };

        match (
            pick(DEMO_EMAIL_ENV, &self.email),
            pick(DEMO_PASSWORD_ENV, &self.password),
        ) {
            (Some(email), Some(password)) => {
                DemoCredentialStatus::Configured(UserCredential { email, password })
            }
            (None, _) => DemoCredentialStatus::Unconfigured {
                reason: format!("{} is not set", DEMO_EMAIL_ENV),
            },
            (_, None) => DemoCredentialStatus::Unconfigured {
                reason: format!("{} is not set", DEMO_PASSWORD_ENV),
            },
        }
    }
}
