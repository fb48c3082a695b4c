//! Client configuration.
//!
//! The base address is injected at construction time rather than read from
//! ambient state, so a client can be pointed at any backend in tests.

use thiserror::Error;

/// Environment variable holding the versioned API base address,
/// e.g. `http://localhost:8000/api/v1`.
pub const BASE_URL_ENV: &str = "PUBLIC_BASE_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base address from `PUBLIC_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        lookup(BASE_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(Self::new)
            .ok_or(ConfigError::Missing(BASE_URL_ENV))
    }
}
