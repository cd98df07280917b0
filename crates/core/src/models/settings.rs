use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Environment variable consulted by [`ClientSettings::from_env`].
pub const BASE_URL_ENV: &str = "COMMITMENTS_API_BASE_URL";

/// Address of the backend when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Request timeout for the HTTP client on native targets.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the commitments backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base address of the backend, without a trailing slash
    /// (e.g. "http://localhost:8000").
    pub base_url: String,

    /// Whole-request timeout in seconds (ignored on wasm, where the
    /// browser owns timeouts).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientSettings {
    /// Settings pointing at `base_url`, with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read the base address from `COMMITMENTS_API_BASE_URL`, falling back
    /// to `http://localhost:8000` when it is unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Check the base URL and return it normalised (trimmed, no trailing slash).
    pub fn validate(&self) -> Result<String, CoreError> {
        let url = self.base_url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(CoreError::InvalidConfig("base URL must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::InvalidConfig(format!(
                "base URL '{url}' must start with http:// or https://"
            )));
        }
        Ok(url.to_string())
    }
}
