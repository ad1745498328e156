//! Scoring backend configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the external scoring backend.
///
/// The base URL is optional on purpose: the process must start without it
/// and surface the gap as an explicit error when a recommendation is
/// actually requested.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the scoring service (e.g. `http://recommender:8000`).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Timeout for one scoring round trip, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Whether a base URL has been provided.
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// The scoring round-trip timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidBackendUrl);
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
