//! Backend configuration
//!
//! Two values control every backend interaction: the base URL of the
//! search service and its major version. The major version decides the
//! endpoint and aggregation shapes (see [`crate::endpoint`]); it must
//! never be consulted anywhere else.

use crate::{ConfigError, MlindexResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Default production search service.
pub const DEFAULT_SEARCH_URL: &str = "https://www.openml.org/es/";

/// Default backend major version.
pub const DEFAULT_SEARCH_VERSION: u32 = 6;

/// Search backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the search service, always with a trailing slash.
    pub base_url: String,
    /// Major version of the backend search engine.
    pub major_version: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SEARCH_URL.to_string(),
            major_version: DEFAULT_SEARCH_VERSION,
        }
    }
}

static GLOBAL_CONFIG: Lazy<BackendConfig> = Lazy::new(BackendConfig::from_env);

impl BackendConfig {
    /// Create a configuration with an explicit base URL and version.
    ///
    /// The base URL is normalized to carry a trailing slash so paths can
    /// be appended directly.
    pub fn new(base_url: impl Into<String>, major_version: u32) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            major_version,
        }
    }

    /// Create from environment variables with fallback to defaults.
    ///
    /// Environment variables:
    /// - `MLINDEX_SEARCH_URL`: base URL of the search service
    ///   (default: production URL)
    /// - `MLINDEX_SEARCH_VERSION`: backend major version (default: 6)
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MLINDEX_SEARCH_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string());
        let major_version = std::env::var("MLINDEX_SEARCH_VERSION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEARCH_VERSION);
        Self::new(base_url, major_version)
    }

    /// The process-wide configuration, read from the environment once.
    pub fn global() -> &'static Self {
        &GLOBAL_CONFIG
    }

    /// Validate the configuration.
    pub fn validate(&self) -> MlindexResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "base_url".to_string(),
                value: self.base_url.clone(),
                reason: "base_url must not be empty".to_string(),
            }
            .into());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "base_url".to_string(),
                value: self.base_url.clone(),
                reason: "base_url must be an http(s) URL".to_string(),
            }
            .into());
        }
        if self.major_version == 0 {
            return Err(ConfigError::InvalidValue {
                field: "major_version".to_string(),
                value: self.major_version.to_string(),
                reason: "major_version must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
