//! Service configuration storage
//!
//! Handles persistent storage of the build backend connection settings.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::constants::{defaults, env, paths};

/// Connection settings for the build backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Path of the build endpoint, appended to the base URL
    #[serde(default = "default_build_endpoint")]
    pub build_endpoint: String,
    /// Submission timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    defaults::API_BASE_URL.to_string()
}

fn default_build_endpoint() -> String {
    defaults::BUILD_ENDPOINT.to_string()
}

fn default_request_timeout() -> u64 {
    defaults::REQUEST_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            build_endpoint: default_build_endpoint(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from disk
    ///
    /// A missing file yields the defaults.
    pub async fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = data_dir.join(paths::CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .await
            .map_err(ConfigError::Io)?;

        serde_json::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Save configuration to disk
    pub async fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        // Ensure directory exists
        fs::create_dir_all(data_dir).await.map_err(ConfigError::Io)?;

        let config_path = data_dir.join(paths::CONFIG_FILE);
        let contents = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        fs::write(&config_path, contents)
            .await
            .map_err(ConfigError::Io)?;

        log::info!("Configuration saved to {:?}", config_path);
        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_api_url_override(std::env::var(env::API_URL).ok())
    }

    fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            log::info!("Using build backend URL from {}: {}", env::API_URL, url);
            self.api_base_url = url;
        }
        self
    }

    /// Full URL of the build endpoint
    pub fn build_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.build_endpoint.trim_start_matches('/')
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(serde_json::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(serde_json::Error),
}
