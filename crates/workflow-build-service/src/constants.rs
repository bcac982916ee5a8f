//! Service-wide constants
//!
//! Single source of truth for configuration defaults and well-known names.

/// Default values for service configuration
pub mod defaults {
    /// Base URL of the build backend
    pub const API_BASE_URL: &str = "http://localhost:8000";
    /// Path of the build submission endpoint
    pub const BUILD_ENDPOINT: &str = "/api/build/create";
    /// Request timeout for submissions
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Environment variables read by the service
pub mod env {
    /// Overrides `api_base_url`
    pub const API_URL: &str = "AGENT_BUILD_API_URL";
}

/// File names
pub mod paths {
    /// Configuration file inside the data directory
    pub const CONFIG_FILE: &str = "config.json";
}
