//! Remote API configuration

use serde::{Deserialize, Serialize};

/// Configuration for the remote marketplace API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without the API prefix
    pub base_url: String,

    /// Path prefix prepended to every endpoint
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:3000"),
            api_prefix: default_api_prefix(),
            timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Create a new API configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads `API_BASE_URL`, `API_PREFIX` and `API_TIMEOUT_SECS`, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("API_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(prefix) = std::env::var("API_PREFIX") {
            config.api_prefix = prefix;
        }
        config.timeout_secs = std::env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(config.timeout_secs);
        config
    }

    /// Base URL with the API prefix joined, e.g. `https://host/api/v1`
    pub fn joined_base_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.api_prefix
        )
    }
}

fn default_api_prefix() -> String {
    String::from("/api/v1")
}

fn default_request_timeout() -> u64 {
    30 // 30 seconds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.api_prefix, "/api/v1");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_joined_base_url_trims_trailing_slash() {
        let config = ApiConfig::new("https://api.courselane.app/");
        assert_eq!(
            config.joined_base_url(),
            "https://api.courselane.app/api/v1"
        );
    }

    #[test]
    fn test_joined_base_url() {
        let config = ApiConfig::new("https://api.courselane.app");
        assert_eq!(
            config.joined_base_url(),
            "https://api.courselane.app/api/v1"
        );
    }
}
