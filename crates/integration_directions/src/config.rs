//! Directions service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Google Directions client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Base URL of the Maps web services
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (required to send requests)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DirectionsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err("api_key must be set".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
