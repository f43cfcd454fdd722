//! Places service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Google Places Text Search client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Base URL of the Places web service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (required to send requests)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Search radius around the device location in meters
    #[serde(default = "default_radius_meters")]
    pub radius_meters: u32,

    /// Text appended to every query to bias results toward proximity
    #[serde(default = "default_query_qualifier")]
    pub query_qualifier: String,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/place".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_radius_meters() -> u32 {
    10_000
}

fn default_query_qualifier() -> String {
    "near me".to_string()
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            radius_meters: default_radius_meters(),
            query_qualifier: default_query_qualifier(),
        }
    }
}

impl PlacesConfig {
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

        if self.radius_meters == 0 || self.radius_meters > 50_000 {
            return Err("radius_meters must be between 1 and 50000".to_string());
        }

        Ok(())
    }
}
