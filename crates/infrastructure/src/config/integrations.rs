//! Upstream service configuration
//!
//! Wraps the integration crates' configs so API keys are held as
//! `SecretString` until the clients are built.

use integration_directions::DirectionsConfig;
use integration_places::PlacesConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Places Configuration
// ==============================

/// Google Places Text Search configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct PlacesAppConfig {
    /// Google Maps API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Base URL of the Places web service
    #[serde(default = "default_places_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_places_timeout")]
    pub timeout_secs: u64,

    /// Search radius in meters
    #[serde(default = "default_radius_meters")]
    pub radius_meters: u32,

    /// Text appended to every query
    #[serde(default = "default_query_qualifier")]
    pub query_qualifier: String,
}

impl std::fmt::Debug for PlacesAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesAppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("radius_meters", &self.radius_meters)
            .field("query_qualifier", &self.query_qualifier)
            .finish()
    }
}

fn default_places_base_url() -> String {
    PlacesConfig::default().base_url
}

fn default_places_timeout() -> u64 {
    PlacesConfig::default().timeout_secs
}

fn default_radius_meters() -> u32 {
    PlacesConfig::default().radius_meters
}

fn default_query_qualifier() -> String {
    PlacesConfig::default().query_qualifier
}

impl Default for PlacesAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_places_base_url(),
            timeout_secs: default_places_timeout(),
            radius_meters: default_radius_meters(),
            query_qualifier: default_query_qualifier(),
        }
    }
}

impl PlacesAppConfig {
    /// Convert to `integration_places`'s `PlacesConfig`
    #[must_use]
    pub fn to_places_config(&self) -> PlacesConfig {
        PlacesConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
            radius_meters: self.radius_meters,
            query_qualifier: self.query_qualifier.clone(),
        }
    }
}

// ==============================
// Directions Configuration
// ==============================

/// Google Directions configuration
///
/// Without its own key, the places key is used.
#[derive(Clone, Serialize, Deserialize)]
pub struct DirectionsAppConfig {
    /// Google Maps API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Base URL of the Maps web services
    #[serde(default = "default_directions_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_directions_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for DirectionsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsAppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_directions_base_url() -> String {
    DirectionsConfig::default().base_url
}

fn default_directions_timeout() -> u64 {
    DirectionsConfig::default().timeout_secs
}

impl Default for DirectionsAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_directions_base_url(),
            timeout_secs: default_directions_timeout(),
        }
    }
}

impl DirectionsAppConfig {
    /// Convert to `integration_directions`'s `DirectionsConfig`
    ///
    /// `fallback_key` is used when this section has no key of its own.
    #[must_use]
    pub fn to_directions_config(&self, fallback_key: Option<&SecretString>) -> DirectionsConfig {
        DirectionsConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .or(fallback_key)
                .map(|k| k.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_defaults_match_client_defaults() {
        let config = PlacesAppConfig::default();
        let client = config.to_places_config();
        assert_eq!(client.radius_meters, 10_000);
        assert_eq!(client.query_qualifier, "near me");
        assert!(client.api_key.is_none());
    }

    #[test]
    fn places_key_is_exposed_only_to_client_config() {
        let config = PlacesAppConfig {
            api_key: Some(SecretString::from("secret-key")),
            ..Default::default()
        };
        assert!(!format!("{config:?}").contains("secret-key"));
        assert_eq!(
            config.to_places_config().api_key.as_deref(),
            Some("secret-key")
        );
    }

    #[test]
    fn directions_key_falls_back() {
        let fallback = SecretString::from("shared");
        let config = DirectionsAppConfig::default();
        assert_eq!(
            config.to_directions_config(Some(&fallback)).api_key.as_deref(),
            Some("shared")
        );

        let own = DirectionsAppConfig {
            api_key: Some(SecretString::from("own")),
            ..Default::default()
        };
        assert_eq!(
            own.to_directions_config(Some(&fallback)).api_key.as_deref(),
            Some("own")
        );
    }

    #[test]
    fn api_key_is_not_serialized() {
        let config = PlacesAppConfig {
            api_key: Some(SecretString::from("secret-key")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret-key"));
    }
}
