//! Application configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, then `ROUTENAV__*` environment variables
//! (e.g. `ROUTENAV__PLACES__API_KEY`, `ROUTENAV__LOCATION__LATITUDE`).
//! `GOOGLE_MAPS_API_KEY` supplies the key when no other source does.

mod device;
mod integrations;

use std::path::Path;

use application::ApplicationError;
use integration_places::NominatimConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use device::{LocationAppConfig, LoggingAppConfig, NavigationAppConfig, WorkflowAppConfig};
pub use integrations::{DirectionsAppConfig, PlacesAppConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ROUTENAV";

/// Fallback environment variable for the Google Maps API key
pub const GOOGLE_MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Places search
    #[serde(default)]
    pub places: PlacesAppConfig,

    /// Driving directions
    #[serde(default)]
    pub directions: DirectionsAppConfig,

    /// Reverse geocoding
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Simulated device location
    #[serde(default)]
    pub location: LocationAppConfig,

    /// Navigation handoff
    #[serde(default)]
    pub navigation: NavigationAppConfig,

    /// Workflow timeouts
    #[serde(default)]
    pub workflow: WorkflowAppConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from the given file (if present) and the environment
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        debug!(path = %path.display(), "Loading configuration");

        let builder = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            // Override with environment variables (e.g., ROUTENAV__PLACES__RADIUS_METERS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_api_key_fallback(std::env::var(GOOGLE_MAPS_API_KEY_ENV).ok());
        Ok(config)
    }

    /// Use `key` as the places key when none is configured
    ///
    /// Blank values are ignored.
    pub fn apply_api_key_fallback(&mut self, key: Option<String>) {
        if self.places.api_key.is_some() {
            return;
        }
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using {GOOGLE_MAPS_API_KEY_ENV} as Google Maps API key");
            self.places.api_key = Some(SecretString::from(key));
        }
    }

    /// Key used for directions requests
    #[must_use]
    pub fn directions_api_key(&self) -> Option<&SecretString> {
        self.directions
            .api_key
            .as_ref()
            .or(self.places.api_key.as_ref())
    }

    /// Check the configuration for values that would make every request fail
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` listing every problem found.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let mut problems = Vec::new();

        if self
            .places
            .api_key
            .as_ref()
            .is_none_or(|k| k.expose_secret().trim().is_empty())
        {
            problems.push(format!(
                "no Google Maps API key (set {ENV_PREFIX}__PLACES__API_KEY or {GOOGLE_MAPS_API_KEY_ENV})"
            ));
        }

        if self.places.timeout_secs == 0 {
            problems.push("places.timeout_secs must be greater than 0".to_string());
        }
        if self.places.radius_meters == 0 || self.places.radius_meters > 50_000 {
            problems.push("places.radius_meters must be between 1 and 50000".to_string());
        }
        if self.directions.timeout_secs == 0 {
            problems.push("directions.timeout_secs must be greater than 0".to_string());
        }
        if self.geocoding.timeout_secs == 0 {
            problems.push("geocoding.timeout_secs must be greater than 0".to_string());
        }
        for name in self.workflow.zero_timeouts() {
            problems.push(format!("{name} must be greater than 0"));
        }
        if let Err(e) = self.location.coordinate() {
            problems.push(e.to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::Configuration(problems.join("; ")))
        }
    }
}
