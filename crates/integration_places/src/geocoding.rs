//! Nominatim reverse geocoding client
//!
//! Converts coordinates to a locality / region / country placemark using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! Nominatim allows one request per second per client.

use std::time::Duration;

use async_trait::async_trait;
use domain::Placemark;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(1100);

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Preferred language for returned names
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// User agent sent with every request (required by Nominatim)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    5
}

fn default_accept_language() -> String {
    "en".to_string()
}

fn default_user_agent() -> String {
    format!("RouteNavigator/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            accept_language: default_accept_language(),
            user_agent: default_user_agent(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 2,
            ..Default::default()
        }
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Trait for reverse geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a coordinate to a placemark
    ///
    /// Returns `Ok(None)` when the service has nothing for the coordinate.
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Placemark>, GeocodingError>;
}

/// Nominatim reverse geocoding client
///
/// Calls are serialized: each one waits until [`MIN_REQUEST_INTERVAL`] has
/// passed since the previous call started.
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    next_slot: Mutex<Option<Instant>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            next_slot: Mutex::new(None),
        })
    }

    async fn wait_for_slot(&self) {
        let mut slot = self.next_slot.lock().await;
        if let Some(wait) = slot.and_then(|at| at.checked_duration_since(Instant::now())) {
            debug!(?wait, "Pacing Nominatim request");
            tokio::time::sleep(wait).await;
        }
        *slot = Some(Instant::now() + MIN_REQUEST_INTERVAL);
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Placemark>, GeocodingError> {
        self.wait_for_slot().await;

        let url = format!("{}/reverse", self.config.base_url);
        let params = [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("format", "jsonv2".to_string()),
            ("zoom", "10".to_string()),
            ("addressdetails", "1".to_string()),
            ("accept-language", self.config.accept_language.clone()),
        ];

        debug!(%latitude, %longitude, "Reverse geocoding");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let result: NominatimReverse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let placemark = result.into_placemark();
        debug!(found = placemark.is_some(), "Reverse geocoded");
        Ok(placemark)
    }
}

/// Raw Nominatim reverse response
#[derive(Debug, Deserialize)]
struct NominatimReverse {
    error: Option<String>,
    address: Option<NominatimAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    hamlet: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

impl NominatimReverse {
    fn into_placemark(self) -> Option<Placemark> {
        if let Some(error) = self.error {
            debug!(%error, "Nominatim has no placemark");
            return None;
        }

        let address = self.address?;
        Some(Placemark {
            locality: address
                .city
                .or(address.town)
                .or(address.village)
                .or(address.hamlet),
            administrative_area: address.state,
            country: address.country,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominatim_config_default() {
        let config = NominatimConfig::default();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.accept_language, "en");
        assert!(config.user_agent.starts_with("RouteNavigator/"));
    }

    #[test]
    fn test_geocoding_error_display() {
        let err = GeocodingError::Timeout;
        assert!(err.to_string().contains("timed out"));

        let err = GeocodingError::RequestFailed("HTTP 503".to_string());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_city_placemark() {
        let json = r#"{"address": {"city": "Mumbai", "state": "Maharashtra", "country": "India"}}"#;
        let result: NominatimReverse = serde_json::from_str(json).unwrap();
        let placemark = result.into_placemark().unwrap();
        assert_eq!(placemark.display_name(), "Mumbai, Maharashtra, India");
    }

    #[test]
    fn test_locality_falls_back_to_village() {
        let json = r#"{"address": {"village": "Lonavala", "country": "India"}}"#;
        let result: NominatimReverse = serde_json::from_str(json).unwrap();
        let placemark = result.into_placemark().unwrap();
        assert_eq!(placemark.locality.as_deref(), Some("Lonavala"));
        assert_eq!(placemark.display_name(), "Lonavala, India");
    }

    #[test]
    fn test_error_response_has_no_placemark() {
        let json = r#"{"error": "Unable to geocode"}"#;
        let result: NominatimReverse = serde_json::from_str(json).unwrap();
        assert!(result.into_placemark().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn requests_are_paced() {
        let client = NominatimGeocodingClient::new(&NominatimConfig::for_testing()).unwrap();
        let start = Instant::now();
        client.wait_for_slot().await;
        client.wait_for_slot().await;
        assert!(start.elapsed() >= MIN_REQUEST_INTERVAL);
    }
}
