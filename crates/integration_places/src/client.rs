//! Google Places Text Search client
//!
//! Client for the [Text Search](https://developers.google.com/maps/documentation/places/web-service/search-text)
//! endpoint, biased to a radius around the device location.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::PlacesConfig;
use crate::error::PlacesError;
use crate::models::{PlaceResult, SearchStatus, api};
use crate::urlencoding::{encode, qualify_query};

/// Trait for place search clients
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Search for places matching `query` around a coordinate
    ///
    /// The qualifier is appended to `query` as given, untrimmed. A non-OK
    /// upstream status yields an empty list rather than an error.
    async fn text_search(
        &self,
        query: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<PlaceResult>, PlacesError>;
}

/// Google Places Text Search client
#[derive(Debug)]
pub struct GooglePlacesClient {
    client: Client,
    config: PlacesConfig,
    api_key: String,
}

impl GooglePlacesClient {
    /// Create a new Google Places client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot
    /// be created.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                PlacesError::AuthenticationFailed("Google Maps API key is required".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Build the text search URL
    fn build_search_url(&self, query: &str, latitude: f64, longitude: f64) -> String {
        let qualified = qualify_query(query, &self.config.query_qualifier);
        format!(
            "{}/textsearch/json?query={}&location={latitude},{longitude}&radius={}&key={}",
            self.config.base_url,
            encode(&qualified),
            self.config.radius_meters,
            self.api_key
        )
    }

    /// Strip the API key from a URL before it is logged
    fn redact(&self, url: &str) -> String {
        url.replace(&self.api_key, "REDACTED")
    }

    /// Parse a text search body into places
    ///
    /// # Errors
    ///
    /// Returns `PlacesError::ParseError` if the body is not a JSON object.
    pub(crate) fn parse_response(body: &str) -> Result<Vec<PlaceResult>, PlacesError> {
        let response: api::TextSearchResponse =
            serde_json::from_str(body).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        let status = SearchStatus::parse(&response.status);
        if !status.is_ok() {
            if status == SearchStatus::ZeroResults {
                debug!("Text search returned no results");
            } else {
                warn!(
                    %status,
                    error_message = response.error_message.as_deref().unwrap_or_default(),
                    "Text search returned non-OK status"
                );
            }
            return Ok(Vec::new());
        }

        let total = response.results.len();
        let places: Vec<PlaceResult> = response
            .results
            .into_iter()
            .filter_map(PlaceResult::from_entry)
            .collect();

        if places.len() < total {
            debug!(skipped = total - places.len(), "Skipped incomplete place entries");
        }

        Ok(places)
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    #[instrument(skip(self), fields(provider = "google_places"))]
    async fn text_search(
        &self,
        query: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<PlaceResult>, PlacesError> {
        if query.trim().is_empty() {
            return Err(PlacesError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = self.build_search_url(query, latitude, longitude);
        let start = Instant::now();

        debug!(url = %self.redact(&url), "Sending text search request");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlacesError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else if e.is_connect() {
                    PlacesError::ConnectionFailed(e.to_string())
                } else {
                    PlacesError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received text search response");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok());

            return Err(PlacesError::RateLimitExceeded {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlacesError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::RequestFailed(e.to_string()))?;

        let places = Self::parse_response(&body)?;

        debug!(
            results = places.len(),
            time_ms = start.elapsed().as_millis(),
            "Text search completed"
        );

        Ok(places)
    }
}
