//! Google Directions client

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::DirectionsConfig;
use crate::error::DirectionsError;
use crate::models::{DirectionsStatus, DrivingRoute, api};

/// Trait for routing clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Compute the driving route between two coordinates
    ///
    /// # Errors
    ///
    /// Returns `DirectionsError::NoRoute` when the service finds no route.
    async fn driving_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<DrivingRoute, DirectionsError>;
}

/// Google Directions API client
#[derive(Debug)]
pub struct GoogleDirectionsClient {
    client: Client,
    config: DirectionsConfig,
    api_key: String,
}

impl GoogleDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot
    /// be created.
    pub fn new(config: &DirectionsConfig) -> Result<Self, DirectionsError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                DirectionsError::AuthenticationFailed(
                    "Google Maps API key is required".to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DirectionsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Interpret a directions body
    pub(crate) fn parse_response(body: &str) -> Result<DrivingRoute, DirectionsError> {
        let response: api::DirectionsResponse =
            serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;

        let status = DirectionsStatus::parse(&response.status);
        match status {
            DirectionsStatus::Ok => {},
            s if s.is_no_route() => return Err(DirectionsError::NoRoute),
            s => {
                let message = response.error_message.unwrap_or_default();
                warn!(status = %s, error_message = %message, "Directions request rejected");
                return Err(DirectionsError::Rejected {
                    status: s.to_string(),
                    message,
                });
            },
        }

        response
            .routes
            .first()
            .and_then(DrivingRoute::from_route)
            .ok_or(DirectionsError::NoRoute)
    }
}

#[async_trait]
impl DirectionsClient for GoogleDirectionsClient {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn driving_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<DrivingRoute, DirectionsError> {
        let url = format!("{}/directions/json", self.config.base_url);
        let params = [
            ("origin", origin.as_query_value()),
            ("destination", destination.as_query_value()),
            ("mode", "driving".to_string()),
            ("key", self.api_key.clone()),
        ];

        debug!(%url, "Requesting driving directions");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DirectionsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else if e.is_connect() {
                    DirectionsError::ConnectionFailed(e.to_string())
                } else {
                    DirectionsError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(DirectionsError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectionsError::RequestFailed(e.to_string()))?;

        let route = Self::parse_response(&body)?;
        debug!(
            distance_meters = route.distance_meters,
            duration_seconds = route.duration_seconds,
            "Driving route computed"
        );
        Ok(route)
    }
}
