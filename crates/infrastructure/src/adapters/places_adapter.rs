//! Places adapter - Implements PlacesSearchPort using integration_places

use std::time::Duration;

use application::error::ApplicationError;
use application::ports::PlacesSearchPort;
use async_trait::async_trait;
use domain::{Coordinate, DomainError, Place};
use integration_places::{GooglePlacesClient, PlaceResult, PlacesClient, PlacesConfig, PlacesError};
use tracing::{debug, instrument};

/// Adapter for nearby place search using Google Places Text Search
#[derive(Debug)]
pub struct PlacesAdapter {
    client: GooglePlacesClient,
}

impl PlacesAdapter {
    /// Create a new places adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to initialize.
    pub fn new(config: &PlacesConfig) -> Result<Self, ApplicationError> {
        let client = GooglePlacesClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration places error to application error
    fn map_error(err: PlacesError) -> ApplicationError {
        match err {
            PlacesError::ConnectionFailed(e) | PlacesError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            PlacesError::ParseError(e) => {
                ApplicationError::ExternalService(format!("Invalid places response: {e}"))
            },
            PlacesError::RateLimitExceeded { .. } => {
                ApplicationError::ExternalService("Places rate limit exceeded".to_string())
            },
            PlacesError::Timeout { timeout_secs } => {
                ApplicationError::timeout("places search", Duration::from_secs(timeout_secs))
            },
            PlacesError::InvalidQuery(e) => DomainError::ValidationError(e).into(),
            PlacesError::AuthenticationFailed(e) | PlacesError::ConfigurationError(e) => {
                ApplicationError::Configuration(e)
            },
        }
    }

    /// Convert a result into a domain place with a fresh id
    ///
    /// Results with out-of-range coordinates are dropped.
    fn to_place(result: PlaceResult) -> Option<Place> {
        let coordinate = match Coordinate::new(result.latitude, result.longitude) {
            Ok(c) => c,
            Err(e) => {
                debug!(name = %result.name, error = %e, "Dropping place with invalid coordinates");
                return None;
            },
        };
        Place::new(result.name, result.address, coordinate).ok()
    }
}

#[async_trait]
impl PlacesSearchPort for PlacesAdapter {
    #[instrument(skip(self), fields(near = %near))]
    async fn search_places(
        &self,
        query: &str,
        near: &Coordinate,
    ) -> Result<Vec<Place>, ApplicationError> {
        let results = self
            .client
            .text_search(query, near.latitude(), near.longitude())
            .await
            .map_err(Self::map_error)?;

        let places: Vec<Place> = results.into_iter().filter_map(Self::to_place).collect();
        debug!(count = places.len(), "Places found");
        Ok(places)
    }
}
