//! Geocoding adapter - Implements ReverseGeocodingPort using Nominatim

use application::error::ApplicationError;
use application::ports::ReverseGeocodingPort;
use async_trait::async_trait;
use domain::{Coordinate, Placemark};
use integration_places::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};
use tracing::instrument;

/// Adapter for reverse geocoding using Nominatim/OpenStreetMap
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl GeocodingAdapter {
    /// Create a new geocoding adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::ConnectionFailed(e)
            | GeocodingError::RequestFailed(e)
            | GeocodingError::ParseError(e) => ApplicationError::ExternalService(e),
            GeocodingError::Timeout => {
                ApplicationError::ExternalService("Geocoding request timed out".to_string())
            },
        }
    }
}

#[async_trait]
impl ReverseGeocodingPort for GeocodingAdapter {
    #[instrument(skip(self), fields(coordinate = %coordinate))]
    async fn reverse_geocode(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Option<Placemark>, ApplicationError> {
        self.client
            .reverse_geocode(coordinate.latitude(), coordinate.longitude())
            .await
            .map_err(Self::map_error)
    }
}
