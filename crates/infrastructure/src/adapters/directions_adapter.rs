//! Directions adapter - Implements RoutingPort using integration_directions

use std::time::Duration;

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::{Coordinate, RouteSummary};
use integration_directions::{
    DirectionsClient, DirectionsConfig, DirectionsError, GoogleDirectionsClient,
};
use tracing::instrument;

/// Adapter for driving routes using Google Directions
#[derive(Debug)]
pub struct DirectionsAdapter {
    client: GoogleDirectionsClient,
}

impl DirectionsAdapter {
    /// Create a new directions adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to initialize.
    pub fn new(config: &DirectionsConfig) -> Result<Self, ApplicationError> {
        let client = GoogleDirectionsClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration directions error to application error
    fn map_error(err: DirectionsError) -> ApplicationError {
        match err {
            DirectionsError::NoRoute => ApplicationError::NoRouteFound,
            DirectionsError::ConnectionFailed(e)
            | DirectionsError::RequestFailed(e)
            | DirectionsError::ParseError(e) => ApplicationError::ExternalService(e),
            e @ DirectionsError::Rejected { .. } => ApplicationError::ExternalService(e.to_string()),
            DirectionsError::AuthenticationFailed(e) => ApplicationError::Configuration(e),
            DirectionsError::Timeout { timeout_secs } => {
                ApplicationError::timeout("directions", Duration::from_secs(timeout_secs))
            },
        }
    }
}

#[async_trait]
impl RoutingPort for DirectionsAdapter {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn driving_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteSummary, ApplicationError> {
        let route = self
            .client
            .driving_route(origin, destination)
            .await
            .map_err(Self::map_error)?;

        Ok(RouteSummary::new(route.distance_meters, route.duration_seconds))
    }
}
