//! Routing port
//!
//! Driving route distance and travel time between two coordinates.

use async_trait::async_trait;
use domain::{Coordinate, RouteSummary};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving directions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute the first driving route between `origin` and `destination`
    ///
    /// Returns `ApplicationError::NoRouteFound` when the provider has no route.
    async fn driving_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteSummary, ApplicationError>;
}
