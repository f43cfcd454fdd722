//! Route service
//!
//! Distance/time estimates, route previews, and navigation handoff.
//! Each call computes the route afresh; card estimates and previews do not
//! share results.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::{Coordinate, Place, RouteSummary};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{NavigationPort, RoutingPort};
use crate::store::{RouteEstimate, RoutePreview};

/// Default bound for a single directions request
pub const DEFAULT_ROUTE_TIMEOUT: Duration = Duration::from_secs(15);

/// Computes driving routes and hands navigation off to the maps app
pub struct RouteService {
    routing: Arc<dyn RoutingPort>,
    navigation: Arc<dyn NavigationPort>,
    timeout: Duration,
}

impl fmt::Debug for RouteService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteService")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl RouteService {
    /// Create a new route service with the default timeout
    pub fn new(routing: Arc<dyn RoutingPort>, navigation: Arc<dyn NavigationPort>) -> Self {
        Self {
            routing,
            navigation,
            timeout: DEFAULT_ROUTE_TIMEOUT,
        }
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Compute the driving distance and travel time between two points
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NoRouteFound` when there is no route,
    /// `ApplicationError::Timeout` when upstream does not answer in time, or
    /// the port's error otherwise.
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    pub async fn compute_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteSummary, ApplicationError> {
        match timeout(self.timeout, self.routing.driving_route(origin, destination)).await {
            Ok(Ok(summary)) => {
                debug!(
                    distance = %summary.format_distance(),
                    eta = %summary.format_eta(),
                    "Route computed"
                );
                Ok(summary)
            },
            Ok(Err(e)) => {
                warn!(error = %e, "Route computation failed");
                Err(e)
            },
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Route computation timed out");
                Err(ApplicationError::timeout("directions", self.timeout))
            },
        }
    }

    /// Compute a route and fold the outcome into a displayable estimate
    pub async fn estimate(&self, origin: &Coordinate, destination: &Coordinate) -> RouteEstimate {
        match self.compute_route(origin, destination).await {
            Ok(summary) => RouteEstimate::Ready(summary),
            Err(e) => RouteEstimate::Unavailable(e.to_string()),
        }
    }

    /// Open a preview for `destination` and compute its route
    pub async fn preview(&self, origin: Coordinate, destination: Place) -> RoutePreview {
        let mut preview = RoutePreview::new(origin, destination);
        preview.estimate = self
            .estimate(&preview.origin, &preview.destination.coordinate)
            .await;
        preview
    }

    /// Hand driving navigation off to the external maps app
    ///
    /// Fire-and-forget: launch failures are logged and otherwise ignored.
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    pub fn open_navigation(&self, origin: &Coordinate, destination: &Coordinate, label: &str) {
        match self.navigation.open_directions(origin, destination, label) {
            Ok(()) => info!(%label, "Navigation handed off"),
            Err(e) => warn!(%label, error = %e, "Navigation handoff failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockNavigationPort, MockRoutingPort};

    fn service(routing: MockRoutingPort, navigation: MockNavigationPort) -> RouteService {
        RouteService::new(Arc::new(routing), Arc::new(navigation))
    }

    #[tokio::test]
    async fn compute_route_returns_summary() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_driving_route()
            .returning(|_, _| Ok(RouteSummary::new(12345.0, 905.0)));

        let summary = service(routing, MockNavigationPort::new())
            .compute_route(&Coordinate::berlin(), &Coordinate::origin())
            .await
            .unwrap();

        assert_eq!(summary.format_distance(), "12.3 km");
        assert_eq!(summary.format_eta(), "15 min");
    }

    #[tokio::test]
    async fn no_route_becomes_unavailable_estimate() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_driving_route()
            .returning(|_, _| Err(ApplicationError::NoRouteFound));

        let estimate = service(routing, MockNavigationPort::new())
            .estimate(&Coordinate::berlin(), &Coordinate::mumbai())
            .await;

        assert_eq!(estimate, RouteEstimate::Unavailable("No route found".to_string()));
        assert_eq!(estimate.distance_text(), "--");
    }

    #[tokio::test]
    async fn preview_computes_region_and_route() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_driving_route()
            .times(1)
            .returning(|_, _| Ok(RouteSummary::new(2000.0, 240.0)));

        let destination = Place::new("Park", "No address", Coordinate::origin()).unwrap();
        let preview = service(routing, MockNavigationPort::new())
            .preview(Coordinate::origin(), destination)
            .await;

        assert_eq!(preview.region.center, Coordinate::origin());
        assert!((preview.region.latitude_delta - 0.02).abs() < f64::EPSILON);
        assert_eq!(preview.estimate.distance_text(), "2.0 km");
        assert_eq!(preview.estimate.eta_text(), "4 min");
    }

    #[test]
    fn open_navigation_delegates_with_label() {
        let mut navigation = MockNavigationPort::new();
        navigation
            .expect_open_directions()
            .withf(|_, _, label| label.to_string() == "Central Park")
            .times(1)
            .returning(|_, _, _| Ok(()));

        service(MockRoutingPort::new(), navigation).open_navigation(
            &Coordinate::berlin(),
            &Coordinate::origin(),
            "Central Park",
        );
    }

    #[test]
    fn open_navigation_swallows_errors() {
        let mut navigation = MockNavigationPort::new();
        navigation
            .expect_open_directions()
            .returning(|_, _, _| Err(ApplicationError::ExternalService("no opener".to_string())));

        service(MockRoutingPort::new(), navigation).open_navigation(
            &Coordinate::berlin(),
            &Coordinate::origin(),
            "Somewhere",
        );
    }
}
