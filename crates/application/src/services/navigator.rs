//! Navigator - the location → search → route workflow
//!
//! Wires the services to the [`Store`]. Every method dispatches actions
//! describing what happened; nothing here mutates state directly.

use futures::future::join_all;
use tracing::{debug, instrument};

use domain::{Coordinate, PlaceId, RouteSummary};

use super::{LocationService, RouteService, SearchService, should_search};
use crate::error::ApplicationError;
use crate::store::{Action, AppState, RoutePreview, Store};

/// Front-end facing controller for the nearby search workflow
#[derive(Debug)]
pub struct Navigator {
    store: Store,
    location: LocationService,
    search: SearchService,
    routes: RouteService,
}

impl Navigator {
    /// Create a navigator over a fresh store
    pub fn new(location: LocationService, search: SearchService, routes: RouteService) -> Self {
        Self {
            store: Store::new(),
            location,
            search,
            routes,
        }
    }

    /// The state container observed by the front end
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> AppState {
        self.store.snapshot()
    }

    /// Run the location flow from the current state
    pub async fn start_location(&self) -> AppState {
        let current = self.store.snapshot().location;
        let store = &self.store;
        self.location
            .start(current, |s| store.dispatch(Action::LocationChanged(s.clone())))
            .await;
        self.state()
    }

    /// Ask for a fresh fix
    pub async fn refresh_location(&self) -> AppState {
        let current = self.store.snapshot().location;
        let store = &self.store;
        self.location
            .refresh(current, |s| store.dispatch(Action::LocationChanged(s.clone())))
            .await;
        self.state()
    }

    /// Search for `query` around the current fix
    ///
    /// Trivial queries or a missing fix clear the results without a request.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> AppState {
        self.store.dispatch(Action::QueryChanged(query.to_string()));

        let near = self.store.snapshot().location.coordinate();
        if near.is_none() || !should_search(query) {
            self.store.dispatch(Action::SearchCleared);
            return self.state();
        }

        self.store.dispatch(Action::SearchStarted);
        let result = self
            .search
            .search(query, near.as_ref())
            .await
            .map_err(|e| e.to_string());
        self.store.dispatch(Action::SearchCompleted(result));
        self.state()
    }

    /// Compute a distance/time estimate for every displayed result
    ///
    /// Requests run concurrently; each result is updated as its own request
    /// finishes.
    pub async fn estimate_routes(&self) -> AppState {
        let snapshot = self.store.snapshot();
        let Some(origin) = snapshot.location.coordinate() else {
            debug!("No location, skipping estimates");
            return snapshot;
        };

        let requests = snapshot.search.places().iter().map(|place| {
            let id = place.id;
            let destination = place.coordinate;
            async move {
                self.store.dispatch(Action::EstimateStarted(id));
                let estimate = self.routes.estimate(&origin, &destination).await;
                self.store.dispatch(Action::EstimateCompleted {
                    place: id,
                    estimate,
                });
            }
        });
        join_all(requests).await;

        self.state()
    }

    /// Driving route from the current fix to an arbitrary coordinate
    ///
    /// # Errors
    ///
    /// Returns an error when no fix is available or no route is found.
    pub async fn route_to(&self, destination: &Coordinate) -> Result<RouteSummary, ApplicationError> {
        let location = self.store.snapshot().location;
        let origin = location
            .coordinate()
            .ok_or_else(|| ApplicationError::LocationUnavailable(location.status()))?;
        self.routes.compute_route(&origin, destination).await
    }

    /// Open a route preview for a displayed result and compute its route
    ///
    /// # Errors
    ///
    /// Returns an error when no fix is available or the id is not among the
    /// current results.
    pub async fn open_preview(&self, id: &PlaceId) -> Result<RoutePreview, ApplicationError> {
        let snapshot = self.store.snapshot();
        let origin = snapshot
            .location
            .coordinate()
            .ok_or_else(|| ApplicationError::LocationUnavailable(snapshot.location.status()))?;
        let place = snapshot
            .place(id)
            .cloned()
            .ok_or_else(|| ApplicationError::PlaceNotFound(id.to_string()))?;

        let preview = RoutePreview::new(origin, place);
        self.store
            .dispatch(Action::PreviewOpened(preview.clone()));

        let estimate = self
            .routes
            .estimate(&preview.origin, &preview.destination.coordinate)
            .await;
        self.store.dispatch(Action::PreviewRouteCompleted {
            place: *id,
            estimate: estimate.clone(),
        });

        Ok(RoutePreview { estimate, ..preview })
    }

    /// Dismiss the route preview
    pub fn close_preview(&self) {
        self.store.dispatch(Action::PreviewClosed);
    }

    /// Hand navigation to a displayed result off to the maps app
    ///
    /// # Errors
    ///
    /// Returns an error when no fix is available or the id is unknown.
    pub fn start_navigation(&self, id: &PlaceId) -> Result<(), ApplicationError> {
        let snapshot = self.store.snapshot();
        let origin = snapshot
            .location
            .coordinate()
            .ok_or_else(|| ApplicationError::LocationUnavailable(snapshot.location.status()))?;
        let place = snapshot
            .place(id)
            .ok_or_else(|| ApplicationError::PlaceNotFound(id.to_string()))?;

        self.routes
            .open_navigation(&origin, &place.coordinate, &place.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use domain::{Place, Placemark};

    use super::*;
    use crate::ports::{
        AuthorizationStatus, MockLocationSourcePort, MockNavigationPort, MockPlacesSearchPort,
        MockReverseGeocodingPort, MockRoutingPort,
    };
    use crate::store::RouteEstimate;

    fn located_source() -> MockLocationSourcePort {
        let mut source = MockLocationSourcePort::new();
        source
            .expect_authorization_status()
            .return_const(AuthorizationStatus::Authorized);
        source
            .expect_next_fix()
            .returning(|| Ok(Coordinate::origin()));
        source.expect_stop_updates().return_const(());
        source
    }

    fn geocoder() -> MockReverseGeocodingPort {
        let mut geocoder = MockReverseGeocodingPort::new();
        geocoder
            .expect_reverse_geocode()
            .returning(|_| Ok(Some(Placemark::default())));
        geocoder
    }

    fn two_places() -> Vec<Place> {
        vec![
            Place::new("Cafe", "Main St", Coordinate::new(0.01, 0.01).unwrap()).unwrap(),
            Place::new("Bakery", "No address", Coordinate::new(0.02, 0.0).unwrap()).unwrap(),
        ]
    }

    fn navigator(
        source: MockLocationSourcePort,
        places: MockPlacesSearchPort,
        routing: MockRoutingPort,
        navigation: MockNavigationPort,
    ) -> Navigator {
        Navigator::new(
            LocationService::new(Arc::new(source), Arc::new(geocoder())),
            SearchService::new(Arc::new(places)),
            RouteService::new(Arc::new(routing), Arc::new(navigation)),
        )
    }

    #[tokio::test]
    async fn search_before_location_clears_results() {
        let mut places = MockPlacesSearchPort::new();
        places.expect_search_places().never();

        let nav = navigator(
            MockLocationSourcePort::new(),
            places,
            MockRoutingPort::new(),
            MockNavigationPort::new(),
        );
        let state = nav.search("coffee").await;

        assert_eq!(state.query, "coffee");
        assert!(state.search.places().is_empty());
        assert!(!state.search.is_loading());
    }

    #[tokio::test]
    async fn full_workflow() {
        let mut places = MockPlacesSearchPort::new();
        places
            .expect_search_places()
            .times(1)
            .returning(|_, _| Ok(two_places()));

        let mut routing = MockRoutingPort::new();
        // two card estimates plus one preview: no sharing between them
        routing
            .expect_driving_route()
            .times(3)
            .returning(|_, _| Ok(RouteSummary::new(12345.0, 905.0)));

        let mut navigation = MockNavigationPort::new();
        navigation
            .expect_open_directions()
            .withf(|_, _, label| label.to_string() == "Cafe")
            .times(1)
            .returning(|_, _, _| Ok(()));

        let nav = navigator(located_source(), places, routing, navigation);

        let state = nav.start_location().await;
        assert_eq!(state.location.status(), "Current location");

        let state = nav.search("coffee").await;
        assert_eq!(state.search.places().len(), 2);

        let state = nav.estimate_routes().await;
        for place in state.search.places() {
            let estimate = state.estimate_for(&place.id);
            assert_eq!(estimate.distance_text(), "12.3 km");
            assert_eq!(estimate.eta_text(), "15 min");
        }

        let cafe = state.search.places()[0].id;
        let preview = nav.open_preview(&cafe).await.unwrap();
        assert!(matches!(preview.estimate, RouteEstimate::Ready(_)));
        assert!(nav.state().preview.is_some());

        nav.close_preview();
        assert!(nav.state().preview.is_none());

        nav.start_navigation(&cafe).unwrap();
    }

    #[tokio::test]
    async fn failed_search_resolves_to_empty_list() {
        let mut places = MockPlacesSearchPort::new();
        places
            .expect_search_places()
            .returning(|_, _| Err(ApplicationError::ExternalService("malformed".to_string())));

        let nav = navigator(
            located_source(),
            places,
            MockRoutingPort::new(),
            MockNavigationPort::new(),
        );
        nav.start_location().await;

        let state = nav.search("coffee").await;
        assert!(state.search.places().is_empty());
        assert!(!state.search.is_loading());
        assert!(state.search.error().is_some());
    }

    #[tokio::test]
    async fn route_to_uses_current_fix() {
        let mut routing = MockRoutingPort::new();
        routing
            .expect_driving_route()
            .withf(|origin, _| *origin == Coordinate::origin())
            .times(1)
            .returning(|_, _| Ok(RouteSummary::new(500.0, 60.0)));

        let nav = navigator(
            located_source(),
            MockPlacesSearchPort::new(),
            routing,
            MockNavigationPort::new(),
        );
        nav.start_location().await;

        let summary = nav.route_to(&Coordinate::berlin()).await.unwrap();
        assert_eq!(summary.format_distance(), "0.5 km");
    }

    #[tokio::test]
    async fn route_to_without_location_fails() {
        let nav = navigator(
            MockLocationSourcePort::new(),
            MockPlacesSearchPort::new(),
            MockRoutingPort::new(),
            MockNavigationPort::new(),
        );
        let result = nav.route_to(&Coordinate::berlin()).await;
        assert!(matches!(result, Err(ApplicationError::LocationUnavailable(_))));
    }

    #[tokio::test]
    async fn preview_of_unknown_place_fails() {
        let nav = navigator(
            located_source(),
            MockPlacesSearchPort::new(),
            MockRoutingPort::new(),
            MockNavigationPort::new(),
        );
        nav.start_location().await;

        let result = nav.open_preview(&PlaceId::new()).await;
        assert!(matches!(result, Err(ApplicationError::PlaceNotFound(_))));
    }

    #[tokio::test]
    async fn navigation_without_location_fails() {
        let nav = navigator(
            MockLocationSourcePort::new(),
            MockPlacesSearchPort::new(),
            MockRoutingPort::new(),
            MockNavigationPort::new(),
        );
        let result = nav.start_navigation(&PlaceId::new());
        assert!(matches!(result, Err(ApplicationError::LocationUnavailable(_))));
    }
}
