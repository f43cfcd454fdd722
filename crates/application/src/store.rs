//! Application state container
//!
//! All observable state lives in one [`AppState`] value. The only way to
//! change it is [`Store::dispatch`], which runs the pure [`reduce`] function
//! and notifies subscribers through a `tokio::sync::watch` channel.

use std::collections::HashMap;
use std::sync::Arc;

use domain::{Coordinate, MapRegion, NO_ESTIMATE, Place, PlaceId, RouteSummary};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use crate::services::LocationState;

/// State of the current search
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum SearchState {
    /// No search has been run for the current query
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Results arrived (possibly empty)
    Loaded(Vec<Place>),
    /// The search failed; shown as an empty list
    Failed(String),
}

impl SearchState {
    /// The places to display
    #[must_use]
    pub fn places(&self) -> &[Place] {
        match self {
            Self::Loaded(places) => places,
            _ => &[],
        }
    }

    /// Whether a request is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Error message of a failed search
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Distance/time estimate for one destination
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum RouteEstimate {
    /// Not computed yet
    #[default]
    Pending,
    /// Route found
    Ready(RouteSummary),
    /// No route, or the request failed
    Unavailable(String),
}

impl RouteEstimate {
    /// Formatted distance, or `--`
    #[must_use]
    pub fn distance_text(&self) -> String {
        match self {
            Self::Ready(summary) => summary.format_distance(),
            _ => NO_ESTIMATE.to_string(),
        }
    }

    /// Formatted travel time, or `--`
    #[must_use]
    pub fn eta_text(&self) -> String {
        match self {
            Self::Ready(summary) => summary.format_eta(),
            _ => NO_ESTIMATE.to_string(),
        }
    }
}

/// An open route preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePreview {
    /// Where the route starts
    pub origin: Coordinate,
    /// Where the route ends
    pub destination: Place,
    /// Viewport containing both ends
    pub region: MapRegion,
    /// Route estimate, computed when the preview is first shown
    pub estimate: RouteEstimate,
}

impl RoutePreview {
    /// Create a preview with a pending estimate
    #[must_use]
    pub fn new(origin: Coordinate, destination: Place) -> Self {
        let region = MapRegion::enclosing(&origin, &destination.coordinate);
        Self {
            origin,
            destination,
            region,
            estimate: RouteEstimate::Pending,
        }
    }
}

/// Everything the front end renders
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Device location flow
    pub location: LocationState,
    /// Current query text
    pub query: String,
    /// Current search
    pub search: SearchState,
    /// Per-result route estimates
    pub estimates: HashMap<PlaceId, RouteEstimate>,
    /// Open route preview
    pub preview: Option<RoutePreview>,
}

impl AppState {
    /// Estimate for a result, `Pending` if none was requested
    #[must_use]
    pub fn estimate_for(&self, id: &PlaceId) -> RouteEstimate {
        self.estimates.get(id).cloned().unwrap_or_default()
    }

    /// Look up a displayed result by id
    #[must_use]
    pub fn place(&self, id: &PlaceId) -> Option<&Place> {
        self.search.places().iter().find(|p| &p.id == id)
    }
}

/// State transitions
#[derive(Debug, Clone)]
pub enum Action {
    /// The location flow moved to a new state
    LocationChanged(LocationState),
    /// The query text changed
    QueryChanged(String),
    /// The query is too short, or no location is known: clear results
    SearchCleared,
    /// A search request was sent
    SearchStarted,
    /// A search request finished
    SearchCompleted(Result<Vec<Place>, String>),
    /// An estimate request was sent for a result
    EstimateStarted(PlaceId),
    /// An estimate request finished
    EstimateCompleted {
        /// Result the estimate belongs to
        place: PlaceId,
        /// The estimate
        estimate: RouteEstimate,
    },
    /// A route preview was opened
    PreviewOpened(RoutePreview),
    /// The preview's route computation finished
    PreviewRouteCompleted {
        /// Destination the estimate belongs to
        place: PlaceId,
        /// The estimate
        estimate: RouteEstimate,
    },
    /// The preview was dismissed
    PreviewClosed,
}

/// Apply an action to the state
///
/// Search completions are applied in arrival order; a slow response to an
/// older query can replace newer results.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::LocationChanged(location) => state.location = location,
        Action::QueryChanged(query) => state.query = query,
        Action::SearchCleared => {
            state.search = SearchState::Idle;
            state.estimates.clear();
        },
        Action::SearchStarted => state.search = SearchState::Loading,
        Action::SearchCompleted(result) => {
            state.estimates.clear();
            state.search = match result {
                Ok(places) => SearchState::Loaded(places),
                Err(message) => SearchState::Failed(message),
            };
        },
        Action::EstimateStarted(place) => {
            if state.place(&place).is_some() {
                state.estimates.insert(place, RouteEstimate::Pending);
            }
        },
        Action::EstimateCompleted { place, estimate } => {
            if state.place(&place).is_some() {
                state.estimates.insert(place, estimate);
            }
        },
        Action::PreviewOpened(preview) => state.preview = Some(preview),
        Action::PreviewRouteCompleted { place, estimate } => {
            if let Some(preview) = state
                .preview
                .as_mut()
                .filter(|p| p.destination.id == place)
            {
                preview.estimate = estimate;
            }
        },
        Action::PreviewClosed => state.preview = None,
    }
}

/// Owner of the application state
#[derive(Debug, Clone)]
pub struct Store {
    state: Arc<watch::Sender<AppState>>,
}

impl Store {
    /// Create a store holding the default state
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store holding `state`
    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            state: Arc::new(tx),
        }
    }

    /// Apply an action and notify subscribers
    pub fn dispatch(&self, action: Action) {
        debug!(?action, "Dispatching action");
        self.state.send_modify(|state| reduce(state, action));
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Receive a notification after every dispatch
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
