//! Application services - Use case implementations

mod location_service;
mod location_state;
mod navigator;
mod route_service;
mod search_service;

pub use location_service::{
    DEFAULT_FIX_TIMEOUT, DEFAULT_GEOCODE_TIMEOUT, DEFAULT_PERMISSION_TIMEOUT, LocationService,
    LocationTimeouts,
};
pub use location_state::{
    LocationEffect, LocationEvent, LocationState, PlaceName, STATUS_DENIED, STATUS_FAILED,
    STATUS_FETCHING, STATUS_GEOCODE_FAILED, STATUS_UNKNOWN, STATUS_UPDATING,
};
pub use navigator::Navigator;
pub use route_service::{DEFAULT_ROUTE_TIMEOUT, RouteService};
pub use search_service::{DEFAULT_SEARCH_TIMEOUT, MIN_QUERY_CHARS, SearchService, should_search};
