//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the places and directions
//! integrations, loads layered configuration, and sets up logging.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::{AppContext, build_context};
pub use config::{
    AppConfig, DirectionsAppConfig, GOOGLE_MAPS_API_KEY_ENV, LocationAppConfig,
    LoggingAppConfig, NavigationAppConfig, PlacesAppConfig, WorkflowAppConfig,
};
pub use telemetry::{init_logging, resolve_filter};
