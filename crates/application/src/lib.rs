//! Application layer - Use cases and orchestration
//!
//! Defines the ports the workflow depends on (places search, routing,
//! reverse geocoding, device location, navigation handoff), the services that
//! drive them with bounded timeouts, and the state container the front end
//! observes.

pub mod error;
pub mod ports;
pub mod services;
pub mod store;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use store::{Action, AppState, RouteEstimate, RoutePreview, SearchState, Store, reduce};
