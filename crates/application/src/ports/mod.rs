//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod location_port;
mod navigation_port;
mod places_port;
mod routing_port;

pub use geocoding_port::ReverseGeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockReverseGeocodingPort;
pub use location_port::{AuthorizationStatus, LocationSourcePort};
#[cfg(test)]
pub use location_port::MockLocationSourcePort;
pub use navigation_port::NavigationPort;
#[cfg(test)]
pub use navigation_port::MockNavigationPort;
pub use places_port::PlacesSearchPort;
#[cfg(test)]
pub use places_port::MockPlacesSearchPort;
pub use routing_port::RoutingPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
