//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod directions_adapter;
mod geocoding_adapter;
mod location_source;
mod navigation_adapter;
mod places_adapter;

pub use directions_adapter::DirectionsAdapter;
pub use geocoding_adapter::GeocodingAdapter;
pub use location_source::ConfiguredLocationSource;
pub use navigation_adapter::NavigationAdapter;
pub use places_adapter::PlacesAdapter;
