#![forbid(unsafe_code)]
//! Nearby place search for RouteNavigator
//!
//! Provides free-text place search via the
//! [Google Places Text Search](https://developers.google.com/maps/documentation/places/web-service/search-text)
//! API and coordinate-to-name resolution via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Architecture
//!
//! [`PlacesClient`] defines the search interface, implemented by
//! [`GooglePlacesClient`]. [`GeocodingClient`] handles reverse geocoding via
//! [`NominatimGeocodingClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{GooglePlacesClient, PlacesClient, PlacesConfig};
//!
//! let config = PlacesConfig {
//!     api_key: Some("...".to_string()),
//!     ..PlacesConfig::default()
//! };
//! let client = GooglePlacesClient::new(&config)?;
//!
//! // Sends "coffee near me" around Mumbai with a 10 km radius
//! let places = client.text_search("coffee", 19.076, 72.8777).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;
mod urlencoding;

pub use client::{GooglePlacesClient, PlacesClient};
pub use config::PlacesConfig;
pub use error::PlacesError;
pub use geocoding::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
pub use models::{PlaceResult, SearchStatus};
pub use urlencoding::{encode, qualify_query};
