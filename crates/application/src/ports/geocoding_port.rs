//! Reverse geocoding port

use async_trait::async_trait;
use domain::{Coordinate, Placemark};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving a coordinate to a human-readable placemark
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReverseGeocodingPort: Send + Sync {
    /// Resolve a coordinate; `Ok(None)` when the provider knows no placemark there
    async fn reverse_geocode(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Option<Placemark>, ApplicationError>;
}
