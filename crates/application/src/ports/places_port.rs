//! Places search port
//!
//! Free-text search for points of interest around a coordinate.

use async_trait::async_trait;
use domain::{Coordinate, Place};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for nearby place search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlacesSearchPort: Send + Sync {
    /// Search for places matching `query` near `near`
    ///
    /// An upstream "no results" or non-OK status yields `Ok(vec![])`.
    /// Transport failures and malformed responses are errors.
    async fn search_places(
        &self,
        query: &str,
        near: &Coordinate,
    ) -> Result<Vec<Place>, ApplicationError>;
}
