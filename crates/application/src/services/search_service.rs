//! Nearby search service
//!
//! Guards against trivial queries and bounds every upstream search so the
//! caller always gets an answer.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::{Coordinate, Place};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::PlacesSearchPort;

/// Minimum trimmed query length (in characters) that triggers a request
pub const MIN_QUERY_CHARS: usize = 2;

/// Default bound for a single search request
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Whether a query is long enough to send upstream
#[must_use]
pub fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

/// Runs place searches around the device location
pub struct SearchService {
    places: Arc<dyn PlacesSearchPort>,
    timeout: Duration,
}

impl fmt::Debug for SearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchService")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl SearchService {
    /// Create a new search service with the default timeout
    pub fn new(places: Arc<dyn PlacesSearchPort>) -> Self {
        Self {
            places,
            timeout: DEFAULT_SEARCH_TIMEOUT,
        }
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Search for `query` near `near`
    ///
    /// Without a location, or with a query shorter than [`MIN_QUERY_CHARS`]
    /// after trimming, returns an empty list without calling upstream.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Timeout` when upstream does not answer in
    /// time, or the port's error for transport and parse failures.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        near: Option<&Coordinate>,
    ) -> Result<Vec<Place>, ApplicationError> {
        let Some(near) = near else {
            debug!("No location yet, skipping search");
            return Ok(Vec::new());
        };

        if !should_search(query) {
            debug!("Query too short, skipping search");
            return Ok(Vec::new());
        }

        match timeout(self.timeout, self.places.search_places(query, near)).await {
            Ok(Ok(places)) => {
                debug!(count = places.len(), "Search finished");
                Ok(places)
            },
            Ok(Err(e)) => {
                warn!(error = %e, "Search failed");
                Err(e)
            },
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Search timed out");
                Err(ApplicationError::timeout("places search", self.timeout))
            },
        }
    }
}
