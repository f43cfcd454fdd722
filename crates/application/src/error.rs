//! Application-level errors

use std::time::Duration;

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error (network failure, malformed response, ...)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// An upstream call did not complete within the configured bound
    #[error("{operation} timed out after {}s", .after.as_secs())]
    Timeout {
        /// What was being waited for
        operation: String,
        /// The bound that was exceeded
        after: Duration,
    },

    /// The routing provider returned no route between the two points
    #[error("No route found")]
    NoRouteFound,

    /// No device location is available yet
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// Referenced place is not part of the current results
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a timeout error for an operation
    pub fn timeout(operation: impl Into<String>, after: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            after,
        }
    }

    /// Check if this error is transient
    ///
    /// Nothing in the workflow retries; the classification is exposed so a
    /// front end can offer a manual retry.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_) | Self::Timeout { .. })
    }
}
