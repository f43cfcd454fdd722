//! Directions and handoff error types

use thiserror::Error;

/// Errors that can occur while computing a route
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Connection to the directions service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No driving route connects the two points
    #[error("No route found")]
    NoRoute,

    /// The service refused the request
    #[error("Directions request rejected ({status}): {message}")]
    Rejected {
        /// Upstream status string
        status: String,
        /// Upstream error message, if any
        message: String,
    },

    /// API key is missing
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl DirectionsError {
    /// Returns true if this error is transient
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}

/// Errors that can occur while handing off to a maps app
#[derive(Debug, Error)]
pub enum HandoffError {
    /// The directions URL could not be built
    #[error("Invalid directions URL: {0}")]
    InvalidUrl(String),

    /// The opener process could not be started
    #[error("Failed to launch maps app: {0}")]
    LaunchFailed(String),
}
