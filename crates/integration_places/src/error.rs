//! Place search error types

use thiserror::Error;

/// Errors that can occur during place search
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Connection to the places service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the places service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Search query is empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// API key is missing
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl PlacesError {
    /// Returns true if this error is transient
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(PlacesError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(PlacesError::RequestFailed("test".to_string()).is_retryable());
        assert!(PlacesError::Timeout { timeout_secs: 10 }.is_retryable());
        assert!(
            PlacesError::RateLimitExceeded {
                retry_after_secs: None
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!PlacesError::ParseError("test".to_string()).is_retryable());
        assert!(!PlacesError::InvalidQuery("test".to_string()).is_retryable());
        assert!(!PlacesError::AuthenticationFailed("test".to_string()).is_retryable());
        assert!(!PlacesError::ConfigurationError("test".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = PlacesError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));

        let err = PlacesError::RateLimitExceeded {
            retry_after_secs: Some(30),
        };
        assert!(err.to_string().contains("30"));
    }
}
