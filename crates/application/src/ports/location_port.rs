//! Device location port
//!
//! Abstracts the platform location service: authorization state, the
//! permission request, and single location fixes.

use std::fmt;

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Location authorization as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    /// The user has not been asked yet
    #[default]
    NotDetermined,
    /// Access restricted by policy
    Restricted,
    /// The user declined access
    Denied,
    /// Access granted
    Authorized,
}

impl AuthorizationStatus {
    /// Whether fixes may be requested
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDetermined => write!(f, "not_determined"),
            Self::Restricted => write!(f, "restricted"),
            Self::Denied => write!(f, "denied"),
            Self::Authorized => write!(f, "authorized"),
        }
    }
}

/// Port for the device location service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationSourcePort: Send + Sync {
    /// Current authorization state
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Ask the user for permission and report the resulting state
    async fn request_authorization(&self) -> AuthorizationStatus;

    /// Start delivering fixes and wait for the next one
    async fn next_fix(&self) -> Result<Coordinate, ApplicationError>;

    /// Stop delivering fixes
    fn stop_updates(&self);
}
