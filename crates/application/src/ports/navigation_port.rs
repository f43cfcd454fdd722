//! Navigation handoff port
//!
//! Hands turn-by-turn navigation off to the system maps application.

#[cfg(test)]
use mockall::automock;

use domain::Coordinate;

use crate::error::ApplicationError;

/// Port for opening driving directions in an external maps application
#[cfg_attr(test, automock)]
pub trait NavigationPort: Send + Sync {
    /// Open driving directions from `origin` to `destination`
    ///
    /// Fire-and-forget: success only means the launch was requested.
    fn open_directions(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        label: &str,
    ) -> Result<(), ApplicationError>;
}
