//! Place entity - a single search result

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{Coordinate, PlaceId};

/// Address shown when the upstream result carries neither address field
pub const NO_ADDRESS: &str = "No address";

/// A place returned by a nearby search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Locally generated identifier, not stable across searches
    pub id: PlaceId,
    /// Display name
    pub name: String,
    /// Display address
    pub address: String,
    /// Location of the place
    pub coordinate: Coordinate,
}

impl Place {
    /// Create a new place with a fresh id
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPlace` if the name is blank.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        coordinate: Coordinate,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidPlace("name is empty".to_string()));
        }
        Ok(Self {
            id: PlaceId::new(),
            name,
            address: address.into(),
            coordinate,
        })
    }
}

/// Pick the display address for a result
///
/// Prefers the formatted address, then the vicinity, then [`NO_ADDRESS`].
/// Blank strings count as missing.
#[must_use]
pub fn resolve_address(formatted_address: Option<&str>, vicinity: Option<&str>) -> String {
    formatted_address
        .filter(|s| !s.trim().is_empty())
        .or_else(|| vicinity.filter(|s| !s.trim().is_empty()))
        .unwrap_or(NO_ADDRESS)
        .to_string()
}
