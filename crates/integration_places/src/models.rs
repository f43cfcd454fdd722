//! Text search response models
//!
//! Upstream results are parsed entry by entry: an entry missing its name or a
//! usable location is skipped without failing the whole response.

use domain::resolve_address;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Status field of a Places web service response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// Results returned
    Ok,
    /// Valid request with no matches
    ZeroResults,
    /// Quota exhausted
    OverQueryLimit,
    /// Key missing, invalid, or not enabled for the API
    RequestDenied,
    /// Malformed request
    InvalidRequest,
    /// Server-side failure
    UnknownError,
    /// Any other status string
    Other(String),
}

impl SearchStatus {
    /// Parse the upstream status string
    #[must_use]
    pub fn parse(status: &str) -> Self {
        match status {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "UNKNOWN_ERROR" => Self::UnknownError,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether the response carries results
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(s) => s,
        };
        f.write_str(s)
    }
}

/// A single place returned by text search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Display name
    pub name: String,
    /// Formatted address, vicinity, or "No address"
    pub address: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Raw API structures
pub(crate) mod api {
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Debug, Deserialize)]
    pub struct TextSearchResponse {
        pub status: String,
        #[serde(default)]
        pub results: Vec<Value>,
        pub error_message: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct RawPlace {
        pub name: Option<String>,
        pub formatted_address: Option<String>,
        pub vicinity: Option<String>,
        pub geometry: Option<Geometry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Geometry {
        pub location: Option<LatLng>,
    }

    #[derive(Debug, Deserialize)]
    pub struct LatLng {
        pub lat: Option<f64>,
        pub lng: Option<f64>,
    }
}

impl PlaceResult {
    /// Convert one raw result entry, or `None` if it lacks a name or location
    pub(crate) fn from_entry(entry: Value) -> Option<Self> {
        let raw: api::RawPlace = match serde_json::from_value(entry) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(error = %e, "Skipping unparseable place entry");
                return None;
            },
        };

        let name = raw.name.filter(|n| !n.trim().is_empty())?;
        let location = raw.geometry.and_then(|g| g.location)?;
        let (latitude, longitude) = (location.lat?, location.lng?);

        Some(Self {
            address: resolve_address(raw.formatted_address.as_deref(), raw.vicinity.as_deref()),
            name,
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn status_parsing() {
        assert_eq!(SearchStatus::parse("OK"), SearchStatus::Ok);
        assert_eq!(SearchStatus::parse("ZERO_RESULTS"), SearchStatus::ZeroResults);
        assert_eq!(
            SearchStatus::parse("SOMETHING_NEW"),
            SearchStatus::Other("SOMETHING_NEW".to_string())
        );
        assert!(SearchStatus::parse("OK").is_ok());
        assert!(!SearchStatus::parse("REQUEST_DENIED").is_ok());
        assert_eq!(SearchStatus::RequestDenied.to_string(), "REQUEST_DENIED");
    }

    #[test]
    fn complete_entry() {
        let entry = json!({
            "name": "Blue Tokai",
            "formatted_address": "Bandra West, Mumbai",
            "vicinity": "Bandra",
            "geometry": { "location": { "lat": 19.06, "lng": 72.83 } }
        });
        let place = PlaceResult::from_entry(entry).unwrap();
        assert_eq!(place.name, "Blue Tokai");
        assert_eq!(place.address, "Bandra West, Mumbai");
        assert!((place.latitude - 19.06).abs() < f64::EPSILON);
    }

    #[test]
    fn vicinity_fallback() {
        let entry = json!({
            "name": "Kiosk",
            "vicinity": "Platform 3",
            "geometry": { "location": { "lat": 1.0, "lng": 2.0 } }
        });
        assert_eq!(PlaceResult::from_entry(entry).unwrap().address, "Platform 3");
    }

    #[test]
    fn no_address_placeholder() {
        let entry = json!({
            "name": "Kiosk",
            "geometry": { "location": { "lat": 1.0, "lng": 2.0 } }
        });
        assert_eq!(PlaceResult::from_entry(entry).unwrap().address, "No address");
    }

    #[test]
    fn entries_without_name_or_location_are_skipped() {
        assert!(PlaceResult::from_entry(json!({ "geometry": { "location": { "lat": 1.0, "lng": 2.0 } } })).is_none());
        assert!(PlaceResult::from_entry(json!({ "name": "Nowhere" })).is_none());
        assert!(PlaceResult::from_entry(json!({ "name": "Half", "geometry": { "location": { "lat": 1.0 } } })).is_none());
        assert!(PlaceResult::from_entry(json!({ "name": 42 })).is_none());
        assert!(PlaceResult::from_entry(json!("not an object")).is_none());
    }
}
