//! Directions response models

use serde::{Deserialize, Serialize};

/// Status field of a Directions response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionsStatus {
    /// At least one route returned
    Ok,
    /// Origin, destination or waypoint could not be geocoded
    NotFound,
    /// No route between origin and destination
    ZeroResults,
    /// Quota exhausted
    OverQueryLimit,
    /// Key missing, invalid, or not enabled for the API
    RequestDenied,
    /// Malformed request
    InvalidRequest,
    /// Any other status string
    Other(String),
}

impl DirectionsStatus {
    /// Parse the upstream status string
    #[must_use]
    pub fn parse(status: &str) -> Self {
        match status {
            "OK" => Self::Ok,
            "NOT_FOUND" => Self::NotFound,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this status means "no route" rather than a failed request
    #[must_use]
    pub const fn is_no_route(&self) -> bool {
        matches!(self, Self::NotFound | Self::ZeroResults)
    }
}

impl std::fmt::Display for DirectionsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Ok => "OK",
            Self::NotFound => "NOT_FOUND",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::Other(s) => s,
        })
    }
}

/// Driving distance and time of the first returned route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrivingRoute {
    /// Total distance over all legs in meters
    pub distance_meters: f64,
    /// Total duration over all legs in seconds
    pub duration_seconds: f64,
}

/// Raw API structures
pub(crate) mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct DirectionsResponse {
        pub status: String,
        #[serde(default)]
        pub routes: Vec<Route>,
        pub error_message: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Route {
        #[serde(default)]
        pub legs: Vec<Leg>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Leg {
        pub distance: Option<TextValue>,
        pub duration: Option<TextValue>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TextValue {
        pub value: f64,
    }
}

impl DrivingRoute {
    /// Sum the legs of a route
    ///
    /// `None` when the route has no legs or a leg lacks its distance or
    /// duration value.
    pub(crate) fn from_route(route: &api::Route) -> Option<Self> {
        if route.legs.is_empty() {
            return None;
        }
        route
            .legs
            .iter()
            .try_fold((0.0, 0.0), |(d, t), leg| {
                Some((d + leg.distance.as_ref()?.value, t + leg.duration.as_ref()?.value))
            })
            .map(|(distance_meters, duration_seconds)| Self {
                distance_meters,
                duration_seconds,
            })
    }
}
