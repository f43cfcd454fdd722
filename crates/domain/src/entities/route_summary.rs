//! Route summary - distance and travel time between two coordinates

use serde::{Deserialize, Serialize};

/// Placeholder shown while an estimate is not available
pub const NO_ESTIMATE: &str = "--";

/// Distance and expected travel time of a single driving route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Route length in meters
    pub distance_meters: f64,
    /// Expected travel time in seconds
    pub travel_time_seconds: f64,
}

impl RouteSummary {
    /// Create a new summary
    #[must_use]
    pub const fn new(distance_meters: f64, travel_time_seconds: f64) -> Self {
        Self {
            distance_meters,
            travel_time_seconds,
        }
    }

    /// Distance in kilometers
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Travel time in minutes
    #[must_use]
    pub fn eta_minutes(&self) -> f64 {
        self.travel_time_seconds / 60.0
    }

    /// Distance with one decimal, e.g. `12.3 km`
    #[must_use]
    pub fn format_distance(&self) -> String {
        format!("{:.1} km", self.distance_km())
    }

    /// Travel time rounded to whole minutes, e.g. `15 min`
    #[must_use]
    pub fn format_eta(&self) -> String {
        format!("{:.0} min", self.eta_minutes())
    }
}
