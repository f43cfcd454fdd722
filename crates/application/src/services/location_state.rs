//! Device location state machine
//!
//! Pure transition table for the authorization → fix → reverse-geocode flow.
//! [`LocationState::apply`] never performs I/O; it returns the effects the
//! driver ([`super::LocationService`]) has to run, whose outcomes come back
//! in as further [`LocationEvent`]s.

use domain::{Coordinate, Placemark};
use serde::{Deserialize, Serialize};

use crate::ports::AuthorizationStatus;

/// Status shown while the first fix is pending
pub const STATUS_FETCHING: &str = "Fetching location...";
/// Status shown while a refresh is pending
pub const STATUS_UPDATING: &str = "Updating location...";
/// Status shown when access was denied or restricted
pub const STATUS_DENIED: &str = "Location access denied";
/// Status shown when the fix could not be obtained
pub const STATUS_FAILED: &str = "Unable to get location";
/// Status shown when reverse geocoding failed
pub const STATUS_GEOCODE_FAILED: &str = "Location unavailable";
/// Status shown when the geocoder knows no placemark for the fix
pub const STATUS_UNKNOWN: &str = "Unknown location";

/// Human-readable name of a resolved fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum PlaceName {
    /// Reverse geocoding still running
    Pending,
    /// Resolved name
    Named(String),
    /// Geocoder returned no placemark
    Unknown,
    /// Geocoding failed
    Unavailable,
}

/// Where the location flow currently is
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LocationState {
    /// Nothing has happened yet
    #[default]
    Unrequested,
    /// Waiting for the user to answer the permission prompt
    AwaitingPermission,
    /// Access denied or restricted
    Denied,
    /// Waiting for a fix
    Fetching {
        /// Whether this fetch was triggered by an explicit refresh
        refreshing: bool,
        /// Fix from an earlier round, still usable while refreshing
        last_fix: Option<Coordinate>,
    },
    /// A fix is available
    Resolved {
        /// The fix
        coordinate: Coordinate,
        /// Reverse-geocoded name of the fix
        place_name: PlaceName,
        /// Whether the fix came from a refresh
        refreshed: bool,
    },
    /// The fix could not be obtained
    Failed {
        /// Why the attempt failed
        reason: String,
        /// Fix from an earlier round, if any
        last_fix: Option<Coordinate>,
    },
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    /// The consumer started the flow; carries the current authorization
    Started(AuthorizationStatus),
    /// Authorization changed (e.g. the permission prompt was answered)
    AuthorizationChanged(AuthorizationStatus),
    /// A fix arrived
    FixReceived(Coordinate),
    /// The fix attempt failed or timed out
    FixFailed(String),
    /// Reverse geocoding finished for `coordinate`
    Geocoded {
        /// The fix that was geocoded
        coordinate: Coordinate,
        /// Resulting placemark, if the provider knows one
        placemark: Option<Placemark>,
    },
    /// Reverse geocoding failed or timed out for `coordinate`
    GeocodeFailed {
        /// The fix that was being geocoded
        coordinate: Coordinate,
        /// Failure description
        reason: String,
    },
    /// The consumer asked for a fresh fix
    RefreshRequested,
}

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationEffect {
    /// Show the permission prompt
    RequestAuthorization,
    /// Start location updates and wait for a fix
    StartUpdates,
    /// Stop location updates
    StopUpdates,
    /// Reverse-geocode the given fix
    ReverseGeocode(Coordinate),
}

impl LocationState {
    /// Apply an event, returning the effects to run
    ///
    /// Events that make no sense in the current state leave it unchanged.
    pub fn apply(&mut self, event: LocationEvent) -> Vec<LocationEffect> {
        let (next, effects) = self.transition(event);
        if let Some(next) = next {
            *self = next;
        }
        effects
    }

    fn transition(&self, event: LocationEvent) -> (Option<Self>, Vec<LocationEffect>) {
        match event {
            LocationEvent::Started(status) | LocationEvent::AuthorizationChanged(status) => {
                self.on_authorization(status)
            },
            LocationEvent::FixReceived(coordinate) => match self {
                Self::Fetching { refreshing, .. } => (
                    Some(Self::Resolved {
                        coordinate,
                        place_name: PlaceName::Pending,
                        refreshed: *refreshing,
                    }),
                    vec![
                        LocationEffect::StopUpdates,
                        LocationEffect::ReverseGeocode(coordinate),
                    ],
                ),
                _ => (None, Vec::new()),
            },
            LocationEvent::FixFailed(reason) => match self {
                Self::Fetching { last_fix, .. } => (
                    Some(Self::Failed {
                        reason,
                        last_fix: *last_fix,
                    }),
                    vec![LocationEffect::StopUpdates],
                ),
                _ => (None, Vec::new()),
            },
            LocationEvent::Geocoded {
                coordinate,
                placemark,
            } => {
                let name = placemark.map_or(PlaceName::Unknown, |p| {
                    PlaceName::Named(p.display_name())
                });
                (self.with_place_name(&coordinate, name), Vec::new())
            },
            LocationEvent::GeocodeFailed { coordinate, .. } => (
                self.with_place_name(&coordinate, PlaceName::Unavailable),
                Vec::new(),
            ),
            LocationEvent::RefreshRequested => match self {
                Self::Resolved { .. } | Self::Failed { .. } | Self::Fetching { .. } => (
                    Some(Self::Fetching {
                        refreshing: true,
                        last_fix: self.coordinate(),
                    }),
                    vec![LocationEffect::StartUpdates],
                ),
                _ => (None, Vec::new()),
            },
        }
    }

    fn on_authorization(&self, status: AuthorizationStatus) -> (Option<Self>, Vec<LocationEffect>) {
        match status {
            AuthorizationStatus::NotDetermined => match self {
                Self::Unrequested | Self::Denied => (
                    Some(Self::AwaitingPermission),
                    vec![LocationEffect::RequestAuthorization],
                ),
                _ => (None, Vec::new()),
            },
            AuthorizationStatus::Denied | AuthorizationStatus::Restricted => {
                (Some(Self::Denied), vec![LocationEffect::StopUpdates])
            },
            AuthorizationStatus::Authorized => match self {
                Self::Unrequested | Self::AwaitingPermission | Self::Denied => (
                    Some(Self::Fetching {
                        refreshing: false,
                        last_fix: None,
                    }),
                    vec![LocationEffect::StartUpdates],
                ),
                _ => (None, Vec::new()),
            },
        }
    }

    /// Set the place name if `coordinate` is still the resolved fix
    fn with_place_name(&self, coordinate: &Coordinate, place_name: PlaceName) -> Option<Self> {
        match self {
            Self::Resolved {
                coordinate: current,
                refreshed,
                ..
            } if current == coordinate => Some(Self::Resolved {
                coordinate: *current,
                place_name,
                refreshed: *refreshed,
            }),
            _ => None,
        }
    }

    /// The most recent usable fix, if any
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Resolved { coordinate, .. } => Some(*coordinate),
            Self::Fetching { last_fix, .. } | Self::Failed { last_fix, .. } => *last_fix,
            _ => None,
        }
    }

    /// Whether the flow is waiting on the platform or a provider
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(
            self,
            Self::Unrequested | Self::AwaitingPermission | Self::Fetching { .. }
        )
    }

    /// Human-readable status line
    #[must_use]
    pub fn status(&self) -> String {
        match self {
            Self::Unrequested | Self::AwaitingPermission => STATUS_FETCHING.to_string(),
            Self::Fetching { refreshing, .. } => placeholder(*refreshing).to_string(),
            Self::Denied => STATUS_DENIED.to_string(),
            Self::Failed { .. } => STATUS_FAILED.to_string(),
            Self::Resolved {
                place_name,
                refreshed,
                ..
            } => match place_name {
                PlaceName::Pending => placeholder(*refreshed).to_string(),
                PlaceName::Named(name) => name.clone(),
                PlaceName::Unknown => STATUS_UNKNOWN.to_string(),
                PlaceName::Unavailable => STATUS_GEOCODE_FAILED.to_string(),
            },
        }
    }
}

const fn placeholder(refreshing: bool) -> &'static str {
    if refreshing {
        STATUS_UPDATING
    } else {
        STATUS_FETCHING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mumbai_placemark() -> Placemark {
        Placemark {
            locality: Some("Mumbai".to_string()),
            administrative_area: Some("Maharashtra".to_string()),
            country: Some("India".to_string()),
        }
    }

    fn resolved(coordinate: Coordinate) -> LocationState {
        let mut state = LocationState::default();
        state.apply(LocationEvent::Started(AuthorizationStatus::Authorized));
        state.apply(LocationEvent::FixReceived(coordinate));
        state
    }

    #[test]
    fn initial_status_is_fetching() {
        let state = LocationState::default();
        assert_eq!(state.status(), "Fetching location...");
        assert!(state.coordinate().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn undetermined_requests_permission() {
        let mut state = LocationState::default();
        let effects = state.apply(LocationEvent::Started(AuthorizationStatus::NotDetermined));
        assert_eq!(state, LocationState::AwaitingPermission);
        assert_eq!(effects, vec![LocationEffect::RequestAuthorization]);
    }

    #[test]
    fn denied_sets_error_status() {
        let mut state = LocationState::default();
        state.apply(LocationEvent::Started(AuthorizationStatus::Denied));
        assert_eq!(state, LocationState::Denied);
        assert_eq!(state.status(), "Location access denied");
        assert!(!state.is_loading());
    }

    #[test]
    fn restricted_behaves_like_denied() {
        let mut state = LocationState::AwaitingPermission;
        state.apply(LocationEvent::AuthorizationChanged(
            AuthorizationStatus::Restricted,
        ));
        assert_eq!(state, LocationState::Denied);
    }

    #[test]
    fn authorized_starts_updates() {
        let mut state = LocationState::AwaitingPermission;
        let effects = state.apply(LocationEvent::AuthorizationChanged(
            AuthorizationStatus::Authorized,
        ));
        assert!(matches!(state, LocationState::Fetching { refreshing: false, .. }));
        assert_eq!(effects, vec![LocationEffect::StartUpdates]);
    }

    #[test]
    fn fix_stops_updates_and_geocodes() {
        let mut state = LocationState::Fetching {
            refreshing: false,
            last_fix: None,
        };
        let fix = Coordinate::mumbai();
        let effects = state.apply(LocationEvent::FixReceived(fix));
        assert_eq!(
            effects,
            vec![
                LocationEffect::StopUpdates,
                LocationEffect::ReverseGeocode(fix)
            ]
        );
        assert_eq!(state.coordinate(), Some(fix));
        assert_eq!(state.status(), "Fetching location...");
    }

    #[test]
    fn geocoded_name_joins_parts() {
        let fix = Coordinate::mumbai();
        let mut state = resolved(fix);
        state.apply(LocationEvent::Geocoded {
            coordinate: fix,
            placemark: Some(mumbai_placemark()),
        });
        assert_eq!(state.status(), "Mumbai, Maharashtra, India");
        assert!(!state.is_loading());
    }

    #[test]
    fn empty_placemark_is_current_location() {
        let fix = Coordinate::mumbai();
        let mut state = resolved(fix);
        state.apply(LocationEvent::Geocoded {
            coordinate: fix,
            placemark: Some(Placemark::default()),
        });
        assert_eq!(state.status(), "Current location");
    }

    #[test]
    fn missing_placemark_is_unknown_location() {
        let fix = Coordinate::mumbai();
        let mut state = resolved(fix);
        state.apply(LocationEvent::Geocoded {
            coordinate: fix,
            placemark: None,
        });
        assert_eq!(state.status(), "Unknown location");
    }

    #[test]
    fn geocode_failure_keeps_coordinate() {
        let fix = Coordinate::mumbai();
        let mut state = resolved(fix);
        state.apply(LocationEvent::GeocodeFailed {
            coordinate: fix,
            reason: "boom".to_string(),
        });
        assert_eq!(state.status(), "Location unavailable");
        assert_eq!(state.coordinate(), Some(fix));
    }

    #[test]
    fn stale_geocode_result_is_ignored() {
        let fix = Coordinate::mumbai();
        let mut state = resolved(fix);
        state.apply(LocationEvent::Geocoded {
            coordinate: Coordinate::berlin(),
            placemark: Some(mumbai_placemark()),
        });
        assert_eq!(state.status(), "Fetching location...");
    }

    #[test]
    fn fix_failure_is_terminal() {
        let mut state = LocationState::Fetching {
            refreshing: false,
            last_fix: None,
        };
        let effects = state.apply(LocationEvent::FixFailed("timeout".to_string()));
        assert_eq!(state.status(), "Unable to get location");
        assert_eq!(effects, vec![LocationEffect::StopUpdates]);
        assert!(state.coordinate().is_none());
    }

    #[test]
    fn refresh_keeps_previous_fix() {
        let fix = Coordinate::mumbai();
        let mut state = resolved(fix);
        let effects = state.apply(LocationEvent::RefreshRequested);
        assert_eq!(effects, vec![LocationEffect::StartUpdates]);
        assert_eq!(state.status(), "Updating location...");
        assert_eq!(state.coordinate(), Some(fix));
    }

    #[test]
    fn refreshed_fix_shows_updating_until_geocoded() {
        let mut state = resolved(Coordinate::mumbai());
        state.apply(LocationEvent::RefreshRequested);
        state.apply(LocationEvent::FixReceived(Coordinate::berlin()));
        assert_eq!(state.status(), "Updating location...");
        assert_eq!(state.coordinate(), Some(Coordinate::berlin()));
    }

    #[test]
    fn refresh_after_failure_retries_fetch() {
        let mut state = LocationState::Failed {
            reason: "x".to_string(),
            last_fix: None,
        };
        let effects = state.apply(LocationEvent::RefreshRequested);
        assert_eq!(effects, vec![LocationEffect::StartUpdates]);
        assert!(state.is_loading());
    }

    #[test]
    fn refresh_ignored_when_denied() {
        let mut state = LocationState::Denied;
        let effects = state.apply(LocationEvent::RefreshRequested);
        assert!(effects.is_empty());
        assert_eq!(state, LocationState::Denied);
    }

    #[test]
    fn fix_outside_fetching_is_ignored() {
        let mut state = LocationState::Denied;
        let effects = state.apply(LocationEvent::FixReceived(Coordinate::berlin()));
        assert!(effects.is_empty());
        assert_eq!(state, LocationState::Denied);
    }

    #[test]
    fn granting_after_denial_starts_updates() {
        let mut state = LocationState::Denied;
        state.apply(LocationEvent::AuthorizationChanged(
            AuthorizationStatus::Authorized,
        ));
        assert!(matches!(state, LocationState::Fetching { .. }));
    }
}
