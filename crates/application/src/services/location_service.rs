//! Location service
//!
//! Drives [`LocationState`] against the device location source and the
//! reverse geocoder. Every platform or provider call is bounded by a timeout
//! whose expiry is fed back into the state machine as a failure event.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use super::location_state::{LocationEffect, LocationEvent, LocationState};
use crate::ports::{LocationSourcePort, ReverseGeocodingPort};

/// Default bound for the permission prompt
pub const DEFAULT_PERMISSION_TIMEOUT: Duration = Duration::from_secs(60);
/// Default bound for a single location fix
pub const DEFAULT_FIX_TIMEOUT: Duration = Duration::from_secs(15);
/// Default bound for reverse geocoding
pub const DEFAULT_GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeouts applied by the location service
#[derive(Debug, Clone, Copy)]
pub struct LocationTimeouts {
    /// How long to wait for the permission prompt to be answered
    pub permission: Duration,
    /// How long to wait for a fix
    pub fix: Duration,
    /// How long to wait for reverse geocoding
    pub geocode: Duration,
}

impl Default for LocationTimeouts {
    fn default() -> Self {
        Self {
            permission: DEFAULT_PERMISSION_TIMEOUT,
            fix: DEFAULT_FIX_TIMEOUT,
            geocode: DEFAULT_GEOCODE_TIMEOUT,
        }
    }
}

/// Runs the authorization → fix → reverse-geocode flow
pub struct LocationService {
    source: Arc<dyn LocationSourcePort>,
    geocoder: Arc<dyn ReverseGeocodingPort>,
    timeouts: LocationTimeouts,
}

impl fmt::Debug for LocationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationService")
            .field("timeouts", &self.timeouts)
            .finish_non_exhaustive()
    }
}

impl LocationService {
    /// Create a new location service with default timeouts
    pub fn new(
        source: Arc<dyn LocationSourcePort>,
        geocoder: Arc<dyn ReverseGeocodingPort>,
    ) -> Self {
        Self {
            source,
            geocoder,
            timeouts: LocationTimeouts::default(),
        }
    }

    /// Override the timeouts
    #[must_use]
    pub const fn with_timeouts(mut self, timeouts: LocationTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Check authorization and, if possible, obtain and name a fix
    ///
    /// `publish` is called after every transition so observers see the
    /// intermediate states.
    pub async fn start<F>(&self, state: LocationState, publish: F) -> LocationState
    where
        F: FnMut(&LocationState) + Send,
    {
        let status = self.source.authorization_status();
        debug!(%status, "Starting location flow");
        self.drive(state, LocationEvent::Started(status), publish)
            .await
    }

    /// Request a fresh fix, keeping the previous one visible meanwhile
    pub async fn refresh<F>(&self, state: LocationState, publish: F) -> LocationState
    where
        F: FnMut(&LocationState) + Send,
    {
        self.drive(state, LocationEvent::RefreshRequested, publish)
            .await
    }

    /// Feed `event` into the machine and run effects until it settles
    #[instrument(skip(self, state, publish))]
    pub async fn drive<F>(
        &self,
        mut state: LocationState,
        event: LocationEvent,
        mut publish: F,
    ) -> LocationState
    where
        F: FnMut(&LocationState) + Send,
    {
        let mut pending = VecDeque::from([event]);

        while let Some(event) = pending.pop_front() {
            debug!(?event, "Location event");
            let effects = state.apply(event);
            publish(&state);

            for effect in effects {
                if let Some(next) = self.run_effect(effect).await {
                    pending.push_back(next);
                }
            }
        }

        debug!(status = %state.status(), "Location flow settled");
        state
    }

    async fn run_effect(&self, effect: LocationEffect) -> Option<LocationEvent> {
        match effect {
            LocationEffect::RequestAuthorization => {
                match timeout(self.timeouts.permission, self.source.request_authorization()).await
                {
                    Ok(status) => Some(LocationEvent::AuthorizationChanged(status)),
                    Err(_) => {
                        warn!(
                            timeout_secs = self.timeouts.permission.as_secs(),
                            "Permission prompt was not answered"
                        );
                        None
                    },
                }
            },
            LocationEffect::StartUpdates => {
                match timeout(self.timeouts.fix, self.source.next_fix()).await {
                    Ok(Ok(coordinate)) => Some(LocationEvent::FixReceived(coordinate)),
                    Ok(Err(e)) => {
                        warn!(error = %e, "Location fix failed");
                        Some(LocationEvent::FixFailed(e.to_string()))
                    },
                    Err(_) => {
                        warn!(
                            timeout_secs = self.timeouts.fix.as_secs(),
                            "Location fix timed out"
                        );
                        Some(LocationEvent::FixFailed(format!(
                            "no fix within {}s",
                            self.timeouts.fix.as_secs()
                        )))
                    },
                }
            },
            LocationEffect::StopUpdates => {
                self.source.stop_updates();
                None
            },
            LocationEffect::ReverseGeocode(coordinate) => {
                match timeout(self.timeouts.geocode, self.geocoder.reverse_geocode(&coordinate))
                    .await
                {
                    Ok(Ok(placemark)) => Some(LocationEvent::Geocoded {
                        coordinate,
                        placemark,
                    }),
                    Ok(Err(e)) => {
                        warn!(error = %e, "Reverse geocoding failed");
                        Some(LocationEvent::GeocodeFailed {
                            coordinate,
                            reason: e.to_string(),
                        })
                    },
                    Err(_) => {
                        warn!(
                            timeout_secs = self.timeouts.geocode.as_secs(),
                            "Reverse geocoding timed out"
                        );
                        Some(LocationEvent::GeocodeFailed {
                            coordinate,
                            reason: "timed out".to_string(),
                        })
                    },
                }
            },
        }
    }
}
