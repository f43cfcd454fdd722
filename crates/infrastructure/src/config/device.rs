//! Device, handoff, workflow and logging configuration

use std::time::Duration;

use application::{AuthorizationStatus, LocationTimeouts};
use domain::{Coordinate, DomainError};
use integration_directions::MapsApp;
use serde::{Deserialize, Serialize};

/// Simulated device location
///
/// Stands in for the platform location service: the initial authorization,
/// how the permission prompt is answered, and the fix it reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAppConfig {
    /// Authorization before any prompt
    #[serde(default)]
    pub authorization: AuthorizationStatus,

    /// Answer given when the permission prompt is shown
    #[serde(default = "default_prompt_response")]
    pub prompt_response: AuthorizationStatus,

    /// Latitude of the reported fix
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude of the reported fix
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Simulated time to first fix in milliseconds
    #[serde(default)]
    pub fix_delay_ms: u64,
}

const fn default_prompt_response() -> AuthorizationStatus {
    AuthorizationStatus::Authorized
}

impl Default for LocationAppConfig {
    fn default() -> Self {
        Self {
            authorization: AuthorizationStatus::default(),
            prompt_response: default_prompt_response(),
            latitude: None,
            longitude: None,
            fix_delay_ms: 0,
        }
    }
}

impl LocationAppConfig {
    /// The configured fix, if both coordinates are set
    ///
    /// # Errors
    ///
    /// Returns an error if only one coordinate is set or they are out of
    /// range.
    pub fn coordinate(&self) -> Result<Option<Coordinate>, DomainError> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon).map(Some),
            (None, None) => Ok(None),
            _ => Err(DomainError::ValidationError(
                "location.latitude and location.longitude must be set together".to_string(),
            )),
        }
    }

    /// Time to first fix
    #[must_use]
    pub const fn fix_delay(&self) -> Duration {
        Duration::from_millis(self.fix_delay_ms)
    }
}

/// External navigation handoff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationAppConfig {
    /// Maps app to open
    #[serde(default)]
    pub app: MapsApp,

    /// Launch the app; when false the directions URL is only reported
    #[serde(default = "default_true")]
    pub launch: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for NavigationAppConfig {
    fn default() -> Self {
        Self {
            app: MapsApp::default(),
            launch: true,
        }
    }
}

/// Bounds on every asynchronous step of the workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowAppConfig {
    /// Places search timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub search_timeout_secs: u64,

    /// Directions timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub route_timeout_secs: u64,

    /// Permission prompt timeout in seconds
    #[serde(default = "default_permission_timeout")]
    pub permission_timeout_secs: u64,

    /// Location fix timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub fix_timeout_secs: u64,

    /// Reverse geocoding timeout in seconds
    #[serde(default = "default_geocode_timeout")]
    pub geocode_timeout_secs: u64,
}

const fn default_request_timeout() -> u64 {
    15
}

const fn default_permission_timeout() -> u64 {
    60
}

const fn default_geocode_timeout() -> u64 {
    10
}

impl Default for WorkflowAppConfig {
    fn default() -> Self {
        Self {
            search_timeout_secs: default_request_timeout(),
            route_timeout_secs: default_request_timeout(),
            permission_timeout_secs: default_permission_timeout(),
            fix_timeout_secs: default_request_timeout(),
            geocode_timeout_secs: default_geocode_timeout(),
        }
    }
}

impl WorkflowAppConfig {
    /// Search timeout
    #[must_use]
    pub const fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    /// Route timeout
    #[must_use]
    pub const fn route_timeout(&self) -> Duration {
        Duration::from_secs(self.route_timeout_secs)
    }

    /// Timeouts for the location flow
    #[must_use]
    pub const fn location_timeouts(&self) -> LocationTimeouts {
        LocationTimeouts {
            permission: Duration::from_secs(self.permission_timeout_secs),
            fix: Duration::from_secs(self.fix_timeout_secs),
            geocode: Duration::from_secs(self.geocode_timeout_secs),
        }
    }

    pub(crate) fn zero_timeouts(&self) -> Vec<&'static str> {
        [
            ("workflow.search_timeout_secs", self.search_timeout_secs),
            ("workflow.route_timeout_secs", self.route_timeout_secs),
            ("workflow.permission_timeout_secs", self.permission_timeout_secs),
            ("workflow.fix_timeout_secs", self.fix_timeout_secs),
            ("workflow.geocode_timeout_secs", self.geocode_timeout_secs),
        ]
        .into_iter()
        .filter(|(_, secs)| *secs == 0)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingAppConfig {
    /// Filter directive (e.g. "warn", "routenav=debug,integration_places=trace")
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingAppConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}
