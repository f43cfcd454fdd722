//! Navigation handoff
//!
//! Builds driving-directions URLs for external maps apps and opens them with
//! the platform's URL opener.

use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::str::FromStr;
use std::thread::{self, JoinHandle};

use domain::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::HandoffError;

const APPLE_MAPS_URL: &str = "https://maps.apple.com/";
const GOOGLE_MAPS_URL: &str = "https://www.google.com/maps/dir/";

/// External maps application to hand navigation to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapsApp {
    /// Apple Maps
    #[default]
    Apple,
    /// Google Maps
    Google,
}

impl fmt::Display for MapsApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apple => write!(f, "apple"),
            Self::Google => write!(f, "google"),
        }
    }
}

impl FromStr for MapsApp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apple" => Ok(Self::Apple),
            "google" => Ok(Self::Google),
            other => Err(format!("unknown maps app '{other}' (expected apple or google)")),
        }
    }
}

/// Driving-directions request for a maps app
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsLink {
    /// Target app
    pub app: MapsApp,
    /// Start of the route
    pub origin: Coordinate,
    /// End of the route
    pub destination: Coordinate,
    /// Destination name shown by the app
    pub label: String,
}

impl DirectionsLink {
    /// Create a link
    pub fn new(
        app: MapsApp,
        origin: Coordinate,
        destination: Coordinate,
        label: impl Into<String>,
    ) -> Self {
        Self {
            app,
            origin,
            destination,
            label: label.into(),
        }
    }

    /// Build the URL that opens driving directions in the app
    ///
    /// Apple Maps shows `label` at the destination pin. The Google Maps
    /// directions URL has no label parameter for a coordinate destination, so
    /// the destination stays a coordinate there.
    ///
    /// # Errors
    ///
    /// Returns `HandoffError::InvalidUrl` if the URL cannot be assembled.
    pub fn to_url(&self) -> Result<Url, HandoffError> {
        let origin = self.origin.as_query_value();
        let destination = self.destination.as_query_value();

        let result = match self.app {
            MapsApp::Apple => Url::parse_with_params(
                APPLE_MAPS_URL,
                &[
                    ("saddr", origin.as_str()),
                    ("daddr", destination.as_str()),
                    ("dirflg", "d"),
                    ("q", self.label.as_str()),
                ],
            ),
            MapsApp::Google => Url::parse_with_params(
                GOOGLE_MAPS_URL,
                &[
                    ("api", "1"),
                    ("origin", origin.as_str()),
                    ("destination", destination.as_str()),
                    ("travelmode", "driving"),
                ],
            ),
        };

        result.map_err(|e| HandoffError::InvalidUrl(e.to_string()))
    }
}

/// Opens URLs outside the process
pub trait Launcher: Send + Sync {
    /// Open `url`
    ///
    /// # Errors
    ///
    /// Returns an error if the opener could not be started.
    fn launch(&self, url: &Url) -> Result<(), HandoffError>;
}

/// Opens URLs with `open`, `xdg-open` or `cmd /C start` depending on the OS
///
/// The caller does not wait for the opener; a background thread reaps it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl Launcher for SystemLauncher {
    #[instrument(skip(self), fields(url = %url))]
    fn launch(&self, url: &Url) -> Result<(), HandoffError> {
        spawn_detached(Self::command(url.as_str())).map(drop)
    }
}

/// Spawn `cmd` with null stdio and reap it on a background thread
fn spawn_detached(
    mut cmd: Command,
) -> Result<Option<JoinHandle<io::Result<ExitStatus>>>, HandoffError> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| HandoffError::LaunchFailed(e.to_string()))?;

    let pid = child.id();
    debug!(pid, "Maps app opener spawned");

    match thread::Builder::new()
        .name("maps-opener-reaper".to_string())
        .spawn(move || child.wait())
    {
        Ok(handle) => Ok(Some(handle)),
        Err(e) => {
            warn!(pid, error = %e, "Could not start reaper thread");
            Ok(None)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(app: MapsApp) -> DirectionsLink {
        DirectionsLink::new(
            app,
            Coordinate::new(19.076, 72.8777).unwrap(),
            Coordinate::new(19.0544, 72.8347).unwrap(),
            "Blue Tokai & Co",
        )
    }

    #[test]
    fn apple_url() {
        let url = link(MapsApp::Apple).to_url().unwrap();
        assert_eq!(url.host_str(), Some("maps.apple.com"));

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("saddr".to_string(), "19.076,72.8777".to_string()),
                ("daddr".to_string(), "19.0544,72.8347".to_string()),
                ("dirflg".to_string(), "d".to_string()),
                ("q".to_string(), "Blue Tokai & Co".to_string()),
            ]
        );
    }

    #[test]
    fn google_url() {
        let url = link(MapsApp::Google).to_url().unwrap();
        assert_eq!(url.host_str(), Some("www.google.com"));
        assert_eq!(url.path(), "/maps/dir/");

        let query: std::collections::HashMap<String, String> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(query["api"], "1");
        assert_eq!(query["origin"], "19.076,72.8777");
        assert_eq!(query["destination"], "19.0544,72.8347");
        assert_eq!(query["travelmode"], "driving");
    }

    #[test]
    fn label_is_escaped() {
        let url = link(MapsApp::Apple).to_url().unwrap();
        assert!(!url.as_str().contains("Tokai & Co"));
    }

    #[test]
    fn maps_app_parsing() {
        assert_eq!("apple".parse::<MapsApp>().unwrap(), MapsApp::Apple);
        assert_eq!("Google".parse::<MapsApp>().unwrap(), MapsApp::Google);
        assert!("waze".parse::<MapsApp>().is_err());
        assert_eq!(MapsApp::default(), MapsApp::Apple);
        assert_eq!(MapsApp::Google.to_string(), "google");
    }

    #[cfg(unix)]
    #[test]
    fn detached_opener_is_reaped() {
        let handle = spawn_detached(Command::new("true")).unwrap().unwrap();
        let status = handle.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn missing_opener_fails_to_launch() {
        let result = spawn_detached(Command::new("routenav-no-such-opener"));
        assert!(matches!(result, Err(HandoffError::LaunchFailed(_))));
    }
}
