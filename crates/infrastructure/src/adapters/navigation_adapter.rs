//! Navigation adapter - Implements NavigationPort with a maps app deep link

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::NavigationPort;
use domain::Coordinate;
use integration_directions::{DirectionsLink, HandoffError, Launcher, MapsApp, SystemLauncher};
use tracing::{info, instrument};
use url::Url;

/// Hands driving directions off to Apple Maps or Google Maps
pub struct NavigationAdapter {
    app: MapsApp,
    launcher: Option<Arc<dyn Launcher>>,
}

impl std::fmt::Debug for NavigationAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationAdapter")
            .field("app", &self.app)
            .field("launch", &self.launcher.is_some())
            .finish()
    }
}

impl NavigationAdapter {
    /// Open links with the platform opener
    #[must_use]
    pub fn new(app: MapsApp) -> Self {
        Self::with_launcher(app, Arc::new(SystemLauncher))
    }

    /// Open links with a custom launcher
    #[must_use]
    pub fn with_launcher(app: MapsApp, launcher: Arc<dyn Launcher>) -> Self {
        Self {
            app,
            launcher: Some(launcher),
        }
    }

    /// Build links without opening them
    #[must_use]
    pub const fn dry_run(app: MapsApp) -> Self {
        Self {
            app,
            launcher: None,
        }
    }

    /// The maps app links are built for
    #[must_use]
    pub const fn app(&self) -> MapsApp {
        self.app
    }

    /// Build the deep link for a driving route
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be assembled.
    pub fn directions_url(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        label: &str,
    ) -> Result<Url, ApplicationError> {
        DirectionsLink::new(self.app, *origin, *destination, label)
            .to_url()
            .map_err(Self::map_error)
    }

    fn map_error(err: HandoffError) -> ApplicationError {
        match err {
            HandoffError::InvalidUrl(e) => ApplicationError::Internal(e),
            HandoffError::LaunchFailed(e) => ApplicationError::ExternalService(e),
        }
    }
}

impl NavigationPort for NavigationAdapter {
    #[instrument(skip(self), fields(app = %self.app, origin = %origin, destination = %destination))]
    fn open_directions(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        label: &str,
    ) -> Result<(), ApplicationError> {
        let url = self.directions_url(origin, destination, label)?;

        match &self.launcher {
            Some(launcher) => {
                launcher.launch(&url).map_err(Self::map_error)?;
                info!(%url, "Opened maps app");
            },
            None => info!(%url, "Launch disabled, directions link not opened"),
        }
        Ok(())
    }
}
