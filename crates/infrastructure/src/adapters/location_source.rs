//! Configured device location
//!
//! A `LocationSourcePort` whose authorization, prompt answer and fix come
//! from configuration instead of platform sensors.

use std::time::Duration;

use application::error::ApplicationError;
use application::ports::{AuthorizationStatus, LocationSourcePort};
use async_trait::async_trait;
use domain::Coordinate;
use parking_lot::Mutex;
use tracing::{debug, instrument};

use crate::config::LocationAppConfig;

/// Location source backed by configuration
#[derive(Debug)]
pub struct ConfiguredLocationSource {
    status: Mutex<AuthorizationStatus>,
    prompt_response: AuthorizationStatus,
    fix: Option<Coordinate>,
    fix_delay: Duration,
    updating: Mutex<bool>,
}

impl ConfiguredLocationSource {
    /// Create a source reporting `fix` (if any) once authorized
    pub fn new(
        authorization: AuthorizationStatus,
        prompt_response: AuthorizationStatus,
        fix: Option<Coordinate>,
    ) -> Self {
        Self {
            status: Mutex::new(authorization),
            prompt_response,
            fix,
            fix_delay: Duration::ZERO,
            updating: Mutex::new(false),
        }
    }

    /// Build from the `location` configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if the configured coordinate is invalid.
    pub fn from_config(config: &LocationAppConfig) -> Result<Self, ApplicationError> {
        let fix = config.coordinate()?;
        Ok(Self::new(config.authorization, config.prompt_response, fix)
            .with_fix_delay(config.fix_delay()))
    }

    /// Delay every fix by `delay`
    #[must_use]
    pub const fn with_fix_delay(mut self, delay: Duration) -> Self {
        self.fix_delay = delay;
        self
    }

    /// Whether updates are currently running
    pub fn is_updating(&self) -> bool {
        *self.updating.lock()
    }
}

#[async_trait]
impl LocationSourcePort for ConfiguredLocationSource {
    fn authorization_status(&self) -> AuthorizationStatus {
        *self.status.lock()
    }

    #[instrument(skip(self))]
    async fn request_authorization(&self) -> AuthorizationStatus {
        let mut status = self.status.lock();
        if *status == AuthorizationStatus::NotDetermined {
            *status = self.prompt_response;
        }
        debug!(status = %*status, "Permission prompt answered");
        *status
    }

    #[instrument(skip(self))]
    async fn next_fix(&self) -> Result<Coordinate, ApplicationError> {
        if !self.authorization_status().is_authorized() {
            return Err(ApplicationError::LocationUnavailable(
                "location access not authorized".to_string(),
            ));
        }

        *self.updating.lock() = true;
        if !self.fix_delay.is_zero() {
            tokio::time::sleep(self.fix_delay).await;
        }

        self.fix.ok_or_else(|| {
            ApplicationError::LocationUnavailable(
                "no device location configured (set location.latitude and location.longitude)"
                    .to_string(),
            )
        })
    }

    fn stop_updates(&self) {
        *self.updating.lock() = false;
    }
}
