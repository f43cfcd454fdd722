#![forbid(unsafe_code)]
//! Driving directions for RouteNavigator
//!
//! Computes driving distance and travel time via the
//! [Google Directions](https://developers.google.com/maps/documentation/directions)
//! API and hands turn-by-turn navigation off to an external maps app.
//!
//! # Architecture
//!
//! [`DirectionsClient`] defines the routing interface, implemented by
//! [`GoogleDirectionsClient`]. [`DirectionsLink`] builds the handoff URL for
//! a [`MapsApp`] and [`Launcher`] opens it.

mod client;
mod config;
mod error;
mod handoff;
mod models;

pub use client::{DirectionsClient, GoogleDirectionsClient};
pub use config::DirectionsConfig;
pub use error::{DirectionsError, HandoffError};
pub use handoff::{DirectionsLink, Launcher, MapsApp, SystemLauncher};
pub use models::{DirectionsStatus, DrivingRoute};
