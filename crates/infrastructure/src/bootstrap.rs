//! Wiring of configuration, adapters and services into a [`Navigator`]

use std::sync::Arc;

use application::{
    ApplicationError, LocationService, Navigator, RouteService, SearchService,
};
use tracing::{debug, instrument};

use crate::adapters::{
    ConfiguredLocationSource, DirectionsAdapter, GeocodingAdapter, NavigationAdapter,
    PlacesAdapter,
};
use crate::config::AppConfig;

/// A ready-to-use navigator plus the pieces front ends inspect directly
#[derive(Debug)]
pub struct AppContext {
    /// Workflow controller
    pub navigator: Navigator,
    /// Navigation handoff, for reporting the directions link
    pub navigation: Arc<NavigationAdapter>,
}

/// Build the navigator from configuration
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a client cannot be
/// created.
#[instrument(skip(config))]
pub fn build_context(config: &AppConfig) -> Result<AppContext, ApplicationError> {
    config.validate()?;

    let places = PlacesAdapter::new(&config.places.to_places_config())?;
    let directions = DirectionsAdapter::new(
        &config
            .directions
            .to_directions_config(config.directions_api_key()),
    )?;
    let geocoder = GeocodingAdapter::new(&config.geocoding)?;
    let source = ConfiguredLocationSource::from_config(&config.location)?;

    let navigation = Arc::new(if config.navigation.launch {
        NavigationAdapter::new(config.navigation.app)
    } else {
        NavigationAdapter::dry_run(config.navigation.app)
    });

    let location = LocationService::new(Arc::new(source), Arc::new(geocoder))
        .with_timeouts(config.workflow.location_timeouts());
    let search =
        SearchService::new(Arc::new(places)).with_timeout(config.workflow.search_timeout());
    let routes = RouteService::new(Arc::new(directions), navigation.clone())
        .with_timeout(config.workflow.route_timeout());

    debug!(maps_app = %config.navigation.app, "Navigator ready");

    Ok(AppContext {
        navigator: Navigator::new(location, search, routes),
        navigation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_rejected() {
        let result = build_context(&AppConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn builds_with_key() {
        let mut config = AppConfig::default();
        config.apply_api_key_fallback(Some("test-key".to_string()));
        config.navigation.launch = false;

        let context = build_context(&config).unwrap();
        assert_eq!(context.navigation.app(), config.navigation.app);
        assert!(context.navigator.state().search.places().is_empty());
    }
}
