//! Logging initialisation
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either
//! human-readable or JSON output.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingAppConfig;

/// Pick the filter directive to use
///
/// `RUST_LOG` wins over everything, then a non-zero verbosity count, then
/// the configured filter.
#[must_use]
pub fn resolve_filter(config: &LoggingAppConfig, verbose: u8) -> String {
    if let Ok(env) = std::env::var(EnvFilter::DEFAULT_ENV) {
        if !env.trim().is_empty() {
            return env;
        }
    }
    match verbose {
        0 => config.filter.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(
    config: &LoggingAppConfig,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(resolve_filter(config, verbose))?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}
