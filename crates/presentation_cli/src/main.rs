//! RouteNavigator CLI
//!
//! Finds places near the device location, estimates driving distance and
//! time to each, previews a route, and hands navigation off to a maps app.

#![allow(clippy::print_stdout)]

mod render;

use std::path::PathBuf;

use anyhow::{Context, bail};
use application::Navigator;
use clap::{Parser, Subcommand};
use domain::{Coordinate, Place};
use infrastructure::{AppConfig, build_context, init_logging};
use integration_directions::MapsApp;
use tracing::debug;

/// RouteNavigator CLI
#[derive(Parser)]
#[command(name = "routenav")]
#[command(author, version, about = "Find nearby places and plan driving routes", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml)
    #[arg(short, long, env = "ROUTENAV_CONFIG")]
    config: Option<PathBuf>,

    /// Print state as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the device location and its place name
    Locate {
        /// Request a fresh fix after the first one
        #[arg(long)]
        refresh: bool,
    },

    /// Search for places near the device location
    ///
    /// Example: routenav search "coffee"
    Search {
        /// Free-text query (at least two characters)
        query: String,

        /// Skip distance/time estimates
        #[arg(long)]
        no_estimates: bool,
    },

    /// Driving distance and time from the device location to a coordinate
    ///
    /// Example: routenav route 19.0544,72.8347
    Route {
        /// Destination as "lat,lng"
        #[arg(value_parser = parse_coordinate, allow_hyphen_values = true)]
        destination: Coordinate,
    },

    /// Preview the route to a search result
    ///
    /// Example: routenav preview "coffee" --pick 2
    Preview {
        /// Free-text query
        query: String,

        /// 1-based index of the result to preview
        #[arg(short, long, default_value = "1")]
        pick: usize,
    },

    /// Open driving directions to a search result in a maps app
    ///
    /// Example: routenav navigate "coffee" --app google
    Navigate {
        /// Free-text query
        query: String,

        /// 1-based index of the result to navigate to
        #[arg(short, long, default_value = "1")]
        pick: usize,

        /// Maps app to open (apple or google)
        #[arg(long)]
        app: Option<MapsApp>,

        /// Only print the directions link
        #[arg(long)]
        no_launch: bool,
    },
}

/// Parse a "lat,lng" pair into a validated coordinate
fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lng\", got \"{value}\""))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude \"{}\"", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude \"{}\"", lng.trim()))?;
    Coordinate::new(lat, lng).map_err(|e| e.to_string())
}

/// Load configuration and apply command-line overrides
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("failed to load configuration")?;

    apply_overrides(&cli.command, &mut config);
    Ok(config)
}

fn apply_overrides(command: &Commands, config: &mut AppConfig) {
    if let Commands::Navigate { app, no_launch, .. } = command {
        if let Some(app) = app {
            config.navigation.app = *app;
        }
        if *no_launch {
            config.navigation.launch = false;
        }
    }
}

/// Print a value as pretty JSON
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run the location flow and fail if no fix is available
async fn require_location(navigator: &Navigator) -> anyhow::Result<()> {
    let state = navigator.start_location().await;
    if state.location.coordinate().is_none() {
        bail!("{}", state.location.status());
    }
    Ok(())
}

/// Search and pick the `pick`-th result (1-based)
async fn pick_result(navigator: &Navigator, query: &str, pick: usize) -> anyhow::Result<Place> {
    require_location(navigator).await?;
    let state = navigator.search(query).await;
    let places = state.search.places();

    if places.is_empty() {
        bail!("{}", render::results(&state));
    }
    pick.checked_sub(1)
        .and_then(|i| places.get(i))
        .cloned()
        .with_context(|| format!("--pick must be between 1 and {}", places.len()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(&config.logging, cli.verbose)
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;
    debug!(?config, "Configuration loaded");

    let context = build_context(&config)?;
    let navigator = &context.navigator;

    match cli.command {
        Commands::Locate { refresh } => {
            let mut state = navigator.start_location().await;
            if refresh && state.location.coordinate().is_some() {
                state = navigator.refresh_location().await;
            }

            if cli.json {
                print_json(&state.location)?;
            } else {
                println!("{}", render::location_line(&state));
            }
        },

        Commands::Search {
            query,
            no_estimates,
        } => {
            require_location(navigator).await?;
            let mut state = navigator.search(&query).await;
            if !no_estimates {
                state = navigator.estimate_routes().await;
            }

            if cli.json {
                print_json(&state)?;
            } else {
                println!("{}", render::location_line(&state));
                println!();
                println!("{}", render::results(&state).trim_end());
            }
        },

        Commands::Route { destination } => {
            require_location(navigator).await?;
            let summary = navigator.route_to(&destination).await?;

            if cli.json {
                print_json(&summary)?;
            } else {
                println!("{}", render::route(&destination, &summary));
            }
        },

        Commands::Preview { query, pick } => {
            let place = pick_result(navigator, &query, pick).await?;
            let preview = navigator.open_preview(&place.id).await?;

            if cli.json {
                print_json(&preview)?;
            } else {
                println!("{}", render::preview(&preview).trim_end());
            }
        },

        Commands::Navigate { query, pick, .. } => {
            let place = pick_result(navigator, &query, pick).await?;
            let origin = navigator
                .state()
                .location
                .coordinate()
                .context("location lost")?;
            let url = context
                .navigation
                .directions_url(&origin, &place.coordinate, &place.name)?;

            navigator.start_navigation(&place.id)?;

            if cli.json {
                print_json(&serde_json::json!({
                    "destination": place,
                    "app": context.navigation.app(),
                    "url": url.as_str(),
                    "launched": config.navigation.launch,
                }))?;
            } else {
                println!("🧭 {} via {}", place.name, context.navigation.app());
                println!("{url}");
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coordinate_accepts_pair() {
        let c = parse_coordinate("19.0544, 72.8347").unwrap();
        assert!((c.latitude() - 19.0544).abs() < f64::EPSILON);
        assert!((c.longitude() - 72.8347).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_coordinate_accepts_negative() {
        let c = parse_coordinate("-33.86,151.21").unwrap();
        assert!(c.latitude() < 0.0);
    }

    #[test]
    fn parse_coordinate_rejects_garbage() {
        assert!(parse_coordinate("19.05").is_err());
        assert!(parse_coordinate("north,east").is_err());
        assert!(parse_coordinate("95,0").is_err());
    }

    #[test]
    fn navigate_overrides_apply() {
        let cli = Cli::try_parse_from([
            "routenav",
            "navigate",
            "coffee",
            "--app",
            "google",
            "--no-launch",
        ])
        .unwrap();
        let mut config = AppConfig::default();
        apply_overrides(&cli.command, &mut config);
        assert_eq!(config.navigation.app, MapsApp::Google);
        assert!(!config.navigation.launch);
    }

    #[test]
    fn other_commands_keep_config() {
        let cli = Cli::try_parse_from(["routenav", "search", "coffee"]).unwrap();
        let mut config = AppConfig::default();
        apply_overrides(&cli.command, &mut config);
        assert_eq!(config.navigation.app, MapsApp::Apple);
        assert!(config.navigation.launch);
    }
}
