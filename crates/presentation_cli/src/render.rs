//! Plain-text rendering of workflow state

use application::{AppState, RoutePreview};
use domain::{Coordinate, RouteSummary};

/// One line for the location status, with the fix when known
pub fn location_line(state: &AppState) -> String {
    match state.location.coordinate() {
        Some(coordinate) => format!("📍 {} ({coordinate})", state.location.status()),
        None => format!("📍 {}", state.location.status()),
    }
}

/// Numbered result list with per-result estimates
pub fn results(state: &AppState) -> String {
    let places = state.search.places();
    if places.is_empty() {
        return match state.search.error() {
            Some(error) => format!("No places found ({error})"),
            None => "No places found".to_string(),
        };
    }

    let mut out = String::new();
    for (i, place) in places.iter().enumerate() {
        let estimate = state.estimate_for(&place.id);
        out.push_str(&format!(
            "{:>2}. {}\n    {}\n    🚗 {}  ⏱️  {}\n",
            i + 1,
            place.name,
            place.address,
            estimate.distance_text(),
            estimate.eta_text(),
        ));
    }
    out
}

/// Route preview summary
pub fn preview(preview: &RoutePreview) -> String {
    format!(
        "🗺️  {}\n    {}\n    from {}\n    to   {}\n    view {} (span {:.4}° × {:.4}°)\n    🚗 {}  ⏱️  {}\n",
        preview.destination.name,
        preview.destination.address,
        preview.origin,
        preview.destination.coordinate,
        preview.region.center,
        preview.region.latitude_delta,
        preview.region.longitude_delta,
        preview.estimate.distance_text(),
        preview.estimate.eta_text(),
    )
}

/// Direct route summary
pub fn route(destination: &Coordinate, summary: &RouteSummary) -> String {
    format!(
        "🚗 to {destination}: {}  ⏱️  {}",
        summary.format_distance(),
        summary.format_eta()
    )
}
