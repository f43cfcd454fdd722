//! Entities - Search results, route summaries and map regions

mod map_region;
mod place;
mod placemark;
mod route_summary;

pub use map_region::{MIN_REGION_SPAN_DEGREES, MapRegion};
pub use place::{NO_ADDRESS, Place, resolve_address};
pub use placemark::{CURRENT_LOCATION, Placemark};
pub use route_summary::{NO_ESTIMATE, RouteSummary};
