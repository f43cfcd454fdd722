//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod place_id;

pub use coordinate::Coordinate;
pub use place_id::PlaceId;
