//! Domain layer for RouteNavigator
//!
//! Contains the places, coordinates and route summaries the rest of the
//! workspace talks about. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
