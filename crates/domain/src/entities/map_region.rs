//! Map region enclosing a route preview

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// Smallest span on either axis, so nearby points still get a usable zoom
pub const MIN_REGION_SPAN_DEGREES: f64 = 0.02;

/// A map viewport: center plus span in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    /// Center of the viewport
    pub center: Coordinate,
    /// Latitude span in degrees
    pub latitude_delta: f64,
    /// Longitude span in degrees
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Viewport containing both coordinates
    ///
    /// Centered on the midpoint; each span is twice the absolute delta on that
    /// axis, floored at [`MIN_REGION_SPAN_DEGREES`].
    #[must_use]
    pub fn enclosing(origin: &Coordinate, destination: &Coordinate) -> Self {
        let latitude_delta = (origin.latitude() - destination.latitude()).abs() * 2.0;
        let longitude_delta = (origin.longitude() - destination.longitude()).abs() * 2.0;

        Self {
            center: origin.midpoint(destination),
            latitude_delta: latitude_delta.max(MIN_REGION_SPAN_DEGREES),
            longitude_delta: longitude_delta.max(MIN_REGION_SPAN_DEGREES),
        }
    }

    /// Whether a coordinate falls inside the viewport
    #[must_use]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        let half_lat = self.latitude_delta / 2.0;
        let half_lon = self.longitude_delta / 2.0;
        (coordinate.latitude() - self.center.latitude()).abs() <= half_lat
            && (coordinate.longitude() - self.center.longitude()).abs() <= half_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_uses_minimum_span() {
        let o = Coordinate::origin();
        let region = MapRegion::enclosing(&o, &o);
        assert_eq!(region.center, Coordinate::origin());
        assert!((region.latitude_delta - 0.02).abs() < f64::EPSILON);
        assert!((region.longitude_delta - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn span_is_twice_the_delta() {
        let a = Coordinate::new(19.0, 72.8).unwrap();
        let b = Coordinate::new(19.2, 73.0).unwrap();
        let region = MapRegion::enclosing(&a, &b);
        assert!((region.latitude_delta - 0.4).abs() < 1e-9);
        assert!((region.longitude_delta - 0.4).abs() < 1e-9);
        assert!((region.center.latitude() - 19.1).abs() < 1e-9);
        assert!((region.center.longitude() - 72.9).abs() < 1e-9);
    }

    #[test]
    fn small_delta_on_one_axis_is_floored() {
        let a = Coordinate::new(10.0, 20.0).unwrap();
        let b = Coordinate::new(10.001, 21.0).unwrap();
        let region = MapRegion::enclosing(&a, &b);
        assert!((region.latitude_delta - 0.02).abs() < f64::EPSILON);
        assert!((region.longitude_delta - 2.0).abs() < 1e-9);
    }

    #[test]
    fn both_endpoints_inside() {
        let a = Coordinate::new(52.5, 13.3).unwrap();
        let b = Coordinate::new(52.4, 13.5).unwrap();
        let region = MapRegion::enclosing(&a, &b);
        assert!(region.contains(&a));
        assert!(region.contains(&b));
    }
}
