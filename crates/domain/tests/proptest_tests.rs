//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{Coordinate, MIN_REGION_SPAN_DEGREES, MapRegion, RouteSummary, resolve_address};
use proptest::prelude::*;

// ============================================================================
// Coordinate Property Tests
// ============================================================================

mod coordinate_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_accepted(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let c = Coordinate::new(lat, lon);
            prop_assert!(c.is_ok());
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0f64,
            lon1 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64
        ) {
            let a = Coordinate::new(lat1, lon1).unwrap();
            let b = Coordinate::new(lat2, lon2).unwrap();
            prop_assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 0.001);
        }
    }
}

// ============================================================================
// MapRegion Property Tests
// ============================================================================

mod map_region_tests {
    use super::*;

    proptest! {
        #[test]
        fn span_never_below_floor(
            lat1 in -90.0f64..=90.0f64,
            lon1 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64
        ) {
            let a = Coordinate::new(lat1, lon1).unwrap();
            let b = Coordinate::new(lat2, lon2).unwrap();
            let region = MapRegion::enclosing(&a, &b);
            prop_assert!(region.latitude_delta >= MIN_REGION_SPAN_DEGREES);
            prop_assert!(region.longitude_delta >= MIN_REGION_SPAN_DEGREES);
        }

        #[test]
        fn identical_endpoints_use_floor(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let a = Coordinate::new(lat, lon).unwrap();
            let region = MapRegion::enclosing(&a, &a);
            prop_assert!((region.latitude_delta - MIN_REGION_SPAN_DEGREES).abs() < f64::EPSILON);
            prop_assert!((region.longitude_delta - MIN_REGION_SPAN_DEGREES).abs() < f64::EPSILON);
        }

        #[test]
        fn region_contains_both_endpoints(
            lat1 in -80.0f64..=80.0f64,
            lon1 in -170.0f64..=170.0f64,
            lat2 in -80.0f64..=80.0f64,
            lon2 in -170.0f64..=170.0f64
        ) {
            let a = Coordinate::new(lat1, lon1).unwrap();
            let b = Coordinate::new(lat2, lon2).unwrap();
            let region = MapRegion::enclosing(&a, &b);
            prop_assert!(region.contains(&a));
            prop_assert!(region.contains(&b));
        }
    }
}

// ============================================================================
// RouteSummary / address Property Tests
// ============================================================================

mod formatting_tests {
    use super::*;

    proptest! {
        #[test]
        fn distance_always_has_one_decimal(meters in 0.0f64..5_000_000.0f64) {
            let text = RouteSummary::new(meters, 0.0).format_distance();
            prop_assert!(text.ends_with(" km"));
            let number = text.trim_end_matches(" km");
            let decimals = number.split('.').nth(1).map(str::len);
            prop_assert_eq!(decimals, Some(1));
        }

        #[test]
        fn eta_has_no_decimals(seconds in 0.0f64..1_000_000.0f64) {
            let text = RouteSummary::new(0.0, seconds).format_eta();
            prop_assert!(text.ends_with(" min"));
            prop_assert!(!text.contains('.'));
        }

        #[test]
        fn formatted_address_always_wins(
            formatted in "[a-zA-Z0-9 ,]{0,20}[a-zA-Z0-9]",
            vicinity in proptest::option::of("[a-z]{1,10}")
        ) {
            let address = resolve_address(Some(&formatted), vicinity.as_deref());
            prop_assert_eq!(address, formatted);
        }
    }
}
