//! Property-based tests for domain value objects

use domain::value_objects::{DayLabel, ForecastWindow, GeoLocation, UnitSystem};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn query_pair_has_one_comma(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let pair = GeoLocation::new_unchecked(lat, lon).to_query_pair();
            prop_assert_eq!(pair.matches(',').count(), 1);
        }
    }
}

// ============================================================================
// ForecastWindow Property Tests
// ============================================================================

mod forecast_window_tests {
    use super::*;

    proptest! {
        #[test]
        fn days_in_range_always_select_daily(
            days in 1i64..=7,
            hours in proptest::option::of(any::<i64>())
        ) {
            let window = ForecastWindow::select(Some(days), hours);
            prop_assert_eq!(window.mode_tag(), 0);
            prop_assert_eq!(window, ForecastWindow::Daily(u8::try_from(days).unwrap()));
        }

        #[test]
        fn hours_in_range_select_hourly_without_days(hours in 1i64..=48) {
            let window = ForecastWindow::select(None, Some(hours));
            prop_assert_eq!(window, ForecastWindow::Hourly(u8::try_from(hours).unwrap()));
        }

        #[test]
        fn out_of_range_offsets_select_current(
            days in prop_oneof![(i64::MIN..=0), (8i64..=i64::MAX)],
            hours in prop_oneof![(i64::MIN..=0), (49i64..=i64::MAX)]
        ) {
            prop_assert_eq!(ForecastWindow::select(Some(days), Some(hours)), ForecastWindow::Current);
        }

        #[test]
        fn mode_tag_is_at_most_two(
            days in proptest::option::of(any::<i64>()),
            hours in proptest::option::of(any::<i64>())
        ) {
            prop_assert!(ForecastWindow::select(days, hours).mode_tag() <= 2);
        }
    }
}

// ============================================================================
// Misc
// ============================================================================

mod label_tests {
    use super::*;

    proptest! {
        #[test]
        fn count_label_displays_number(days in any::<i64>()) {
            prop_assert_eq!(DayLabel::Count(days).to_string(), days.to_string());
        }

        #[test]
        fn unit_system_roundtrips_metric_flag(metric in any::<bool>()) {
            let units = UnitSystem::from_metric(metric);
            prop_assert_eq!(units == UnitSystem::Metric, metric);
        }
    }
}
