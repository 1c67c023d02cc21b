//! Property-based tests for the `Datetime` value contract.

use chrono::{DateTime, Datelike};
use posixct::calendar::civil_to_seconds;
use posixct::{calendar_to_seconds, seconds_to_calendar, Datetime};
use proptest::prelude::*;

/// Finite values roughly spanning years -1200 to 5100.
fn finite_seconds() -> impl Strategy<Value = f64> {
    -1.0e11..1.0e11_f64
}

proptest! {
    #[test]
    fn stores_any_finite_value_verbatim(x in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let dt = Datetime::new(x);
        prop_assert_eq!(dt.value().to_bits(), x.to_bits());
        prop_assert!(!dt.is_missing());
    }

    #[test]
    fn calendar_round_trips_through_epoch_seconds(x in finite_seconds()) {
        let whole = x.floor() as i64;
        let dt = Datetime::new(x);
        let fields = dt.calendar().unwrap();
        prop_assert_eq!(calendar_to_seconds(&fields), whole);
        prop_assert_eq!(
            civil_to_seconds(
                fields.year(),
                fields.month(),
                fields.day(),
                fields.hour(),
                fields.minute(),
                fields.second(),
            ),
            Some(whole)
        );
        prop_assert_eq!(seconds_to_calendar(whole), fields);
    }

    #[test]
    fn calendar_agrees_with_chrono(secs in -1_000_000_000_000_i64..1_000_000_000_000) {
        let fields = seconds_to_calendar(secs);
        let reference = DateTime::from_timestamp(secs, 0).unwrap();
        prop_assert_eq!(fields.year(), i64::from(reference.year()));
        prop_assert_eq!(fields.month(), reference.month());
        prop_assert_eq!(fields.day(), reference.day());
        prop_assert_eq!(fields.weekday(), reference.weekday().num_days_from_sunday() + 1);
        prop_assert_eq!(fields.year_day(), reference.ordinal());
    }

    #[test]
    fn microseconds_are_rounded_remainder(x in finite_seconds()) {
        let expected = ((x - x.floor()) * 1.0e6).round() as u32;
        prop_assert_eq!(Datetime::new(x).microseconds(), Some(expected));
        prop_assert!(expected <= 1_000_000);
    }

    #[test]
    fn addition_matches_float_sum(a in finite_seconds(), b in -1.0e9..1.0e9_f64) {
        let sum = Datetime::new(a) + b;
        prop_assert_eq!(sum.value(), a + b);
        prop_assert_eq!(sum.calendar(), Datetime::new(a + b).calendar());
        prop_assert_eq!(sum.microseconds(), Datetime::new(a + b).microseconds());
    }

    #[test]
    fn difference_matches_float_difference(a in finite_seconds(), b in finite_seconds()) {
        prop_assert_eq!(Datetime::new(a) - Datetime::new(b), a - b);
    }

    #[test]
    fn ordering_matches_float_ordering(a in finite_seconds(), b in finite_seconds()) {
        let (da, db) = (Datetime::new(a), Datetime::new(b));
        prop_assert_eq!(da < db, a < b);
        prop_assert_eq!(da > db, a > b);
        prop_assert_eq!(da == db, a == b);
        prop_assert_eq!(da <= db, a <= b);
        prop_assert_eq!(da >= db, a >= b);
        prop_assert_eq!(da != db, a != b);
    }

    #[test]
    fn formatted_string_parses_back(secs in -62_000_000_000_i64..253_000_000_000) {
        let dt = Datetime::new(secs as f64);
        let text = dt.format("%Y-%m-%d %H:%M:%S").unwrap();
        let back = Datetime::parse(&text).unwrap();
        prop_assert_eq!(back.value(), secs as f64);
    }
}
