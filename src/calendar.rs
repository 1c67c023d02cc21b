// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC calendar break-down.
//!
//! Converts a whole count of seconds since 1970-01-01T00:00:00Z into the
//! proleptic Gregorian fields and back.  Both directions are pure functions
//! of their arguments: no process timezone, no leap seconds.
//!
//! Day counts use Howard Hinnant's `civil_from_days` / `days_from_civil`
//! algorithms, which shift the year to start on March 1st so that the leap
//! day is always the last day of the shifted year.
//!
//! [`CalendarFields`] keeps the break-down in its raw, `struct tm`-like form
//! (0-based month, weekday and year-day; year as an offset from 1900).  The
//! accessors apply the 1-based and absolute adjustments when read.

/// Seconds in one civil day.
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar.
const DAYS_FROM_CIVIL_ORIGIN: i128 = 719_468;

/// Days in one 400-year Gregorian era.
const DAYS_PER_ERA: i128 = 146_097;

/// Weekday of 1970-01-01 (Thursday), counted from Sunday = 0.
const EPOCH_WEEKDAY: i64 = 4;

/// Reference year for [`CalendarFields::year_offset`].
const YEAR_BASE: i64 = 1900;

/// Broken-down UTC calendar instant at whole-second resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    year_offset: i64,
    month0: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    weekday0: u8,
    year_day0: u16,
}

impl CalendarFields {
    /// Absolute year (e.g. `2009`); may be zero or negative.
    #[inline]
    pub const fn year(&self) -> i64 {
        self.year_offset + YEAR_BASE
    }

    /// Years since 1900.
    #[inline]
    pub const fn year_offset(&self) -> i64 {
        self.year_offset
    }

    /// Month, `1..=12`.
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month0 as u32 + 1
    }

    /// Day of month, `1..=31`.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day as u32
    }

    /// Hour, `0..=23`.
    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour as u32
    }

    /// Minute, `0..=59`.
    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Second, `0..=59`.
    #[inline]
    pub const fn second(&self) -> u32 {
        self.second as u32
    }

    /// Day of week, `1..=7` with Sunday = 1.
    #[inline]
    pub const fn weekday(&self) -> u32 {
        self.weekday0 as u32 + 1
    }

    /// Day of year, `1..=366`.
    #[inline]
    pub const fn year_day(&self) -> u32 {
        self.year_day0 as u32 + 1
    }
}

/// `true` for Gregorian leap years.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`, or `0` for an invalid month.
pub const fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since 1970-01-01 of the given civil date.
fn days_from_civil(year: i64, month: u32, day: u32) -> i128 {
    let y = year as i128 - if month <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let m = month as i128;
    let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + day as i128 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - DAYS_FROM_CIVIL_ORIGIN
}

/// Civil `(year, month, day)` of the given count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days as i128 + DAYS_FROM_CIVIL_ORIGIN;
    let era = if z >= 0 { z } else { z - (DAYS_PER_ERA - 1) } / DAYS_PER_ERA;
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11], March-based
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = if month <= 2 { y + 1 } else { y };
    (year as i64, month, day)
}

/// Break a whole count of seconds since the epoch into UTC calendar fields.
pub fn seconds_to_calendar(whole_seconds: i64) -> CalendarFields {
    let days = whole_seconds.div_euclid(SECONDS_PER_DAY);
    let second_of_day = whole_seconds.rem_euclid(SECONDS_PER_DAY);

    let (year, month, day) = civil_from_days(days);
    let year_day0 = days as i128 - days_from_civil(year, 1, 1);
    let weekday0 = (days as i128 + EPOCH_WEEKDAY as i128).rem_euclid(7);

    CalendarFields {
        year_offset: year - YEAR_BASE,
        month0: (month - 1) as u8,
        day: day as u8,
        hour: (second_of_day / 3_600) as u8,
        minute: (second_of_day % 3_600 / 60) as u8,
        second: (second_of_day % 60) as u8,
        weekday0: weekday0 as u8,
        year_day0: year_day0 as u16,
    }
}

/// Recompose calendar fields into whole seconds since the epoch.
///
/// Exact inverse of [`seconds_to_calendar`]; weekday and year-day are
/// ignored since they are implied by the date.
pub fn calendar_to_seconds(fields: &CalendarFields) -> i64 {
    let days = days_from_civil(fields.year(), fields.month(), fields.day());
    let seconds = days * SECONDS_PER_DAY as i128
        + fields.hour as i128 * 3_600
        + fields.minute as i128 * 60
        + fields.second as i128;
    seconds as i64
}

/// Validate a civil date-time and convert it to whole seconds since the epoch.
///
/// Returns `None` when a field is out of range (including non-existent
/// dates such as February 29th of a common year) or when the instant does
/// not fit in an `i64` count of seconds.
pub fn civil_to_seconds(
    year: i64,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<i64> {
    if !(1..=12).contains(&month)
        || day == 0
        || day > days_in_month(year, month)
        || hour > 23
        || minute > 59
        || second > 59
    {
        return None;
    }
    let seconds = days_from_civil(year, month, day) * SECONDS_PER_DAY as i128
        + hour as i128 * 3_600
        + minute as i128 * 60
        + second as i128;
    i64::try_from(seconds).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Datelike, Timelike};

    fn assert_matches_chrono(secs: i64) {
        let fields = seconds_to_calendar(secs);
        let dt = DateTime::from_timestamp(secs, 0).expect("in chrono range");
        assert_eq!(fields.year(), dt.year() as i64, "year for {secs}");
        assert_eq!(fields.month(), dt.month(), "month for {secs}");
        assert_eq!(fields.day(), dt.day(), "day for {secs}");
        assert_eq!(fields.hour(), dt.hour(), "hour for {secs}");
        assert_eq!(fields.minute(), dt.minute(), "minute for {secs}");
        assert_eq!(fields.second(), dt.second(), "second for {secs}");
        assert_eq!(
            fields.weekday(),
            dt.weekday().num_days_from_sunday() + 1,
            "weekday for {secs}"
        );
        assert_eq!(fields.year_day(), dt.ordinal(), "year-day for {secs}");
    }

    #[test]
    fn epoch_origin_is_thursday_jan_first() {
        let fields = seconds_to_calendar(0);
        assert_eq!(fields.year(), 1970);
        assert_eq!(fields.year_offset(), 70);
        assert_eq!(fields.month(), 1);
        assert_eq!(fields.day(), 1);
        assert_eq!(fields.hour(), 0);
        assert_eq!(fields.minute(), 0);
        assert_eq!(fields.second(), 0);
        assert_eq!(fields.weekday(), 5);
        assert_eq!(fields.year_day(), 1);
    }

    #[test]
    fn one_second_before_epoch() {
        let fields = seconds_to_calendar(-1);
        assert_eq!(fields.year(), 1969);
        assert_eq!(fields.month(), 12);
        assert_eq!(fields.day(), 31);
        assert_eq!(fields.hour(), 23);
        assert_eq!(fields.minute(), 59);
        assert_eq!(fields.second(), 59);
        assert_eq!(fields.weekday(), 4);
        assert_eq!(fields.year_day(), 365);
    }

    #[test]
    fn known_instant_2009() {
        let fields = seconds_to_calendar(1_234_567_890);
        assert_eq!(
            (fields.year(), fields.month(), fields.day()),
            (2009, 2, 13)
        );
        assert_eq!(
            (fields.hour(), fields.minute(), fields.second()),
            (23, 31, 30)
        );
        assert_eq!(fields.weekday(), 6); // Friday
    }

    #[test]
    fn leap_year_last_day_is_366() {
        // 2020-12-31T00:00:00Z
        let fields = seconds_to_calendar(1_609_372_800);
        assert_eq!(fields.year_day(), 366);
        assert_eq!((fields.month(), fields.day()), (12, 31));
    }

    #[test]
    fn agrees_with_chrono_over_wide_range() {
        let samples = [
            0,
            -1,
            59,
            86_399,
            86_400,
            951_782_400,    // 2000-02-29
            951_868_799,    // 2000-02-29T23:59:59
            -2_208_988_800, // 1900-01-01
            -62_135_596_800, // 0001-01-01
            -62_167_219_200, // 0000-01-01
            253_402_300_799, // 9999-12-31T23:59:59
            4_102_444_800,  // 2100-01-01
            -12_219_292_800, // 1582-10-15
        ];
        for secs in samples {
            assert_matches_chrono(secs);
        }
        for secs in (-70_000_000_000_i64..70_000_000_000).step_by(7_777_777_777) {
            assert_matches_chrono(secs);
        }
    }

    #[test]
    fn recompose_is_inverse() {
        for secs in [0, -1, 1_234_567_890, -62_167_219_200, i64::MAX, i64::MIN] {
            assert_eq!(calendar_to_seconds(&seconds_to_calendar(secs)), secs);
        }
    }

    #[test]
    fn civil_to_seconds_validates_fields() {
        assert_eq!(civil_to_seconds(1970, 1, 1, 0, 0, 0), Some(0));
        assert_eq!(
            civil_to_seconds(2020, 2, 29, 12, 0, 0),
            Some(1_582_977_600)
        );
        assert_eq!(civil_to_seconds(2019, 2, 29, 12, 0, 0), None);
        assert_eq!(civil_to_seconds(2019, 13, 1, 0, 0, 0), None);
        assert_eq!(civil_to_seconds(2019, 4, 31, 0, 0, 0), None);
        assert_eq!(civil_to_seconds(2019, 1, 1, 24, 0, 0), None);
        assert_eq!(civil_to_seconds(2019, 1, 1, 0, 60, 0), None);
        assert_eq!(civil_to_seconds(2019, 1, 1, 0, 0, 60), None);
        assert_eq!(civil_to_seconds(i64::MAX, 1, 1, 0, 0, 0), None);
    }

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2019));
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2000, 0), 0);
    }
}
