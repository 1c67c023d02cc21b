// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! POSIXct-style datetime value.
//!
//! [`Datetime`] stores a fractional count of seconds since
//! 1970-01-01T00:00:00Z together with its UTC calendar break-down and the
//! sub-second remainder rounded to microseconds.  The derived fields are
//! recomputed by every constructor and every arithmetic operator, so they
//! always describe the stored seconds.
//!
//! Non-finite inputs (NaN, ±∞) produce the *missing* value: the seconds are
//! canonicalised to [`NA_REAL`] and every derived field is absent.  Missing
//! values flow through arithmetic and comparisons with IEEE-754 semantics
//! and are never turned back into a finite instant.

use crate::calendar::{self, CalendarFields};
use crate::error::DatetimeError;
use crate::missing::{is_na, is_na_real, NA_INTEGER, NA_REAL};
use crate::parse::{self, DEFAULT_FORMAT};
use chrono::{DateTime, Utc};
use qtty::Seconds;
use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Microseconds in one second.
const MICROS_PER_SECOND: f64 = 1.0e6;

/// 2^63: whole seconds at or beyond this magnitude do not fit in an `i64`.
const CALENDAR_LIMIT: f64 = 9_223_372_036_854_775_808.0;

// ═══════════════════════════════════════════════════════════════════════════
// Datetime
// ═══════════════════════════════════════════════════════════════════════════

/// A point in time as fractional seconds since the Unix epoch, UTC.
///
/// ```
/// use posixct::Datetime;
///
/// let dt = Datetime::new(1_234_567_890.5);
/// assert_eq!(dt.year(), Some(2009));
/// assert_eq!(dt.month(), Some(2));
/// assert_eq!(dt.day(), Some(13));
/// assert_eq!(dt.microseconds(), Some(500_000));
///
/// let later = dt + 60.0;
/// assert_eq!(later - dt, 60.0);
/// assert_eq!(later.minute(), Some(32));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Datetime {
    seconds: f64,
    calendar: Option<CalendarFields>,
    microseconds: Option<u32>,
}

impl Datetime {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from fractional seconds since the epoch.
    ///
    /// Finite values are stored verbatim; anything else becomes missing.
    /// Finite values whose whole seconds fall outside `[-2^63, 2^63)` keep
    /// their seconds and microseconds but have no calendar break-down.
    pub fn new(seconds: f64) -> Self {
        if !seconds.is_finite() {
            if !is_na_real(seconds) {
                tracing::trace!(value = seconds, "non-finite timestamp stored as NA");
            }
            return Self::na();
        }

        let whole = seconds.floor();
        let calendar = (-CALENDAR_LIMIT..CALENDAR_LIMIT)
            .contains(&whole)
            .then(|| calendar::seconds_to_calendar(whole as i64));
        let microseconds = ((seconds - whole) * MICROS_PER_SECOND).round() as u32;
        Self {
            seconds,
            calendar,
            microseconds: Some(microseconds),
        }
    }

    /// The epoch origin, 1970-01-01T00:00:00Z.
    #[inline]
    pub fn epoch() -> Self {
        Self::new(0.0)
    }

    /// The missing value.
    #[inline]
    pub const fn na() -> Self {
        Self {
            seconds: NA_REAL,
            calendar: None,
            microseconds: None,
        }
    }

    /// Parse `input` with [`DEFAULT_FORMAT`] (`"%Y-%m-%d %H:%M:%OS"`).
    pub fn parse(input: &str) -> Result<Self, DatetimeError> {
        Self::parse_with_format(input, DEFAULT_FORMAT)
    }

    /// Parse `input` with a strftime-style pattern, interpreted as UTC.
    ///
    /// `%OS` and `%OSn` accept seconds with an optional fraction.  A
    /// non-matching string or a non-existent date is an error; no partial
    /// value is ever produced.
    pub fn parse_with_format(input: &str, format: &str) -> Result<Self, DatetimeError> {
        parse::parse_seconds(input, format).map(Self::new)
    }

    /// Build from UTC calendar fields (month and day 1-based).
    #[allow(clippy::too_many_arguments)]
    pub fn from_calendar(
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> Result<Self, DatetimeError> {
        let whole = calendar::civil_to_seconds(year, month, day, hour, minute, second)
            .filter(|_| microsecond < 1_000_000);
        match whole {
            Some(whole) => Ok(Self::new(
                whole as f64 + f64::from(microsecond) / MICROS_PER_SECOND,
            )),
            None => {
                tracing::debug!(
                    year,
                    month,
                    day,
                    hour,
                    minute,
                    second,
                    microsecond,
                    "rejected calendar fields"
                );
                Err(DatetimeError::InvalidCalendar {
                    year,
                    month,
                    day,
                    hour,
                    minute,
                    second,
                    microsecond,
                })
            }
        }
    }

    /// Build from a `chrono::DateTime<Utc>`, keeping its sub-second part.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let nanos = f64::from(datetime.timestamp_subsec_nanos()) / 1e9;
        Self::new(datetime.timestamp() as f64 + nanos)
    }

    /// The current system time.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Fractional seconds since the epoch; [`NA_REAL`] when missing.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.seconds
    }

    /// Seconds since the epoch as a [`Seconds`] quantity.
    #[inline]
    pub fn quantity(&self) -> Seconds {
        Seconds::new(self.seconds)
    }

    /// `true` when this value is missing.
    #[inline]
    pub fn is_missing(&self) -> bool {
        is_na(self.seconds)
    }

    /// The whole-second calendar break-down.
    ///
    /// `None` when missing, or when the whole seconds lie outside the
    /// `i64` range and cannot be broken down.
    #[inline]
    pub const fn calendar(&self) -> Option<CalendarFields> {
        self.calendar
    }

    /// Sub-second remainder rounded to the nearest microsecond, `0..=1_000_000`.
    #[inline]
    pub const fn microseconds(&self) -> Option<u32> {
        self.microseconds
    }

    /// Absolute year.
    #[inline]
    pub fn year(&self) -> Option<i64> {
        self.calendar.map(|c| c.year())
    }

    /// Month, `1..=12`.
    #[inline]
    pub fn month(&self) -> Option<u32> {
        self.calendar.map(|c| c.month())
    }

    /// Day of month, `1..=31`.
    #[inline]
    pub fn day(&self) -> Option<u32> {
        self.calendar.map(|c| c.day())
    }

    #[inline]
    pub fn hour(&self) -> Option<u32> {
        self.calendar.map(|c| c.hour())
    }

    #[inline]
    pub fn minute(&self) -> Option<u32> {
        self.calendar.map(|c| c.minute())
    }

    #[inline]
    pub fn second(&self) -> Option<u32> {
        self.calendar.map(|c| c.second())
    }

    /// Day of week, `1..=7` with Sunday = 1.
    #[inline]
    pub fn weekday(&self) -> Option<u32> {
        self.calendar.map(|c| c.weekday())
    }

    /// Day of year, `1..=366`.
    #[inline]
    pub fn year_day(&self) -> Option<u32> {
        self.calendar.map(|c| c.year_day())
    }

    // ── arithmetic helpers ────────────────────────────────────────────

    /// Elapsed time from `earlier` to `self`.
    #[inline]
    pub fn elapsed_since(&self, earlier: &Self) -> Seconds {
        Seconds::new(*self - *earlier)
    }

    // ── chrono interop ────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>` at microsecond resolution.
    ///
    /// Returns `None` when missing or outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.calendar?;
        let micros = i64::from(self.microseconds?);
        let whole = self.seconds.floor() as i64;
        let total = whole.checked_mul(1_000_000)?.checked_add(micros)?;
        DateTime::from_timestamp_micros(total)
    }

    /// Render with a strftime-style pattern (`%OS`, `%OSn` allowed).
    ///
    /// Returns `None` when missing, outside chrono's range, or when the
    /// pattern contains an unsupported directive.
    pub fn format(&self, pattern: &str) -> Option<String> {
        let utc = self.to_utc()?;
        let pattern = parse::format_pattern(pattern);
        let mut out = String::new();
        write!(out, "{}", utc.format(&pattern)).ok()?;
        Some(out)
    }

    /// Calendar fields and microseconds with a rounded-up microsecond
    /// carried into the next second.
    fn normalized_parts(&self) -> Option<(CalendarFields, u32)> {
        let calendar = self.calendar?;
        match self.microseconds? {
            1_000_000 => {
                let whole = calendar::calendar_to_seconds(&calendar).saturating_add(1);
                Some((calendar::seconds_to_calendar(whole), 0))
            }
            micros => Some((calendar, micros)),
        }
    }
}

// ── Native-style accessors ────────────────────────────────────────────────

/// Generate `i32` accessors that report [`NA_INTEGER`] instead of `None`.
macro_rules! impl_na_accessors {
    ($($(#[$doc:meta])* $name:ident => $field:ident),+ $(,)?) => {
        impl Datetime {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $name(&self) -> i32 {
                    self.$field()
                        .and_then(|v| i32::try_from(v).ok())
                        .unwrap_or(NA_INTEGER)
                }
            )+
        }
    };
}

impl_na_accessors!(
    /// Year, or [`NA_INTEGER`] when missing or outside `i32`.
    year_or_na => year,
    /// Month `1..=12`, or [`NA_INTEGER`].
    month_or_na => month,
    /// Day of month, or [`NA_INTEGER`].
    day_or_na => day,
    /// Hour, or [`NA_INTEGER`].
    hour_or_na => hour,
    /// Minute, or [`NA_INTEGER`].
    minute_or_na => minute,
    /// Second, or [`NA_INTEGER`].
    second_or_na => second,
    /// Weekday `1..=7` (Sunday = 1), or [`NA_INTEGER`].
    weekday_or_na => weekday,
    /// Year-day `1..=366`, or [`NA_INTEGER`].
    year_day_or_na => year_day,
    /// Microseconds, or [`NA_INTEGER`].
    microseconds_or_na => microseconds,
);

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Default for Datetime {
    fn default() -> Self {
        Self::epoch()
    }
}

impl FromStr for Datetime {
    type Err = DatetimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_missing() {
            return f.write_str("NA");
        }
        let Some((c, micros)) = self.normalized_parts() else {
            return write!(f, "{:e} s since 1970-01-01 UTC", self.seconds);
        };
        let year = c.year();
        if (0..=9_999).contains(&year) {
            write!(f, "{year:04}")?;
        } else {
            write!(f, "{year:+05}")?;
        }
        write!(
            f,
            "-{:02}-{:02} {:02}:{:02}:{:02}.{:06} UTC",
            c.month(),
            c.day(),
            c.hour(),
            c.minute(),
            c.second(),
            micros
        )
    }
}

// ── Comparison ────────────────────────────────────────────────────────────

impl PartialEq for Datetime {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.seconds == other.seconds
    }
}

impl PartialOrd for Datetime {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.seconds.partial_cmp(&other.seconds)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Datetime {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        if self.is_missing() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(self.seconds)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Datetime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Option::<f64>::deserialize(deserializer)?;
        Ok(v.map_or_else(Self::na, Self::new))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<f64> for Datetime {
    type Output = Self;
    #[inline]
    fn add(self, offset: f64) -> Self::Output {
        Self::new(self.seconds + offset)
    }
}

impl Add<Seconds> for Datetime {
    type Output = Self;
    #[inline]
    fn add(self, offset: Seconds) -> Self::Output {
        self + offset.value()
    }
}

impl AddAssign<f64> for Datetime {
    #[inline]
    fn add_assign(&mut self, offset: f64) {
        *self = *self + offset;
    }
}

impl AddAssign<Seconds> for Datetime {
    #[inline]
    fn add_assign(&mut self, offset: Seconds) {
        *self = *self + offset;
    }
}

impl Sub<f64> for Datetime {
    type Output = Self;
    #[inline]
    fn sub(self, offset: f64) -> Self::Output {
        Self::new(self.seconds - offset)
    }
}

impl Sub<Seconds> for Datetime {
    type Output = Self;
    #[inline]
    fn sub(self, offset: Seconds) -> Self::Output {
        self - offset.value()
    }
}

impl SubAssign<f64> for Datetime {
    #[inline]
    fn sub_assign(&mut self, offset: f64) {
        *self = *self - offset;
    }
}

impl SubAssign<Seconds> for Datetime {
    #[inline]
    fn sub_assign(&mut self, offset: Seconds) {
        *self = *self - offset;
    }
}

/// Continuous seconds between two instants; non-finite if either is missing.
impl Sub for Datetime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.seconds - rhs.seconds
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
