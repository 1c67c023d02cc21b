// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! POSIXct datetime values.
//!
//! This crate provides a single value type, [`Datetime`], representing an
//! instant as fractional seconds since 1970-01-01T00:00:00Z (the POSIXct
//! convention of statistical runtimes), with a cached UTC calendar
//! break-down and microsecond precision.
//!
//! # Core types
//!
//! - [`Datetime`]: seconds since the epoch plus derived calendar fields.
//! - [`CalendarFields`]: whole-second UTC break-down (year … year-day).
//! - [`DatetimeError`]: construction failures (unparseable strings,
//!   invalid calendar fields).
//! - [`PosixCt`]: the outbound native double tagged with its class.
//!
//! # Missing values
//!
//! Any non-finite input produces the missing value.  Its seconds are
//! [`NA_REAL`], its calendar accessors return `None` (or [`NA_INTEGER`]
//! from the `*_or_na` family), and it compares unordered with everything:
//!
//! ```
//! use posixct::Datetime;
//!
//! let na = Datetime::new(f64::NAN);
//! assert!(na.is_missing());
//! assert_eq!(na.year(), None);
//! assert!(na != na);
//! ```
//!
//! # Parsing
//!
//! Strings are parsed with strftime-style patterns, by default
//! [`DEFAULT_FORMAT`] (`"%Y-%m-%d %H:%M:%OS"`):
//!
//! ```
//! use posixct::Datetime;
//!
//! let leap = Datetime::parse("2020-02-29 12:00:00").unwrap();
//! assert_eq!((leap.year(), leap.month(), leap.day()), (Some(2020), Some(2), Some(29)));
//! assert!(Datetime::parse("2019-02-29 12:00:00").is_err());
//! ```

pub mod calendar;
mod datetime;
mod error;
pub mod marshal;
mod missing;
mod parse;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{calendar_to_seconds, seconds_to_calendar, CalendarFields};
pub use datetime::Datetime;
pub use error::DatetimeError;
pub use marshal::{PosixCt, POSIXCT_CLASS};
pub use missing::{is_na, is_na_real, NA_INTEGER, NA_REAL};
pub use parse::{parse_seconds, DEFAULT_FORMAT};
