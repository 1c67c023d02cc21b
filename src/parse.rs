// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! strftime-style pattern handling.
//!
//! Directive support is chrono's.  The POSIXct-specific `%OS` / `%OSn`
//! directives (seconds with an optional fraction) are rewritten into
//! chrono's vocabulary before parsing or formatting.

use crate::error::DatetimeError;
use chrono::format::{parse as parse_items, ParseResult, Parsed, StrftimeItems};
use chrono::NaiveDateTime;

/// Pattern used when none is given: date, time and optional fractional seconds.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%OS";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Mode {
    Parse,
    Format,
}

/// Rewrite `%OS` and `%OSn` into chrono directives.
///
/// When parsing, every variant accepts an optional fraction of any length.
/// When formatting, `%OS` prints whole seconds and `%OSn` prints the
/// fraction with the nearest chrono precision of at least `n` digits.
fn translate(pattern: &str, mode: Mode) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('O') => {
                chars.next();
                if chars.peek() == Some(&'S') {
                    chars.next();
                    let digits = chars.peek().and_then(|d| d.to_digit(10));
                    if digits.is_some() {
                        chars.next();
                    }
                    out.push_str(match (mode, digits) {
                        (Mode::Parse, _) => "%S%.f",
                        (Mode::Format, None | Some(0)) => "%S",
                        (Mode::Format, Some(1..=3)) => "%S%.3f",
                        (Mode::Format, Some(4..=6)) => "%S%.6f",
                        (Mode::Format, Some(_)) => "%S%.9f",
                    });
                } else {
                    out.push_str("%O");
                }
            }
            Some(next) => {
                chars.next();
                out.push('%');
                out.push(next);
            }
            None => out.push('%'),
        }
    }
    out
}

/// Rewrite a pattern for chrono's formatter.
pub(crate) fn format_pattern(pattern: &str) -> String {
    translate(pattern, Mode::Format)
}

/// Parse into a naive date-time, defaulting absent time fields to zero.
///
/// A missing hour, minute or second becomes `0` only when that field was
/// not parsed at all; fields that were parsed are always kept.
fn parse_naive(input: &str, pattern: &str) -> ParseResult<NaiveDateTime> {
    let mut parsed = Parsed::new();
    parse_items(&mut parsed, input, StrftimeItems::new(pattern))?;
    if parsed.timestamp().is_none() {
        if parsed.hour_div_12().is_none() && parsed.hour_mod_12().is_none() {
            parsed.set_hour(0)?;
        }
        if parsed.minute().is_none() {
            parsed.set_minute(0)?;
        }
        if parsed.second().is_none() {
            parsed.set_second(0)?;
        }
    }
    parsed.to_naive_datetime_with_offset(0)
}

/// Parse `input` against `format` and return fractional seconds since the epoch (UTC).
///
/// Time fields absent from the pattern default to zero, so a date-only
/// pattern yields midnight and `"%Y-%m-%d %H"` yields the whole hour.
pub fn parse_seconds(input: &str, format: &str) -> Result<f64, DatetimeError> {
    let pattern = translate(format, Mode::Parse);
    let parsed = parse_naive(input, &pattern);

    match parsed {
        Ok(dt) => {
            let utc = dt.and_utc();
            Ok(utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1e9)
        }
        Err(source) => {
            tracing::debug!(%input, %format, reason = %source, "rejected datetime string");
            Err(DatetimeError::Parse {
                input: input.to_owned(),
                format: format.to_owned(),
                source,
            })
        }
    }
}
