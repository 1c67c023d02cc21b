// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

/// Errors raised while constructing a [`Datetime`](crate::Datetime).
///
/// Non-finite inputs are not errors: they produce the missing value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatetimeError {
    /// The input string does not match the format pattern, or names a
    /// date that does not exist.
    #[error("cannot parse {input:?} with format {format:?}: {source}")]
    Parse {
        input: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Calendar fields out of range, or a non-existent date.
    #[error(
        "invalid calendar instant {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{microsecond:06}"
    )]
    InvalidCalendar {
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    },
}
