// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Missing-value sentinels.
//!
//! The statistical runtimes that use POSIXct reserve one NaN payload as
//! their "not available" marker for doubles and `i32::MIN` for integers.
//! [`Datetime`](crate::Datetime) canonicalises every non-finite input to
//! [`NA_REAL`] and reports [`NA_INTEGER`] from its native-style accessors.

/// The reserved NaN used as the missing double (payload `1954`).
pub const NA_REAL: f64 = f64::from_bits(0x7FF0_0000_0000_07A2);

/// The reserved missing integer.
pub const NA_INTEGER: i32 = i32::MIN;

/// `true` for any NaN, including [`NA_REAL`].
///
/// Hosts treat a plain NaN as missing too, so the payload is not inspected.
#[inline]
pub fn is_na(value: f64) -> bool {
    value.is_nan()
}

/// `true` only for the exact [`NA_REAL`] bit pattern.
#[inline]
pub fn is_na_real(value: f64) -> bool {
    value.to_bits() == NA_REAL.to_bits()
}
