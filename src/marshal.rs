// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversion hooks towards a host value-marshalling layer.
//!
//! A host runtime sees a [`Datetime`] as a plain double carrying the
//! `POSIXct` class, so it renders and serialises it with its own
//! seconds-since-epoch convention.  Containers are converted element-wise.

use crate::datetime::Datetime;
use std::collections::BTreeMap;

/// Class vector attached to outbound values.
pub const POSIXCT_CLASS: [&str; 2] = ["POSIXct", "POSIXt"];

/// A native double tagged as a POSIXct instant.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct PosixCt(pub f64);

impl PosixCt {
    /// Class attribute the host should attach.
    #[inline]
    pub const fn class(&self) -> &'static [&'static str] {
        &POSIXCT_CLASS
    }

    /// The raw seconds since the epoch.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Datetime {
    /// Outbound conversion: the seconds value, tagged as POSIXct.
    #[inline]
    pub const fn to_native(&self) -> PosixCt {
        PosixCt(self.value())
    }
}

impl From<Datetime> for f64 {
    #[inline]
    fn from(dt: Datetime) -> Self {
        dt.value()
    }
}

impl From<f64> for Datetime {
    #[inline]
    fn from(seconds: f64) -> Self {
        Self::new(seconds)
    }
}

impl From<Datetime> for PosixCt {
    #[inline]
    fn from(dt: Datetime) -> Self {
        dt.to_native()
    }
}

impl From<PosixCt> for Datetime {
    #[inline]
    fn from(native: PosixCt) -> Self {
        Self::new(native.0)
    }
}

/// Convert a sequence of instants into native doubles.
pub fn wrap_all<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = Datetime>,
{
    values.into_iter().map(f64::from).collect()
}

/// Convert a sequence of native doubles into instants.
pub fn unwrap_all<I>(values: I) -> Vec<Datetime>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().map(Datetime::from).collect()
}

/// Convert a keyed map of instants into native doubles, keys untouched.
pub fn wrap_map<K: Ord>(values: BTreeMap<K, Datetime>) -> BTreeMap<K, f64> {
    values.into_iter().map(|(k, v)| (k, f64::from(v))).collect()
}

/// Convert a keyed map of native doubles into instants, keys untouched.
pub fn unwrap_map<K: Ord>(values: BTreeMap<K, f64>) -> BTreeMap<K, Datetime> {
    values
        .into_iter()
        .map(|(k, v)| (k, Datetime::from(v)))
        .collect()
}
