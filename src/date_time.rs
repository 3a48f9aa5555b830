// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `DateTime`.

use std::{fmt, sync::LazyLock};

use chrono::{TimeDelta, TimeZone, Utc};

use crate::UaNullable;

/// A date/time value with a UTC timezone.
pub type DateTimeUtc = chrono::DateTime<Utc>;

const TICKS_PER_SECOND: i64 = 10_000_000;
const NANOS_PER_TICK: i64 = 100;

static EPOCH: LazyLock<DateTimeUtc> =
    LazyLock::new(|| Utc.with_ymd_and_hms(1601, 1, 1, 0, 0, 0).unwrap());

/// The earliest instant representable in the ISO 8601 rendering,
/// `0001-01-01T00:00:00Z`. Values below it clamp to it.
static MIN_ISO8601: LazyLock<DateTimeUtc> =
    LazyLock::new(|| Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap());

/// The latest instant representable in the ISO 8601 rendering,
/// `9999-12-31T23:59:59Z`. Values above it clamp to it.
static MAX_ISO8601: LazyLock<DateTimeUtc> =
    LazyLock::new(|| Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap());

/// An OPC UA date/time, stored as the number of 100 nanosecond intervals
/// since 1601-01-01 00:00:00 UTC.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug, Hash, Default)]
pub struct DateTime {
    ticks: i64,
}

// A DateTime of 0 ticks is a valid instant (the 1601 epoch), so there is no
// null skip for date/time fields of structured types.
impl UaNullable for DateTime {}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso8601_string())
    }
}

impl From<DateTimeUtc> for DateTime {
    fn from(value: DateTimeUtc) -> Self {
        let delta = value.signed_duration_since(*EPOCH);
        let ticks = match delta.num_microseconds() {
            Some(us) => us.saturating_mul(10),
            None if delta < TimeDelta::zero() => i64::MIN,
            None => i64::MAX,
        };
        Self { ticks }
    }
}

impl DateTime {
    /// The null date/time, i.e. the 1601 epoch.
    pub fn null() -> DateTime {
        DateTime { ticks: 0 }
    }

    /// Test if this is the null date/time.
    pub fn is_null(&self) -> bool {
        self.ticks == 0
    }

    /// Create a date/time from a raw tick count.
    pub fn from_ticks(ticks: i64) -> DateTime {
        DateTime { ticks }
    }

    /// The tick count, 100 nanosecond intervals since the 1601 epoch.
    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    /// The current time.
    pub fn now() -> DateTime {
        Self::from(Utc::now())
    }

    /// Create a date/time from a year, month and day at midnight.
    pub fn ymd(year: i32, month: u32, day: u32) -> DateTime {
        Self::from(Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap())
    }

    /// The earliest instant of the ISO 8601 range.
    pub fn iso8601_minimum() -> DateTime {
        Self::from(*MIN_ISO8601)
    }

    /// The latest instant of the ISO 8601 range.
    pub fn iso8601_maximum() -> DateTime {
        Self::from(*MAX_ISO8601)
    }

    /// This date/time as a chrono UTC date/time. Instants that chrono cannot
    /// represent saturate at the ISO 8601 range ends.
    pub fn as_chrono(&self) -> DateTimeUtc {
        let secs = self.ticks.div_euclid(TICKS_PER_SECOND);
        let nanos = (self.ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
        match TimeDelta::new(secs, nanos).and_then(|d| EPOCH.checked_add_signed(d)) {
            Some(dt) => dt,
            None if self.ticks < 0 => *MIN_ISO8601,
            None => *MAX_ISO8601,
        }
    }

    /// Render this date/time as ISO 8601 with seconds precision and a
    /// trailing `Z`. Instants outside the range 0001-01-01 to 9999-12-31
    /// clamp to the range ends.
    pub fn to_iso8601_string(&self) -> String {
        let dt = self.as_chrono().clamp(*MIN_ISO8601, *MAX_ISO8601);
        dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}
