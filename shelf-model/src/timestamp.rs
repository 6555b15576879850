//! Naive local timestamps at microsecond precision.
//!
//! Entities carry two of these (`created_at`, `updated_at`). The wire
//! representation is an ISO-8601 string; the in-memory value keeps the
//! full `NaiveDateTime` so ordering and arithmetic stay cheap.

use crate::error::ModelError;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A local date-time with microsecond precision.
///
/// `now()` truncates to whole microseconds so a value survives the
/// ISO-8601 round trip bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Current local time, truncated to microsecond precision.
    #[must_use]
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        let truncated = now
            .with_nanosecond(now.nanosecond() / 1_000 * 1_000)
            .unwrap_or(now);
        Self(truncated)
    }

    /// Wraps an existing `NaiveDateTime`.
    #[must_use]
    pub const fn from_naive(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Returns the underlying `NaiveDateTime`.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Parses an ISO-8601 date-time string (e.g. `2024-01-14T17:07:00`
    /// or `2024-01-14T17:07:00.255968`).
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        value
            .parse::<NaiveDateTime>()
            .map(Self)
            .map_err(|_| ModelError::InvalidTimestamp(value.to_string()))
    }

    /// Renders the ISO-8601 form used in records and the storage file.
    ///
    /// The fractional part is emitted with six digits when nonzero and
    /// omitted entirely when zero.
    #[must_use]
    pub fn to_iso(&self) -> String {
        if self.0.nanosecond() == 0 {
            self.0.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            self.0.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
        }
    }
}

impl fmt::Display for Timestamp {
    /// Native (non-ISO) rendering, used by entity display strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Timestamp {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
