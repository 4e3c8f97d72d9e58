//! DateTime display utilities.
//!
//! Wrapper types for formatting timestamps in a consistent, human-readable
//! format in a chosen time zone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A `Timestamp` reference formatted in the system time zone.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM:SS TZ`, e.g. `2024-01-01 09:00:00 UTC`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A `Timestamp` reference formatted to the minute in a given time zone.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM`, e.g. `2024-01-01 09:15`.
pub struct MinuteDateTime<'a> {
    pub timestamp: &'a Timestamp,
    pub time_zone: &'a TimeZone,
}

impl<'a> MinuteDateTime<'a> {
    pub fn new(timestamp: &'a Timestamp, time_zone: &'a TimeZone) -> Self {
        Self {
            timestamp,
            time_zone,
        }
    }
}

impl<'a> fmt::Display for MinuteDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.time_zone.clone())
                .strftime("%Y-%m-%d %H:%M")
        )
    }
}
