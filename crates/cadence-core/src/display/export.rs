//! Plain-text schedule export.
//!
//! Produces the human-readable companion file written next to the JSON
//! record:
//!
//! ```text
//! Goal: Launch site
//!
//! 1. 1. Buy domain
//!    - Start: 2024-01-01 09:00
//!    - Estimate: 15 min
//!
//! 2. 2. Write content
//!    - Start: 2024-01-01 09:15
//!    - Estimate: unknown duration
//! ```

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::MinuteDateTime;
use crate::models::Schedule;

/// Literal printed for subtasks without an estimate.
pub const UNKNOWN_DURATION: &str = "unknown duration";

/// Plain-text rendering of a schedule, subtasks in `order`.
pub struct ScheduleText<'a> {
    schedule: &'a Schedule,
    time_zone: TimeZone,
}

impl<'a> ScheduleText<'a> {
    /// Renders times in the system time zone.
    pub fn new(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            time_zone: TimeZone::system(),
        }
    }

    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }
}

impl fmt::Display for ScheduleText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Goal: {}", self.schedule.goal.title())?;
        writeln!(f)?;

        for (position, subtask) in self.schedule.ordered().into_iter().enumerate() {
            writeln!(f, "{}. {}", position + 1, subtask.description)?;
            match &subtask.scheduled_start {
                Some(start) => writeln!(f, "   - Start: {}", MinuteDateTime::new(start, &self.time_zone))?,
                None => writeln!(f, "   - Start: unscheduled")?,
            }
            match subtask.estimate_minutes {
                Some(minutes) => writeln!(f, "   - Estimate: {minutes} min")?,
                None => writeln!(f, "   - Estimate: {UNKNOWN_DURATION}")?,
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
