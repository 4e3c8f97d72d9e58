//! Sequential time-block assignment.
//!
//! The [`ScheduleBuilder`] packs subtasks back to back in ascending `order`,
//! starting at a given timestamp. Each block lasts the subtask's estimate, or
//! the default duration when the estimate is unknown. There are no gaps and
//! no overlaps, and the same input always produces the same output.

use std::num::NonZeroU32;

use jiff::{Span, Timestamp};
use log::debug;

use crate::{
    error::{CadenceError, Result},
    models::Schedule,
};

/// Duration assumed for subtasks without an estimate.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Attaches consecutive time blocks to the subtasks of a schedule.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleBuilder {
    default_duration: NonZeroU32,
}

impl ScheduleBuilder {
    /// Creates a builder using [`DEFAULT_DURATION_MINUTES`].
    pub fn new() -> Self {
        Self {
            default_duration: NonZeroU32::new(DEFAULT_DURATION_MINUTES)
                .unwrap_or(NonZeroU32::MIN),
        }
    }

    /// Overrides the duration used for subtasks without an estimate.
    pub fn with_default_duration(mut self, minutes: NonZeroU32) -> Self {
        self.default_duration = minutes;
        self
    }

    pub fn default_duration(&self) -> NonZeroU32 {
        self.default_duration
    }

    /// Returns a copy of `schedule` with every subtask time-blocked from
    /// `start`, subtasks stored in ascending `order`.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` if a block would end past the
    /// largest representable timestamp.
    pub fn build(&self, schedule: &Schedule, start: Timestamp) -> Result<Schedule> {
        let mut cursor = start;
        let mut subtasks = Vec::with_capacity(schedule.len());

        for subtask in schedule.ordered() {
            let minutes = subtask.estimate_minutes.unwrap_or(self.default_duration);
            let end = cursor
                .checked_add(Span::new().minutes(i64::from(minutes.get())))
                .map_err(|e| {
                    CadenceError::invalid_input("scheduled_end")
                        .with_reason(format!("Cannot schedule '{}': {e}", subtask.id))
                })?;

            let mut timed = subtask.clone();
            timed.scheduled_start = Some(cursor);
            timed.scheduled_end = Some(end);
            subtasks.push(timed);

            cursor = end;
        }

        debug!(
            "Time-blocked {} subtasks from {} to {}",
            subtasks.len(),
            start,
            cursor
        );
        Ok(Schedule::new(schedule.goal.clone(), subtasks))
    }
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
