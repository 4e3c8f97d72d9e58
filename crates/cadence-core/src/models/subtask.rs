//! SubTask model definition and related functionality.

use std::num::NonZeroU32;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One atomic, ordered step toward a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubTask {
    /// Identifier, unique within its schedule
    pub id: String,

    /// Title of the goal this step belongs to
    pub goal_title: String,

    /// What needs to be done
    pub description: String,

    /// Position in the execution sequence (positive, unique, not necessarily
    /// contiguous)
    pub order: u32,

    /// Expected duration; `None` means the duration is unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_minutes: Option<NonZeroU32>,

    /// Start of the assigned time block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_start: Option<Timestamp>,

    /// End of the assigned time block (exclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_end: Option<Timestamp>,
}

impl SubTask {
    /// Creates an untimed subtask without an estimate.
    pub fn new(
        id: impl Into<String>,
        goal_title: impl Into<String>,
        description: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            goal_title: goal_title.into(),
            description: description.into(),
            order,
            estimate_minutes: None,
            scheduled_start: None,
            scheduled_end: None,
        }
    }

    /// Sets the duration estimate. A zero estimate is treated as unknown.
    pub fn with_estimate(mut self, minutes: u32) -> Self {
        self.estimate_minutes = NonZeroU32::new(minutes);
        self
    }

    /// Returns the `[start, end)` block when the subtask has been scheduled.
    pub fn time_block(&self) -> Option<(Timestamp, Timestamp)> {
        match (self.scheduled_start, self.scheduled_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}
