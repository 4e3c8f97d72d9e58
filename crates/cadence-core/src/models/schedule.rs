//! Schedule model definition and invariant checks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Goal, SubTask};
use crate::error::{CadenceError, Result};

/// A goal plus its ordered, optionally time-blocked subtasks.
///
/// The `order` field of each subtask defines the execution sequence; the
/// position in `subtasks` carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    /// Goal this schedule decomposes
    pub goal: Goal,

    /// Subtasks in any insertion order
    #[serde(default)]
    pub subtasks: Vec<SubTask>,
}

impl Schedule {
    pub fn new(goal: Goal, subtasks: Vec<SubTask>) -> Self {
        Self { goal, subtasks }
    }

    /// Creates a schedule with no subtasks.
    pub fn empty(goal: Goal) -> Self {
        Self::new(goal, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.subtasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.subtasks.len()
    }

    /// Subtasks sorted by ascending `order`. Ties keep insertion order.
    pub fn ordered(&self) -> Vec<&SubTask> {
        let mut ordered: Vec<&SubTask> = self.subtasks.iter().collect();
        ordered.sort_by_key(|subtask| subtask.order);
        ordered
    }

    /// True when every subtask carries a time block.
    pub fn is_time_blocked(&self) -> bool {
        self.subtasks.iter().all(|subtask| subtask.time_block().is_some())
    }

    /// Checks the structural invariants of the schedule.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` naming the first violated field:
    /// blank goal title, blank or duplicate subtask ids, blank descriptions,
    /// zero or duplicate orders, half-set or inverted time blocks, and time
    /// blocks that overlap or do not strictly advance in `order`.
    pub fn validate(&self) -> Result<()> {
        if self.goal.title().trim().is_empty() {
            return Err(CadenceError::invalid_input("goal.title").with_reason("Goal title cannot be empty"));
        }

        let mut ids = HashSet::new();
        let mut orders = HashSet::new();
        for subtask in &self.subtasks {
            if subtask.id.trim().is_empty() {
                return Err(CadenceError::invalid_input("subtasks.id").with_reason("Subtask id cannot be empty"));
            }
            if !ids.insert(subtask.id.as_str()) {
                return Err(CadenceError::invalid_input("subtasks.id")
                    .with_reason(format!("Duplicate subtask id '{}'", subtask.id)));
            }
            if subtask.description.trim().is_empty() {
                return Err(CadenceError::invalid_input("subtasks.description")
                    .with_reason(format!("Subtask '{}' has an empty description", subtask.id)));
            }
            if subtask.order == 0 {
                return Err(CadenceError::invalid_input("subtasks.order")
                    .with_reason(format!("Subtask '{}' must have a positive order", subtask.id)));
            }
            if !orders.insert(subtask.order) {
                return Err(CadenceError::invalid_input("subtasks.order")
                    .with_reason(format!("Duplicate order {}", subtask.order)));
            }
            match (subtask.scheduled_start, subtask.scheduled_end) {
                (Some(start), Some(end)) if end <= start => {
                    return Err(CadenceError::invalid_input("subtasks.scheduled_end")
                        .with_reason(format!("Subtask '{}' ends before it starts", subtask.id)));
                }
                (Some(_), None) | (None, Some(_)) => {
                    return Err(CadenceError::invalid_input("subtasks.scheduled_start")
                        .with_reason(format!(
                            "Subtask '{}' must set both start and end or neither",
                            subtask.id
                        )));
                }
                _ => {}
            }
        }

        let mut previous: Option<&SubTask> = None;
        for subtask in self.ordered() {
            let Some((start, _)) = subtask.time_block() else {
                continue;
            };
            if let Some((prev_start, prev_end)) = previous.and_then(SubTask::time_block) {
                if start <= prev_start || start < prev_end {
                    return Err(CadenceError::invalid_input("subtasks.scheduled_start")
                        .with_reason(format!("Subtask '{}' overlaps the previous time block", subtask.id)));
                }
            }
            previous = Some(subtask);
        }

        Ok(())
    }
}
