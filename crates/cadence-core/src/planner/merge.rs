//! Refinement override hook.
//!
//! After planning, the generator is asked to refine the plan (estimates,
//! ordering). Its reply has no reliable structure yet, so the default
//! [`PassThrough`] merger ignores it. A structured parser can take over by
//! implementing [`RefinementMerger`] and installing it with
//! [`PlannerBuilder::with_merger`](super::PlannerBuilder::with_merger).

use crate::models::Schedule;

/// Folds refinement text into a freshly parsed schedule.
pub trait RefinementMerger: Send + Sync {
    fn merge(&self, schedule: Schedule, refinement: &str) -> Schedule;
}

/// Keeps the parsed schedule as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl RefinementMerger for PassThrough {
    fn merge(&self, schedule: Schedule, _refinement: &str) -> Schedule {
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, SubTask};

    #[test]
    fn test_pass_through_ignores_refinement() {
        let schedule = Schedule::new(
            Goal::new("Goal", "").unwrap(),
            vec![SubTask::new("task-1", "Goal", "1. Step", 1)],
        );
        let merged = PassThrough.merge(
            schedule.clone(),
            r#"1. Step (15 min) {"subtasks": [{"task": "Step", "estimated_duration": 15}]}"#,
        );
        assert_eq!(merged, schedule);
    }
}
