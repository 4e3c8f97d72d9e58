#![allow(dead_code)]

use cadence_core::{Goal, Schedule, SubTask};
use jiff::Timestamp;
use tempfile::TempDir;

/// Helper function to create a temporary directory and a record path in it
pub fn create_test_environment() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("schedule.json");
    (temp_dir, path)
}

pub fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp")
}

pub fn sample_goal() -> Goal {
    Goal::new("Launch site", "Get the marketing site online").expect("valid goal")
}

/// A three-step schedule with one estimate, not yet time-blocked
pub fn sample_schedule() -> Schedule {
    let goal = sample_goal();
    Schedule::new(
        goal.clone(),
        vec![
            SubTask::new("task-1", goal.title(), "1. Buy domain", 1).with_estimate(15),
            SubTask::new("task-2", goal.title(), "2. Write content", 2),
            SubTask::new("task-3", goal.title(), "3. Publish site", 3),
        ],
    )
}
