//! Data models for goals, subtasks and schedules.
//!
//! This module contains the core domain models of the cadence scheduling
//! pipeline. Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! ## Invariants
//!
//! - A [`Goal`] always has a non-blank title and is immutable once created.
//! - A [`SubTask`] either has both `scheduled_start` and `scheduled_end` with
//!   `end > start`, or neither.
//! - Within a [`Schedule`], subtask ids and orders are unique and, once time
//!   blocks are attached, blocks taken in `order` never overlap.
//!
//! [`Schedule::validate`] checks all of the above.
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{Goal, Schedule, SubTask};
//!
//! let goal = Goal::new("Launch blog", "").unwrap();
//! assert_eq!(goal.description(), "Launch blog");
//!
//! let schedule = Schedule::new(
//!     goal,
//!     vec![
//!         SubTask::new("task-2", "Launch blog", "2. Write content", 2),
//!         SubTask::new("task-1", "Launch blog", "1. Buy domain", 1).with_estimate(15),
//!     ],
//! );
//! assert!(schedule.validate().is_ok());
//! assert_eq!(schedule.ordered()[0].id, "task-1");
//! ```

pub mod goal;
pub mod schedule;
pub mod subtask;


pub use goal::Goal;
pub use schedule::Schedule;
pub use subtask::SubTask;
