//! Core library for the Cadence goal planner.
//!
//! Cadence turns a free-text goal into an ordered list of subtasks, packs
//! them into back-to-back time blocks, then persists the schedule and
//! reserves calendar blocks for it concurrently.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): [`Goal`], [`SubTask`] and [`Schedule`]
//! - **Parsing** ([`parser`]): numbered plan lines to subtasks
//! - **Scheduling** ([`scheduler`]): sequential time blocks from a start time
//! - **Collaborators** ([`collaborators`]): the text [`Generator`] and the
//!   calendar [`Notifier`] seams
//! - **Persistence** ([`store`]): atomic JSON records
//! - **Orchestration** ([`planner`]): the [`Planner`] tying it together
//! - **Display** ([`display`]): markdown and plain-text rendering
//!
//! [`Generator`]: collaborators::Generator
//! [`Notifier`]: collaborators::Notifier
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::{models::Goal, ScheduleBuilder, SubtaskParser};
//!
//! # fn example() -> cadence_core::Result<()> {
//! let goal = Goal::new("Launch blog", "")?;
//! let subtasks = SubtaskParser::new().parse("1. Pick a theme\nnotes\n2. Write a post", &goal);
//! assert_eq!(subtasks.len(), 2);
//!
//! let planned = cadence_core::Schedule::new(goal, subtasks);
//! let start: jiff::Timestamp = "2024-01-01T09:00:00Z".parse().unwrap();
//! let timed = ScheduleBuilder::new().build(&planned, start)?;
//! assert!(timed.is_time_blocked());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod collaborators;
pub mod display;
pub mod error;
pub mod models;
pub mod parser;
pub mod planner;
pub mod scheduler;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use display::{LoadedRecord, OperationStatus, ScheduleText};
pub use error::{CadenceError, Result};
pub use models::{Goal, Schedule, SubTask};
pub use parser::{parse_subtasks, SubtaskParser};
pub use planner::{DispatchReport, Planner, PlannerBuilder, RunOutcome};
pub use scheduler::{ScheduleBuilder, DEFAULT_DURATION_MINUTES};
pub use settings::Settings;
pub use store::SavedRecord;
