//! High-level planning API.
//!
//! The [`Planner`] drives one planning run end to end:
//!
//! ```text
//! ┌─────────────┐   ┌────────────┐   ┌─────────────┐   ┌──────────────────┐
//! │  Generator  │──▶│   Parser   │──▶│  Scheduler  │──▶│ save ∥ notify    │
//! │ (plan text) │   │ (subtasks) │   │ (timeblocks)│   │ (store, Notifier)│
//! └─────────────┘   └────────────┘   └─────────────┘   └──────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Planner`] instances and their collaborators
//! - [`merge`]: The refinement override hook ([`RefinementMerger`])
//! - [`dispatch`]: Concurrent persistence and notification
//!
//! Collaborator failures never abort a run. A failing or silent generator
//! degrades to an empty schedule, failed notifications are collected in the
//! [`DispatchReport`], and the save outcome is reported next to them.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::{path::Path, sync::Arc};
//!
//! use cadence_core::{collaborators::StaticGenerator, models::Goal, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_generator(Arc::new(StaticGenerator::new("1. Buy domain\n2. Publish")))
//!     .build()?;
//!
//! let goal = Goal::new("Launch blog", "")?;
//! let outcome = planner
//!     .run(&goal, jiff::Timestamp::now(), Path::new("schedule.json"))
//!     .await?;
//! assert_eq!(outcome.schedule.len(), 2);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::Timestamp;
use log::{debug, info, warn};

pub mod builder;
pub mod dispatch;
pub mod merge;


pub use builder::PlannerBuilder;
pub use dispatch::{DispatchReport, NotificationFailure, RunOutcome};
pub use merge::{PassThrough, RefinementMerger};

use crate::{
    collaborators::{Generator, Notifier},
    error::Result,
    models::{Goal, Schedule},
    parser::SubtaskParser,
    scheduler::ScheduleBuilder,
};

/// Main planning interface.
pub struct Planner {
    pub(crate) generator: Arc<dyn Generator>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) merger: Box<dyn RefinementMerger>,
    pub(crate) parser: SubtaskParser,
    pub(crate) scheduler: ScheduleBuilder,
}

impl Planner {
    /// Decomposes `goal` into an untimed schedule.
    ///
    /// Never fails: when the generator errors or returns blank text the
    /// result is a schedule with no subtasks.
    pub async fn plan(&self, goal: &Goal) -> Schedule {
        let planning_text = match self
            .generator
            .generate_plan(goal.title(), goal.description())
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Planning failed for '{}': {e}", goal.title());
                String::new()
            }
        };

        if planning_text.trim().is_empty() {
            warn!("No planning text for '{}', returning an empty plan", goal.title());
            return Schedule::empty(goal.clone());
        }

        let subtasks = self.parser.parse(&planning_text, goal);
        info!("Planned {} subtasks for '{}'", subtasks.len(), goal.title());

        let refinement = match self
            .generator
            .generate_refinement(goal.title(), goal.description(), &planning_text)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Refinement failed for '{}': {e}", goal.title());
                String::new()
            }
        };
        debug!("Received {} bytes of refinement text", refinement.len());

        self.merger
            .merge(Schedule::new(goal.clone(), subtasks), &refinement)
    }

    /// Returns `schedule` with sequential time blocks starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` if a block would overflow the
    /// timestamp range.
    pub fn schedule(&self, schedule: &Schedule, start: Timestamp) -> Result<Schedule> {
        self.scheduler.build(schedule, start)
    }
}
