//! External collaborator interfaces.
//!
//! The planning pipeline talks to two outside services:
//!
//! - a [`Generator`] producing free-text plans and refinements, and
//! - a [`Notifier`] reserving time blocks in a calendar-like system.
//!
//! Both are object-safe async traits so the [`crate::Planner`] can hold them
//! as `Arc<dyn ...>` handles injected at construction.

pub mod chat;
pub mod notifier;
pub mod prompts;

use async_trait::async_trait;
use jiff::Timestamp;

use crate::error::Result;

pub use chat::ChatGenerator;
pub use notifier::CalendarLog;

/// Produces unstructured planning text for a goal.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Asks for a list of subtasks achieving the goal.
    async fn generate_plan(&self, goal_title: &str, goal_description: &str) -> Result<String>;

    /// Asks for a refined version of `raw_text` (estimates, ordering).
    async fn generate_refinement(
        &self,
        goal_title: &str,
        goal_description: &str,
        raw_text: &str,
    ) -> Result<String>;
}

/// Reserves time blocks in an external calendar.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn reserve_block(&self, description: &str, start: Timestamp, end: Timestamp) -> Result<()>;
}

/// Generator returning fixed text, for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticGenerator {
    plan: String,
    refinement: String,
}

impl StaticGenerator {
    pub fn new(plan: impl Into<String>) -> Self {
        Self {
            plan: plan.into(),
            refinement: String::new(),
        }
    }

    pub fn with_refinement(mut self, refinement: impl Into<String>) -> Self {
        self.refinement = refinement.into();
        self
    }
}

#[async_trait]
impl Generator for StaticGenerator {
    async fn generate_plan(&self, _goal_title: &str, _goal_description: &str) -> Result<String> {
        Ok(self.plan.clone())
    }

    async fn generate_refinement(
        &self,
        _goal_title: &str,
        _goal_description: &str,
        _raw_text: &str,
    ) -> Result<String> {
        Ok(self.refinement.clone())
    }
}
