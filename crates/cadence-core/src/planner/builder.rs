//! Builder for creating and configuring Planner instances.

use std::{num::NonZeroU32, sync::Arc};

use super::{merge::PassThrough, Planner, RefinementMerger};
use crate::{
    collaborators::{CalendarLog, Generator, Notifier},
    error::{CadenceError, Result},
    parser::{LineClassifier, SubtaskParser},
    scheduler::ScheduleBuilder,
};

/// Builder for creating and configuring Planner instances.
pub struct PlannerBuilder {
    generator: Option<Arc<dyn Generator>>,
    notifier: Option<Arc<dyn Notifier>>,
    merger: Box<dyn RefinementMerger>,
    parser: SubtaskParser,
    scheduler: ScheduleBuilder,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            generator: None,
            notifier: None,
            merger: Box::new(PassThrough),
            parser: SubtaskParser::new(),
            scheduler: ScheduleBuilder::new(),
        }
    }

    /// Sets the generation collaborator shared by planning and refinement.
    pub fn with_generator(mut self, generator: Arc<dyn Generator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Sets the notification collaborator.
    ///
    /// Defaults to [`CalendarLog`] when not specified.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Replaces the pass-through refinement merger.
    pub fn with_merger(mut self, merger: impl RefinementMerger + 'static) -> Self {
        self.merger = Box::new(merger);
        self
    }

    /// Replaces the numbered-item line classifier used by the parser.
    pub fn with_classifier(mut self, classifier: impl LineClassifier + 'static) -> Self {
        self.parser = SubtaskParser::with_classifier(classifier);
        self
    }

    /// Sets the duration given to subtasks without an estimate.
    pub fn with_default_duration(mut self, minutes: NonZeroU32) -> Self {
        self.scheduler = self.scheduler.with_default_duration(minutes);
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Configuration` if no generator was provided.
    pub fn build(self) -> Result<Planner> {
        let generator = self
            .generator
            .ok_or_else(|| CadenceError::configuration("A generator is required to build a planner"))?;
        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(CalendarLog::default()));

        Ok(Planner {
            generator,
            notifier,
            merger: self.merger,
            parser: self.parser,
            scheduler: self.scheduler,
        })
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
