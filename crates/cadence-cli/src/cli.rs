//! Command handlers for the `cadence` binary.

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use cadence_core::{
    collaborators::{CalendarLog, ChatGenerator, Generator, StaticGenerator},
    store, Goal, LoadedRecord, OperationStatus, PlannerBuilder, RunOutcome, ScheduleText, Settings,
};
use jiff::Timestamp;
use log::{info, warn};

use crate::{
    args::{PlanArgs, ShowArgs},
    renderer::TerminalRenderer,
};

/// Runs CLI commands with loaded settings and a renderer.
pub struct Cli {
    settings: Settings,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(settings: Settings, renderer: TerminalRenderer) -> Self {
        Self { settings, renderer }
    }

    /// Plans the goal, writes both output files and reports the dispatch.
    ///
    /// Fails after rendering when the JSON schedule could not be saved.
    pub async fn plan(&self, args: PlanArgs) -> Result<()> {
        let title = args.title.context("A goal title is required")?;
        let goal = Goal::new(title, args.description.unwrap_or_default())?;

        let planner = PlannerBuilder::new()
            .with_generator(self.generator(args.plan_file.as_deref()).await?)
            .with_notifier(Arc::new(CalendarLog::new(self.settings.notification_latency())))
            .with_default_duration(self.settings.default_duration()?)
            .build()
            .context("Failed to initialize planner")?;

        let start = args.start.unwrap_or_else(Timestamp::now);
        info!("Planning '{}' starting at {start}", goal.title());

        let RunOutcome { schedule, report } = planner
            .run(&goal, start, &args.output)
            .await
            .context("Failed to plan goal")?;

        tokio::fs::write(&args.pretty_output, ScheduleText::new(&schedule).to_string())
            .await
            .with_context(|| format!("Failed to write {}", args.pretty_output.display()))?;

        self.renderer.render(&schedule.to_string())?;
        self.renderer.render(&report.to_string())?;
        self.renderer.render(
            &OperationStatus::success(format!(
                "Readable schedule written to {}",
                args.pretty_output.display()
            ))
            .to_string(),
        )?;

        if let Err(e) = report.saved {
            return Err(e).with_context(|| format!("Failed to save {}", report.path.display()));
        }
        Ok(())
    }

    /// Renders a saved schedule record.
    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let record = store::load_record(&args.path)
            .await
            .with_context(|| format!("Failed to load schedule from {}", args.path.display()))?;

        self.renderer.render(&LoadedRecord(&record).to_string())
    }

    async fn generator(&self, plan_file: Option<&Path>) -> Result<Arc<dyn Generator>> {
        match plan_file {
            Some(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read plan file {}", path.display()))?;
                if text.trim().is_empty() {
                    warn!("Plan file {} is empty", path.display());
                }
                Ok(Arc::new(StaticGenerator::new(text)))
            }
            None => Ok(Arc::new(
                ChatGenerator::from_settings(&self.settings.generator)
                    .context("Failed to configure the text generator")?,
            )),
        }
    }
}
