//! Concurrent persistence and notification for the Planner.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use jiff::Timestamp;
use log::{info, warn};

use super::Planner;
use crate::{
    error::{CadenceError, Result},
    models::{Goal, Schedule},
    store,
};

/// A reservation the notifier could not make.
#[derive(Debug)]
pub struct NotificationFailure {
    pub subtask_id: String,
    pub error: CadenceError,
}

/// Outcome of dispatching a schedule to the store and the notifier.
#[derive(Debug)]
pub struct DispatchReport {
    /// Where the record was written
    pub path: PathBuf,

    /// `saved_at` of the written record, or why saving failed
    pub saved: Result<Timestamp>,

    /// Number of successful reservations
    pub notified: usize,

    /// Subtasks without a time block, which were not sent
    pub skipped: usize,

    /// Reservations that failed
    pub notification_failures: Vec<NotificationFailure>,
}

impl DispatchReport {
    /// True when the record was saved and every reservation succeeded.
    pub fn is_clean(&self) -> bool {
        self.saved.is_ok() && self.notification_failures.is_empty() && self.skipped == 0
    }
}

/// Result of a complete planning run.
#[derive(Debug)]
pub struct RunOutcome {
    /// The time-blocked schedule
    pub schedule: Schedule,

    /// What happened when saving and notifying
    pub report: DispatchReport,
}

struct NotifySummary {
    notified: usize,
    skipped: usize,
    failures: Vec<NotificationFailure>,
}

impl Planner {
    /// Saves `schedule` at `path` while reserving a calendar block for each
    /// subtask.
    ///
    /// Both side effects run concurrently and independently: a failed
    /// reservation neither stops other reservations nor the save, and a failed
    /// save does not stop reservations. Everything is collected in the
    /// returned report.
    pub async fn dispatch(&self, path: &Path, schedule: &Schedule) -> DispatchReport {
        let (saved, summary) = tokio::join!(store::save(path, schedule), self.notify(schedule));

        match &saved {
            Ok(_) => info!("Saved schedule to {}", path.display()),
            Err(e) => warn!("Failed to save schedule to {}: {e}", path.display()),
        }

        DispatchReport {
            path: path.to_path_buf(),
            saved,
            notified: summary.notified,
            skipped: summary.skipped,
            notification_failures: summary.failures,
        }
    }

    async fn notify(&self, schedule: &Schedule) -> NotifySummary {
        let notifier = &self.notifier;
        let attempts = schedule.ordered().into_iter().map(|subtask| async move {
            let Some((start, end)) = subtask.time_block() else {
                warn!("Subtask '{}' has no time block, not reserving", subtask.id);
                return None;
            };
            let outcome = notifier
                .reserve_block(&subtask.description, start, end)
                .await
                .map_err(|error| {
                    warn!("Reservation failed for '{}': {error}", subtask.id);
                    NotificationFailure {
                        subtask_id: subtask.id.clone(),
                        error,
                    }
                });
            Some(outcome)
        });

        let mut summary = NotifySummary {
            notified: 0,
            skipped: 0,
            failures: Vec::new(),
        };
        for outcome in join_all(attempts).await {
            match outcome {
                Some(Ok(())) => summary.notified += 1,
                Some(Err(failure)) => summary.failures.push(failure),
                None => summary.skipped += 1,
            }
        }
        summary
    }

    /// Plans, time-blocks and dispatches `goal` in one go.
    ///
    /// # Errors
    ///
    /// Only scheduling arithmetic can fail the run; collaborator and save
    /// failures are reported in [`RunOutcome::report`].
    pub async fn run(&self, goal: &Goal, start: Timestamp, path: &Path) -> Result<RunOutcome> {
        let planned = self.plan(goal).await;
        let schedule = self.schedule(&planned, start)?;
        let report = self.dispatch(path, &schedule).await;
        Ok(RunOutcome { schedule, report })
    }
}
