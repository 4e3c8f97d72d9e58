//! Display wrappers for operation outcomes.

use std::fmt;

use super::{datetime::LocalDateTime, status::OperationStatus};
use crate::{planner::DispatchReport, store::SavedRecord};

impl fmt::Display for DispatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let save_status = match &self.saved {
            Ok(saved_at) => OperationStatus::success(format!(
                "Schedule saved to {} at {}",
                self.path.display(),
                LocalDateTime(saved_at)
            )),
            Err(e) => OperationStatus::failure(format!(
                "Schedule was not saved to {}: {e}",
                self.path.display()
            )),
        };
        write!(f, "{save_status}")?;

        if self.notification_failures.is_empty() {
            write!(
                f,
                "{}",
                OperationStatus::success(format!("Reserved {} calendar blocks", self.notified))
            )?;
        } else {
            write!(
                f,
                "{}",
                OperationStatus::failure(format!(
                    "Reserved {} of {} calendar blocks",
                    self.notified,
                    self.notified + self.notification_failures.len()
                ))
            )?;
            for failure in &self.notification_failures {
                writeln!(f, "- {}: {}", failure.subtask_id, failure.error)?;
            }
        }

        if self.skipped > 0 {
            writeln!(f, "- {} subtasks had no time block", self.skipped)?;
        }

        Ok(())
    }
}

/// Wrapper for displaying a loaded record with its save time.
pub struct LoadedRecord<'a>(pub &'a SavedRecord);

impl fmt::Display for LoadedRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.schedule)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "Saved: {}", LocalDateTime(&self.0.saved_at))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use jiff::Timestamp;

    use super::*;
    use crate::{
        error::CadenceError,
        models::{Goal, Schedule},
        planner::NotificationFailure,
    };

    #[test]
    fn test_clean_report() {
        let report = DispatchReport {
            path: PathBuf::from("out/schedule.json"),
            saved: Ok(Timestamp::UNIX_EPOCH),
            notified: 3,
            skipped: 0,
            notification_failures: vec![],
        };
        let output = report.to_string();

        assert!(output.contains("Success: Schedule saved to out/schedule.json"));
        assert!(output.contains("Success: Reserved 3 calendar blocks"));
    }

    #[test]
    fn test_report_with_failures() {
        let report = DispatchReport {
            path: PathBuf::from("schedule.json"),
            saved: Err(CadenceError::configuration("disk full")),
            notified: 1,
            skipped: 2,
            notification_failures: vec![NotificationFailure {
                subtask_id: "task-2".to_string(),
                error: CadenceError::notification("rejected"),
            }],
        };
        let output = report.to_string();

        assert!(output.contains("Error: Schedule was not saved to schedule.json"));
        assert!(output.contains("Error: Reserved 1 of 2 calendar blocks"));
        assert!(output.contains("- task-2: Notification failed: rejected"));
        assert!(output.contains("- 2 subtasks had no time block"));
    }

    #[test]
    fn test_loaded_record_display() {
        let record = SavedRecord {
            version: 1,
            saved_at: Timestamp::UNIX_EPOCH,
            schedule: Schedule::empty(Goal::new("Saved goal", "").unwrap()),
        };
        let output = LoadedRecord(&record).to_string();

        assert!(output.contains("# Saved goal"));
        assert!(output.contains("Saved: "));
    }
}
