//! Display implementations for domain models.
//!
//! These produce markdown for rich terminal display, separate from the
//! plain-text export in [`super::export`].

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Schedule, SubTask};

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.goal.title())?;
        writeln!(f)?;

        if self.goal.description() != self.goal.title() {
            writeln!(f, "{}", self.goal.description())?;
            writeln!(f)?;
        }

        if self.is_empty() {
            writeln!(f, "No subtasks in this schedule.")?;
            return Ok(());
        }

        writeln!(f, "## Subtasks")?;
        writeln!(f)?;
        for subtask in self.ordered() {
            write!(f, "{subtask}")?;
        }

        Ok(())
    }
}

impl fmt::Display for SubTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.description)?;
        writeln!(f)?;
        writeln!(f, "- Order: {}", self.order)?;
        if let Some((start, end)) = self.time_block() {
            writeln!(f, "- Start: {}", LocalDateTime(&start))?;
            writeln!(f, "- End: {}", LocalDateTime(&end))?;
        }
        match self.estimate_minutes {
            Some(minutes) => writeln!(f, "- Estimate: **{minutes} min**")?,
            None => writeln!(f, "- Estimate: *unknown duration*")?,
        }
        writeln!(f)
    }
}
