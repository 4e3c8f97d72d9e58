//! Goal model definition and related functionality.

use serde::{Deserialize, Serialize};

use crate::error::{CadenceError, Result};

/// The high-level objective a schedule is built for.
///
/// Goals are immutable once created: fields are private and only exposed via
/// accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    /// Short title of the goal (never blank)
    title: String,

    /// Longer free-text description; equals the title when none was given
    description: String,
}

impl Goal {
    /// Creates a goal, falling back to the title when the description is
    /// blank.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` if the title is blank.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(CadenceError::invalid_input("title").with_reason("Goal title cannot be empty"));
        }

        let description = description.into();
        let description = if description.trim().is_empty() {
            title.clone()
        } else {
            description
        };

        Ok(Self { title, description })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
