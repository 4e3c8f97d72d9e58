//! Text-to-subtask parsing.
//!
//! Generated planning text has no guaranteed structure. The parser walks it
//! line by line, cleans off list bullets and whitespace, and keeps only the
//! lines a [`LineClassifier`] accepts as actionable steps. Everything else
//! (headings, prose, embedded JSON) is dropped. Parsing never fails: odd input
//! only yields fewer subtasks.
//!
//! ```rust
//! use cadence_core::{models::Goal, parser::SubtaskParser};
//!
//! let goal = Goal::new("Launch site", "").unwrap();
//! let text = "Here is your plan:\n- 1. Buy domain\n2. Write content";
//! let subtasks = SubtaskParser::new().parse(text, &goal);
//!
//! assert_eq!(subtasks.len(), 2);
//! assert_eq!(subtasks[0].description, "1. Buy domain");
//! assert_eq!(subtasks[1].id, "task-2");
//! ```

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::models::{Goal, SubTask};

/// Prefix of synthetic subtask identifiers.
pub const SUBTASK_ID_PREFIX: &str = "task-";

/// Characters treated as list bullets in front of a line.
const BULLET_CHARS: &[char] = &['-', '*', '+', '•'];

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("numbered item pattern is valid"));

/// Decides whether a cleaned line is an actionable step.
pub trait LineClassifier: Send + Sync {
    fn is_step(&self, line: &str) -> bool;
}

/// Accepts lines that start with digits followed by a period, e.g. `3. Ship`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberedItem;

impl LineClassifier for NumberedItem {
    fn is_step(&self, line: &str) -> bool {
        NUMBERED_ITEM.is_match(line)
    }
}

impl<F> LineClassifier for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_step(&self, line: &str) -> bool {
        self(line)
    }
}

/// Converts raw generated text into ordered subtasks.
pub struct SubtaskParser {
    classifier: Box<dyn LineClassifier>,
}

impl SubtaskParser {
    /// Creates a parser using the [`NumberedItem`] classifier.
    pub fn new() -> Self {
        Self::with_classifier(NumberedItem)
    }

    /// Creates a parser with a custom line classifier.
    pub fn with_classifier(classifier: impl LineClassifier + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
        }
    }

    /// Parses `text` into subtasks for `goal`.
    ///
    /// Ids and orders count only retained lines, starting at 1.
    pub fn parse(&self, text: &str, goal: &Goal) -> Vec<SubTask> {
        let subtasks: Vec<SubTask> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(clean_line)
            .filter(|line| self.classifier.is_step(line))
            .zip(1u32..)
            .map(|(line, position)| {
                SubTask::new(
                    format!("{SUBTASK_ID_PREFIX}{position}"),
                    goal.title(),
                    line,
                    position,
                )
            })
            .collect();

        debug!(
            "Parsed {} subtasks from {} lines of generated text",
            subtasks.len(),
            text.lines().count()
        );
        subtasks
    }
}

impl Default for SubtaskParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `text` with the default numbered-item classifier.
pub fn parse_subtasks(text: &str, goal: &Goal) -> Vec<SubTask> {
    SubtaskParser::new().parse(text, goal)
}

/// Strips surrounding whitespace and any leading list bullets.
fn clean_line(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| BULLET_CHARS.contains(&c) || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> Goal {
        Goal::new("Launch site", "Put a site online").unwrap()
    }

    fn descriptions(subtasks: &[SubTask]) -> Vec<&str> {
        subtasks.iter().map(|s| s.description.as_str()).collect()
    }

    #[test]
    fn test_parse_drops_heading_lines() {
        let text = "1. Buy domain\n2. Write content\nSome heading\n3. Publish site";
        let subtasks = parse_subtasks(text, &goal());

        assert_eq!(
            descriptions(&subtasks),
            vec!["1. Buy domain", "2. Write content", "3. Publish site"]
        );
        assert_eq!(subtasks.iter().map(|s| s.order).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(subtasks.iter().all(|s| s.goal_title == "Launch site"));
        assert!(subtasks.iter().all(|s| s.estimate_minutes.is_none()));
        assert!(subtasks.iter().all(|s| s.scheduled_start.is_none()));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_subtasks("", &goal()).is_empty());
        assert!(parse_subtasks("\n   \n\t\n", &goal()).is_empty());
    }

    #[test]
    fn test_ids_count_only_retained_lines() {
        let text = "# Plan\n\nIntro prose.\n1. First\nEstimated duration: 2h\n2. Second";
        let subtasks = parse_subtasks(text, &goal());

        assert_eq!(subtasks[0].id, "task-1");
        assert_eq!(subtasks[1].id, "task-2");
        assert_eq!(subtasks[1].order, 2);
    }

    #[test]
    fn test_strips_bullets_and_whitespace() {
        let text = "  - 1. Buy domain  \n* 2. Write content\n•  3. Publish\n+ 4. Announce";
        let subtasks = parse_subtasks(text, &goal());

        assert_eq!(
            descriptions(&subtasks),
            vec!["1. Buy domain", "2. Write content", "3. Publish", "4. Announce"]
        );
    }

    #[test]
    fn test_numbering_in_text_is_not_order() {
        // the marker stays in the description, order follows position
        let text = "7. Seventh\n3. Third\n12. Twelfth";
        let subtasks = parse_subtasks(text, &goal());

        assert_eq!(subtasks.iter().map(|s| s.order).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(subtasks[0].description, "7. Seventh");
    }

    #[test]
    fn test_rejects_lookalike_lines() {
        let text = "Step 1. Not numbered first\n1) Paren style\n1 No period\n.5 Decimal\n{\"subtasks\": []}";
        assert!(parse_subtasks(text, &goal()).is_empty());
    }

    #[test]
    fn test_output_length_matches_numbered_line_count() {
        let text = "Intro\n1. a\n\n2. b\nnote\n- 3. c\n10. d\nOutro";
        let expected = text
            .lines()
            .map(clean_line)
            .filter(|line| NUMBERED_ITEM.is_match(line))
            .count();

        let subtasks = parse_subtasks(text, &goal());
        assert_eq!(subtasks.len(), expected);
        for (rank, subtask) in subtasks.iter().enumerate() {
            assert_eq!(subtask.order as usize, rank + 1);
        }
    }

    #[test]
    fn test_parse_is_idempotent_on_clean_output() {
        let text = "Plan:\n- 1. Buy domain\n2. Write content\nfiller\n3. Publish site";
        let first = parse_subtasks(text, &goal());

        let rejoined = descriptions(&first).join("\n");
        let second = parse_subtasks(&rejoined, &goal());

        assert_eq!(descriptions(&first), descriptions(&second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_classifier() {
        let parser = SubtaskParser::with_classifier(|line: &str| line.starts_with("TODO:"));
        let subtasks = parser.parse("TODO: write\n1. ignored\nTODO: ship", &goal());

        assert_eq!(descriptions(&subtasks), vec!["TODO: write", "TODO: ship"]);
        assert_eq!(subtasks[1].id, "task-2");
    }

    #[test]
    fn test_crlf_lines() {
        let subtasks = parse_subtasks("1. One\r\n2. Two\r\n", &goal());
        assert_eq!(descriptions(&subtasks), vec!["1. One", "2. Two"]);
    }
}
