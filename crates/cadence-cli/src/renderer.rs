//! Terminal output for schedules and run reports.
//!
//! Markdown is rendered with termimad unless colour is disabled, in which
//! case it is written through unchanged.

use std::io::Write;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Green);
        skin.italic.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Text as it will reach the terminal.
    fn styled(&self, markdown: &str) -> String {
        if self.rich_enabled {
            self.skin.term_text(markdown).to_string()
        } else {
            markdown.to_string()
        }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", self.styled(markdown))?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer_passes_markdown_through() {
        let renderer = TerminalRenderer::new(false);
        let markdown = "# Launch site\n\n- Estimate: **15 min**\n";
        assert_eq!(renderer.styled(markdown), markdown);
    }

    #[test]
    fn test_rich_renderer_keeps_text() {
        let renderer = TerminalRenderer::new(true);
        let output = renderer.styled("- Estimate: **15 min**\n");
        assert!(output.contains("15 min"));
        assert!(!output.contains("**"));
    }
}
