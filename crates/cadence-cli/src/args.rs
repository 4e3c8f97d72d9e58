use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::{civil::DateTime, tz::TimeZone, Timestamp};

/// Turn a goal into a time-blocked schedule
///
/// Cadence asks a text-generation service for the steps towards a goal,
/// packs them back to back from a start time, saves the schedule as JSON
/// next to a plain-text copy and reserves a calendar block for each step.
#[derive(Parser)]
#[command(
    version,
    about,
    name = "cadence",
    subcommand_negates_reqs = true
)]
pub struct Args {
    /// Path to a JSON settings file. Defaults to
    /// $XDG_CONFIG_HOME/cadence/config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub plan: PlanArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a previously saved schedule
    Show(ShowArgs),
}

/// Plan a goal
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Title of the goal to plan
    #[arg(required = true)]
    pub title: Option<String>,

    /// Longer description of the goal; defaults to the title
    #[arg(short, long)]
    pub description: Option<String>,

    /// Where to save the JSON schedule
    #[arg(long, default_value = "schedule.json")]
    pub output: PathBuf,

    /// Where to write the plain-text schedule
    #[arg(long, default_value = "schedule.txt")]
    pub pretty_output: PathBuf,

    /// Start of the first time block, as an RFC 3339 timestamp or a local
    /// `YYYY-MM-DDTHH:MM` date and time. Defaults to now
    #[arg(long, value_parser = parse_start)]
    pub start: Option<Timestamp>,

    /// Read the planning text from a file instead of calling the generator
    #[arg(long)]
    pub plan_file: Option<PathBuf>,
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Path of the saved JSON schedule
    pub path: PathBuf,
}

/// Parses an absolute timestamp, or a civil date and time in the system zone.
fn parse_start(value: &str) -> Result<Timestamp, String> {
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    let civil: DateTime = value
        .parse()
        .map_err(|e| format!("invalid start time '{value}': {e}"))?;
    civil
        .to_zoned(TimeZone::system())
        .map(|zoned| zoned.timestamp())
        .map_err(|e| format!("invalid start time '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_start_rfc3339() {
        let start = parse_start("2024-01-01T09:00:00Z").unwrap();
        assert_eq!(start, "2024-01-01T09:00:00Z".parse::<Timestamp>().unwrap());

        let offset = parse_start("2024-01-01T11:00:00+02:00").unwrap();
        assert_eq!(offset, start);
    }

    #[test]
    fn test_parse_start_civil_uses_system_zone() {
        let start = parse_start("2024-01-01T09:00").unwrap();
        let expected = "2024-01-01T09:00"
            .parse::<DateTime>()
            .unwrap()
            .to_zoned(TimeZone::system())
            .unwrap()
            .timestamp();
        assert_eq!(start, expected);
    }

    #[test]
    fn test_parse_start_rejects_garbage() {
        assert!(parse_start("tomorrow-ish").is_err());
    }

    #[test]
    fn test_show_subcommand_does_not_need_title() {
        let args = Args::try_parse_from(["cadence", "show", "schedule.json"]).unwrap();
        assert!(args.plan.title.is_none());
        assert!(matches!(args.command, Some(Commands::Show(_))));
    }

    #[test]
    fn test_global_flags_before_show() {
        let args = Args::try_parse_from([
            "cadence",
            "--no-color",
            "--config",
            "c.json",
            "show",
            "x.json",
        ])
        .unwrap();

        assert!(args.no_color);
        assert_eq!(args.config, Some(PathBuf::from("c.json")));
        match args.command {
            Some(Commands::Show(show)) => assert_eq!(show.path, PathBuf::from("x.json")),
            None => panic!("expected the show subcommand"),
        }
    }

    #[test]
    fn test_plan_defaults() {
        let args = Args::try_parse_from(["cadence", "Launch site"]).unwrap();
        assert_eq!(args.plan.title.as_deref(), Some("Launch site"));
        assert_eq!(args.plan.output, PathBuf::from("schedule.json"));
        assert_eq!(args.plan.pretty_output, PathBuf::from("schedule.txt"));
        assert!(args.plan.start.is_none());
    }

    #[test]
    fn test_title_is_required_without_subcommand() {
        assert!(Args::try_parse_from(["cadence"]).is_err());
    }
}
