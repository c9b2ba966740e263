//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - demo: seed sample projects and print every view (the default)

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasktrack::domain::{Priority, parse_due};
use tasktrack::store::TieBreak;

/// tasktrack - in-memory task tracking grouped by project
#[derive(Parser, Debug)]
#[command(name = "tasktrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print views as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed sample projects and print every view
    Demo {
        /// Treat this date as "now" (YYYY-MM-DD or YYYY-MM-DD HH:MM)
        #[arg(long, value_parser = parse_now)]
        now: Option<NaiveDateTime>,

        /// Tie-break for equal priorities: due_date or id (overrides config)
        #[arg(short = 't', long, value_parser = parse_tie_break)]
        tie_break: Option<TieBreak>,

        /// Hide tasks below this priority in the priority view (low, medium, high)
        #[arg(short = 'p', long, value_parser = parse_priority)]
        min_priority: Option<Priority>,
    },
}

fn parse_now(input: &str) -> Result<NaiveDateTime, String> {
    parse_due(input).map_err(|e| e.to_string())
}

fn parse_priority(input: &str) -> Result<Priority, String> {
    input.parse::<Priority>().map_err(|e| e.to_string())
}

fn parse_tie_break(input: &str) -> Result<TieBreak, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "due_date" | "due-date" | "due" => Ok(TieBreak::DueDate),
        "id" => Ok(TieBreak::Id),
        other => Err(format!("unknown tie-break '{}', expected due_date or id", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["tasktrack"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from(["tasktrack", "--json", "-v", "-c", "/tmp/tt.yml"]);
        assert!(cli.json);
        assert!(cli.is_verbose());
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tt.yml")));
    }

    #[test]
    fn test_cli_parse_demo_options() {
        let cli = Cli::parse_from(["tasktrack", "demo", "--now", "2026-10-19", "-t", "id", "-p", "Medium"]);
        match cli.command {
            Some(Commands::Demo {
                now,
                tie_break,
                min_priority,
            }) => {
                assert_eq!(now.unwrap().to_string(), "2026-10-19 00:00:00");
                assert_eq!(tie_break, Some(TieBreak::Id));
                assert_eq!(min_priority, Some(Priority::Medium));
            }
            _ => panic!("Expected Demo command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["tasktrack", "demo", "--now", "someday"]).is_err());
        assert!(Cli::try_parse_from(["tasktrack", "demo", "-t", "title"]).is_err());
        assert!(Cli::try_parse_from(["tasktrack", "demo", "--min-priority", "urgent"]).is_err());
    }

    #[test]
    fn test_parse_priority_reports_bad_value() {
        assert_eq!(parse_priority("h").unwrap(), Priority::High);
        assert_eq!(parse_priority("urgent").unwrap_err(), "Invalid priority: urgent");
    }

    #[test]
    fn test_parse_tie_break_aliases() {
        assert_eq!(parse_tie_break("due-date").unwrap(), TieBreak::DueDate);
        assert_eq!(parse_tie_break("ID").unwrap(), TieBreak::Id);
    }
}
