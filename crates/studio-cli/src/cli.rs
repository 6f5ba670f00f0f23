//! Command-line interface definition using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use studio_calendar::ViewMode;
use studio_models::Role;

use crate::config;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-01-29)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Studio - production calendar for the video workflow
#[derive(Parser, Debug)]
#[command(name = "studio")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the JSON item file
    #[arg(short, long, env = "STUDIO_ITEMS_FILE", global = true)]
    pub items: Option<PathBuf>,

    /// Role of the current user (admin, client, freelancer)
    #[arg(long, default_value = "admin", global = true)]
    pub role: Role,

    /// Open the calendar read-only regardless of role
    #[arg(long, global = true)]
    pub read_only: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the visible dates for a period
    Range {
        /// Anchor date (default: today)
        #[arg(short, long)]
        anchor: Option<NaiveDate>,

        /// View mode: two-weeks or month (default: STUDIO_VIEW_MODE)
        #[arg(long)]
        view: Option<ViewMode>,
    },

    /// List calendar events aggregated from the item file
    Events {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the calendar grid with its events
    Calendar {
        /// Anchor date (default: today)
        #[arg(short, long)]
        anchor: Option<NaiveDate>,

        /// View mode: two-weeks or month (default: STUDIO_VIEW_MODE)
        #[arg(long)]
        view: Option<ViewMode>,
    },

    /// Move an event (single video or same-day group) to a new date
    Reschedule {
        /// Event ID (video ID or project-<date>)
        #[arg(short, long, required = true)]
        event: String,

        /// Target date (YYYY-MM-DD)
        #[arg(short, long, required = true)]
        date: NaiveDate,

        /// Write the updated items here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Cli {
    /// Returns the item file path, using the configured default if not specified.
    pub fn items_file(&self) -> PathBuf {
        self.items.clone().unwrap_or_else(config::items_file)
    }

    /// Returns true if the calendar must not be edited.
    pub fn read_only(&self) -> bool {
        self.read_only || self.role.calendar_read_only()
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["studio"]).is_err());
    }

    #[test]
    fn test_cli_parse_range() {
        let cli = Cli::parse_from(["studio", "range", "--anchor", "2025-06-15", "--view", "month"]);

        match cli.command {
            Commands::Range { anchor, view } => {
                assert_eq!(anchor, NaiveDate::from_ymd_opt(2025, 6, 15));
                assert_eq!(view, Some(ViewMode::Month));
            }
            _ => panic!("Expected Range command"),
        }
    }

    #[test]
    fn test_cli_parse_invalid_view() {
        assert!(Cli::try_parse_from(["studio", "range", "--view", "year"]).is_err());
    }

    #[test]
    fn test_cli_parse_invalid_date() {
        assert!(Cli::try_parse_from(["studio", "range", "--anchor", "June 15"]).is_err());
    }

    #[test]
    fn test_cli_parse_events_json() {
        let cli = Cli::parse_from(["studio", "events", "-f", "json", "-i", "/tmp/items.json"]);

        assert_eq!(cli.items, Some(PathBuf::from("/tmp/items.json")));
        match cli.command {
            Commands::Events { format } => assert_eq!(format, OutputFormat::Json),
            _ => panic!("Expected Events command"),
        }
    }

    #[test]
    fn test_cli_parse_reschedule() {
        let cli = Cli::parse_from([
            "studio",
            "reschedule",
            "--event",
            "project-2025-06-01",
            "--date",
            "2025-07-04",
        ]);

        match cli.command {
            Commands::Reschedule { event, date, output } => {
                assert_eq!(event, "project-2025-06-01");
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
                assert!(output.is_none());
            }
            _ => panic!("Expected Reschedule command"),
        }
    }

    #[test]
    fn test_cli_reschedule_requires_event() {
        assert!(Cli::try_parse_from(["studio", "reschedule", "--date", "2025-07-04"]).is_err());
    }

    #[test]
    fn test_read_only_from_role_or_flag() {
        let admin = Cli::parse_from(["studio", "events"]);
        assert_eq!(admin.role, Role::Admin);
        assert!(!admin.read_only());

        let client = Cli::parse_from(["studio", "events", "--role", "client"]);
        assert!(client.read_only());

        let flagged = Cli::parse_from(["studio", "--read-only", "events"]);
        assert!(flagged.read_only());
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::parse_from(["studio", "-vv", "events"]);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_items_file_explicit() {
        let cli = Cli::parse_from(["studio", "--items", "plan.json", "events"]);
        assert_eq!(cli.items_file(), PathBuf::from("plan.json"));
    }
}
