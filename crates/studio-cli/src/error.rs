//! Error types for the command-line front end.

use std::path::PathBuf;

use studio_calendar::CalendarError;
use thiserror::Error;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum CliError {
    /// Failed to read or write an item file.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Item file is not valid JSON.
    #[error("invalid item JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Calendar operation failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Argument combination not allowed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
