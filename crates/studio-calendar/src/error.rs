//! Error types for calendar operations.

use thiserror::Error;

/// Errors that can occur during calendar operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Neither an event nor an item matches the identifier.
    #[error("event or item not found: {0}")]
    NotFound(String),

    /// The calendar was opened read-only.
    #[error("calendar is read-only")]
    ReadOnly,

    /// A drop arrived without a preceding drag start.
    #[error("no drag in progress")]
    NoActiveDrag,
}

/// Result type alias for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;
