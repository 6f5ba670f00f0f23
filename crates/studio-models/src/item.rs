//! Video item types for Studio.
//!
//! Items are the units of production work (videos) that move through
//! review and get placed on the publishing calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::ItemId;

/// Review status of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VideoStatus {
    /// Video is being produced.
    #[default]
    InProgress,
    /// Video has been submitted for review.
    Submitted,
    /// Video has been approved for publishing.
    Approved,
    /// Video has been rejected and needs rework.
    Rejected,
}

impl VideoStatus {
    /// All statuses in workflow order.
    pub const ALL: [VideoStatus; 4] = [
        VideoStatus::InProgress,
        VideoStatus::Submitted,
        VideoStatus::Approved,
        VideoStatus::Rejected,
    ];

    /// Returns the wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::InProgress => "in-progress",
            VideoStatus::Submitted => "submitted",
            VideoStatus::Approved => "approved",
            VideoStatus::Rejected => "rejected",
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            VideoStatus::InProgress => "In Progress",
            VideoStatus::Submitted => "Submitted",
            VideoStatus::Approved => "Approved",
            VideoStatus::Rejected => "Rejected",
        }
    }

    /// Returns true once review has reached a decision.
    pub fn is_final(&self) -> bool {
        matches!(self, VideoStatus::Approved | VideoStatus::Rejected)
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for VideoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VideoStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown video status: {}", s))
    }
}

/// A video tracked by the production workflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the video.
    pub id: ItemId,

    /// Display title.
    pub title: String,

    /// Current review status.
    #[serde(default)]
    pub status: VideoStatus,

    /// Scheduled publish date, as stored (e.g. `2025-06-01T00:00:00Z`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,

    /// Production due date, as stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Classification tag (e.g. "short", "tutorial").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Freelancer the video is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl Item {
    /// Creates a new in-progress item with a random ID and no dates.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            status: VideoStatus::InProgress,
            scheduled_date: None,
            due_date: None,
            video_type: None,
            description: None,
            assigned_to: None,
        }
    }

    /// Returns the date this item is shown on in the calendar.
    ///
    /// The scheduled publish date takes precedence over the due date.
    pub fn calendar_date(&self) -> Option<&str> {
        self.scheduled_date
            .as_deref()
            .or(self.due_date.as_deref())
    }

    /// Returns true if the item has a date to be placed on the calendar.
    pub fn is_scheduled(&self) -> bool {
        self.calendar_date().is_some()
    }

    /// Returns the calendar day of [`Item::calendar_date`], if it parses.
    pub fn calendar_day(&self) -> Option<NaiveDate> {
        self.calendar_date().and_then(parse_calendar_day)
    }
}

/// Parses the `yyyy-MM-dd` prefix of a stored date string.
///
/// Accepts bare dates (`2025-06-01`) and timestamps
/// (`2025-06-01T10:00:00Z`). No timezone conversion is applied.
pub fn parse_calendar_day(value: &str) -> Option<NaiveDate> {
    let prefix = value.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}
