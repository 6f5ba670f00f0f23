//! Grouping of dated items into calendar events.
//!
//! Items are bucketed by their resolved calendar date string (scheduled
//! publish date, falling back to the due date). A date with one item yields
//! an event carrying that item's own ID; a date with several items yields a
//! synthetic group event whose ID is derived from the date.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use studio_models::{parse_calendar_day, Item, ItemId, VideoStatus};
use tracing::trace;

/// Prefix of synthetic group event IDs.
pub const GROUP_ID_PREFIX: &str = "project-";

/// Classification tag given to group events.
pub const MIXED_VIDEO_TYPE: &str = "mixed";

/// Identifier of a calendar event.
///
/// Either an item ID (single-item events) or `project-<date>` (groups).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates the deterministic ID of the group event for `date`.
    pub fn for_group(date: &str) -> Self {
        Self(format!("{}{}", GROUP_ID_PREFIX, date))
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets this event ID as an item ID.
    pub fn as_item_id(&self) -> ItemId {
        ItemId::from_string(self.0.clone())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&ItemId> for EventId {
    fn from(id: &ItemId) -> Self {
        Self(id.as_str().to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A display-level aggregation of one or more items sharing a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    /// Item ID for single events, `project-<date>` for groups.
    pub id: EventId,
    /// Item title, or a count summary for groups.
    pub title: String,
    /// The shared date string, exactly as stored on the items.
    pub date: String,
    /// Status of the first member.
    pub status: VideoStatus,
    /// Item tag, or [`MIXED_VIDEO_TYPE`] for groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,
    /// Member items in input order. Never empty.
    pub items: Vec<Item>,
}

impl CalendarEvent {
    /// Returns true if this event groups more than one item.
    pub fn is_group(&self) -> bool {
        self.items.len() > 1
    }

    /// Returns the calendar day this event is displayed on.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_calendar_day(&self.date)
    }

    /// Returns the IDs of the member items.
    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }

    fn from_group(date: String, items: Vec<Item>) -> Option<Self> {
        let first = items.first()?;
        let status = first.status;

        let event = if items.len() == 1 {
            Self {
                id: EventId::from(&first.id),
                title: first.title.clone(),
                status,
                video_type: first.video_type.clone(),
                date,
                items,
            }
        } else {
            Self {
                id: EventId::for_group(&date),
                title: format!("{} videos", items.len()),
                status,
                video_type: Some(MIXED_VIDEO_TYPE.to_string()),
                date,
                items,
            }
        };
        Some(event)
    }
}

/// Groups dated items into calendar events.
///
/// Items without a scheduled or due date are skipped. Events are ordered by
/// the first appearance of their date in `items`; members keep input order.
pub fn aggregate(items: &[Item]) -> Vec<CalendarEvent> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Item>> = HashMap::new();

    for item in items {
        let Some(date) = item.calendar_date() else {
            continue;
        };

        groups
            .entry(date.to_string())
            .or_insert_with(|| {
                order.push(date.to_string());
                Vec::new()
            })
            .push(item.clone());
    }

    let events: Vec<CalendarEvent> = order
        .into_iter()
        .filter_map(|date| {
            let members = groups.remove(&date)?;
            CalendarEvent::from_group(date, members)
        })
        .collect();

    trace!(items = items.len(), events = events.len(), "aggregated calendar events");
    events
}

/// Returns the events displayed on `day`.
pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.day() == Some(day)).collect()
}
