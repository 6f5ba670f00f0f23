//! Rescheduling of calendar events.
//!
//! Moving a group event moves every member item; moving anything else is
//! treated as moving a single item by ID.

use chrono::NaiveDateTime;
use studio_models::{Item, ItemId};
use tracing::{debug, info, warn};

use crate::error::{CalendarError, Result};
use crate::events::{CalendarEvent, EventId};

/// Format of stored scheduled-publish timestamps.
///
/// The trailing `Z` is a literal: no timezone conversion is performed.
pub const SCHEDULE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Formats a schedule timestamp as `yyyy-MM-ddTHH:mm:ssZ`.
pub fn format_schedule_timestamp(at: NaiveDateTime) -> String {
    at.format(SCHEDULE_TIMESTAMP_FORMAT).to_string()
}

/// Returns a copy of `items` with the event's items moved to `new_date`.
///
/// If `event_id` names an event in `events` with more than one member, all
/// members get the new scheduled date. Otherwise `event_id` is taken to be an
/// item ID and only that item changes.
///
/// # Errors
///
/// Returns [`CalendarError::NotFound`] if no item was rescheduled. `items`
/// is never modified.
pub fn reschedule(
    items: &[Item],
    event_id: &EventId,
    new_date: NaiveDateTime,
    events: &[CalendarEvent],
) -> Result<Vec<Item>> {
    let targets: Vec<ItemId> = match events.iter().find(|e| &e.id == event_id) {
        Some(event) if event.is_group() => {
            debug!(event_id = %event_id, members = event.items.len(), "rescheduling group");
            event.item_ids().cloned().collect()
        }
        _ => vec![event_id.as_item_id()],
    };

    let timestamp = format_schedule_timestamp(new_date);
    let mut moved = 0usize;

    let updated: Vec<Item> = items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if targets.contains(&item.id) {
                item.scheduled_date = Some(timestamp.clone());
                moved += 1;
            }
            item
        })
        .collect();

    if moved == 0 {
        warn!(event_id = %event_id, "reschedule target not found");
        return Err(CalendarError::NotFound(event_id.to_string()));
    }

    info!(event_id = %event_id, date = %timestamp, moved, "rescheduled");
    Ok(updated)
}
