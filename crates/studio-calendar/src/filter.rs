//! Calendar event filtering for display.

use chrono::NaiveDate;
use studio_models::VideoStatus;

use crate::events::CalendarEvent;

/// Filter criteria for the events shown on the calendar.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Filter by status of the event (first member's status).
    pub status: Option<VideoStatus>,
    /// Filter by classification tag.
    pub video_type: Option<String>,
    /// Inclusive day range the event must fall in.
    pub range: Option<(NaiveDate, NaiveDate)>,
}

impl EventFilter {
    /// Creates a new empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status filter.
    pub fn with_status(mut self, status: VideoStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the classification tag filter.
    pub fn with_video_type(mut self, video_type: impl Into<String>) -> Self {
        self.video_type = Some(video_type.into());
        self
    }

    /// Restricts events to the inclusive range `first..=last`.
    pub fn within(mut self, first: NaiveDate, last: NaiveDate) -> Self {
        self.range = Some((first, last));
        self
    }

    /// Restricts events to the span of `dates` (no-op for an empty slice).
    pub fn within_dates(self, dates: &[NaiveDate]) -> Self {
        match (dates.first(), dates.last()) {
            (Some(&first), Some(&last)) => self.within(first, last),
            _ => self,
        }
    }

    /// Returns true if the event matches this filter.
    pub fn matches(&self, event: &CalendarEvent) -> bool {
        if let Some(status) = self.status {
            if event.status != status {
                return false;
            }
        }

        if let Some(ref video_type) = self.video_type {
            if event.video_type.as_deref() != Some(video_type.as_str()) {
                return false;
            }
        }

        if let Some((first, last)) = self.range {
            match event.day() {
                Some(day) if day >= first && day <= last => {}
                _ => return false,
            }
        }

        true
    }

    /// Returns the matching events, in order.
    pub fn apply<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}
