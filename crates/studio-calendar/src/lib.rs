//! Production calendar core for Studio.
//!
//! This crate turns a collection of videos into what a scheduling calendar
//! shows, and applies reschedules back onto the collection:
//! - [`range`]: visible dates for the two-week and month views
//! - [`events`]: grouping of same-day videos into calendar events
//! - [`schedule`]: moving a single video or a whole day's group
//! - [`cache`]: memoized aggregation keyed by an item fingerprint
//! - [`controller`]: view state, navigation and drag-and-drop
//!
//! All functions are synchronous and never mutate the caller's items.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use studio_calendar::{aggregate, reschedule, EventId};
//! use studio_models::Item;
//!
//! let items = vec![
//!     Item::builder("Teaser").id("A").scheduled("2025-06-01").build(),
//!     Item::builder("Trailer").id("B").scheduled("2025-06-01").build(),
//! ];
//!
//! let events = aggregate(&items);
//! assert_eq!(events[0].id, EventId::for_group("2025-06-01"));
//!
//! let at = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let moved = reschedule(&items, &events[0].id, at, &events).unwrap();
//! assert!(moved.iter().all(|i| i.scheduled_date.as_deref() == Some("2025-07-04T00:00:00Z")));
//! ```

pub mod cache;
pub mod controller;
pub mod error;
pub mod events;
pub mod filter;
pub mod range;
pub mod schedule;

pub use cache::AggregationCache;
pub use controller::{CalendarIntent, CalendarViewController};
pub use error::{CalendarError, Result};
pub use events::{aggregate, events_on, CalendarEvent, EventId, MIXED_VIDEO_TYPE};
pub use filter::EventFilter;
pub use range::{advance, build, build_cells, period_label, DateCell, Direction, ViewMode};
pub use schedule::{format_schedule_timestamp, reschedule};
