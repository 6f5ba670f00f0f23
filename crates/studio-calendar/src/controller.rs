//! CalendarViewController - view state, navigation and drag-and-drop.
//!
//! The controller owns the anchor date and view mode, derives the visible
//! dates and events on demand, and turns user gestures into reschedules.
//! It never holds the item collection: callers pass it in and replace their
//! copy with whatever a reschedule returns.

use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{NaiveDate, NaiveTime};
use studio_models::{Item, Role};
use tracing::{debug, info, warn};

use crate::cache::AggregationCache;
use crate::error::{CalendarError, Result};
use crate::events::{CalendarEvent, EventId};
use crate::filter::EventFilter;
use crate::range::{self, DateCell, Direction, ViewMode};
use crate::schedule;

/// A user intent emitted for the hosting page to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarIntent {
    /// An event was clicked (open its detail view).
    EventClicked(EventId),
    /// An event was dropped on a day and its items were rescheduled.
    EventDropped { event_id: EventId, date: NaiveDate },
    /// The visible period changed.
    PeriodChanged { anchor: NaiveDate, view_mode: ViewMode },
}

/// Calendar view state machine.
///
/// # Drag and drop
///
/// 1. [`drag_start`](Self::drag_start) records the dragged event.
/// 2. [`drag_over`](Self::drag_over) answers whether a drop is allowed.
/// 3. [`drop_on`](Self::drop_on) reschedules the dragged event to the day.
///
/// A read-only controller refuses all three phases.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use studio_calendar::{CalendarViewController, ViewMode};
/// use studio_models::Item;
///
/// let anchor = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let mut calendar = CalendarViewController::new(anchor, false);
/// calendar.set_view_mode(ViewMode::Month);
///
/// let items = vec![Item::builder("Intro").id("v1").scheduled("2025-06-01").build()];
/// assert!(calendar.drag_start("v1".into()));
///
/// let target = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
/// let items = calendar.drop_on(&items, target).unwrap();
/// assert_eq!(items[0].scheduled_date.as_deref(), Some("2025-06-20T00:00:00Z"));
/// ```
#[derive(Debug)]
pub struct CalendarViewController {
    anchor: NaiveDate,
    view_mode: ViewMode,
    read_only: bool,
    cache: AggregationCache,
    dragging: Option<EventId>,
    subscribers: Vec<Sender<CalendarIntent>>,
}

impl CalendarViewController {
    /// Creates a controller in two-week view.
    pub fn new(anchor: NaiveDate, read_only: bool) -> Self {
        Self {
            anchor,
            view_mode: ViewMode::default(),
            read_only,
            cache: AggregationCache::new(),
            dragging: None,
            subscribers: Vec::new(),
        }
    }

    /// Creates a controller whose editability follows `role`.
    pub fn for_role(anchor: NaiveDate, role: Role) -> Self {
        Self::new(anchor, role.calendar_read_only())
    }

    /// Sets the initial view mode.
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns the event currently being dragged.
    pub fn dragging(&self) -> Option<&EventId> {
        self.dragging.as_ref()
    }

    /// Subscribes to user intents.
    ///
    /// Receivers that are dropped are pruned on the next emit.
    pub fn subscribe(&mut self) -> Receiver<CalendarIntent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, intent: CalendarIntent) {
        self.subscribers.retain(|tx| tx.send(intent.clone()).is_ok());
    }

    fn period_changed(&mut self) {
        debug!(anchor = %self.anchor, view_mode = %self.view_mode, "calendar period changed");
        self.emit(CalendarIntent::PeriodChanged {
            anchor: self.anchor,
            view_mode: self.view_mode,
        });
    }

    // ----- navigation -----

    /// Moves back one period and returns the new anchor.
    pub fn prev_period(&mut self) -> NaiveDate {
        self.anchor = range::advance(self.anchor, self.view_mode, Direction::Previous);
        self.period_changed();
        self.anchor
    }

    /// Moves forward one period and returns the new anchor.
    pub fn next_period(&mut self) -> NaiveDate {
        self.anchor = range::advance(self.anchor, self.view_mode, Direction::Next);
        self.period_changed();
        self.anchor
    }

    /// Switches the view mode, keeping the anchor.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        if self.view_mode != view_mode {
            self.view_mode = view_mode;
            self.period_changed();
        }
    }

    /// Jumps to the period containing `date`.
    pub fn go_to(&mut self, date: NaiveDate) {
        if self.anchor != date {
            self.anchor = date;
            self.period_changed();
        }
    }

    // ----- derived view -----

    /// Returns the visible dates.
    pub fn dates(&self) -> Vec<NaiveDate> {
        range::build(self.anchor, self.view_mode)
    }

    /// Returns the visible cells with display flags.
    pub fn cells(&self, today: NaiveDate) -> Vec<DateCell> {
        range::build_cells(self.anchor, self.view_mode, today)
    }

    /// Returns the heading for the visible period.
    pub fn period_label(&self) -> String {
        range::period_label(self.anchor, self.view_mode)
    }

    /// Returns all events for `items` (memoized).
    pub fn events(&mut self, items: &[Item]) -> &[CalendarEvent] {
        self.cache.events(items)
    }

    /// Returns the events falling inside the visible range.
    pub fn visible_events(&mut self, items: &[Item]) -> Vec<&CalendarEvent> {
        let filter = EventFilter::new().within_dates(&self.dates());
        filter.apply(self.cache.events(items))
    }

    /// Returns the events shown on `day`.
    pub fn events_on(&mut self, items: &[Item], day: NaiveDate) -> Vec<&CalendarEvent> {
        EventFilter::new()
            .within(day, day)
            .apply(self.cache.events(items))
    }

    // ----- interaction -----

    /// Records a click on an event.
    pub fn click(&mut self, event_id: EventId) {
        self.emit(CalendarIntent::EventClicked(event_id));
    }

    /// Starts dragging an event. Returns false if the calendar is read-only.
    pub fn drag_start(&mut self, event_id: EventId) -> bool {
        if self.read_only {
            return false;
        }
        debug!(event_id = %event_id, "drag started");
        self.dragging = Some(event_id);
        true
    }

    /// Returns true if dropping on `date` is permitted.
    pub fn drag_over(&self, _date: NaiveDate) -> bool {
        !self.read_only && self.dragging.is_some()
    }

    /// Abandons the current drag.
    pub fn drag_cancel(&mut self) {
        self.dragging = None;
    }

    /// Drops the dragged event on `date` and returns the updated items.
    ///
    /// The drag ends whether or not the reschedule succeeds.
    pub fn drop_on(&mut self, items: &[Item], date: NaiveDate) -> Result<Vec<Item>> {
        if self.read_only {
            warn!(%date, "drop refused on read-only calendar");
            return Err(CalendarError::ReadOnly);
        }
        let event_id = self.dragging.take().ok_or(CalendarError::NoActiveDrag)?;
        self.reschedule(items, event_id, date)
    }

    /// Moves an event to `date` (explicit date pick) and returns the updated
    /// items.
    pub fn reschedule(
        &mut self,
        items: &[Item],
        event_id: EventId,
        date: NaiveDate,
    ) -> Result<Vec<Item>> {
        if self.read_only {
            warn!(event_id = %event_id, "reschedule refused on read-only calendar");
            return Err(CalendarError::ReadOnly);
        }

        let target = date.and_time(NaiveTime::MIN);
        let updated = schedule::reschedule(items, &event_id, target, self.cache.events(items))?;

        info!(event_id = %event_id, %date, "event dropped");
        self.emit(CalendarIntent::EventDropped { event_id, date });
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_items() -> Vec<Item> {
        vec![
            Item::builder("A").id("A").scheduled("2025-06-01").build(),
            Item::builder("B").id("B").scheduled("2025-06-01").build(),
            Item::builder("C").id("C").scheduled("2025-06-02").build(),
            Item::builder("D").id("D").due("2025-09-01").build(),
        ]
    }

    #[test]
    fn test_defaults() {
        let calendar = CalendarViewController::new(date(2025, 6, 15), false);

        assert_eq!(calendar.view_mode(), ViewMode::TwoWeeks);
        assert_eq!(calendar.dates().len(), 14);
        assert!(!calendar.is_read_only());
        assert!(calendar.dragging().is_none());
    }

    #[test]
    fn test_navigation_uses_view_mode() {
        let mut calendar = CalendarViewController::new(date(2025, 6, 15), false);

        assert_eq!(calendar.next_period(), date(2025, 6, 29));
        calendar.set_view_mode(ViewMode::Month);
        assert_eq!(calendar.next_period(), date(2025, 7, 29));
        assert_eq!(calendar.prev_period(), date(2025, 6, 29));
        assert_eq!(calendar.dates().len(), 42);
    }

    #[test]
    fn test_navigation_matches_range_advance() {
        let mut calendar =
            CalendarViewController::new(date(2025, 1, 31), false).with_view_mode(ViewMode::Month);
        let expected = range::advance(date(2025, 1, 31), ViewMode::Month, Direction::Next);

        assert_eq!(calendar.next_period(), expected);
    }

    #[test]
    fn test_period_intents() {
        let mut calendar = CalendarViewController::new(date(2025, 6, 15), false);
        let rx = calendar.subscribe();

        calendar.set_view_mode(ViewMode::Month);
        calendar.set_view_mode(ViewMode::Month);
        calendar.next_period();

        let intents: Vec<CalendarIntent> = rx.try_iter().collect();
        assert_eq!(
            intents,
            vec![
                CalendarIntent::PeriodChanged {
                    anchor: date(2025, 6, 15),
                    view_mode: ViewMode::Month
                },
                CalendarIntent::PeriodChanged {
                    anchor: date(2025, 7, 15),
                    view_mode: ViewMode::Month
                },
            ]
        );
    }

    #[test]
    fn test_visible_events_and_events_on() {
        let mut calendar = CalendarViewController::new(date(2025, 6, 1), false);
        let items = sample_items();

        assert_eq!(calendar.events(&items).len(), 3);

        let visible: Vec<&str> = calendar
            .visible_events(&items)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(visible, vec!["project-2025-06-01", "C"]);

        let on_day = calendar.events_on(&items, date(2025, 6, 2));
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].id.as_str(), "C");
    }

    #[test]
    fn test_drag_and_drop_group() {
        let mut calendar = CalendarViewController::new(date(2025, 6, 1), false);
        let rx = calendar.subscribe();
        let items = sample_items();

        assert!(calendar.drag_start(EventId::for_group("2025-06-01")));
        assert!(calendar.drag_over(date(2025, 7, 4)));

        let updated = calendar.drop_on(&items, date(2025, 7, 4)).unwrap();
        assert_eq!(updated[0].scheduled_date.as_deref(), Some("2025-07-04T00:00:00Z"));
        assert_eq!(updated[1].scheduled_date.as_deref(), Some("2025-07-04T00:00:00Z"));
        assert_eq!(updated[2].scheduled_date.as_deref(), Some("2025-06-02"));
        assert!(calendar.dragging().is_none());

        assert_eq!(
            rx.try_recv().unwrap(),
            CalendarIntent::EventDropped {
                event_id: EventId::for_group("2025-06-01"),
                date: date(2025, 7, 4)
            }
        );
    }

    #[test]
    fn test_drop_without_drag() {
        let mut calendar = CalendarViewController::new(date(2025, 6, 1), false);

        assert!(!calendar.drag_over(date(2025, 6, 3)));
        assert_eq!(
            calendar.drop_on(&sample_items(), date(2025, 6, 3)),
            Err(CalendarError::NoActiveDrag)
        );
    }

    #[test]
    fn test_drop_unknown_event_ends_drag() {
        let mut calendar = CalendarViewController::new(date(2025, 6, 1), false);

        calendar.drag_start("ghost".into());
        let result = calendar.drop_on(&sample_items(), date(2025, 6, 3));

        assert_eq!(result, Err(CalendarError::NotFound("ghost".to_string())));
        assert!(calendar.dragging().is_none());
    }

    #[test]
    fn test_drag_cancel() {
        let mut calendar = CalendarViewController::new(date(2025, 6, 1), false);

        calendar.drag_start("C".into());
        calendar.drag_cancel();
        assert!(!calendar.drag_over(date(2025, 6, 3)));
    }

    #[test]
    fn test_read_only_refuses_every_phase() {
        let mut calendar = CalendarViewController::for_role(date(2025, 6, 1), Role::Client);
        let items = sample_items();

        assert!(calendar.is_read_only());
        assert!(!calendar.drag_start("C".into()));
        assert!(!calendar.drag_over(date(2025, 6, 3)));
        assert_eq!(calendar.drop_on(&items, date(2025, 6, 3)), Err(CalendarError::ReadOnly));
        assert_eq!(
            calendar.reschedule(&items, "C".into(), date(2025, 6, 3)),
            Err(CalendarError::ReadOnly)
        );
    }

    #[test]
    fn test_read_only_still_navigates_and_clicks() {
        let mut calendar = CalendarViewController::new(date(2025, 6, 15), true);
        let rx = calendar.subscribe();

        calendar.click("C".into());
        calendar.next_period();

        assert_eq!(rx.try_recv().unwrap(), CalendarIntent::EventClicked("C".into()));
        assert!(matches!(rx.try_recv().unwrap(), CalendarIntent::PeriodChanged { .. }));
    }

    #[test]
    fn test_dropped_receiver_is_pruned() {
        let mut calendar = CalendarViewController::new(date(2025, 6, 15), false);
        let rx = calendar.subscribe();
        drop(rx);

        calendar.next_period();
        assert!(calendar.subscribers.is_empty());
    }

    #[test]
    fn test_explicit_reschedule_single() {
        let mut calendar = CalendarViewController::new(date(2025, 6, 1), false);
        let items = sample_items();

        let updated = calendar
            .reschedule(&items, "D".into(), date(2025, 9, 15))
            .unwrap();

        assert_eq!(updated[3].scheduled_date.as_deref(), Some("2025-09-15T00:00:00Z"));
        assert_eq!(calendar.events(&updated).len(), 3);
    }
}
