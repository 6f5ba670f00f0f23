//! Visible date ranges for the calendar views.
//!
//! Both views are built from whole weeks starting on Monday:
//! - two-week view: 14 cells starting at the Monday on or before the anchor
//! - month view: 42 cells (6 weeks) starting at the Monday on or before the
//!   first day of the anchor's month

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of cells in the two-week view.
pub const TWO_WEEK_CELLS: usize = 14;

/// Number of cells in the month grid (6 rows of 7 days).
pub const MONTH_CELLS: usize = 42;

/// Calendar display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// 14 consecutive days.
    #[default]
    TwoWeeks,
    /// 6-week grid covering a calendar month.
    Month,
}

impl ViewMode {
    /// Returns the number of cells this mode always displays.
    pub fn cell_count(&self) -> usize {
        match self {
            ViewMode::TwoWeeks => TWO_WEEK_CELLS,
            ViewMode::Month => MONTH_CELLS,
        }
    }

    /// Returns the wire name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::TwoWeeks => "two-weeks",
            ViewMode::Month => "month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "two-weeks" | "two_weeks" | "twoweeks" | "2w" => Ok(ViewMode::TwoWeeks),
            "month" | "m" => Ok(ViewMode::Month),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Previous => Direction::Next,
            Direction::Next => Direction::Previous,
        }
    }
}

/// A single visible calendar day with its display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateCell {
    /// The calendar day.
    pub date: NaiveDate,
    /// True if this is the caller-supplied "today".
    pub is_today: bool,
    /// True if the day belongs to the displayed period.
    ///
    /// In month view, padding days from the neighbouring months are false.
    pub is_current_period: bool,
    /// True on Saturday and Sunday.
    pub is_weekend: bool,
}

/// Returns the Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Builds the ordered sequence of visible dates for `anchor` in `mode`.
///
/// Always returns exactly [`ViewMode::cell_count`] consecutive dates, the
/// first of which is a Monday.
pub fn build(anchor: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    let start = match mode {
        ViewMode::TwoWeeks => week_start(anchor),
        ViewMode::Month => week_start(month_start(anchor)),
    };

    start.iter_days().take(mode.cell_count()).collect()
}

/// Builds the visible dates with their display flags.
pub fn build_cells(anchor: NaiveDate, mode: ViewMode, today: NaiveDate) -> Vec<DateCell> {
    build(anchor, mode)
        .into_iter()
        .map(|date| DateCell {
            date,
            is_today: date == today,
            is_current_period: match mode {
                ViewMode::TwoWeeks => true,
                ViewMode::Month => date.year() == anchor.year() && date.month() == anchor.month(),
            },
            is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        })
        .collect()
}

/// Moves the anchor by one period in `direction`.
///
/// Two-week view moves by 14 days; month view moves by one calendar month,
/// clamping the day to the end of shorter months (Jan 31 -> Feb 28).
pub fn advance(anchor: NaiveDate, mode: ViewMode, direction: Direction) -> NaiveDate {
    let moved = match (mode, direction) {
        (ViewMode::TwoWeeks, Direction::Next) => anchor.checked_add_days(Days::new(14)),
        (ViewMode::TwoWeeks, Direction::Previous) => anchor.checked_sub_days(Days::new(14)),
        (ViewMode::Month, Direction::Next) => anchor.checked_add_months(Months::new(1)),
        (ViewMode::Month, Direction::Previous) => anchor.checked_sub_months(Months::new(1)),
    };

    moved.unwrap_or_else(|| {
        warn!(%anchor, mode = %mode, ?direction, "anchor at the edge of the supported date range");
        anchor
    })
}

/// Returns the heading shown above the calendar.
///
/// Month view: `June 2025`. Two-week view: `Jun 2 - Jun 15, 2025`, with the
/// year on both ends when the range crosses into a new year.
pub fn period_label(anchor: NaiveDate, mode: ViewMode) -> String {
    match mode {
        ViewMode::Month => anchor.format("%B %Y").to_string(),
        ViewMode::TwoWeeks => {
            let dates = build(anchor, mode);
            let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
                return anchor.format("%b %-d, %Y").to_string();
            };

            if first.year() == last.year() {
                format!("{} - {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
            } else {
                format!("{} - {}", first.format("%b %-d, %Y"), last.format("%b %-d, %Y"))
            }
        }
    }
}
