//! Week, month, and year view composition.
//!
//! All three views share the same skeleton: compute the visible range
//! for an anchor date, bucket events and notes into each cell, apply the
//! view's display cap. Composers hold no state; a view is re-derived
//! from the anchor and the current collections on every call.

use chrono::{Datelike, Days, NaiveDate};

use crate::bucket::{events_on_day, notes_on_day};
use crate::model::{CalendarNote, Event};

/// Events shown per month cell before "+K more" in wide layouts.
const MONTH_CAP_WIDE: usize = 3;
/// Cap for narrow layouts.
const MONTH_CAP_NARROW: usize = 2;

/// Layout-driven knobs for range and truncation behavior. The numeric
/// thresholds are configuration, not correctness invariants.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Narrow layout: single-day week view and a tighter month cap.
    pub narrow: bool,
    /// Override for the month cell cap; defaults by layout width.
    pub month_cap: Option<usize>,
}

impl ViewOptions {
    pub fn effective_month_cap(&self) -> usize {
        self.month_cap
            .unwrap_or(if self.narrow { MONTH_CAP_NARROW } else { MONTH_CAP_WIDE })
    }
}

// =============================================================================
// Range computation
// =============================================================================

/// The Sunday on or before `anchor`. Weeks start on Sunday.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    anchor - Days::new(u64::from(anchor.weekday().num_days_from_sunday()))
}

/// The days of the week containing `anchor`: 7 from the week start, or
/// only `anchor` itself in narrow layouts.
pub fn week_days(anchor: NaiveDate, opts: &ViewOptions) -> Vec<NaiveDate> {
    if opts.narrow {
        return vec![anchor];
    }
    let start = week_start(anchor);
    (0..7).map(|i| start + Days::new(i)).collect()
}

fn month_start(anchor: NaiveDate) -> NaiveDate {
    anchor.with_day(1).unwrap()
}

fn month_end(anchor: NaiveDate) -> NaiveDate {
    let next_month = if anchor.month() == 12 {
        NaiveDate::from_ymd_opt(anchor.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(anchor.year(), anchor.month() + 1, 1)
    };
    next_month.unwrap().pred_opt().unwrap()
}

/// Every day of the month grid: from the week start of the month's first
/// day through the Saturday on or after its last day. Leading and
/// trailing days belong to adjacent months but stay queryable.
pub fn month_grid_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    let last = month_end(anchor);
    let grid_start = week_start(month_start(anchor));
    let grid_end = last + Days::new(u64::from(6 - last.weekday().num_days_from_sunday()));

    let mut days = Vec::new();
    let mut day = grid_start;
    while day <= grid_end {
        days.push(day);
        day = day + Days::new(1);
    }
    days
}

/// The 12 month-start anchors of `anchor`'s year.
pub fn year_months(anchor: NaiveDate) -> Vec<NaiveDate> {
    (1..=12)
        .map(|month| NaiveDate::from_ymd_opt(anchor.year(), month, 1).unwrap())
        .collect()
}

// =============================================================================
// Composition
// =============================================================================

/// One day cell with its bucketed records.
#[derive(Debug)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a Event>,
    pub notes: Vec<&'a CalendarNote>,
}

#[derive(Debug)]
pub struct WeekView<'a> {
    pub anchor: NaiveDate,
    pub days: Vec<DayCell<'a>>,
}

/// One month-grid cell; events past the display cap are folded into
/// `overflow` ("+K more").
#[derive(Debug)]
pub struct MonthCell<'a> {
    pub date: NaiveDate,
    /// False for the dimmed leading/trailing days of adjacent months.
    pub in_month: bool,
    pub events: Vec<&'a Event>,
    pub overflow: usize,
    pub notes: Vec<&'a CalendarNote>,
}

#[derive(Debug)]
pub struct MonthView<'a> {
    pub anchor: NaiveDate,
    pub cells: Vec<MonthCell<'a>>,
}

/// Year cells carry counts only; drilling into a month uses the month
/// rule.
#[derive(Debug)]
pub struct MonthSummary {
    pub first_day: NaiveDate,
    pub event_count: usize,
    pub note_count: usize,
}

#[derive(Debug)]
pub struct YearView {
    pub anchor: NaiveDate,
    pub months: Vec<MonthSummary>,
}

/// The week view shows every event of every visible day, uncapped.
pub fn compose_week<'a>(
    anchor: NaiveDate,
    events: &'a [Event],
    notes: &'a [CalendarNote],
    opts: &ViewOptions,
) -> WeekView<'a> {
    let days = week_days(anchor, opts)
        .into_iter()
        .map(|date| DayCell {
            date,
            events: events_on_day(events, date),
            notes: notes_on_day(notes, date),
        })
        .collect();

    WeekView { anchor, days }
}

pub fn compose_month<'a>(
    anchor: NaiveDate,
    events: &'a [Event],
    notes: &'a [CalendarNote],
    opts: &ViewOptions,
) -> MonthView<'a> {
    let cap = opts.effective_month_cap();

    let cells = month_grid_days(anchor)
        .into_iter()
        .map(|date| {
            let mut day_events = events_on_day(events, date);
            let overflow = day_events.len().saturating_sub(cap);
            day_events.truncate(cap);

            MonthCell {
                date,
                in_month: date.month() == anchor.month() && date.year() == anchor.year(),
                events: day_events,
                overflow,
                notes: notes_on_day(notes, date),
            }
        })
        .collect();

    MonthView { anchor, cells }
}

pub fn compose_year(anchor: NaiveDate, events: &[Event], notes: &[CalendarNote]) -> YearView {
    let months = year_months(anchor)
        .into_iter()
        .map(|first_day| MonthSummary {
            first_day,
            event_count: events
                .iter()
                .filter(|e| same_month(e.start_time.date(), first_day))
                .count(),
            note_count: notes.iter().filter(|n| same_month(n.date, first_day)).count(),
        })
        .collect();

    YearView { anchor, months }
}

fn same_month(day: NaiveDate, month_anchor: NaiveDate) -> bool {
    day.year() == month_anchor.year() && day.month() == month_anchor.month()
}

/// Percentage of `today`'s year already elapsed, for the year-progress
/// indicator.
pub fn year_progress(today: NaiveDate) -> f64 {
    let days_in_year = if today.leap_year() { 366.0 } else { 365.0 };
    f64::from(today.ordinal()) / days_in_year * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventKind, NoteColor};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_event(title: &str, day: NaiveDate, hour: u32) -> Event {
        let start = day.and_hms_opt(hour, 0, 0).unwrap();
        Event::new(title, start, start + chrono::Duration::hours(1), EventKind::Event)
    }

    // --- ranges ---

    #[test]
    fn week_starts_on_sunday() {
        // 2026-03-20 is a Friday; its week starts Sunday 2026-03-15.
        assert_eq!(week_start(ymd(2026, 3, 20)), ymd(2026, 3, 15));
        assert_eq!(week_start(ymd(2026, 3, 15)), ymd(2026, 3, 15));
    }

    #[test]
    fn week_days_spans_sunday_to_saturday() {
        let days = week_days(ymd(2026, 3, 20), &ViewOptions::default());
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], ymd(2026, 3, 15));
        assert_eq!(days[6], ymd(2026, 3, 21));
    }

    #[test]
    fn narrow_week_is_the_anchor_alone() {
        let opts = ViewOptions { narrow: true, month_cap: None };
        assert_eq!(week_days(ymd(2026, 3, 20), &opts), vec![ymd(2026, 3, 20)]);
    }

    #[test]
    fn month_grid_includes_adjacent_partial_weeks() {
        // April 2026 begins on a Wednesday and ends on Thursday the 30th:
        // the grid runs from Sunday Mar 29 through Saturday May 2.
        let days = month_grid_days(ymd(2026, 4, 15));

        assert_eq!(days.first().copied(), Some(ymd(2026, 3, 29)));
        assert_eq!(days.last().copied(), Some(ymd(2026, 5, 2)));
        assert_eq!(days.len() % 7, 0);
    }

    #[test]
    fn month_grid_exact_weeks_have_no_padding() {
        // February 2026 starts on Sunday and ends on Saturday the 28th.
        let days = month_grid_days(ymd(2026, 2, 10));
        assert_eq!(days.first().copied(), Some(ymd(2026, 2, 1)));
        assert_eq!(days.last().copied(), Some(ymd(2026, 2, 28)));
        assert_eq!(days.len(), 28);
    }

    #[test]
    fn year_months_are_the_twelve_month_starts() {
        let months = year_months(ymd(2026, 7, 4));
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], ymd(2026, 1, 1));
        assert_eq!(months[11], ymd(2026, 12, 1));
    }

    // --- composition ---

    #[test]
    fn week_view_buckets_without_cap() {
        let day = ymd(2026, 3, 18);
        let events: Vec<_> = (0..6).map(|i| make_event("e", day, 8 + i)).collect();
        let notes = vec![CalendarNote::new("todo", day, NoteColor::Yellow)];

        let view = compose_week(ymd(2026, 3, 20), &events, &notes, &ViewOptions::default());

        let cell = view.days.iter().find(|c| c.date == day).unwrap();
        assert_eq!(cell.events.len(), 6);
        assert_eq!(cell.notes.len(), 1);
    }

    #[test]
    fn month_view_caps_and_counts_overflow() {
        let day = ymd(2026, 4, 10);
        let events: Vec<_> = (0..5).map(|i| make_event("e", day, 8 + i)).collect();

        let view = compose_month(ymd(2026, 4, 1), &events, &[], &ViewOptions::default());

        let cell = view.cells.iter().find(|c| c.date == day).unwrap();
        assert_eq!(cell.events.len(), 3);
        assert_eq!(cell.overflow, 2);
    }

    #[test]
    fn narrow_month_cap_is_tighter() {
        let day = ymd(2026, 4, 10);
        let events: Vec<_> = (0..5).map(|i| make_event("e", day, 8 + i)).collect();
        let opts = ViewOptions { narrow: true, month_cap: None };

        let view = compose_month(ymd(2026, 4, 1), &events, &[], &opts);

        let cell = view.cells.iter().find(|c| c.date == day).unwrap();
        assert_eq!(cell.events.len(), 2);
        assert_eq!(cell.overflow, 3);
    }

    #[test]
    fn adjacent_month_cells_are_flagged_but_queryable() {
        // Mar 30 sits in April 2026's leading week.
        let outside = ymd(2026, 3, 30);
        let events = vec![make_event("spillover", outside, 9)];

        let view = compose_month(ymd(2026, 4, 1), &events, &[], &ViewOptions::default());

        let cell = view.cells.iter().find(|c| c.date == outside).unwrap();
        assert!(!cell.in_month);
        assert_eq!(cell.events.len(), 1);
    }

    #[test]
    fn year_view_counts_per_month() {
        let events = vec![
            make_event("jan a", ymd(2026, 1, 5), 9),
            make_event("jan b", ymd(2026, 1, 20), 9),
            make_event("jun", ymd(2026, 6, 1), 9),
            make_event("other year", ymd(2027, 1, 5), 9),
        ];
        let notes = vec![CalendarNote::new("n", ymd(2026, 6, 2), NoteColor::Green)];

        let view = compose_year(ymd(2026, 3, 1), &events, &notes);

        assert_eq!(view.months[0].event_count, 2);
        assert_eq!(view.months[5].event_count, 1);
        assert_eq!(view.months[5].note_count, 1);
        assert_eq!(view.months[11].event_count, 0);
    }

    // --- year progress ---

    #[test]
    fn year_progress_endpoints() {
        let start = year_progress(ymd(2026, 1, 1));
        let end = year_progress(ymd(2026, 12, 31));

        assert!(start > 0.0 && start < 1.0);
        assert!((end - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn year_progress_leap_year_midpoint() {
        // Day 183 of 366 in 2028.
        let progress = year_progress(ymd(2028, 7, 1));
        assert!((progress - 183.0 / 366.0 * 100.0).abs() < 1e-9);
    }
}
