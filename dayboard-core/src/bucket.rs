//! Day bucketing for grid cells.
//!
//! Every view resolves its cells through these two functions. They are
//! pure, preserve input order, and borrow rather than clone — they run
//! once per cell per render.

use chrono::NaiveDate;

use crate::model::{CalendarNote, Event};

/// Events whose start falls on `day`.
///
/// An event spanning midnight buckets only on its start day; multi-day
/// spanning is not supported.
pub fn events_on_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.start_time.date() == day).collect()
}

/// Notes pinned to `day`.
pub fn notes_on_day(notes: &[CalendarNote], day: NaiveDate) -> Vec<&CalendarNote> {
    notes.iter().filter(|n| n.date == day).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventKind, NoteColor};
    use chrono::{Duration, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn make_event(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::new(title, start, end, EventKind::Event)
    }

    #[test]
    fn picks_only_matching_days() {
        let events = vec![
            make_event("hit", at(2026, 3, 20, 9, 0, 0), at(2026, 3, 20, 10, 0, 0)),
            make_event("miss", at(2026, 3, 21, 9, 0, 0), at(2026, 3, 21, 10, 0, 0)),
        ];

        let day = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let bucket = events_on_day(&events, day);

        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].title, "hit");
    }

    #[test]
    fn preserves_input_order() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let events = vec![
            make_event("late", at(2026, 3, 20, 18, 0, 0), at(2026, 3, 20, 19, 0, 0)),
            make_event("early", at(2026, 3, 20, 8, 0, 0), at(2026, 3, 20, 9, 0, 0)),
        ];

        let titles: Vec<_> = events_on_day(&events, day).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["late", "early"]);
    }

    #[test]
    fn midnight_spanning_event_buckets_on_start_day_only() {
        let start = at(2026, 3, 20, 23, 59, 59);
        let events = vec![make_event("party", start, start + Duration::hours(2))];

        let start_day = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let next_day = NaiveDate::from_ymd_opt(2026, 3, 21).unwrap();

        assert_eq!(events_on_day(&events, start_day).len(), 1);
        assert!(events_on_day(&events, next_day).is_empty());
    }

    #[test]
    fn notes_bucket_by_pinned_date() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let other = NaiveDate::from_ymd_opt(2026, 3, 22).unwrap();
        let notes = vec![
            CalendarNote::new("here", day, NoteColor::Yellow),
            CalendarNote::new("elsewhere", other, NoteColor::Blue),
        ];

        let bucket = notes_on_day(&notes, day);
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].content, "here");
    }

    #[test]
    fn repeated_calls_do_not_disturb_inputs() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let events = vec![make_event("same", at(2026, 3, 20, 9, 0, 0), at(2026, 3, 20, 10, 0, 0))];

        let first: Vec<_> = events_on_day(&events, day).iter().map(|e| e.id.clone()).collect();
        let second: Vec<_> = events_on_day(&events, day).iter().map(|e| e.id.clone()).collect();

        assert_eq!(first, second);
        assert_eq!(events.len(), 1);
    }
}
