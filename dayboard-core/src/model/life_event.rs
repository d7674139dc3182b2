//! Life events: birthdays, anniversaries, holidays, special occasions.
//!
//! Life events live in their own collection and carry a single date
//! rather than a start/end pair. For unified display they are projected
//! into read-only [`Event`](super::Event) records by the normalizer.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::EventKind;
use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: String,
    pub title: String,
    #[serde(with = "timestamp::lenient_date")]
    pub date: NaiveDate,
    pub kind: LifeEventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Icon selector for the presentation layer (e.g. "cake", "heart").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub repeats_annually: bool,
}

impl LifeEvent {
    /// Create a life event with a fresh id. Annual repetition is on by
    /// default; one-off occasions opt out.
    pub fn new(title: impl Into<String>, date: NaiveDate, kind: LifeEventKind) -> Self {
        LifeEvent {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            date,
            kind,
            note: None,
            color: None,
            icon: None,
            repeats_annually: true,
        }
    }

    /// Days from `today` to the next occurrence.
    ///
    /// Annual repeats count to the upcoming anniversary of the month/day
    /// (today itself counts as 0); one-off dates count to the stored date
    /// and go negative once it has passed.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        if !self.repeats_annually {
            return (self.date - today).num_days();
        }

        let this_year = occurrence_in_year(self.date, today.year());
        let next = if this_year < today {
            occurrence_in_year(self.date, today.year() + 1)
        } else {
            this_year
        };
        (next - today).num_days()
    }
}

/// The anniversary of `date` in `year`. Feb 29 lands on Mar 1 in
/// non-leap years.
fn occurrence_in_year(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeEventKind {
    Birthday,
    Anniversary,
    Holiday,
    Special,
}

impl LifeEventKind {
    /// The event kind used when this life event is projected for display.
    pub fn as_event_kind(&self) -> EventKind {
        match self {
            LifeEventKind::Birthday => EventKind::Birthday,
            LifeEventKind::Anniversary => EventKind::Anniversary,
            LifeEventKind::Holiday => EventKind::Holiday,
            LifeEventKind::Special => EventKind::Special,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_until_upcoming_annual() {
        let birthday = LifeEvent::new("Ada", ymd(1990, 3, 25), LifeEventKind::Birthday);
        assert_eq!(birthday.days_until(ymd(2026, 3, 20)), 5);
    }

    #[test]
    fn days_until_today_is_zero() {
        let birthday = LifeEvent::new("Ada", ymd(1990, 3, 25), LifeEventKind::Birthday);
        assert_eq!(birthday.days_until(ymd(2026, 3, 25)), 0);
    }

    #[test]
    fn days_until_wraps_to_next_year() {
        let birthday = LifeEvent::new("Ada", ymd(1990, 1, 10), LifeEventKind::Birthday);
        // Jan 10 has passed; next occurrence is Jan 10 of the following year.
        assert_eq!(birthday.days_until(ymd(2026, 12, 31)), 10);
    }

    #[test]
    fn days_until_one_off_goes_negative() {
        let mut gig = LifeEvent::new("Concert", ymd(2026, 3, 1), LifeEventKind::Special);
        gig.repeats_annually = false;
        assert_eq!(gig.days_until(ymd(2026, 3, 11)), -10);
    }

    #[test]
    fn leap_day_lands_on_march_first() {
        let birthday = LifeEvent::new("Leapling", ymd(2000, 2, 29), LifeEventKind::Birthday);
        // 2026 is not a leap year: Feb 29 resolves to Mar 1.
        assert_eq!(birthday.days_until(ymd(2026, 2, 27)), 2);
    }
}
