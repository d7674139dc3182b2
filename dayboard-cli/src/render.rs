//! Colored terminal rendering for board types.
//!
//! Extension-trait rendering in the style of the rest of the CLI: core
//! types stay presentation-free, the `Render` trait and the view
//! functions here add the colors.

use chrono::{Datelike, NaiveDate};
use dayboard_core::model::{CalendarNote, Event, EventKind, Goal, GoalCategory, LifeEvent, NoteColor, Priority};
use dayboard_core::view::{MonthView, WeekView, YearView};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

fn kind_marker(kind: EventKind) -> String {
    match kind {
        EventKind::Event => "•".blue().to_string(),
        EventKind::Task => "▸".yellow().to_string(),
        EventKind::Appointment => "◆".cyan().to_string(),
        EventKind::Birthday => "🎂".to_string(),
        EventKind::Anniversary => "🎉".to_string(),
        EventKind::Holiday => "🎈".to_string(),
        EventKind::Special => "★".magenta().to_string(),
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!("{} {}", kind_marker(self.kind), self.title);

        if !self.is_life_projection() {
            line.push_str(&format!(" {}", self.start_time.format("%H:%M").dimmed()));
        }
        if let Some(location) = &self.location {
            line.push_str(&format!(" {}", format!("@{location}").dimmed()));
        }
        if self.recurrence.is_some() {
            line.push_str(&format!(" {}", "↻".dimmed()));
        }
        if self.priority == Some(Priority::High) {
            line.push_str(&format!(" {}", "!".red()));
        }

        line
    }
}

impl Render for CalendarNote {
    fn render(&self) -> String {
        let marker = match self.color {
            NoteColor::Yellow => "▪".yellow().to_string(),
            NoteColor::Pink => "▪".bright_magenta().to_string(),
            NoteColor::Blue => "▪".blue().to_string(),
            NoteColor::Green => "▪".green().to_string(),
            NoteColor::Purple => "▪".purple().to_string(),
        };

        let pin = if self.pinned { " 📌" } else { "" };
        format!("{} {}{}", marker, self.content, pin)
    }
}

impl Render for Goal {
    fn render(&self) -> String {
        let category = match self.category {
            GoalCategory::Personal => "personal",
            GoalCategory::Work => "work",
            GoalCategory::Health => "health",
            GoalCategory::Learning => "learning",
        };

        let mut line = format!(
            "{} {:>3}% {} {}",
            progress_bar(self.progress(), 10),
            self.progress(),
            self.title,
            format!("({category})").dimmed()
        );

        if let Some(due) = self.due_date {
            line.push_str(&format!(" {}", format!("due {}", due.format("%b %e, %Y")).dimmed()));
        }

        line
    }
}

/// Life events render with the distance to their next occurrence.
pub fn render_life_event(life: &LifeEvent, today: NaiveDate) -> String {
    let marker = kind_marker(life.kind.as_event_kind());

    let distance = match life.days_until(today) {
        0 => "today".green().to_string(),
        1 => "tomorrow".to_string(),
        n if n < 0 => format!("{} days ago", -n).dimmed().to_string(),
        n => format!("in {n} days"),
    };

    let mut line = format!(
        "{} {} {} {}",
        marker,
        life.title,
        life.date.format("%b %e").dimmed(),
        distance
    );
    if let Some(note) = &life.note {
        line.push_str(&format!(" {}", format!("— {note}").dimmed()));
    }
    line
}

fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent) * width) / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

fn pluralize<'a>(word: &'a str, plural: &'a str, count: usize) -> &'a str {
    if count == 1 { word } else { plural }
}

// =============================================================================
// Views
// =============================================================================

pub fn render_week(view: &WeekView, today: NaiveDate) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Week of {}", view.days[0].date.format("%B %e, %Y")).bold().to_string());

    for cell in &view.days {
        lines.push(String::new());

        let header = cell.date.format("%a %b %e").to_string();
        if cell.date == today {
            lines.push(format!("{} {}", header.bold(), "(today)".dimmed()));
        } else {
            lines.push(header);
        }

        if cell.events.is_empty() && cell.notes.is_empty() {
            lines.push(format!("   {}", "—".dimmed()));
            continue;
        }
        for event in &cell.events {
            lines.push(format!("   {}", event.render()));
        }
        for note in &cell.notes {
            lines.push(format!("   {}", note.render()));
        }
    }

    lines.join("\n")
}

pub fn render_month(view: &MonthView, today: NaiveDate) -> String {
    let mut lines = Vec::new();
    lines.push(view.anchor.format("%B %Y").to_string().bold().to_string());
    lines.push("Su Mo Tu We Th Fr Sa".dimmed().to_string());

    // Day-number grid; days with entries are highlighted.
    for week in view.cells.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                let number = format!("{:>2}", cell.date.day());
                if !cell.in_month {
                    number.dimmed().to_string()
                } else if cell.date == today {
                    number.bold().underline().to_string()
                } else if !cell.events.is_empty() || !cell.notes.is_empty() {
                    number.cyan().to_string()
                } else {
                    number
                }
            })
            .collect();
        lines.push(row.join(" "));
    }

    // Detail list for the days that have anything on them.
    let busy: Vec<_> = view
        .cells
        .iter()
        .filter(|c| !c.events.is_empty() || !c.notes.is_empty() || c.overflow > 0)
        .collect();

    if !busy.is_empty() {
        lines.push(String::new());
        for cell in busy {
            let label = cell.date.format("%b %e").to_string();
            lines.push(if cell.in_month {
                label
            } else {
                label.dimmed().to_string()
            });

            for event in &cell.events {
                lines.push(format!("   {}", event.render()));
            }
            if cell.overflow > 0 {
                lines.push(format!("   {}", format!("+{} more", cell.overflow).dimmed()));
            }
            for note in &cell.notes {
                lines.push(format!("   {}", note.render()));
            }
        }
    }

    lines.join("\n")
}

pub fn render_year(view: &YearView) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{}", view.anchor.year()).bold().to_string());

    for month in &view.months {
        let name = month.first_day.format("%B").to_string();

        if month.event_count == 0 && month.note_count == 0 {
            lines.push(format!("{:<10} {}", name, "—".dimmed()));
            continue;
        }

        let mut parts = Vec::new();
        if month.event_count > 0 {
            parts.push(format!(
                "{} {}",
                month.event_count,
                pluralize("event", "events", month.event_count)
            ));
        }
        if month.note_count > 0 {
            parts.push(format!(
                "{} {}",
                month.note_count,
                pluralize("note", "notes", month.note_count)
            ));
        }
        lines.push(format!("{:<10} {}", name, parts.join(", ")));
    }

    lines.join("\n")
}

pub fn render_year_progress(today: NaiveDate, percent: f64) -> String {
    let width = 30;
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled.min(width)), "░".repeat(width - filled.min(width)));

    format!("{} ▕{}▏ {:.1}%", today.year().bold(), bar, percent)
}
