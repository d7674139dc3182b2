use anyhow::Result;
use chrono::{Duration, NaiveDateTime};
use clap::{Subcommand, ValueEnum};
use dayboard_core::Board;
use dayboard_core::model::{Event, EventKind, Priority, Recurrence};
use dayboard_core::normalize::DeleteOutcome;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::input;
use crate::render::Render;

#[derive(Subcommand)]
pub enum Action {
    /// Create an event; prompts for anything missing
    Add {
        title: Option<String>,

        /// Start date/time (e.g. "2026-03-20 15:00", "tomorrow 3pm")
        #[arg(short, long)]
        start: Option<String>,

        /// End date/time (e.g. "until 5pm")
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// Duration from start (e.g. "90m", "2h")
        #[arg(short, long)]
        duration: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(short, long, value_enum, default_value = "event")]
        kind: KindArg,

        /// Display color (e.g. "#7c3aed")
        #[arg(long)]
        color: Option<String>,

        #[arg(long, value_enum)]
        priority: Option<PriorityArg>,

        /// Recurrence tag; stored, never expanded into instances
        #[arg(long, value_enum)]
        repeat: Option<RepeatArg>,
    },

    /// Change fields of an existing event
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, value_enum)]
        priority: Option<PriorityArg>,
    },

    /// Delete by id; life events are routed to their own collection
    Rm { id: String },

    /// List events, optionally only one day's
    List {
        #[arg(short, long)]
        date: Option<String>,
    },
}

pub fn run(board: &mut Board, action: Action) -> Result<()> {
    match action {
        Action::Add {
            title,
            start,
            end,
            duration,
            location,
            description,
            kind,
            color,
            priority,
            repeat,
        } => {
            let interactive = title.is_none() || start.is_none();

            let title = match title {
                Some(t) => t,
                None => Input::<String>::new().with_prompt("  Title").interact_text()?,
            };

            let start_time = match start {
                Some(s) => input::parse_datetime(&s)?,
                None => prompt_with_retry("  When?", input::parse_datetime)?,
            };

            let end_time = if let Some(end_input) = end {
                input::parse_end(&end_input, start_time)?
            } else if let Some(dur_input) = duration {
                input::apply_duration(start_time, &dur_input)?
            } else {
                start_time + Duration::hours(1)
            };

            let mut event = Event::new(title, start_time, end_time, kind.into());
            event.location = location;
            event.description = description;
            event.color = color;
            event.priority = priority.map(Into::into);
            event.recurrence = repeat.map(Into::into);

            let summary = format!("  Created: {}", event.title);
            board.create_event(event);

            if interactive {
                println!();
            }
            println!("{}", summary.green());
        }

        Action::Edit {
            id,
            title,
            start,
            end,
            location,
            description,
            priority,
        } => {
            let Some(existing) = board.events.iter().find(|e| e.id == id) else {
                if board.life_events.iter().any(|l| l.id == id) {
                    println!("\"{id}\" is a life event; edit it with `dayboard life`");
                } else {
                    println!("No event with id \"{id}\"");
                }
                return Ok(());
            };

            let mut updated = existing.clone();
            if let Some(title) = title {
                updated.title = title;
            }
            if let Some(start) = start {
                updated.start_time = input::parse_datetime(&start)?;
            }
            if let Some(end) = end {
                updated.end_time = input::parse_end(&end, updated.start_time)?;
            }
            if let Some(location) = location {
                updated.location = Some(location);
            }
            if let Some(description) = description {
                updated.description = Some(description);
            }
            if let Some(priority) = priority {
                updated.priority = Some(priority.into());
            }

            let summary = format!("  Updated: {}", updated.title);
            board.update_event(updated);
            println!("{}", summary.green());
        }

        Action::Rm { id } => match board.delete_event(&id) {
            DeleteOutcome::RemovedEvent => println!("{}", "  Removed event".red()),
            DeleteOutcome::RemovedLifeEvent => println!("{}", "  Removed life event".red()),
            DeleteOutcome::NotFound => println!("No event with id \"{id}\""),
        },

        Action::List { date } => {
            let mut unified = board.unified_events();
            unified.sort_by_key(|e| e.start_time);

            let day = date.as_deref().map(input::parse_date).transpose()?;
            let listed: Vec<&Event> = match day {
                Some(day) => unified.iter().filter(|e| e.day() == day).collect(),
                None => unified.iter().collect(),
            };

            if listed.is_empty() {
                println!("{}", "No events".dimmed());
                return Ok(());
            }
            for event in listed {
                println!(
                    "{}  {} {}",
                    event.start_time.format("%Y-%m-%d"),
                    event.render(),
                    event.id.dimmed()
                );
            }
        }
    }

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<F>(prompt: &str, parse: F) -> Result<NaiveDateTime>
where
    F: Fn(&str) -> Result<NaiveDateTime>,
{
    loop {
        let raw: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&raw) {
            Ok(result) => return Ok(result),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Event,
    Task,
    Appointment,
    Birthday,
    Anniversary,
    Holiday,
    Special,
}

impl From<KindArg> for EventKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Event => EventKind::Event,
            KindArg::Task => EventKind::Task,
            KindArg::Appointment => EventKind::Appointment,
            KindArg::Birthday => EventKind::Birthday,
            KindArg::Anniversary => EventKind::Anniversary,
            KindArg::Holiday => EventKind::Holiday,
            KindArg::Special => EventKind::Special,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(priority: PriorityArg) -> Self {
        match priority {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RepeatArg {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<RepeatArg> for Recurrence {
    fn from(repeat: RepeatArg) -> Self {
        match repeat {
            RepeatArg::Daily => Recurrence::Daily,
            RepeatArg::Weekly => Recurrence::Weekly,
            RepeatArg::Monthly => Recurrence::Monthly,
            RepeatArg::Yearly => Recurrence::Yearly,
        }
    }
}
