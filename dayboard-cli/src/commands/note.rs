use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use dayboard_core::Board;
use dayboard_core::model::{CalendarNote, NoteColor};
use owo_colors::OwoColorize;

use crate::input;
use crate::render::Render;

#[derive(Subcommand)]
pub enum Action {
    /// Pin a note to a day
    Add {
        content: String,

        /// The day to pin to; defaults to today
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long, value_enum, default_value = "yellow")]
        color: ColorArg,
    },

    /// Toggle a note's pinned flag
    Pin { id: String },

    /// Remove a note
    Rm { id: String },

    /// List notes, optionally only one day's
    List {
        #[arg(short, long)]
        date: Option<String>,
    },
}

pub fn run(board: &mut Board, action: Action) -> Result<()> {
    match action {
        Action::Add { content, date, color } => {
            let day = match date {
                Some(raw) => input::parse_date(&raw)?,
                None => chrono::Local::now().date_naive(),
            };

            let note = CalendarNote::new(content, day, color.into());
            let summary = format!("  Noted for {}", note.date.format("%b %e, %Y"));
            board.create_note(note);
            println!("{}", summary.green());
        }

        Action::Pin { id } => match board.toggle_pin(&id) {
            Some(true) => println!("{}", "  Pinned".green()),
            Some(false) => println!("  Unpinned"),
            None => println!("No note with id \"{id}\""),
        },

        Action::Rm { id } => {
            if board.delete_note(&id) {
                println!("{}", "  Removed note".red());
            } else {
                println!("No note with id \"{id}\"");
            }
        }

        Action::List { date } => {
            let day = date.as_deref().map(input::parse_date).transpose()?;
            let listed: Vec<&CalendarNote> = match day {
                Some(day) => board.notes.iter().filter(|n| n.date == day).collect(),
                None => board.notes.iter().collect(),
            };

            if listed.is_empty() {
                println!("{}", "No notes".dimmed());
                return Ok(());
            }
            for note in listed {
                println!(
                    "{}  {} {}",
                    note.date.format("%Y-%m-%d"),
                    note.render(),
                    note.id.dimmed()
                );
            }
        }
    }

    Ok(())
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorArg {
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
}

impl From<ColorArg> for NoteColor {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Yellow => NoteColor::Yellow,
            ColorArg::Pink => NoteColor::Pink,
            ColorArg::Blue => NoteColor::Blue,
            ColorArg::Green => NoteColor::Green,
            ColorArg::Purple => NoteColor::Purple,
        }
    }
}
