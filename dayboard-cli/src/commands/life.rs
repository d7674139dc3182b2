use anyhow::Result;
use chrono::Local;
use clap::{Subcommand, ValueEnum};
use dayboard_core::Board;
use dayboard_core::model::{LifeEvent, LifeEventKind};
use owo_colors::OwoColorize;

use crate::input;
use crate::render;

#[derive(Subcommand)]
pub enum Action {
    /// Add a birthday, anniversary, holiday, or special occasion
    Add {
        title: String,

        /// The date (e.g. "1990-06-01", "jun 1")
        #[arg(short, long)]
        date: String,

        #[arg(short, long, value_enum, default_value = "birthday")]
        kind: LifeKindArg,

        #[arg(short, long)]
        note: Option<String>,

        /// Display color (e.g. "#f472b6")
        #[arg(long)]
        color: Option<String>,

        /// Icon selector for the presentation layer (e.g. "cake")
        #[arg(long)]
        icon: Option<String>,

        /// One-off occasion: do not repeat annually
        #[arg(long)]
        once: bool,
    },

    /// Remove a life event
    Rm { id: String },

    /// List life events by distance to their next occurrence
    List,
}

pub fn run(board: &mut Board, action: Action) -> Result<()> {
    match action {
        Action::Add {
            title,
            date,
            kind,
            note,
            color,
            icon,
            once,
        } => {
            let mut life = LifeEvent::new(title, input::parse_date(&date)?, kind.into());
            life.note = note;
            life.color = color;
            life.icon = icon;
            life.repeats_annually = !once;

            let summary = format!("  Added: {}", life.title);
            board.create_life_event(life);
            println!("{}", summary.green());
        }

        Action::Rm { id } => {
            if board.delete_life_event(&id) {
                println!("{}", "  Removed life event".red());
            } else {
                println!("No life event with id \"{id}\"");
            }
        }

        Action::List => {
            if board.life_events.is_empty() {
                println!("{}", "No life events".dimmed());
                return Ok(());
            }

            let today = Local::now().date_naive();
            let mut listed: Vec<&LifeEvent> = board.life_events.iter().collect();
            listed.sort_by_key(|l| l.days_until(today));

            for life in listed {
                println!("{} {}", render::render_life_event(life, today), life.id.dimmed());
            }
        }
    }

    Ok(())
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LifeKindArg {
    Birthday,
    Anniversary,
    Holiday,
    Special,
}

impl From<LifeKindArg> for LifeEventKind {
    fn from(kind: LifeKindArg) -> Self {
        match kind {
            LifeKindArg::Birthday => LifeEventKind::Birthday,
            LifeKindArg::Anniversary => LifeEventKind::Anniversary,
            LifeKindArg::Holiday => LifeEventKind::Holiday,
            LifeKindArg::Special => LifeEventKind::Special,
        }
    }
}
