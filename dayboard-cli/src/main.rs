mod commands;
mod input;
mod render;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dayboard_core::Board;
use dayboard_core::config::BoardConfig;
use dayboard_core::store::JsonFileStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dayboard")]
#[command(about = "A calendar board in your terminal: events, notes, goals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the week containing a date (defaults to today)
    Week {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the month grid containing a date
    Month {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show per-month counts for a year
    Year {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Manage events
    Event {
        #[command(subcommand)]
        action: commands::event::Action,
    },
    /// Manage sticky notes
    Note {
        #[command(subcommand)]
        action: commands::note::Action,
    },
    /// Manage life events (birthdays, anniversaries, holidays)
    Life {
        #[command(subcommand)]
        action: commands::life::Action,
    },
    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: commands::goal::Action,
    },
    /// Show how far the year has progressed
    Progress,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = BoardConfig::load()?;
    let store = JsonFileStore::new(config.resolve_data_dir()?);
    let mut board = Board::load(Box::new(store));
    let opts = config.view_options();

    match cli.command {
        Commands::Week { date } => commands::week::run(&board, parse_anchor(date.as_deref())?, &opts),
        Commands::Month { date } => {
            commands::month::run(&board, parse_anchor(date.as_deref())?, &opts)
        }
        Commands::Year { date } => commands::year::run(&board, parse_anchor(date.as_deref())?),
        Commands::Event { action } => commands::event::run(&mut board, action),
        Commands::Note { action } => commands::note::run(&mut board, action),
        Commands::Life { action } => commands::life::run(&mut board, action),
        Commands::Goal { action } => commands::goal::run(&mut board, action),
        Commands::Progress => commands::progress::run(),
    }
}

fn parse_anchor(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(s) => input::parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}
