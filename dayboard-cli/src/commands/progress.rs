use anyhow::Result;
use chrono::Local;
use dayboard_core::view::year_progress;

use crate::render;

pub fn run() -> Result<()> {
    let today = Local::now().date_naive();
    println!("{}", render::render_year_progress(today, year_progress(today)));
    Ok(())
}
