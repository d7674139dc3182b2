use anyhow::Result;
use chrono::NaiveDate;
use dayboard_core::Board;
use dayboard_core::view::compose_year;

use crate::render;

pub fn run(board: &Board, anchor: NaiveDate) -> Result<()> {
    let unified = board.unified_events();
    let view = compose_year(anchor, &unified, &board.notes);

    println!("{}", render::render_year(&view));
    Ok(())
}
