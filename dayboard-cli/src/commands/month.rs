use anyhow::Result;
use chrono::{Local, NaiveDate};
use dayboard_core::Board;
use dayboard_core::view::{ViewOptions, compose_month};

use crate::render;

pub fn run(board: &Board, anchor: NaiveDate, opts: &ViewOptions) -> Result<()> {
    let unified = board.unified_events();
    let view = compose_month(anchor, &unified, &board.notes, opts);

    println!("{}", render::render_month(&view, Local::now().date_naive()));
    Ok(())
}
