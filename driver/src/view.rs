use std::io::{self, Write};

use life_engine::Grid;

use crate::session::Session;

const ALIVE: char = '#';
const DEAD: char = '.';

/// Draws a grid as text, one line per row.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
    for (col, _, cell) in grid.iter() {
        out.push(if cell.is_alive() { ALIVE } else { DEAD });
        if col + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}

/// Writes the grid followed by a status line.
pub fn write_frame(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let engine = session.engine();
    write!(out, "{}", render(engine.active()))?;
    writeln!(
        out,
        "generation {}, population {}{}",
        session.generation(),
        engine.population(),
        if session.is_paused() { ", paused" } else { "" }
    )?;
    out.flush()
}
