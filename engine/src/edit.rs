use crate::error::Result;
use crate::grid::{CellState, Grid};
use crate::pair::{Buffer, GridPair};

/// Maps a pixel position onto the grid. Positions left of or above the
/// origin, past the last cell, or any position with a zero cell size map
/// to nothing.
pub fn pixel_to_cell(
    grid: &Grid,
    pixel_x: i64,
    pixel_y: i64,
    cell_size: usize,
) -> Option<(usize, usize)> {
    if cell_size == 0 || pixel_x < 0 || pixel_y < 0 {
        return None;
    }
    let col = usize::try_from(pixel_x).ok()? / cell_size;
    let row = usize::try_from(pixel_y).ok()? / cell_size;
    grid.contains(col, row).then_some((col, row))
}

/// Paints single cells of the active buffer from pointer positions.
///
/// Edits land in the active buffer, so they only persist if the caller
/// stops advancing the generation while painting.
pub struct EditController<'a> {
    grids: &'a mut GridPair,
}

impl<'a> EditController<'a> {
    pub fn new(grids: &'a mut GridPair) -> Self {
        EditController { grids }
    }

    /// Sets the cell under `(pixel_x, pixel_y)` alive, or dead when `erase`
    /// is set. Returns `Ok(false)` without touching anything when the
    /// position is outside the grid.
    pub fn apply(
        &mut self,
        pixel_x: i64,
        pixel_y: i64,
        cell_size: usize,
        erase: bool,
    ) -> Result<bool> {
        let Some((col, row)) = pixel_to_cell(self.grids.active(), pixel_x, pixel_y, cell_size)
        else {
            return Ok(false);
        };
        let value = if erase { CellState::Dead } else { CellState::Alive };
        self.grids.set_cell(Buffer::Active, col, row, value)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState::{Alive, Dead};

    #[test]
    fn pixels_divide_down_to_cells() {
        let grid = Grid::new(8, 6).unwrap();
        assert_eq!(pixel_to_cell(&grid, 0, 0, 10), Some((0, 0)));
        assert_eq!(pixel_to_cell(&grid, 19, 9, 10), Some((1, 0)));
        assert_eq!(pixel_to_cell(&grid, 79, 59, 10), Some((7, 5)));
    }

    #[test]
    fn pixels_off_the_grid_map_to_nothing() {
        let grid = Grid::new(8, 6).unwrap();
        assert_eq!(pixel_to_cell(&grid, 80, 0, 10), None);
        assert_eq!(pixel_to_cell(&grid, 0, 60, 10), None);
        assert_eq!(pixel_to_cell(&grid, -1, 5, 10), None);
        assert_eq!(pixel_to_cell(&grid, 5, -9, 10), None);
        assert_eq!(pixel_to_cell(&grid, 5, 5, 0), None);
    }

    #[test]
    fn draw_then_erase_hits_the_active_buffer() {
        let mut pair = GridPair::new(8, 6).unwrap();
        assert_eq!(EditController::new(&mut pair).apply(35, 21, 10, false), Ok(true));
        assert_eq!(pair.active().get(3, 2), Ok(Alive));
        assert_eq!(pair.inactive().population(), 0);

        assert_eq!(EditController::new(&mut pair).apply(31, 28, 10, true), Ok(true));
        assert_eq!(pair.active().get(3, 2), Ok(Dead));
    }

    #[test]
    fn edits_follow_the_buffer_after_a_swap() {
        let mut pair = GridPair::new(4, 4).unwrap();
        pair.swap();
        assert_eq!(EditController::new(&mut pair).apply(0, 0, 1, false), Ok(true));
        assert_eq!(pair.active_index(), 1);
        assert_eq!(pair.active().get(0, 0), Ok(Alive));
        assert_eq!(pair.inactive().population(), 0);
    }

    #[test]
    fn out_of_grid_edit_is_a_no_op() {
        let mut pair = GridPair::new(4, 4).unwrap();
        pair.reset(Buffer::Active, crate::pair::ResetMode::AllAlive);
        assert_eq!(EditController::new(&mut pair).apply(400, 0, 10, true), Ok(false));
        assert_eq!(pair.active().population(), 16);
    }
}
