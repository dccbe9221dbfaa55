use crate::config::Config;
use crate::edit::EditController;
use crate::error::Result;
use crate::grid::CellState::{self, Alive, Dead};
use crate::grid::Grid;
use crate::pair::{Buffer, GridPair, ResetMode};
use rand::Rng;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// B3/S23 for a single cell.
pub fn next_state(current: CellState, alive_neighbors: usize) -> CellState {
    match (current, alive_neighbors) {
        (Alive, 2..=3) => Alive, // Survives
        (Dead, 3) => Alive,      // Becomes alive
        _ => Dead,               // Dies or remains dead
    }
}

/// Count the number of alive neighbors for a cell, wrapping at the edges.
pub fn alive_neighbors(grid: &Grid, col: usize, row: usize) -> usize {
    let (col, row) = (col as isize, row as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dc, dr)| grid.get_wrapped(col + dc, row + dr).is_alive())
        .count()
}

/// Game of Life on a torus, double buffered.
///
/// The only state is the pair of grids and which one is active; run/pause
/// belongs to whoever calls [`SimulationEngine::advance`].
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    grids: GridPair,
}

impl SimulationEngine {
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        let grids = GridPair::new(cols, rows)?;
        log::debug!("created {cols}x{rows} engine");
        Ok(SimulationEngine { grids })
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        SimulationEngine::new(config.cols, config.rows)
    }

    pub fn cols(&self) -> usize {
        self.grids.active().cols()
    }

    pub fn rows(&self) -> usize {
        self.grids.active().rows()
    }

    /// The current generation, for rendering.
    pub fn active(&self) -> &Grid {
        self.grids.active()
    }

    pub fn grids(&self) -> &GridPair {
        &self.grids
    }

    pub fn cell_state(&self, col: usize, row: usize) -> Result<CellState> {
        self.grids.active().get(col, row)
    }

    /// Writes one cell of the current generation directly.
    pub fn set_cell(&mut self, col: usize, row: usize, value: CellState) -> Result<()> {
        self.grids.set_cell(Buffer::Active, col, row, value)
    }

    pub fn population(&self) -> usize {
        self.grids.active().population()
    }

    /// Advance the grid by one generation.
    ///
    /// Every cell of the inactive buffer is rewritten from the active one,
    /// then the buffers swap.
    pub fn advance(&mut self) {
        let (current, next) = self.grids.split();
        debug_assert_eq!((current.cols(), current.rows()), (next.cols(), next.rows()));
        for ((col, row, state), cell) in current.iter().zip(next.cells_mut()) {
            *cell = next_state(state, alive_neighbors(current, col, row));
        }
        self.grids.swap();
        log::trace!("advanced, population {}", self.population());
    }

    /// Resets the current generation according to `mode` and clears the
    /// other buffer.
    pub fn reset(&mut self, mode: ResetMode) {
        let mut rng = rand::rng();
        self.reset_with(mode, &mut rng);
    }

    pub fn reset_with<R: Rng + ?Sized>(&mut self, mode: ResetMode, rng: &mut R) {
        self.grids.reset_with(Buffer::Active, mode, rng);
        self.grids.reset_with(Buffer::Inactive, ResetMode::AllDead, rng);
        log::debug!("reset to {mode:?}, population {}", self.population());
    }

    /// Paints the cell under a pixel position. Out-of-grid positions are
    /// ignored and return `Ok(false)`.
    pub fn edit(
        &mut self,
        pixel_x: i64,
        pixel_y: i64,
        cell_size: usize,
        erase: bool,
    ) -> Result<bool> {
        EditController::new(&mut self.grids).apply(pixel_x, pixel_y, cell_size, erase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            let survives = if n == 2 || n == 3 { Alive } else { Dead };
            let born = if n == 3 { Alive } else { Dead };
            assert_eq!(next_state(Alive, n), survives, "alive with {n}");
            assert_eq!(next_state(Dead, n), born, "dead with {n}");
        }
    }

    #[test]
    fn neighbor_count_skips_the_cell_itself() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.fill(Alive);
        assert_eq!(alive_neighbors(&grid, 2, 2), 8);
        grid.set(2, 2, Dead).unwrap();
        assert_eq!(alive_neighbors(&grid, 2, 2), 8);
        grid.set(1, 1, Dead).unwrap();
        assert_eq!(alive_neighbors(&grid, 2, 2), 7);
    }

    #[test]
    fn corner_sees_all_three_wrapped_neighbors() {
        let mut grid = Grid::new(6, 5).unwrap();
        grid.set(5, 4, Alive).unwrap();
        grid.set(5, 0, Alive).unwrap();
        grid.set(0, 4, Alive).unwrap();
        assert_eq!(alive_neighbors(&grid, 0, 0), 3);
    }

    #[test]
    fn tiny_grids_count_the_same_cell_more_than_once() {
        // On a 1x1 torus all eight offsets land on the cell itself.
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, Alive).unwrap();
        assert_eq!(alive_neighbors(&grid, 0, 0), 8);
    }

    #[test]
    fn advance_swaps_buffers() {
        let mut engine = SimulationEngine::new(4, 4).unwrap();
        assert_eq!(engine.grids().active_index(), 0);
        engine.advance();
        assert_eq!(engine.grids().active_index(), 1);
        engine.advance();
        assert_eq!(engine.grids().active_index(), 0);
    }

    #[test]
    fn stale_inactive_contents_do_not_leak() {
        let mut engine = SimulationEngine::new(6, 6).unwrap();
        engine.grids.reset(Buffer::Inactive, ResetMode::AllAlive);
        engine.advance();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn every_inactive_cell_is_rewritten() {
        let mut engine = SimulationEngine::new(7, 7).unwrap();
        for col in 2..=4 {
            engine.set_cell(col, 3, Alive).unwrap();
        }
        engine.grids.reset(Buffer::Inactive, ResetMode::AllAlive);

        engine.advance();

        let alive: Vec<_> = engine
            .active()
            .iter()
            .filter(|(_, _, state)| state.is_alive())
            .map(|(col, row, _)| (col, row))
            .collect();
        assert_eq!(alive, vec![(3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn reset_clears_the_inactive_buffer() {
        let mut engine = SimulationEngine::new(4, 4).unwrap();
        engine.grids.reset(Buffer::Inactive, ResetMode::AllAlive);
        engine.reset(ResetMode::AllAlive);
        assert_eq!(engine.population(), 16);
        assert_eq!(engine.grids().inactive().population(), 0);
    }

    #[test]
    fn edit_writes_the_active_buffer() {
        let mut engine = SimulationEngine::new(10, 10).unwrap();
        assert_eq!(engine.edit(25, 47, 5, false), Ok(true));
        assert_eq!(engine.cell_state(5, 9), Ok(Alive));
        assert_eq!(engine.edit(50, 0, 5, false), Ok(false));
        assert_eq!(engine.population(), 1);
    }
}
