use crate::error::{Error, Result};
use crate::grid::CellState::{Alive, Dead};
use rand::Rng;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

/// Fixed-size `cols x rows` block of cells, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        let len = cols
            .checked_mul(rows)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(Error::InvalidDimensions { cols, rows })?;
        Ok(Grid {
            cols,
            rows,
            cells: vec![Dead; len],
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows
    }

    fn index(&self, col: usize, row: usize) -> Result<usize> {
        if !self.contains(col, row) {
            return Err(Error::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, col: usize, row: usize) -> Result<CellState> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, col: usize, row: usize, value: CellState) -> Result<()> {
        let idx = self.index(col, row)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Reads a cell after wrapping both coordinates onto the torus.
    /// Never fails: any signed offset lands inside the grid.
    pub fn get_wrapped(&self, col: isize, row: isize) -> CellState {
        let col = col.rem_euclid(self.cols as isize) as usize;
        let row = row.rem_euclid(self.rows as isize) as usize;
        self.cells[row * self.cols + col]
    }

    /// Mutable cells in the same row-major order as [`Grid::iter`].
    pub(crate) fn cells_mut(&mut self) -> std::slice::IterMut<'_, CellState> {
        self.cells.iter_mut()
    }

    pub fn fill(&mut self, value: CellState) {
        self.cells.fill(value);
    }

    /// Sets every cell alive or dead with probability 1/2, using the
    /// thread-local generator.
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        self.randomize_with(&mut rng);
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = if rng.random_bool(0.5) { Alive } else { Dead };
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterates `(col, row, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx % cols, idx / cols, *cell))
    }
}
