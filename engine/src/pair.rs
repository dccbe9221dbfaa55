use crate::error::Result;
use crate::grid::{CellState, Grid};
use rand::Rng;

/// Selects one of the two buffers relative to the current active marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    AllDead,
    AllAlive,
    Random,
}

/// Double buffer: the active grid is the current generation, the inactive
/// one is the write target for the next.
#[derive(Debug, Clone)]
pub struct GridPair {
    buffers: [Grid; 2],
    active: usize,
}

impl GridPair {
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        let grid = Grid::new(cols, rows)?;
        Ok(GridPair {
            buffers: [grid.clone(), grid],
            active: 0,
        })
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    fn inactive_index(&self) -> usize {
        (self.active + 1) % 2
    }

    fn index_of(&self, which: Buffer) -> usize {
        match which {
            Buffer::Active => self.active,
            Buffer::Inactive => self.inactive_index(),
        }
    }

    pub fn active(&self) -> &Grid {
        &self.buffers[self.active]
    }

    pub fn inactive(&self) -> &Grid {
        &self.buffers[self.inactive_index()]
    }

    pub fn get_mut(&mut self, which: Buffer) -> &mut Grid {
        let idx = self.index_of(which);
        &mut self.buffers[idx]
    }

    /// Borrows the active grid for reading and the inactive one for writing
    /// at the same time.
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        let [first, second] = &mut self.buffers;
        if self.active == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    pub fn swap(&mut self) {
        self.active = self.inactive_index();
    }

    pub fn reset(&mut self, which: Buffer, mode: ResetMode) {
        let mut rng = rand::rng();
        self.reset_with(which, mode, &mut rng);
    }

    /// Like [`GridPair::reset`], drawing `Random` cells from `rng`.
    pub fn reset_with<R: Rng + ?Sized>(&mut self, which: Buffer, mode: ResetMode, rng: &mut R) {
        let grid = self.get_mut(which);
        match mode {
            ResetMode::AllDead => grid.fill(CellState::Dead),
            ResetMode::AllAlive => grid.fill(CellState::Alive),
            ResetMode::Random => grid.randomize_with(rng),
        }
    }

    pub fn set_cell(
        &mut self,
        which: Buffer,
        col: usize,
        row: usize,
        value: CellState,
    ) -> Result<()> {
        self.get_mut(which).set(col, row, value)
    }
}
