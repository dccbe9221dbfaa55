use crate::error::{Error, Result};

pub const DEFAULT_SCREEN_WIDTH: usize = 800;
pub const DEFAULT_SCREEN_HEIGHT: usize = 600;
pub const DEFAULT_CELL_SIZE: usize = 10;

/// Grid extent handed to the engine at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub cols: usize,
    pub rows: usize,
}

impl Config {
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(Error::InvalidDimensions { cols, rows });
        }
        Ok(Config { cols, rows })
    }

    /// Derives the extent from a window size in pixels; partial cells at the
    /// right and bottom edges are dropped.
    pub fn from_screen(width: usize, height: usize, cell_size: usize) -> Result<Self> {
        if cell_size == 0 {
            return Err(Error::InvalidDimensions { cols: 0, rows: 0 });
        }
        Config::new(width / cell_size, height / cell_size)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cols: DEFAULT_SCREEN_WIDTH / DEFAULT_CELL_SIZE,
            rows: DEFAULT_SCREEN_HEIGHT / DEFAULT_CELL_SIZE,
        }
    }
}
