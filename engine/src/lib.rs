/*!
* Conway's Game of Life (B3/S23) on a toroidal grid.
*
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Edges wrap around: the left column neighbors the right one, the top row
* neighbors the bottom one.
*/

pub mod config;
pub mod edit;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pair;

pub use config::Config;
pub use edit::EditController;
pub use engine::SimulationEngine;
pub use error::{Error, Result};
pub use grid::{CellState, Grid};
pub use pair::{Buffer, GridPair, ResetMode};
