mod cell;
mod grid;
mod raster;

pub use cell::Cell;
pub use grid::{CellCoord, Grid};
pub use raster::{RasterCoord, Stroke, line_cells};
