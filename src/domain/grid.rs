use super::Cell;
use rayon::prelude::*;

/// Grid coordinate, (x, y) with 0 <= x,y < size.
pub type CellCoord = (usize, usize);

/// Square toroidal grid for the automaton.
/// Stepping is a pure, immutable update: the next generation is built
/// entirely from the previous snapshot.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 1);
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Create a grid where each cell is independently alive with the
    /// given probability (clamped to [0, 1])
    pub fn random(size: usize, live_probability: f64) -> Self {
        use rand::Rng;

        let p = live_probability.clamp(0.0, 1.0);
        let mut rng = rand::rng();
        Self {
            size,
            cells: (0..size * size)
                .map(|_| Cell::from_alive(rng.random_bool(p)))
                .collect(),
        }
    }

    /// Side length of the (always square) grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to the flat index. Both axes must be in
    /// range; an oversized x would otherwise land on the next row.
    const fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        y * self.size + x
    }

    /// Cell at position. Out-of-range coordinates are a programming
    /// error and panic; callers filter pointer input before this.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Single mutation entry point. Sets the cell and reports whether
    /// the value actually changed, so no-op paints can be skipped.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        let idx = self.index(x, y);
        let changed = self.cells[idx] != cell;
        self.cells[idx] = cell;
        changed
    }

    /// Count live neighbors with toroidal wrapping (the grid is a torus)
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let n = self.size as i32;

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| {
                let nx = ((x as i32 + dx) % n + n) % n;
                let ny = ((y as i32 + dy) % n + n) % n;
                self.get(nx as usize, ny as usize).is_alive()
            })
            .count() as u8
    }

    /// Pure evolution by one generation (serial scan).
    /// Every cell's rule input is this pre-step snapshot.
    pub fn step(&self) -> Self {
        let cells = (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| (x, y)))
            .map(|(x, y)| self.get(x, y).next(self.live_neighbors(x, y)))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Parallel evolution, rows fanned out over rayon.
    /// Agrees exactly with `step`; worth it for grids > 100x100.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.size)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..self.size).map(move |x| self.get(x, y).next(self.live_neighbors(x, y)))
            })
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Changed-cell set between this grid and another of the same size.
    /// Built fresh per step and consumed by the renderer immediately.
    pub fn diff(&self, other: &Grid) -> Vec<CellCoord> {
        debug_assert_eq!(self.size, other.size);
        self.iter_cells()
            .filter(|&(x, y, cell)| cell != other.get(x, y))
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Coordinates of all currently live cells
    pub fn live_cells(&self) -> Vec<CellCoord> {
        self.iter_cells()
            .filter(|&(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.size)
            .flat_map(move |y| (0..self.size).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.get(x, y)))
    }
}
