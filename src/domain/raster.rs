use std::collections::HashSet;

/// Pointer-derived coordinate. Signed because pointer math can round
/// outside the grid at the edges; the session filters before painting.
pub type RasterCoord = (i32, i32);

/// Integer line rasterization between two cells (Bresenham with an
/// error accumulator). The result is ordered from `from` to `to`,
/// includes both endpoints, and is gap-free: consecutive cells differ
/// by at most one unit in each axis.
///
/// Endpoints are canonicalized before walking so that tracing the line
/// in either direction visits the identical cell set (order reversed).
pub fn line_cells(from: RasterCoord, to: RasterCoord) -> Vec<RasterCoord> {
    if to < from {
        let mut cells = walk_line(to, from);
        cells.reverse();
        return cells;
    }
    walk_line(from, to)
}

fn walk_line((mut x0, mut y0): RasterCoord, (x1, y1): RasterCoord) -> Vec<RasterCoord> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut error = dx - dy;

    let mut cells = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        cells.push((x0, y0));
        if x0 == x1 && y0 == y1 {
            return cells;
        }
        if 2 * error > -dy {
            error -= dy;
            x0 += sx;
        }
        if 2 * error < dx {
            error += dx;
            y0 += sy;
        }
    }
}

/// One continuous pointer-down-to-pointer-up drawing interaction.
///
/// Tracks the last rasterized cell and a visited-cell memo so a drag
/// that crosses its own path never re-toggles a cell. Dropped (with the
/// memo) when the stroke ends.
#[derive(Default)]
pub struct Stroke {
    visited: HashSet<RasterCoord>,
    last: Option<RasterCoord>,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next pointer sample. Returns the cells to toggle, in
    /// stroke order, each reported exactly once per stroke.
    ///
    /// A sample landing on an already-visited cell is ignored outright
    /// and does not move the stroke's last cell.
    pub fn extend(&mut self, cell: RasterCoord) -> Vec<RasterCoord> {
        if self.visited.contains(&cell) {
            return Vec::new();
        }

        let path = match self.last {
            Some(last) => line_cells(last, cell),
            None => vec![cell],
        };
        self.last = Some(cell);

        path.into_iter()
            .filter(|&c| self.visited.insert(c))
            .collect()
    }
}
