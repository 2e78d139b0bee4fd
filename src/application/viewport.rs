use crate::domain::RasterCoord;

/// Gap kept between the canvas and the window edge
pub const CANVAS_PADDING: f32 = 10.0;
/// The canvas never grows past this, whatever the window size
pub const MAX_CANVAS_SIZE: f32 = 800.0;

/// Viewport maps between screen pixels and grid cells for the square
/// canvas. Rebuilt every frame from the window dimensions, so a window
/// resize changes the cell pixel size without touching the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    origin_x: f32,
    origin_y: f32,
    canvas_px: f32,
    cell_px: f32,
}

impl Viewport {
    /// Fit a square canvas into the available area: the smaller window
    /// dimension minus padding, capped at `MAX_CANVAS_SIZE`, centered.
    pub fn fit(grid_size: usize, area_width: f32, area_height: f32) -> Self {
        let canvas_px = (area_width.min(area_height) - CANVAS_PADDING)
            .floor()
            .clamp(1.0, MAX_CANVAS_SIZE);
        Self {
            origin_x: (area_width - canvas_px) / 2.0,
            origin_y: (area_height - canvas_px) / 2.0,
            canvas_px,
            cell_px: canvas_px / grid_size as f32,
        }
    }

    pub const fn origin(&self) -> (f32, f32) {
        (self.origin_x, self.origin_y)
    }

    /// Canvas side length in pixels
    pub const fn canvas_px(&self) -> f32 {
        self.canvas_px
    }

    /// Pixel size of one grid cell
    pub const fn cell_px(&self) -> f32 {
        self.cell_px
    }

    pub fn contains(&self, screen_x: f32, screen_y: f32) -> bool {
        screen_x >= self.origin_x
            && screen_x < self.origin_x + self.canvas_px
            && screen_y >= self.origin_y
            && screen_y < self.origin_y + self.canvas_px
    }

    /// Grid cell under a screen position, or None when the pointer is
    /// off the canvas. Cell indices come from flooring, so the result
    /// can still sit one cell outside the grid right at the border;
    /// the session drops those samples.
    pub fn cell_at(&self, screen_x: f32, screen_y: f32) -> Option<RasterCoord> {
        if !self.contains(screen_x, screen_y) {
            return None;
        }
        let x = ((screen_x - self.origin_x) / self.cell_px).floor() as i32;
        let y = ((screen_y - self.origin_y) / self.cell_px).floor() as i32;
        Some((x, y))
    }

    /// Cell rectangle in canvas-local pixels, floor-snapped on both
    /// edges so adjacent cells tile without seams at fractional sizes
    pub fn cell_rect(&self, x: usize, y: usize) -> (f32, f32, f32, f32) {
        let x0 = (x as f32 * self.cell_px).floor();
        let y0 = (y as f32 * self.cell_px).floor();
        let x1 = ((x + 1) as f32 * self.cell_px).floor();
        let y1 = ((y + 1) as f32 * self.cell_px).floor();
        (x0, y0, x1 - x0, y1 - y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_is_capped() {
        let vp = Viewport::fit(100, 3000.0, 2000.0);
        assert_eq!(vp.canvas_px(), MAX_CANVAS_SIZE);
        assert_eq!(vp.cell_px(), 8.0);
    }

    #[test]
    fn test_canvas_fits_smaller_dimension() {
        let vp = Viewport::fit(10, 500.0, 310.0);
        assert_eq!(vp.canvas_px(), 300.0);
        assert_eq!(vp.cell_px(), 30.0);
    }

    #[test]
    fn test_cell_at_floors_to_cell_index() {
        let vp = Viewport::fit(100, 810.0, 810.0);
        let (ox, oy) = vp.origin();
        assert_eq!(vp.cell_at(ox, oy), Some((0, 0)));
        assert_eq!(vp.cell_at(ox + 7.9, oy + 7.9), Some((0, 0)));
        assert_eq!(vp.cell_at(ox + 8.0, oy + 15.9), Some((1, 1)));
    }

    #[test]
    fn test_cell_at_outside_canvas_is_none() {
        let vp = Viewport::fit(100, 810.0, 810.0);
        let (ox, oy) = vp.origin();
        assert_eq!(vp.cell_at(ox - 1.0, oy), None);
        assert_eq!(vp.cell_at(ox, oy + 800.0), None);
    }

    #[test]
    fn test_cell_rects_tile_without_seams() {
        // 100px canvas over 7 cells leaves fractional cell sizes
        let vp = Viewport::fit(7, 110.0, 110.0);
        for x in 0..6 {
            let (x0, _, w, _) = vp.cell_rect(x, 0);
            let (x1, _, _, _) = vp.cell_rect(x + 1, 0);
            assert_eq!(x0 + w, x1);
        }
    }

    #[test]
    fn test_window_resize_keeps_grid_untouched() {
        // Only pixel geometry changes between these; no grid involved
        let small = Viewport::fit(50, 410.0, 410.0);
        let large = Viewport::fit(50, 810.0, 810.0);
        assert_eq!(small.canvas_px(), 400.0);
        assert_eq!(large.canvas_px(), 800.0);
        assert_eq!(large.cell_px(), small.cell_px() * 2.0);
    }
}
