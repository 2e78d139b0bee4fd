use crate::domain::{Cell, CellCoord, Grid, RasterCoord, Stroke};

/// Fraction of cells seeded alive on reset/resize
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.2;
/// Milliseconds between generations until the user picks a speed
pub const DEFAULT_STEP_INTERVAL_MS: u32 = 100;

pub const MIN_GRID_SIZE: usize = 1;
pub const MAX_GRID_SIZE: usize = 400;

/// Above this many cells the step is dispatched to the rayon path
const PARALLEL_THRESHOLD_CELLS: usize = 100 * 100;

/// Whether a stroke paints cells alive or erases them.
/// Global for the whole stroke; flips only on explicit user action.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DrawMode {
    #[default]
    Draw,
    Erase,
}

impl DrawMode {
    pub const fn cell(self) -> Cell {
        match self {
            DrawMode::Draw => Cell::Alive,
            DrawMode::Erase => Cell::Dead,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            DrawMode::Draw => DrawMode::Erase,
            DrawMode::Erase => DrawMode::Draw,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DrawMode::Draw => "Draw",
            DrawMode::Erase => "Erase",
        }
    }
}

/// Session owns every piece of mutable simulation state: the grid, the
/// tick scheduler, the draw mode and any in-progress stroke. All grid
/// mutation funnels through it, and every mutating operation returns
/// the changed-cell set the renderer needs to repaint.
pub struct Session {
    grid: Grid,
    grid_size: usize,
    live_probability: f64,
    is_running: bool,
    step_interval_ms: u32,
    update_timer_ms: f32,
    generation: u64,
    draw_mode: DrawMode,
    stroke: Option<Stroke>,
    resume_after_stroke: bool,
}

impl Session {
    pub fn new(size: usize, live_probability: f64) -> Self {
        let size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        Self {
            grid: Grid::random(size, live_probability),
            grid_size: size,
            live_probability,
            is_running: false,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            update_timer_ms: 0.0,
            generation: 0,
            draw_mode: DrawMode::default(),
            stroke: None,
            resume_after_stroke: false,
        }
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub const fn step_interval_ms(&self) -> u32 {
        self.step_interval_ms
    }

    pub const fn stroke_active(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn play(&mut self) {
        self.is_running = true;
    }

    /// Stop the scheduler. Resetting the accumulator here is what
    /// cancels a pending tick: nothing can fire while stopped.
    pub fn stop(&mut self) {
        self.is_running = false;
        self.update_timer_ms = 0.0;
    }

    pub fn toggle_running(&mut self) {
        if self.is_running {
            self.stop();
        } else {
            self.play();
        }
    }

    pub fn toggle_draw_mode(&mut self) {
        self.draw_mode = self.draw_mode.toggled();
    }

    /// Any positive interval is accepted
    pub fn set_speed_ms(&mut self, ms: u32) {
        self.step_interval_ms = ms.max(1);
    }

    /// Advance exactly one generation and force Stopped, whatever the
    /// prior state was
    pub fn step_once(&mut self) -> Vec<CellCoord> {
        self.stop();
        self.advance_generation()
    }

    /// Per-frame scheduler tick. While running, advances at most one
    /// generation once the accumulated frame time reaches the
    /// configured interval; under the interval it is a no-op wait, so
    /// generations are delayed, never skipped.
    pub fn tick(&mut self, delta_time: f32) -> Vec<CellCoord> {
        if !self.is_running {
            return Vec::new();
        }

        self.update_timer_ms += delta_time * 1000.0;
        if self.update_timer_ms < self.step_interval_ms as f32 {
            return Vec::new();
        }

        self.update_timer_ms = 0.0;
        self.advance_generation()
    }

    fn advance_generation(&mut self) -> Vec<CellCoord> {
        let next = if self.grid_size * self.grid_size > PARALLEL_THRESHOLD_CELLS {
            self.grid.step_parallel()
        } else {
            self.grid.step()
        };
        let changed = self.grid.diff(&next);
        self.grid = next;
        self.generation += 1;
        changed
    }

    /// Set every cell dead. Returns the previously-alive set and stops
    /// the scheduler.
    pub fn clear(&mut self) -> Vec<CellCoord> {
        self.stop();
        self.cancel_stroke();
        let was_alive = self.grid.live_cells();
        self.grid = Grid::new(self.grid_size);
        self.generation = 0;
        was_alive
    }

    /// Reseed a fresh random grid at the current size. The caller does
    /// a full repaint afterwards.
    pub fn reseed(&mut self) {
        self.stop();
        self.cancel_stroke();
        self.grid = Grid::random(self.grid_size, self.live_probability);
        self.generation = 0;
    }

    /// The only legal way to change the side length. Clamps into the
    /// valid range, reseeds (old content is not preserved) and cancels
    /// any in-flight stroke so it cannot index into the new grid.
    pub fn set_grid_size(&mut self, size: usize) {
        self.grid_size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        self.reseed();
    }

    /// Pointer-down: begin a stroke and paint its first cell. If the
    /// simulation was running it is paused for the duration of the
    /// stroke and flagged to resume when the stroke ends, so stepping
    /// and drawing never mutate the grid at the same time.
    pub fn stroke_begin(&mut self, cell: RasterCoord) -> Vec<CellCoord> {
        if self.is_running {
            self.stop();
            self.resume_after_stroke = true;
        }
        let mut stroke = Stroke::new();
        let path = stroke.extend(cell);
        self.stroke = Some(stroke);
        self.paint(path)
    }

    /// Pointer-move: extend the active stroke, rasterizing the line
    /// from the last cell so fast drags leave no gaps
    pub fn stroke_move(&mut self, cell: RasterCoord) -> Vec<CellCoord> {
        let Some(stroke) = self.stroke.as_mut() else {
            return Vec::new();
        };
        let path = stroke.extend(cell);
        self.paint(path)
    }

    /// Pointer-up/leave: the stroke and its visited memo are dropped;
    /// a simulation paused by the stroke resumes
    pub fn stroke_end(&mut self) {
        self.stroke = None;
        if self.resume_after_stroke {
            self.resume_after_stroke = false;
            self.play();
        }
    }

    fn cancel_stroke(&mut self) {
        self.stroke = None;
        self.resume_after_stroke = false;
    }

    /// Apply the draw mode to rasterized cells. Pointer math can round
    /// just outside the grid at the edges; those samples are dropped
    /// here rather than treated as errors.
    fn paint(&mut self, path: Vec<RasterCoord>) -> Vec<CellCoord> {
        let value = self.draw_mode.cell();
        let n = self.grid_size as i32;
        path.into_iter()
            .filter(|&(x, y)| x >= 0 && y >= 0 && x < n && y < n)
            .map(|(x, y)| (x as usize, y as usize))
            .filter(|&(x, y)| self.grid.set(x, y, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_session(size: usize) -> Session {
        let mut session = Session::new(size, 0.0);
        // tests paint their own cells
        session.set_speed_ms(100);
        session
    }

    #[test]
    fn test_step_once_forces_stop() {
        let mut session = quiet_session(8);
        session.play();
        session.step_once();
        assert!(!session.is_running());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut session = quiet_session(8);
        session.play();
        // 40ms + 40ms < 100ms: no generation yet
        assert!(session.tick(0.040).is_empty());
        assert!(session.tick(0.040).is_empty());
        assert_eq!(session.generation(), 0);
        // crossing the interval advances exactly one generation
        session.tick(0.040);
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_tick_does_nothing_while_stopped() {
        let mut session = quiet_session(8);
        assert!(session.tick(10.0).is_empty());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let mut session = quiet_session(8);
        session.play();
        session.tick(0.090);
        session.stop();
        session.play();
        // the accumulated 90ms must not leak across the stop
        assert!(session.tick(0.020).is_empty());
    }

    #[test]
    fn test_stroke_paints_connected_path() {
        let mut session = quiet_session(16);
        session.stroke_begin((2, 2));
        let changed = session.stroke_move((2, 5));
        assert_eq!(changed, vec![(2, 3), (2, 4), (2, 5)]);
        for y in 2..=5 {
            assert!(session.grid().get(2, y).is_alive());
        }
    }

    #[test]
    fn test_stroke_pauses_and_resumes_simulation() {
        let mut session = quiet_session(16);
        session.play();
        session.stroke_begin((3, 3));
        assert!(!session.is_running());
        session.stroke_end();
        assert!(session.is_running());
    }

    #[test]
    fn test_stroke_end_does_not_resume_if_not_running() {
        let mut session = quiet_session(16);
        session.stroke_begin((3, 3));
        session.stroke_end();
        assert!(!session.is_running());
    }

    #[test]
    fn test_erase_mode_paints_dead() {
        let mut session = quiet_session(16);
        session.stroke_begin((4, 4));
        session.stroke_end();
        session.toggle_draw_mode();
        assert_eq!(session.draw_mode(), DrawMode::Erase);
        let changed = session.stroke_begin((4, 4));
        assert_eq!(changed, vec![(4, 4)]);
        assert!(!session.grid().get(4, 4).is_alive());
    }

    #[test]
    fn test_repainting_same_value_reports_no_change() {
        let mut session = quiet_session(16);
        session.stroke_begin((5, 5));
        session.stroke_end();
        // painting alive over alive is a no-op for the renderer
        assert!(session.stroke_begin((5, 5)).is_empty());
    }

    #[test]
    fn test_out_of_range_samples_are_dropped() {
        let mut session = quiet_session(4);
        assert!(session.stroke_begin((-1, 2)).is_empty());
        let changed = session.stroke_move((2, 2));
        assert!(changed.iter().all(|&(x, y)| x < 4 && y < 4));
    }

    #[test]
    fn test_clear_returns_previously_alive_cells() {
        let mut session = quiet_session(8);
        session.stroke_begin((1, 1));
        session.stroke_move((3, 1));
        session.stroke_end();
        let mut cleared = session.clear();
        cleared.sort_unstable();
        assert_eq!(cleared, vec![(1, 1), (2, 1), (3, 1)]);
        assert!(session.grid().live_cells().is_empty());
    }

    #[test]
    fn test_clear_then_step_is_noop() {
        let mut session = quiet_session(8);
        session.stroke_begin((2, 2));
        session.stroke_end();
        session.clear();
        assert!(session.step_once().is_empty());
    }

    #[test]
    fn test_resize_clamps_and_cancels_stroke() {
        let mut session = quiet_session(16);
        session.stroke_begin((10, 10));
        session.set_grid_size(0);
        assert_eq!(session.grid_size(), MIN_GRID_SIZE);
        assert!(!session.stroke_active());
        // the dead stroke must not keep painting into the new grid
        assert!(session.stroke_move((0, 0)).is_empty());

        session.set_grid_size(100_000);
        assert_eq!(session.grid_size(), MAX_GRID_SIZE);
    }

    #[test]
    fn test_resize_drops_pending_auto_resume() {
        let mut session = quiet_session(16);
        session.play();
        session.stroke_begin((2, 2));
        session.set_grid_size(32);
        session.stroke_end();
        assert!(!session.is_running());
    }

    #[test]
    fn test_speed_floor_is_one_ms() {
        let mut session = quiet_session(8);
        session.set_speed_ms(0);
        assert_eq!(session.step_interval_ms(), 1);
    }
}
