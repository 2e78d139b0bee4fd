mod session;
mod viewport;

pub use session::{
    DEFAULT_LIVE_PROBABILITY, DEFAULT_STEP_INTERVAL_MS, DrawMode, MAX_GRID_SIZE, MIN_GRID_SIZE,
    Session,
};
pub use viewport::{CANVAS_PADDING, MAX_CANVAS_SIZE, Viewport};
