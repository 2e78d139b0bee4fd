// Domain layer - grid, rule and stroke rasterization
pub mod domain;

// Application layer - session (engine + scheduler) and viewport
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{DrawMode, Session, Viewport};
pub use domain::{Cell, CellCoord, Grid, Stroke};
pub use ui::Button;
