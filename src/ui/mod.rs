mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use crate::application::Session;
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// X position where the control panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the area left of the panel that holds the canvas
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Grid side-length options offered by the size dropdown
pub const GRID_SIZES: &[(usize, &str)] = &[
    (32, "32×32"),
    (64, "64×64"),
    (100, "100×100"),
    (150, "150×150"),
    (200, "200×200"),
    (300, "300×300"),
    (400, "400×400"),
];

/// Index into GRID_SIZES used at startup
pub const DEFAULT_GRID_SIZE_INDEX: usize = 2;

/// Step-interval options in milliseconds
pub const SPEED_OPTIONS: &[(u32, &str)] = &[
    (16, "16 ms"),
    (33, "33 ms"),
    (50, "50 ms"),
    (100, "100 ms"),
    (250, "250 ms"),
    (500, "500 ms"),
    (1000, "1000 ms"),
];

/// Index into SPEED_OPTIONS used at startup
pub const DEFAULT_SPEED_INDEX: usize = 3;

/// Build the button column. Recreated every frame so the Play/Pause
/// and mode labels track the session state and the panel position
/// tracks the window width.
pub fn create_buttons(session: &Session) -> Vec<Button> {
    let px = panel_x();
    let play_label = if session.is_running() { "Pause" } else { "Play" };
    let mode_label = format!("Mode: {}", session.draw_mode().label());

    [play_label, "Step", "Clear", "Reset", mode_label.as_str()]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            Button::new(
                px,
                160.0 + i as f32 * (BUTTON_HEIGHT + 10.0),
                PANEL_WIDTH,
                BUTTON_HEIGHT,
                *label,
            )
        })
        .collect()
}
