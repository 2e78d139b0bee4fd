use macroquad::prelude::*;

use crate::application::{Session, Viewport};
use crate::domain::{Cell, CellCoord};
use crate::ui::{Button, Dropdown, PANEL_WIDTH, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const PANEL_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);
const STATUS_RUNNING: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const STATUS_PAUSED: Color = Color::new(1.0, 0.65, 0.0, 1.0);

/// CanvasPainter keeps the grid image in a persistent offscreen render
/// target and repaints only the cells it is told changed; the target
/// is blitted to the screen every frame. A full repaint and a sequence
/// of diff repaints produce the same image because both go through the
/// one `fill_cell` path with the same colors and rectangles.
pub struct CanvasPainter {
    target: RenderTarget,
    side_px: u32,
}

impl CanvasPainter {
    pub fn new(side_px: u32) -> Self {
        let target = render_target(side_px, side_px);
        target.texture.set_filter(FilterMode::Nearest);
        Self { target, side_px }
    }

    /// Does the target still match the canvas pixel size? When not,
    /// the caller rebuilds the painter and repaints everything.
    pub fn matches(&self, side_px: u32) -> bool {
        self.side_px == side_px
    }

    /// Repaint every cell from scratch
    pub fn paint_full(&self, session: &Session, viewport: &Viewport) {
        set_camera(&self.canvas_camera());
        clear_background(DEAD_COLOR);
        for (x, y, cell) in session.grid().iter_cells() {
            if cell.is_alive() {
                fill_cell(viewport, x, y, cell);
            }
        }
        set_default_camera();
    }

    /// Repaint exactly the changed cells; nothing else is read
    pub fn paint_cells(&self, session: &Session, viewport: &Viewport, cells: &[CellCoord]) {
        if cells.is_empty() {
            return;
        }
        set_camera(&self.canvas_camera());
        for &(x, y) in cells {
            fill_cell(viewport, x, y, session.grid().get(x, y));
        }
        set_default_camera();
    }

    /// Draw the canvas image at its place on screen
    pub fn blit(&self, viewport: &Viewport) {
        let (x, y) = viewport.origin();
        let side = viewport.canvas_px();
        draw_texture_ex(
            &self.target.texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(side, side)),
                ..Default::default()
            },
        );
    }

    /// Camera mapping canvas-local pixel coordinates into the target
    fn canvas_camera(&self) -> Camera2D {
        let side = self.side_px as f32;
        Camera2D {
            zoom: vec2(2.0 / side, 2.0 / side),
            target: vec2(side / 2.0, side / 2.0),
            render_target: Some(self.target.clone()),
            ..Default::default()
        }
    }
}

fn fill_cell(viewport: &Viewport, x: usize, y: usize, cell: Cell) {
    let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
    let (cx, cy, w, h) = viewport.cell_rect(x, y);
    draw_rectangle(cx, cy, w, h, color);
}

/// Draw the control panel: buttons, status labels, dropdowns on top
pub fn draw_controls(
    session: &Session,
    buttons: &[Button],
    dropdowns: &[&Dropdown],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), PANEL_COLOR);

    buttons.iter().for_each(|button| button.draw(mouse_pos));

    let controls = [
        ("Controls:", 420.0, 14.0, WHITE),
        ("LMB drag: paint", 436.0, 12.0, GRAY),
        ("Space: play/pause", 449.0, 12.0, GRAY),
        ("S: step  C: clear", 462.0, 12.0, GRAY),
        ("R: reset  D: mode", 475.0, 12.0, GRAY),
    ];
    for (text, y, size, color) in controls {
        draw_text(text, px, y, size, color);
    }

    let n = session.grid_size();
    let labels = [
        (format!("Grid: {n}×{n}"), 510.0, 13.0, GRAY),
        (
            format!("Speed: {} ms/gen", session.step_interval_ms()),
            526.0,
            13.0,
            GRAY,
        ),
        (format!("Mode: {}", session.draw_mode().label()), 542.0, 13.0, GRAY),
        (format!("Generation: {}", session.generation()), 570.0, 16.0, WHITE),
        (format!("FPS: {}", get_fps()), 590.0, 13.0, GRAY),
    ];
    for (text, y, size, color) in &labels {
        draw_text(text, px, *y, *size, *color);
    }

    let (status, status_color) = if session.is_running() {
        ("Running", STATUS_RUNNING)
    } else {
        ("Paused", STATUS_PAUSED)
    };
    draw_text(status, px, 615.0, 16.0, status_color);

    // closed dropdowns first, the open one last so its menu is on top
    let open_index = dropdowns.iter().position(|d| d.is_open());
    for (i, dropdown) in dropdowns.iter().enumerate() {
        if Some(i) != open_index {
            dropdown.draw(mouse_pos);
        }
    }
    if let Some(i) = open_index {
        dropdowns[i].draw(mouse_pos);
    }
}
