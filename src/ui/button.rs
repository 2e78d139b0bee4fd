use macroquad::prelude::*;

/// Push button with hover highlight and click detection
pub struct Button {
    bounds: Rect,
    label: String,
}

const BUTTON_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const BUTTON_HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            label: label.into(),
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Clicked this frame?
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) {
            BUTTON_HOVER_COLOR
        } else {
            BUTTON_COLOR
        };
        let Rect { x, y, w, h } = self.bounds;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }
}
