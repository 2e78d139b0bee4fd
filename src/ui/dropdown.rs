use macroquad::prelude::*;

const ITEM_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

const MAIN_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);
const SELECTED_COLOR: Color = Color::new(0.20, 0.39, 0.59, 1.0);
const MENU_BG: Color = Color::new(0.12, 0.12, 0.12, 1.0);
const ITEM_BG: Color = Color::new(0.18, 0.18, 0.18, 1.0);

/// Dropdown selector for the option lists (grid size, speed)
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        debug_assert!(!items.is_empty());
        Self {
            x,
            y,
            width,
            label: label.into(),
            items,
            selected: 0,
            is_open: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Handle clicks. Returns true when the selection changed.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        if self.hovers_main(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }

        if self.is_open {
            if let Some(i) = self.hovered_item(mouse_pos) {
                self.is_open = false;
                if self.selected != i {
                    self.selected = i;
                    return true;
                }
            } else {
                // click anywhere else closes the menu
                self.is_open = false;
            }
        }
        false
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let main_color = if self.hovers_main(mouse_pos) {
            HOVER_COLOR
        } else {
            MAIN_COLOR
        };
        draw_rectangle(self.x, self.y, self.width, ITEM_HEIGHT, main_color);
        draw_rectangle_lines(self.x, self.y, self.width, ITEM_HEIGHT, 2.0, WHITE);

        let shown = truncate_to_width(&self.items[self.selected], self.width - 30.0);
        draw_text(&shown, self.x + 5.0, self.y + 21.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 16.0, self.y + 21.0, 14.0, WHITE);

        if self.is_open {
            self.draw_menu(mouse_pos);
        }
    }

    fn draw_menu(&self, mouse_pos: (f32, f32)) {
        let menu_y = self.y + ITEM_HEIGHT;
        let menu_height = self.items.len() as f32 * ITEM_HEIGHT;
        draw_rectangle(self.x, menu_y, self.width, menu_height, MENU_BG);

        for (i, item) in self.items.iter().enumerate() {
            let item_y = menu_y + i as f32 * ITEM_HEIGHT;
            let color = if self.hovered_item(mouse_pos) == Some(i) {
                HOVER_COLOR
            } else if i == self.selected {
                SELECTED_COLOR
            } else {
                ITEM_BG
            };

            draw_rectangle(self.x, item_y, self.width, ITEM_HEIGHT, color);
            let shown = truncate_to_width(item, self.width - 10.0);
            draw_text(&shown, self.x + 5.0, item_y + 21.0, FONT_SIZE, WHITE);
        }

        draw_rectangle_lines(self.x, menu_y, self.width, menu_height, 2.0, WHITE);
    }

    fn hovers_main(&self, mouse_pos: (f32, f32)) -> bool {
        Rect::new(self.x, self.y, self.width, ITEM_HEIGHT).contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    fn hovered_item(&self, mouse_pos: (f32, f32)) -> Option<usize> {
        let menu_y = self.y + ITEM_HEIGHT;
        let menu_height = self.items.len() as f32 * ITEM_HEIGHT;
        let inside = Rect::new(self.x, menu_y, self.width, menu_height)
            .contains(vec2(mouse_pos.0, mouse_pos.1));
        inside.then(|| ((mouse_pos.1 - menu_y) / ITEM_HEIGHT) as usize)
    }
}

/// Shorten text with an ellipsis until it fits the given pixel width
fn truncate_to_width(text: &str, max_width: f32) -> String {
    if measure_text(text, None, FONT_SIZE as u16, 1.0).width <= max_width {
        return text.to_string();
    }
    let mut shortened: String = text.to_string();
    while !shortened.is_empty() {
        shortened.pop();
        let candidate = format!("{shortened}...");
        if measure_text(&candidate, None, FONT_SIZE as u16, 1.0).width <= max_width {
            return candidate;
        }
    }
    "...".to_string()
}
