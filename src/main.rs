use macroquad::prelude::*;

use life_canvas::{
    Session, Viewport,
    application::DEFAULT_LIVE_PROBABILITY,
    input::{self, Action},
    rendering::{self, CanvasPainter},
    ui::{self, Dropdown},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Life Canvas".to_owned(),
        window_width: 1000,
        window_height: 820,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let initial_size = ui::GRID_SIZES[ui::DEFAULT_GRID_SIZE_INDEX].0;
    let mut session = Session::new(initial_size, DEFAULT_LIVE_PROBABILITY);

    let px = ui::panel_x();
    let size_items = ui::GRID_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut size_dropdown = Dropdown::new(px, 30.0, ui::PANEL_WIDTH, "Grid Size", size_items);
    size_dropdown.set_selected(ui::DEFAULT_GRID_SIZE_INDEX);

    let speed_items = ui::SPEED_OPTIONS.iter().map(|(_, name)| name.to_string()).collect();
    let mut speed_dropdown = Dropdown::new(px, 90.0, ui::PANEL_WIDTH, "Speed", speed_items);
    speed_dropdown.set_selected(ui::DEFAULT_SPEED_INDEX);
    session.set_speed_ms(ui::SPEED_OPTIONS[ui::DEFAULT_SPEED_INDEX].0);

    let mut viewport = Viewport::fit(
        session.grid_size(),
        ui::grid_area_width(),
        ui::grid_area_height(),
    );
    let mut painter = CanvasPainter::new(viewport.canvas_px() as u32);
    let mut needs_full_repaint = true;

    loop {
        let mouse_pos = mouse_position();

        // Responsive layout: the window may have been resized
        let px = ui::panel_x();
        size_dropdown.set_position(px, 30.0);
        speed_dropdown.set_position(px, 90.0);
        viewport = Viewport::fit(
            session.grid_size(),
            ui::grid_area_width(),
            ui::grid_area_height(),
        );
        if !painter.matches(viewport.canvas_px() as u32) {
            // window resize changes pixel geometry only, never the grid
            painter = CanvasPainter::new(viewport.canvas_px() as u32);
            needs_full_repaint = true;
        }

        let mut changed = Vec::new();

        if size_dropdown.update(mouse_pos) {
            session.set_grid_size(ui::GRID_SIZES[size_dropdown.selected()].0);
            viewport = Viewport::fit(
                session.grid_size(),
                ui::grid_area_width(),
                ui::grid_area_height(),
            );
            needs_full_repaint = true;
        }
        if size_dropdown.is_open() {
            speed_dropdown.close();
        }

        if speed_dropdown.update(mouse_pos) {
            session.set_speed_ms(ui::SPEED_OPTIONS[speed_dropdown.selected()].0);
        }
        if speed_dropdown.is_open() {
            size_dropdown.close();
        }

        let buttons = ui::create_buttons(&session);
        let action = input::clicked_action(&buttons, mouse_pos).or_else(input::key_action);
        match action {
            Some(Action::PlayPause) => session.toggle_running(),
            Some(Action::Step) => changed.extend(session.step_once()),
            Some(Action::Clear) => changed.extend(session.clear()),
            Some(Action::Reset) => {
                session.reseed();
                needs_full_repaint = true;
            }
            Some(Action::ToggleDrawMode) => session.toggle_draw_mode(),
            None => {}
        }

        // Pointer painting only applies over the canvas; the UI panel
        // already swallowed its own clicks above
        if !size_dropdown.is_open() && !speed_dropdown.is_open() {
            changed.extend(input::handle_pointer(&mut session, &viewport));
        }

        changed.extend(session.tick(get_frame_time()));

        if needs_full_repaint {
            painter.paint_full(&session, &viewport);
            needs_full_repaint = false;
        } else {
            painter.paint_cells(&session, &viewport, &changed);
        }

        clear_background(BLACK);
        painter.blit(&viewport);
        rendering::draw_controls(
            &session,
            &buttons,
            &[&size_dropdown, &speed_dropdown],
            mouse_pos,
        );

        next_frame().await;
    }
}
