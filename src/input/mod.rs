use macroquad::prelude::*;

use crate::application::{Session, Viewport};
use crate::domain::CellCoord;
use crate::ui::Button;

/// Control-surface actions shared by the buttons and the keyboard
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    PlayPause,
    Step,
    Clear,
    Reset,
    ToggleDrawMode,
}

/// Button order must match `ui::create_buttons`
const BUTTON_ACTIONS: [Action; 5] = [
    Action::PlayPause,
    Action::Step,
    Action::Clear,
    Action::Reset,
    Action::ToggleDrawMode,
];

const KEY_ACTIONS: [(KeyCode, Action); 5] = [
    (KeyCode::Space, Action::PlayPause),
    (KeyCode::S, Action::Step),
    (KeyCode::C, Action::Clear),
    (KeyCode::R, Action::Reset),
    (KeyCode::D, Action::ToggleDrawMode),
];

/// Action for a button clicked this frame, if any
pub fn clicked_action(buttons: &[Button], mouse_pos: (f32, f32)) -> Option<Action> {
    buttons
        .iter()
        .zip(BUTTON_ACTIONS)
        .find(|(button, _)| button.is_clicked(mouse_pos))
        .map(|(_, action)| action)
}

/// Action for a key pressed this frame, if any
pub fn key_action() -> Option<Action> {
    KEY_ACTIONS
        .iter()
        .find(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action)
}

/// Drive the stroke lifecycle from this frame's mouse state. Touch
/// input arrives through the same path via macroquad's touch-as-mouse
/// simulation. Returns the cells changed by drawing this frame.
pub fn handle_pointer(session: &mut Session, viewport: &Viewport) -> Vec<CellCoord> {
    let mouse_pos = mouse_position();
    apply_pointer(
        session,
        viewport.cell_at(mouse_pos.0, mouse_pos.1),
        is_mouse_button_pressed(MouseButton::Left),
        is_mouse_button_down(MouseButton::Left),
    )
}

/// Stroke transitions for one frame of pointer state. Only a press
/// over the canvas begins a stroke; a drag that started off the canvas
/// or left it stays inert until the next press. Leaving the canvas
/// mid-drag ends the stroke, like the original mouseleave handler.
fn apply_pointer(
    session: &mut Session,
    cell: Option<crate::domain::RasterCoord>,
    pressed: bool,
    down: bool,
) -> Vec<CellCoord> {
    if pressed {
        if let Some(cell) = cell {
            return session.stroke_begin(cell);
        }
        return Vec::new();
    }

    if down {
        match (session.stroke_active(), cell) {
            (true, Some(cell)) => return session.stroke_move(cell),
            (true, None) => session.stroke_end(),
            (false, _) => {}
        }
        return Vec::new();
    }

    if session.stroke_active() {
        session.stroke_end();
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_session() -> Session {
        Session::new(16, 0.0)
    }

    #[test]
    fn test_press_on_canvas_begins_stroke() {
        let mut session = empty_session();
        let changed = apply_pointer(&mut session, Some((2, 2)), true, true);
        assert_eq!(changed, vec![(2, 2)]);
        assert!(session.stroke_active());
    }

    #[test]
    fn test_drag_from_off_canvas_does_not_paint() {
        let mut session = empty_session();
        // press landed outside the canvas, button still held
        apply_pointer(&mut session, None, true, true);
        let changed = apply_pointer(&mut session, Some((3, 3)), false, true);
        assert!(changed.is_empty());
        assert!(!session.stroke_active());
        assert!(session.grid().live_cells().is_empty());
    }

    #[test]
    fn test_reentry_requires_a_new_press() {
        let mut session = empty_session();
        apply_pointer(&mut session, Some((1, 1)), true, true);
        // pointer leaves the canvas mid-drag: stroke ends
        apply_pointer(&mut session, None, false, true);
        assert!(!session.stroke_active());
        // dragging back in with the button still down paints nothing
        let changed = apply_pointer(&mut session, Some((5, 5)), false, true);
        assert!(changed.is_empty());
        // a fresh press is what starts painting again
        let changed = apply_pointer(&mut session, Some((5, 5)), true, true);
        assert_eq!(changed, vec![(5, 5)]);
    }

    #[test]
    fn test_release_ends_stroke() {
        let mut session = empty_session();
        apply_pointer(&mut session, Some((4, 4)), true, true);
        apply_pointer(&mut session, Some((4, 4)), false, false);
        assert!(!session.stroke_active());
    }
}
