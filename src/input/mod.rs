use log::info;
use macroquad::prelude::*;

use crate::application::GameState;

/// Resize the board whenever the window size changes
pub fn handle_window_resize(state: &mut GameState) {
    let size = (screen_width(), screen_height());
    if size != state.screen {
        state.fit_to_screen(size.0, size.1);
    }
}

/// Toggle the cell under the pointer on left click
pub fn handle_mouse_toggle(state: &mut GameState) {
    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        state.toggle_cell_at(x, y);
    }
}

/// Stamp the selected preset centered on the pointer with G
pub fn handle_pattern_keys(state: &mut GameState) {
    if is_key_pressed(KeyCode::G) {
        let (x, y) = mouse_position();
        state.place_selected_at(x, y);
    }
}

/// Check for Q or Escape
pub fn quit_requested() -> bool {
    let quit = is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape);
    if quit {
        info!("quit requested");
    }
    quit
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 10] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::R, GameState::randomize),
        (KeyCode::C, GameState::clear),
        (KeyCode::LeftBracket, GameState::slow_down),
        (KeyCode::RightBracket, GameState::speed_up),
        (KeyCode::Equal, GameState::grow_cells),
        (KeyCode::Minus, GameState::shrink_cells),
        (KeyCode::M, GameState::toggle_step_mode),
        (KeyCode::Comma, GameState::previous_pattern),
        (KeyCode::Period, GameState::next_pattern),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
