use life::{Config, GameState, input, rendering};
use log::info;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Config::default().window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::default();
    let mut state = GameState::new(&config);
    state.fit_to_screen(screen_width(), screen_height());
    state = state.randomize();
    info!(
        "board {}x{} (capacity {}), cell size {}px",
        state.board.width(),
        state.board.height(),
        state.board.capacity(),
        state.scale.cell_size
    );

    loop {
        if input::quit_requested() {
            break;
        }

        input::handle_window_resize(&mut state);
        input::handle_mouse_toggle(&mut state);
        input::handle_pattern_keys(&mut state);
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        rendering::draw_board(&state, &config);
        rendering::draw_status(&state, &config);

        next_frame().await;
    }
}
