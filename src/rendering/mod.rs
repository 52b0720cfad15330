use macroquad::prelude::*;

use crate::application::{Config, GameState};
use crate::domain::Pattern;

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Label for the preset stamped with G
fn pattern_label(pattern: &Pattern) -> String {
    format!("G: {} ({}) | , . to change", pattern.name, pattern.description)
}

/// Draw the live cells of the current generation
pub fn draw_board(state: &GameState, config: &Config) {
    clear_background(config.background);

    let size = state.scale.cell_size as f32;
    for (x, y) in state.board.live_cells() {
        let (screen_x, screen_y) = state.scale.cell_to_screen(x, y);
        draw_rectangle(screen_x, screen_y, size, size, config.foreground);
    }
}

/// Draw the status and selected preset in the bottom-left corner
pub fn draw_status(state: &GameState, config: &Config) {
    let (width, height) = state.board.dimensions();
    let status = format!(
        "gen {} | pop {} | {}x{} | {:.3}s | {} {:.1}ms{}",
        state.generation,
        format_number(state.board.population()),
        width,
        height,
        state.delay,
        state.step_mode.name(),
        state.last_step_time_ms,
        if state.is_running { "" } else { " | paused" },
    );
    draw_text(
        &status,
        4.0,
        screen_height() - 6.0,
        Config::STATUS_FONT_SIZE,
        config.status_color,
    );
    draw_text(
        &pattern_label(state.selected_pattern()),
        4.0,
        screen_height() - 8.0 - Config::STATUS_FONT_SIZE,
        Config::STATUS_FONT_SIZE,
        config.status_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(1_048_576), "1.0M");
    }

    #[test]
    fn test_pattern_label() {
        let label = pattern_label(&crate::domain::presets::glider());
        assert_eq!(label, "G: Glider (Spaceship (period 4)) | , . to change");
    }
}
