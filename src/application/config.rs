use macroquad::prelude::{BLACK, Color, Conf, WHITE};

/// Tunables for the interactive shell
#[derive(Clone, Debug)]
pub struct Config {
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,
    /// Initial width and height of a cell in pixels
    pub cell_size: u32,
    /// Initial seconds between generations
    pub delay: f32,
    /// Start with the simulation paused
    pub start_paused: bool,
    pub background: Color,
    pub foreground: Color,
    pub status_color: Color,
}

impl Config {
    pub const MIN_DELAY: f32 = 0.005;
    pub const MAX_DELAY: f32 = 5.0;
    pub const STATUS_FONT_SIZE: f32 = 18.0;

    /// Window configuration for macroquad
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: self.window_title.clone(),
            window_width: self.window_width,
            window_height: self.window_height,
            window_resizable: true,
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "life".to_owned(),
            window_width: 800,
            window_height: 600,
            cell_size: 6,
            delay: 0.15,
            start_paused: false,
            background: WHITE,
            foreground: BLACK,
            status_color: Color::from_rgba(200, 30, 30, 255),
        }
    }
}
