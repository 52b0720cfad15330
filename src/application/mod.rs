mod config;
mod game_state;
mod scale;

pub use config::Config;
pub use game_state::GameState;
pub use scale::Scale;
