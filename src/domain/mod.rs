mod board;
mod cell;
mod patterns;
mod step_mode;

pub use board::{Board, LIFE_MAX};
pub use cell::Cell;
pub use patterns::{Pattern, presets};
pub use step_mode::StepMode;
