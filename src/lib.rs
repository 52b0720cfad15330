// Domain layer - Board engine
pub mod domain;

// Application layer - Simulation state and configuration
pub mod application;

// Infrastructure layer - rendering and input
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use domain::{Board, Cell, LIFE_MAX, Pattern, StepMode, presets};
pub use application::{Config, GameState, Scale};
