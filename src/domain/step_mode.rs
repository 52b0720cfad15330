//! Step mode selection.
//!
//! The board can compute a generation on the calling thread or spread the
//! rows over the rayon pool. Both produce the same generation.

/// How `Board::advance` computes the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepMode {
    /// Row by row on the calling thread
    Serial,
    /// Rows in parallel on the rayon pool
    #[default]
    Parallel,
}

impl StepMode {
    /// Get all available modes
    pub fn all() -> Vec<StepMode> {
        vec![StepMode::Serial, StepMode::Parallel]
    }

    /// Display name for the status line and benchmark table
    pub fn name(&self) -> &'static str {
        match self {
            StepMode::Serial => "Serial",
            StepMode::Parallel => "Parallel",
        }
    }

    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            StepMode::Serial => StepMode::Parallel,
            StepMode::Parallel => StepMode::Serial,
        }
    }
}
