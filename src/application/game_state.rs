use log::{debug, info, trace};

use super::{Config, Scale};
use crate::domain::{Board, Pattern, StepMode, presets};

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub board: Board,
    pub scale: Scale,
    pub step_mode: StepMode,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    /// Seconds between generations
    pub delay: f32,
    /// Last known size of the drawing area in pixels
    pub screen: (f32, f32),
    pub last_step_time_ms: f32,
    /// Presets the user can stamp onto the board
    pub patterns: Vec<Pattern>,
    /// Index into `patterns` of the preset stamped by `place_selected_at`
    pub selected_pattern: usize,
}

impl GameState {
    /// Create new game state with an empty viewport
    pub fn new(config: &Config) -> Self {
        Self {
            board: Board::new(),
            scale: Scale::new(config.cell_size),
            step_mode: StepMode::default(),
            is_running: !config.start_paused,
            generation: 0,
            update_timer: 0.0,
            delay: config.delay.clamp(Config::MIN_DELAY, Config::MAX_DELAY),
            screen: (0.0, 0.0),
            last_step_time_ms: 0.0,
            patterns: presets::all_patterns(),
            selected_pattern: 0,
        }
    }

    /// Resize the board viewport to the number of cells that fit on screen
    pub fn fit_to_screen(&mut self, width: f32, height: f32) {
        self.screen = (width, height);
        let (cols, rows) = self.scale.cells_in(width, height);
        let before = self.board.dimensions();
        self.board.resize(cols, rows);
        let after = self.board.dimensions();
        if before != after {
            debug!("viewport {}x{} -> {}x{}", before.0, before.1, after.0, after.1);
        }
    }

    fn refit(&mut self) {
        let (width, height) = self.screen;
        self.fit_to_screen(width, height);
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        info!("{}", if self.is_running { "running" } else { "paused" });
        self
    }

    /// Clear board and reset generation counter
    pub fn clear(mut self) -> Self {
        self.board.clear();
        self.generation = 0;
        info!("board cleared");
        self
    }

    /// Randomize board and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.board.randomize();
        self.generation = 0;
        info!("board randomized, population {}", self.board.population());
        self
    }

    /// Double the delay between generations
    pub fn slow_down(mut self) -> Self {
        self.delay = (self.delay * 2.0).min(Config::MAX_DELAY);
        info!("delay {:.3}s", self.delay);
        self
    }

    /// Halve the delay between generations
    pub fn speed_up(mut self) -> Self {
        self.delay = (self.delay / 2.0).max(Config::MIN_DELAY);
        info!("delay {:.3}s", self.delay);
        self
    }

    /// Draw cells one pixel larger and refit the viewport
    pub fn grow_cells(mut self) -> Self {
        self.scale.grow();
        self.refit();
        info!("cell size {}px", self.scale.cell_size);
        self
    }

    /// Draw cells one pixel smaller and refit the viewport
    pub fn shrink_cells(mut self) -> Self {
        self.scale.shrink();
        self.refit();
        info!("cell size {}px", self.scale.cell_size);
        self
    }

    /// Switch between serial and parallel stepping
    pub fn toggle_step_mode(mut self) -> Self {
        self.step_mode = self.step_mode.toggle();
        info!("step mode {}", self.step_mode.name());
        self
    }

    /// The preset stamped by `place_selected_at`
    pub fn selected_pattern(&self) -> &Pattern {
        &self.patterns[self.selected_pattern]
    }

    /// Select the next preset, wrapping around
    pub fn next_pattern(mut self) -> Self {
        self.selected_pattern = (self.selected_pattern + 1) % self.patterns.len();
        info!("pattern {}", self.selected_pattern().name);
        self
    }

    /// Select the previous preset, wrapping around
    pub fn previous_pattern(mut self) -> Self {
        let count = self.patterns.len();
        self.selected_pattern = (self.selected_pattern + count - 1) % count;
        info!("pattern {}", self.selected_pattern().name);
        self
    }

    /// Flip the cell under a screen position. Positions off the board are ignored.
    pub fn toggle_cell_at(&mut self, screen_x: f32, screen_y: f32) -> bool {
        match self.scale.screen_to_cell(screen_x, screen_y) {
            Some((x, y)) if self.board.contains(x, y) => {
                self.board.toggle(x, y);
                debug!("toggled ({x}, {y})");
                true
            }
            _ => false,
        }
    }

    /// Stamp a pattern centered on a screen position
    pub fn place_pattern_at(&mut self, pattern: &Pattern, screen_x: f32, screen_y: f32) {
        if let Some((x, y)) = self.scale.screen_to_cell(screen_x, screen_y) {
            let x = x.saturating_sub(pattern.width / 2);
            let y = y.saturating_sub(pattern.height / 2);
            pattern.place_on(&mut self.board, x, y);
            debug!("placed {} at ({x}, {y})", pattern.name);
        }
    }

    /// Stamp the selected preset centered on a screen position
    pub fn place_selected_at(&mut self, screen_x: f32, screen_y: f32) {
        let pattern = self.selected_pattern().clone();
        self.place_pattern_at(&pattern, screen_x, screen_y);
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.delay {
            let start = std::time::Instant::now();
            self.board.advance(self.step_mode);
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.generation += 1;
            self.update_timer = 0.0;
            trace!("generation {} in {:.2}ms", self.generation, self.last_step_time_ms);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, presets};

    fn state() -> GameState {
        let config = Config {
            cell_size: 10,
            delay: 0.1,
            ..Config::default()
        };
        let mut state = GameState::new(&config);
        state.fit_to_screen(200.0, 100.0);
        state
    }

    #[test]
    fn test_fit_to_screen() {
        let state = state();
        assert_eq!(state.board.dimensions(), (20, 10));
    }

    #[test]
    fn test_fit_to_huge_screen_is_clamped() {
        let mut state = state();
        state.fit_to_screen(100_000.0, 100_000.0);
        let max = state.board.capacity() - 1;
        assert_eq!(state.board.dimensions(), (max, max));
    }

    #[test]
    fn test_cell_scaling_refits_viewport() {
        let state = state().grow_cells();
        assert_eq!(state.scale.cell_size, 11);
        assert_eq!(state.board.dimensions(), (18, 9));

        let state = state.shrink_cells().shrink_cells();
        assert_eq!(state.scale.cell_size, 9);
        assert_eq!(state.board.dimensions(), (22, 11));
    }

    #[test]
    fn test_tick_waits_for_delay() {
        let mut state = state();
        presets::blinker().place_on(&mut state.board, 4, 4);

        state = state.tick(0.05);
        assert_eq!(state.generation, 0);
        state = state.tick(0.06);
        assert_eq!(state.generation, 1);
        assert_eq!(state.board.get(5, 3), Cell::Alive);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_paused_does_not_step() {
        let mut state = state().toggle_running();
        assert!(!state.is_running);
        state = state.tick(10.0);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_speed_bounds() {
        let mut state = state();
        for _ in 0..20 {
            state = state.speed_up();
        }
        assert_eq!(state.delay, Config::MIN_DELAY);
        for _ in 0..20 {
            state = state.slow_down();
        }
        assert_eq!(state.delay, Config::MAX_DELAY);
    }

    #[test]
    fn test_clear_and_randomize_reset_generation() {
        let mut state = state().randomize();
        state.generation = 7;
        state = state.clear();
        assert_eq!(state.generation, 0);
        assert_eq!(state.board.population(), 0);
    }

    #[test]
    fn test_toggle_cell_at() {
        let mut state = state();
        assert!(state.toggle_cell_at(35.0, 12.0));
        assert_eq!(state.board.get(3, 1), Cell::Alive);

        // Outside the viewport
        assert!(!state.toggle_cell_at(250.0, 12.0));
        assert!(!state.toggle_cell_at(-3.0, 12.0));
        assert_eq!(state.board.population(), 1);
    }

    #[test]
    fn test_place_pattern_at_centers_on_pointer() {
        let mut state = state();
        state.place_pattern_at(&presets::block(), 55.0, 55.0);
        let mut live: Vec<_> = state.board.live_cells().collect();
        live.sort();
        assert_eq!(live, vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_pattern_selection_wraps() {
        let state = state();
        let count = state.patterns.len();
        assert_eq!(state.selected_pattern().name, "Block");

        let state = state.previous_pattern();
        assert_eq!(state.selected_pattern, count - 1);
        assert_eq!(state.selected_pattern().name, "R-pentomino");

        let state = state.next_pattern().next_pattern();
        assert_eq!(state.selected_pattern, 1);
        assert_eq!(state.selected_pattern().name, "Blinker");
    }

    #[test]
    fn test_place_selected_at_stamps_current_preset() {
        let mut state = state();
        while state.selected_pattern().name != "Glider" {
            state = state.next_pattern();
        }
        state.place_selected_at(105.0, 55.0);

        let mut live: Vec<_> = state.board.live_cells().collect();
        live.sort();
        assert_eq!(live, vec![(9, 6), (10, 4), (10, 6), (11, 5), (11, 6)]);
    }

    #[test]
    fn test_toggle_step_mode() {
        let state = state().toggle_step_mode();
        assert_eq!(state.step_mode, StepMode::Serial);
    }
}
