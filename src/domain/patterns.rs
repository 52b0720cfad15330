use super::{Board, Cell};

/// A pattern of live cells that can be stamped onto a board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Set the pattern's cells alive with its top-left corner at (x, y).
    /// Cells falling outside the board viewport are skipped.
    pub fn place_on(&self, board: &mut Board, x: usize, y: usize) {
        for (cx, cy) in self.cells.iter().map(|(dx, dy)| (x + dx, y + dy)) {
            if board.contains(cx, cy) {
                board.set(cx, cy, Cell::Alive);
            }
        }
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Glider - moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            r_pentomino(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(board: &Board) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = board.live_cells().collect();
        cells.sort();
        cells
    }

    fn board_with(pattern: &Pattern) -> Board {
        let mut board = Board::with_capacity(64);
        board.resize(40, 40);
        pattern.place_on(&mut board, 10, 10);
        board
    }

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.width, lwss.height), (5, 4));
    }

    #[test]
    fn test_place_on_offsets_cells() {
        let board = board_with(&presets::blinker());
        assert_eq!(live(&board), vec![(10, 10), (11, 10), (12, 10)]);
    }

    #[test]
    fn test_place_on_skips_cells_outside_viewport() {
        let mut board = Board::with_capacity(16);
        board.resize(5, 5);
        presets::block().place_on(&mut board, 4, 4);
        assert_eq!(live(&board), vec![(4, 4)]);

        board.resize(15, 15);
        assert_eq!(board.population(), 1);
    }

    #[test]
    fn test_place_on_at_viewport_corner() {
        let mut board = Board::with_capacity(8);
        board.resize(7, 7);
        presets::glider().place_on(&mut board, 5, 5);
        assert_eq!(live(&board), vec![(6, 5)]);

        presets::lwss().place_on(&mut board, 0, 0);
        assert_eq!(board.population(), 10);
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut board = board_with(&pattern);
            let start = live(&board);

            board.step();
            assert_ne!(live(&board), start, "{} did not change", pattern.name);
            board.step();
            assert_eq!(live(&board), start, "{} is not period 2", pattern.name);
        }
    }

    #[test]
    fn test_lwss_keeps_population() {
        let mut board = board_with(&presets::lwss());
        for _ in 0..4 {
            board.step();
        }
        assert_eq!(board.population(), 9);
    }

    #[test]
    fn test_all_patterns_have_cells() {
        for pattern in presets::all_patterns() {
            assert!(!pattern.cells.is_empty(), "{} is empty", pattern.name);
        }
    }
}
