//! Double-buffered Life board.
//!
//! Both generations are allocated once at `capacity x capacity` and never
//! reallocated. The logical viewport (`width x height`) selects the region
//! that is stepped, edited and drawn; cells outside it keep whatever value
//! they last held and show up again if the viewport grows back over them.

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, StepMode};

/// Default maximum board width and height
pub const LIFE_MAX: usize = 1024;

/// Moore neighborhood offsets as (dx, dy)
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Board owns two generations of cells and a flipping index naming the current one.
pub struct Board {
    capacity: usize,
    generations: [Vec<Cell>; 2],
    active: usize,
    width: usize,
    height: usize,
}

/// Read-only view of the current generation, bounded by the viewport.
struct Snapshot<'a> {
    cells: &'a [Cell],
    stride: usize,
    width: usize,
    height: usize,
}

impl Snapshot<'_> {
    #[inline]
    fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.stride + x]
    }

    /// Live neighbors of (x, y); positions outside the viewport count as dead.
    fn neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                (nx < self.width && ny < self.height).then(|| self.get(nx, ny))
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Write row `y` of the next generation into `row`.
    fn evolve_row(&self, y: usize, row: &mut [Cell]) {
        for (x, next) in row[..self.width].iter_mut().enumerate() {
            *next = self.get(x, y).evolve(self.neighbors(x, y));
        }
    }
}

impl Board {
    /// Create a board with the default capacity, all cells dead and an empty viewport
    pub fn new() -> Self {
        Self::with_capacity(LIFE_MAX)
    }

    /// Create a board whose backing grids are `capacity x capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "board capacity must be non-zero");
        let cells = capacity * capacity;
        Self {
            capacity,
            generations: [vec![Cell::Dead; cells], vec![Cell::Dead; cells]],
            active: 0,
            width: 0,
            height: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get viewport dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Check whether (x, y) lies inside the viewport
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Change the viewport. Each dimension is clamped to `capacity - 1`.
    /// No cell data is copied, cleared or reallocated.
    pub fn resize(&mut self, width: usize, height: usize) {
        let max = self.capacity - 1;
        self.width = width.min(max);
        self.height = height.min(max);
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.capacity + x
    }

    fn current(&self) -> &[Cell] {
        &self.generations[self.active]
    }

    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            cells: self.current(),
            stride: self.capacity,
            width: self.width,
            height: self.height,
        }
    }

    /// Split storage into the current snapshot and the grid the next generation is written to
    fn buffers(&mut self) -> (Snapshot<'_>, &mut [Cell]) {
        let (stride, width, height) = (self.capacity, self.width, self.height);
        let [first, second] = &mut self.generations;
        let (current, next) = if self.active == 0 {
            (first, second)
        } else {
            (second, first)
        };
        let snapshot = Snapshot {
            cells: current.as_slice(),
            stride,
            width,
            height,
        };
        (snapshot, next.as_mut_slice())
    }

    /// Viewport rows of the current generation
    fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Cell]> {
        let (stride, width, height) = (self.capacity, self.width, self.height);
        let active = self.active;
        self.generations[active]
            .chunks_mut(stride)
            .take(height)
            .map(move |row| &mut row[..width])
    }

    /// Get cell at (x, y) in the current generation.
    /// The position must lie inside the viewport.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        debug_assert!(self.contains(x, y), "({x}, {y}) outside viewport");
        self.current()[self.index(x, y)]
    }

    /// Set cell at (x, y) in the current generation.
    /// The position must lie inside the viewport.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        debug_assert!(self.contains(x, y), "({x}, {y}) outside viewport");
        let idx = self.index(x, y);
        self.generations[self.active][idx] = cell;
    }

    /// Flip the cell at (x, y) in the current generation
    pub fn toggle(&mut self, x: usize, y: usize) {
        let cell = self.get(x, y);
        self.set(x, y, cell.toggle());
    }

    /// Count live Moore neighbors of (x, y). The board does not wrap.
    pub fn neighbors(&self, x: usize, y: usize) -> u8 {
        self.snapshot().neighbors(x, y)
    }

    /// Advance one generation (serial)
    pub fn step(&mut self) {
        let (current, next) = self.buffers();
        next.chunks_mut(current.stride)
            .take(current.height)
            .enumerate()
            .for_each(|(y, row)| current.evolve_row(y, row));
        self.active ^= 1;
    }

    /// Advance one generation with rows spread over the rayon pool.
    /// Workers only read the current grid and write disjoint rows of the next.
    pub fn step_parallel(&mut self) {
        let (current, next) = self.buffers();
        next.par_chunks_mut(current.stride)
            .take(current.height)
            .enumerate()
            .for_each(|(y, row)| current.evolve_row(y, row));
        self.active ^= 1;
    }

    /// Advance one generation using the given mode
    pub fn advance(&mut self, mode: StepMode) {
        match mode {
            StepMode::Serial => self.step(),
            StepMode::Parallel => self.step_parallel(),
        }
    }

    /// Randomize the viewport (50% alive) from the thread-local RNG
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Randomize the viewport (50% alive) from a caller-supplied RNG.
    /// Only the current generation is touched.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        for row in self.rows_mut() {
            for cell in row.iter_mut() {
                *cell = Cell::from(rng.random_bool(0.5));
            }
        }
    }

    /// Kill every cell in the viewport of the current generation
    pub fn clear(&mut self) {
        self.rows_mut().for_each(|row| row.fill(Cell::Dead));
    }

    /// Positions of live cells in the viewport, row by row
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.current()
            .chunks(self.capacity)
            .take(self.height)
            .enumerate()
            .flat_map(move |(y, row)| {
                row[..width]
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_alive())
                    .map(move |(x, _)| (x, y))
            })
    }

    /// Count live cells in the viewport
    pub fn population(&self) -> usize {
        self.live_cells().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
