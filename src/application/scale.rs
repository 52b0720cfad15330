/// Scale maps between screen pixels and board cells.
/// Every cell is drawn as a `cell_size x cell_size` square from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub cell_size: u32,
}

impl Scale {
    pub const MIN_CELL_SIZE: u32 = 1;
    pub const MAX_CELL_SIZE: u32 = 64;

    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE),
        }
    }

    /// Grow cells by one pixel
    pub fn grow(&mut self) {
        self.cell_size = (self.cell_size + 1).min(Self::MAX_CELL_SIZE);
    }

    /// Shrink cells by one pixel, never below one
    pub fn shrink(&mut self) {
        self.cell_size = self.cell_size.saturating_sub(1).max(Self::MIN_CELL_SIZE);
    }

    /// Convert screen coordinates to the cell under them
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        if screen_x < 0.0 || screen_y < 0.0 {
            return None;
        }
        let size = self.cell_size as f32;
        Some(((screen_x / size) as usize, (screen_y / size) as usize))
    }

    /// Convert cell coordinates to the screen position of its top-left corner
    pub fn cell_to_screen(&self, x: usize, y: usize) -> (f32, f32) {
        let size = self.cell_size as f32;
        (x as f32 * size, y as f32 * size)
    }

    /// Number of whole cells that fit in a screen area
    pub fn cells_in(&self, width: f32, height: f32) -> (usize, usize) {
        let size = self.cell_size as f32;
        ((width.max(0.0) / size) as usize, (height.max(0.0) / size) as usize)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(6)
    }
}
