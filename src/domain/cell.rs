/// One board position. Storing cells as this enum keeps every stored value
/// binary, so a step can only ever write Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// True for a live cell
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Dead becomes Alive and Alive becomes Dead (mouse-click editing)
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// B3/S23 for a cell with `neighbors` live cells around it inside the
    /// viewport: birth on exactly 3, survival on 2 or 3.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_cell_survives_only_on_two_or_three() {
        let survivors: Vec<u8> = (0..=8).filter(|&n| Cell::Alive.evolve(n).is_alive()).collect();
        assert_eq!(survivors, vec![2, 3]);
    }

    #[test]
    fn test_dead_cell_born_only_on_three() {
        let births: Vec<u8> = (0..=8).filter(|&n| Cell::Dead.evolve(n).is_alive()).collect();
        assert_eq!(births, vec![3]);
    }

    #[test]
    fn test_toggle_and_default() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle().toggle(), Cell::Alive);
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
    }
}
