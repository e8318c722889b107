/// Glyph drawn for, and dumped for, a live cell
pub const ALIVE_GLYPH: char = '*';

/// Glyph drawn for, and dumped for, a dead cell
pub const DEAD_GLYPH: char = ' ';

/// A single position on the grid.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The opposite state. Used when painting cells in the editor.
    pub fn toggled(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => ALIVE_GLYPH,
            Cell::Dead => DEAD_GLYPH,
        }
    }
}
