use rand::Rng;
use thiserror::Error;

use crate::ScreenSize;
use crate::cell::Cell;

/// Rows of the terminal kept free for the status line
pub const STATUS_ROWS: ScreenSize = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must be at least 1x1, got {width}x{height}")]
    Degenerate { width: usize, height: usize },

    #[error("Terminal of {cols}x{rows} is too small to host a grid and a status line")]
    TerminalTooSmall { cols: ScreenSize, rows: ScreenSize },
}

/// A finite, fixed size field of cells.
///
/// Cells are stored row-major in a flat buffer, so `(x, y)` lives at `y * width + x`. The
/// dimensions are fixed on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// The cell buffer
    cells: Vec<Cell>,

    /// Number of columns
    w: usize,

    /// Number of rows
    h: usize,
}

impl Grid {
    /// Create a grid where every cell is dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Degenerate { width, height });
        }

        Ok(Self {
            cells: vec![Cell::Dead; width * height],
            w: width,
            h: height,
        })
    }

    /// Create a grid covering a terminal of `cols` x `rows`, leaving the bottom row for the status
    /// line.
    pub fn for_terminal(cols: ScreenSize, rows: ScreenSize) -> Result<Self, GridError> {
        if cols == 0 || rows <= STATUS_ROWS {
            return Err(GridError::TerminalTooSmall { cols, rows });
        }

        Self::new(cols as usize, (rows - STATUS_ROWS) as usize)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Whether `(x, y)` lies on the grid
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.w && y < self.h
    }

    /// Panics if `(x, y)` is out of bounds
    pub fn get(&self, x: usize, y: usize) -> Cell {
        let i = self.xy_from(x, y);

        self.cells[i]
    }

    /// Panics if `(x, y)` is out of bounds
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.xy_from(x, y);

        self.cells[i] = cell;
    }

    /// Like [`Grid::get`], but positions off the grid read as `None`.
    pub fn get_checked(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.get(x, y))
    }

    /// Flip the cell at `(x, y)` and return its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Cell {
        let cell = self.get(x, y).toggled();
        self.set(x, y, cell);

        cell
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Every cell independently becomes alive with probability `density`.
    ///
    /// Panics if `density` is not in `[0, 1]`.
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = if rng.gen_bool(density) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Whether at least one cell is alive
    pub fn any_alive(&self) -> bool {
        self.cells.iter().any(|c| c.is_alive())
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.w)
    }

    /// Check that `other` has our dimensions
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.w == other.w && self.h == other.h
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        y * self.w + x
    }
}
