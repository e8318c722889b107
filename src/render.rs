use std::io;

use crate::ScreenSize;
use crate::cursor::Cursor;
use crate::grid::Grid;
use crate::memorial;
use crate::terminal::Terminal;

/// Instructions shown while editing
pub const EDIT_HELP: &str = "Press 'r' to create a random generation and 'space' to start the simulation; alternatively, navigate with WASD and give 'life' to a cell (or remove it) with 'l'";

/// Instructions shown while the simulation runs
pub const RUN_HELP: &str = "Press 'e' to end simulation, space to pause";

/// Instructions shown while paused
pub const PAUSE_HELP: &str =
    "Paused. Press 'd' to dump to file, 'e' to end simulation, space to resume";

/// Draws grids onto a [`Terminal`]. The row below the grid holds the status line.
pub struct Renderer {
    /// The frame buffer, one line per grid row
    fb: String,

    /// Width of the framebuffer
    w: usize,

    /// Height of the framebuffer
    h: usize,
}

impl Renderer {
    pub fn new(grid: &Grid) -> Self {
        let (w, h) = (grid.width(), grid.height());

        // One byte per cell, and a newline between rows
        let fb = String::with_capacity(w * h + h);

        Self { fb, w, h }
    }

    /// Row holding the status line
    pub fn status_row(&self) -> ScreenSize {
        self.h as ScreenSize
    }

    /// Lay out `grid` as text, one line per row, without a trailing newline
    pub fn render(&mut self, grid: &Grid) -> &str {
        assert!(
            grid.width() == self.w && grid.height() == self.h,
            "grid does not match the framebuffer"
        );

        self.fb.clear();

        for (y, row) in grid.rows().enumerate() {
            if y > 0 {
                self.fb.push('\n');
            }

            self.fb.extend(row.iter().map(|c| c.glyph()));
        }

        &self.fb
    }

    /// Redraw every cell of `grid`
    pub fn draw<T: Terminal + ?Sized>(&mut self, term: &mut T, grid: &Grid) -> io::Result<()> {
        self.render(grid);

        for (y, line) in self.fb.lines().enumerate() {
            term.print_at(0, y as ScreenSize, line)?;
        }

        term.flush()
    }

    /// Replace the status line with `text`, cut to the width of the screen
    pub fn status<T: Terminal + ?Sized>(&self, term: &mut T, text: &str) -> io::Result<()> {
        let row = self.status_row();
        let text: String = text.chars().take(self.w).collect();

        term.clear_line(row)?;
        term.print_at(0, row, &text)?;
        term.flush()
    }

    /// Status line while the simulation runs
    pub fn generation<T: Terminal + ?Sized>(
        &self,
        term: &mut T,
        generation: u64,
    ) -> io::Result<()> {
        self.status(term, &format!("{RUN_HELP}  Generation {generation}"))
    }

    /// Park the terminal cursor over the editor cursor
    pub fn place_cursor<T: Terminal + ?Sized>(
        &self,
        term: &mut T,
        cursor: &Cursor,
    ) -> io::Result<()> {
        term.move_cursor(cursor.x() as ScreenSize, cursor.y() as ScreenSize)?;
        term.flush()
    }

    /// Print the memorial caption over the grid area. Text off the grid is cut.
    pub fn caption<T: Terminal + ?Sized>(&self, term: &mut T, grid: &Grid) -> io::Result<()> {
        for (x, y, text) in memorial::caption(grid) {
            if y < 0 || y as usize >= self.h {
                continue;
            }

            let skip = (-x).max(0) as usize;
            let x = x.max(0) as usize;
            let text: String = text
                .chars()
                .skip(skip)
                .take(self.w.saturating_sub(x))
                .collect();

            if !text.is_empty() {
                term.print_at(x as ScreenSize, y as ScreenSize, &text)?;
            }
        }

        term.flush()
    }
}

#[cfg(test)]
mod test {
    use super::Renderer;
    use crate::cell::Cell;
    use crate::grid::Grid;

    #[test]
    fn renders_rows() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(1, 0, Cell::Alive);
        grid.set(1, 1, Cell::Alive);
        grid.set(3, 2, Cell::Alive);

        let mut renderer = Renderer::new(&grid);
        let frame = renderer.render(&grid).replace(' ', ".");

        insta::assert_snapshot!(frame, @r"
        .*..
        .*..
        ...*
        ");
        assert_eq!(renderer.status_row(), 3);
    }

    #[test]
    fn rerender_replaces_frame() {
        let mut grid = Grid::new(2, 2).unwrap();
        let mut renderer = Renderer::new(&grid);

        renderer.render(&grid);
        grid.set(0, 1, Cell::Alive);

        assert_eq!(renderer.render(&grid), "  \n* ");
    }

    #[test]
    #[should_panic(expected = "grid does not match the framebuffer")]
    fn rejects_foreign_grid() {
        let grid = Grid::new(2, 2).unwrap();
        let mut renderer = Renderer::new(&grid);

        renderer.render(&Grid::new(3, 2).unwrap());
    }
}
