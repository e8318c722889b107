//! A wave goodbye to John Conway.
//!
//! ```notrust
//!      ***
//!      * *
//!      * *
//!       *
//!   * ***
//!    * * *
//!       *  *
//!      * *
//!      * *
//!
//!
//!   RIP John Conway
//! 26 Dec. 1937 - 11 Apr. 2020
//! ```

use crate::cell::Cell;
use crate::grid::Grid;

/// Live cells of the figure, relative to the center of the grid
pub const FIGURE: [(isize, isize); 21] = [
    (-1, -4),
    (0, -4),
    (1, -4),
    (-1, -3),
    (1, -3),
    (-1, -2),
    (1, -2),
    (0, -1),
    (-3, 0),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-2, 1),
    (0, 1),
    (2, 1),
    (0, 2),
    (3, 2),
    (-1, 3),
    (1, 3),
    (-1, 4),
    (1, 4),
];

/// Caption lines, each with the offset of its first character from the center of the grid
pub const CAPTION: [(isize, isize, &str); 2] = [
    (-7, 6, "RIP John Conway"),
    (-13, 7, "26 Dec. 1937 - 11 Apr. 2020"),
];

/// Center of the grid, where the figure is anchored
pub fn center(grid: &Grid) -> (isize, isize) {
    ((grid.width() / 2) as isize, (grid.height() / 2) as isize)
}

/// Clear `grid` and paint the figure onto it. Cells falling off a small grid are dropped.
pub fn paint(grid: &mut Grid) {
    grid.clear();

    let (cx, cy) = center(grid);

    for (dx, dy) in FIGURE {
        let (x, y) = (cx + dx, cy + dy);
        if x < 0 || y < 0 {
            continue;
        }

        let (x, y) = (x as usize, y as usize);
        if grid.contains(x, y) {
            grid.set(x, y, Cell::Alive);
        }
    }
}

/// Caption lines positioned on `grid`, as `(x, y, text)` with `x` and `y` possibly off the grid
pub fn caption(grid: &Grid) -> impl Iterator<Item = (isize, isize, &'static str)> {
    let (cx, cy) = center(grid);

    CAPTION
        .into_iter()
        .map(move |(dx, dy, text)| (cx + dx, cy + dy, text))
}
