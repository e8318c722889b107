use crate::cell::Cell;
use crate::grid::Grid;

/// Neighbor counts that bring a dead cell to life, one bit per count. `b3`.
const BIRTHS: u16 = 0b0_0000_1000;

/// Neighbor counts that keep a live cell alive, one bit per count. `s23`.
const SURVIVALS: u16 = 0b0_0000_1100;

/// Offsets of the eight neighbors of a cell
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The state of a cell in the next generation, given its current state and number of live
/// neighbors.
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    let mask = if cell.is_alive() { SURVIVALS } else { BIRTHS };

    if mask & (1 << neighbors) != 0 {
        Cell::Alive
    } else {
        Cell::Dead
    }
}

/// Count live cells around `(x, y)`. Positions past the edge of the grid are dead.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut n = 0;

    for (dx, dy) in NEIGHBORHOOD {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };

        if let Some(Cell::Alive) = grid.get_checked(nx, ny) {
            n += 1;
        }
    }

    n
}

/// Write the generation after `current` into `next`.
///
/// Both buffers must have the same dimensions. `current` is only read, so no cell of the next
/// generation can observe another cell's new state.
pub fn step_into(current: &Grid, next: &mut Grid) {
    assert!(current.same_shape(next), "step buffers differ in shape");

    for y in 0..current.height() {
        for x in 0..current.width() {
            let n = live_neighbors(current, x, y);
            next.set(x, y, next_state(current.get(x, y), n));
        }
    }
}

/// Compute the next generation of `grid` into a freshly allocated grid
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    step_into(grid, &mut next);

    next
}

/// Whether anything is still alive. The simulation ends once this is false.
///
/// Still lifes and oscillators never go extinct, so they keep this true forever.
pub fn live_check(grid: &Grid) -> bool {
    grid.any_alive()
}
