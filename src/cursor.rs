use crate::grid::Grid;

/// Direction of a single cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor cursor. Always within `[0, width) x [0, height)` of the grid it was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: usize,
    y: usize,

    /// Bounds, exclusive
    w: usize,
    h: usize,
}

impl Cursor {
    /// A cursor in the top left corner of `grid`
    pub fn new(grid: &Grid) -> Self {
        Self {
            x: 0,
            y: 0,
            w: grid.width(),
            h: grid.height(),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Move by one cell. Moving past an edge does nothing.
    pub fn shift(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.y = self.y.saturating_sub(1),
            Direction::Down => self.y = (self.y + 1).min(self.h - 1),
            Direction::Left => self.x = self.x.saturating_sub(1),
            Direction::Right => self.x = (self.x + 1).min(self.w - 1),
        }
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::Cursor;
    use super::Direction;
    use crate::grid::Grid;

    #[test]
    fn left_at_the_edge_is_a_no_op() {
        let grid = Grid::new(3, 3).unwrap();
        let mut cursor = Cursor::new(&grid);

        for _ in 0..5 {
            cursor.shift(Direction::Left);
            cursor.shift(Direction::Up);
        }

        assert_eq!(cursor.position(), (0, 0));
    }

    #[test]
    fn stops_at_far_corner() {
        let grid = Grid::new(3, 2).unwrap();
        let mut cursor = Cursor::new(&grid);

        for _ in 0..5 {
            cursor.shift(Direction::Right);
            cursor.shift(Direction::Down);
        }

        assert_eq!(cursor.position(), (2, 1));

        cursor.shift(Direction::Left);
        assert_eq!(cursor.position(), (1, 1));
    }

    #[test]
    fn single_cell_grid() {
        let grid = Grid::new(1, 1).unwrap();
        let mut cursor = Cursor::new(&grid);

        cursor.shift(Direction::Right);
        cursor.shift(Direction::Down);

        assert_eq!(cursor.position(), (0, 0));
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn never_leaves_the_grid(
            w in 1usize..20,
            h in 1usize..20,
            moves in proptest::collection::vec(arb_direction(), 0..100),
        ) {
            let grid = Grid::new(w, h).unwrap();
            let mut cursor = Cursor::new(&grid);

            for direction in moves {
                cursor.shift(direction);
                prop_assert!(grid.contains(cursor.x(), cursor.y()));
            }
        }
    }
}
