//! Heading of the snake on the board
//!
//! The board is centered on the origin with y growing upward, so `Up` adds to
//! y. A snake that has never been steered has no heading at all; that case is
//! an `Option<Direction>` in the game state, not a variant here.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The heading that would send the head straight back into its neck
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether steering from `self` to `other` is a reversal the engine ignores
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// One grid step as (dx, dy); multiply by the grid step for board units
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
