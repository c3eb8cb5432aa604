use super::direction::Direction;
use super::food::FoodVariant;

/// A position on the board. The origin is the board center and y grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position `step` units in a direction
    pub fn moved_in_direction(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * step, dy * step)
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    body: Vec<Position>,
    /// Cell the tail left on the last move; new segments start here
    vacated: Position,
}

impl Snake {
    /// Create a one-segment snake
    pub fn new(head: Position) -> Self {
        Self {
            body: vec![head],
            vacated: head,
        }
    }

    /// Create a snake from its head and the segments trailing it
    pub fn from_segments(head: Position, rest: impl IntoIterator<Item = Position>) -> Self {
        let mut body = vec![head];
        body.extend(rest);
        let vacated = *body.last().unwrap_or(&head);
        Self { body, vacated }
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn vacated(&self) -> Position {
        self.vacated
    }

    /// Shift every segment onto its predecessor's cell, then move the head
    /// `step` units. Without a direction the head stays where it is.
    pub fn advance(&mut self, direction: Option<Direction>, step: i32) {
        self.vacated = self.tail();

        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        if let Some(direction) = direction {
            self.body[0] = self.body[0].moved_in_direction(direction, step);
        }
    }

    /// Append a segment on the cell the tail vacated last
    pub fn grow(&mut self) {
        self.body.push(self.vacated);
    }

    /// Drop the tail segment. A one-segment snake is left alone.
    pub fn shrink(&mut self) {
        if self.body.len() > 1 {
            if let Some(tail) = self.body.pop() {
                self.vacated = tail;
            }
        }
    }

    /// Check if any non-head segment is closer than `radius` to `pos`
    pub fn collides_with_body(&self, pos: Position, radius: f64) -> bool {
        self.body_segments()
            .iter()
            .any(|segment| segment.distance(pos) < radius)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// A snake always keeps its head, so this is false
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The food currently on the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub position: Position,
    pub variant: FoodVariant,
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake hit itself
    SelfCollision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(CollisionType),
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    /// Seconds between ticks
    pub delay: f64,
    /// `None` until the first direction request
    pub direction: Option<Direction>,
    pub status: GameStatus,
    pub ticks: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food, delay: f64) -> Self {
        Self {
            snake,
            food,
            score: 0,
            delay,
            direction: None,
            status: GameStatus::Running,
            ticks: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status.is_running()
    }
}
