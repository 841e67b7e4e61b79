use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
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

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    pub coordinates: Vec<Position>,
}

impl Snake {
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self { coordinates }
    }

    /// Single-cell snake, as created on reset
    pub fn single(head: Position) -> Self {
        Self::new(vec![head])
    }

    /// Get the head position.
    ///
    /// # Panics
    ///
    /// Panics if the snake has no coordinates. Construction and reset never
    /// produce such a snake.
    pub fn head(&self) -> Position {
        assert!(!self.coordinates.is_empty(), "snake has no head");
        self.coordinates[0]
    }

    /// Every segment except the last one, i.e. the body after a non-eating move
    pub fn body_without_tail_stub(&self) -> &[Position] {
        let end = self.coordinates.len().saturating_sub(1);
        &self.coordinates[..end]
    }

    /// Every segment except the head
    pub fn tail_only(&self) -> &[Position] {
        self.coordinates.get(1..).unwrap_or(&[])
    }

    /// True once the head sits on or beyond the border.
    /// The playable area is the open interval `(0, grid_size)` on both axes.
    pub fn is_outside_bounds(&self, grid_size: i32) -> bool {
        let head = self.head();
        head.x >= grid_size || head.y >= grid_size || head.x <= 0 || head.y <= 0
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// The collectible the snake is heading for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snack {
    pub coordinate: Position,
}

impl Snack {
    pub fn new(coordinate: Position) -> Self {
        Self { coordinate }
    }
}

/// Movement direction and game-over flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playground {
    pub direction: Direction,
    pub is_game_over: bool,
}

impl Playground {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            is_game_over: false,
        }
    }

    /// Point the snake at `direction` unless that would reverse it.
    /// Returns whether the direction was accepted.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::new(Direction::Right)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub playground: Playground,
    pub snake: Snake,
    pub snack: Snack,
}

impl GameState {
    /// Fresh running game: score 0, heading right
    pub fn new(snake: Snake, snack: Snack) -> Self {
        Self {
            score: 0,
            playground: Playground::default(),
            snake,
            snack,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.playground.direction = direction;
        self
    }

    pub fn is_game_over(&self) -> bool {
        self.playground.is_game_over
    }

    /// True when the head currently covers the snack
    pub fn is_snake_eating(&self) -> bool {
        self.snake.head() == self.snack.coordinate
    }
}
