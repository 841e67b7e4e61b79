use crate::game::GameState;
use crate::game::grid::{is_border, is_occupied_by_snake, is_same_position};

/// What occupies a single grid cell. Flags are independent: a snake head
/// resting on the border is both `border` and `snake`, and `hit` once the
/// game is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellClass {
    pub border: bool,
    pub snake: bool,
    pub snack: bool,
    pub hit: bool,
}

impl CellClass {
    pub fn classify(state: &GameState, grid_size: i32, x: i32, y: i32) -> Self {
        let head = state.snake.head();
        let snack = state.snack.coordinate;
        Self {
            border: is_border(x, y, grid_size),
            snake: is_occupied_by_snake(x, y, &state.snake.coordinates),
            snack: is_same_position(x, y, snack.x, snack.y),
            hit: state.is_game_over() && is_same_position(x, y, head.x, head.y),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Position, Snack, Snake};

    fn state() -> GameState {
        GameState::new(
            Snake::new(vec![Position::new(0, 4), Position::new(1, 4)]),
            Snack::new(Position::new(6, 6)),
        )
    }

    #[test]
    fn test_plain_cells() {
        let state = state();
        assert!(CellClass::classify(&state, 10, 5, 5).is_empty());

        let snack = CellClass::classify(&state, 10, 6, 6);
        assert!(snack.snack && !snack.snake && !snack.border);

        let body = CellClass::classify(&state, 10, 1, 4);
        assert!(body.snake && !body.border && !body.hit);

        let corner = CellClass::classify(&state, 10, 10, 10);
        assert!(corner.border && !corner.snake);
    }

    #[test]
    fn test_head_on_border() {
        let mut state = state();
        let running = CellClass::classify(&state, 10, 0, 4);
        assert!(running.border && running.snake && !running.hit);

        state.playground.is_game_over = true;
        let hit = CellClass::classify(&state, 10, 0, 4);
        assert!(hit.border && hit.snake && hit.hit);

        // Only the head is marked as hit
        assert!(!CellClass::classify(&state, 10, 1, 4).hit);
    }

    #[test]
    fn test_snack_under_snake() {
        let mut state = state();
        state.snack = Snack::new(Position::new(1, 4));
        let cell = CellClass::classify(&state, 10, 1, 4);
        assert!(cell.snake && cell.snack);
    }
}
