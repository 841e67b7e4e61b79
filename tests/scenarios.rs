use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snack_snake::game::{
    Direction, GameConfig, GameEngine, GameSession, GameState, Position, Snack, Snake,
};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn state(coords: &[(i32, i32)], snack: (i32, i32), direction: Direction) -> GameState {
    GameState::new(
        Snake::new(coords.iter().map(|&(x, y)| Position::new(x, y)).collect()),
        Snack::new(Position::new(snack.0, snack.1)),
    )
    .with_direction(direction)
}

#[test]
fn test_eating_grows_by_one_and_scores_once() {
    let mut engine = GameEngine::with_seed(GameConfig::new(10), 11);
    let mut state = state(&[(5, 4), (5, 5)], (5, 4), Direction::Up);

    let result = engine.tick(&mut state);

    assert!(result.info.ate_snack);
    assert_eq!(
        state.snake.coordinates,
        vec![Position::new(5, 3), Position::new(5, 4), Position::new(5, 5)]
    );
    assert_eq!(state.score, 1);
    let snack = state.snack.coordinate;
    assert!((1..=9).contains(&snack.x) && (1..=9).contains(&snack.y));
}

#[test]
fn test_walk_onto_snack_then_eat() {
    let mut session = GameSession::with_seed(GameConfig::new(10), 2)
        .with_state(state(&[(5, 5)], (5, 4), Direction::Up));

    session.tick();
    assert_eq!(session.state().snake.coordinates, vec![Position::new(5, 4)]);

    session.tick();
    assert_eq!(
        session.state().snake.coordinates,
        vec![Position::new(5, 3), Position::new(5, 4)]
    );
    assert_eq!(session.state().score, 1);
}

#[test]
fn test_left_into_border_ends_game() {
    let mut session = GameSession::with_seed(GameConfig::new(10), 3)
        .with_state(state(&[(1, 1), (2, 1)], (7, 7), Direction::Left));

    session.tick();
    assert_eq!(
        session.state().snake.coordinates,
        vec![Position::new(0, 1), Position::new(1, 1)]
    );
    assert!(!session.state().is_game_over());

    let before = session.state().clone();
    session.tick();
    let after = session.state();
    assert!(after.is_game_over());
    assert_eq!(after.snake, before.snake);
    assert_eq!(after.snack, before.snack);
    assert_eq!(after.score, before.score);
}

#[test]
fn test_move_without_eating_drops_tail() {
    let mut engine = GameEngine::with_seed(GameConfig::new(10), 4);
    let mut state = state(&[(5, 5), (5, 6)], (3, 3), Direction::Right);

    engine.tick(&mut state);

    assert_eq!(
        state.snake.coordinates,
        vec![Position::new(6, 5), Position::new(5, 5)]
    );
    assert_eq!(state.snack.coordinate, Position::new(3, 3));
    assert_eq!(state.score, 0);
}

#[test]
fn test_reversal_guard_from_right() {
    let mut session = GameSession::with_seed(GameConfig::new(10), 5);
    assert_eq!(session.state().playground.direction, Direction::Right);

    assert!(!session.change_direction(Direction::Left));
    assert_eq!(session.state().playground.direction, Direction::Right);

    assert!(session.change_direction(Direction::Up));
    assert_eq!(session.state().playground.direction, Direction::Up);

    session.reset();
    assert!(session.change_direction(Direction::Down));
    assert_eq!(session.state().playground.direction, Direction::Down);
}

#[test]
fn test_reset_yields_fresh_game() {
    let mut engine = GameEngine::with_seed(GameConfig::new(10), 6);
    for _ in 0..50 {
        let state = engine.reset();
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over());
        assert_eq!(state.playground.direction, Direction::Right);
        assert_eq!(state.snake.len(), 1);
        assert!(!state.snake.is_outside_bounds(10));
        let snack = state.snack.coordinate;
        assert!((1..=9).contains(&snack.x) && (1..=9).contains(&snack.y));
    }
}

#[test]
fn test_random_play_invariants() {
    let grid_size = 12;
    let mut rng = StdRng::seed_from_u64(99);
    let mut session = GameSession::with_seed(GameConfig::new(grid_size), 7);

    for _ in 0..5_000 {
        if rng.gen_bool(0.3) {
            session.change_direction(DIRECTIONS[rng.gen_range(0..4)]);
        }

        let before = session.state().clone();
        let result = session.tick();
        let after = session.state();

        if before.is_game_over() {
            assert_eq!(after, &before);
            session.reset();
            continue;
        }

        if before.snake.is_outside_bounds(grid_size) {
            assert!(result.terminated);
            assert!(after.is_game_over());
            assert_eq!(after.snake, before.snake);
            assert_eq!(after.snack, before.snack);
            assert_eq!(after.score, before.score);
            continue;
        }

        let eating = before.is_snake_eating();
        assert_eq!(result.info.ate_snack, eating);
        if eating {
            assert_eq!(after.snake.len(), before.snake.len() + 1);
            assert_eq!(after.score, before.score + 1);
        } else {
            assert_eq!(after.snake.len(), before.snake.len());
            assert_eq!(after.score, before.score);
            assert_eq!(after.snack, before.snack);
        }
        assert_eq!(
            after.snake.head(),
            before
                .snake
                .head()
                .moved_in_direction(before.playground.direction)
        );
    }
}
