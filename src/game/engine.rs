use super::{
    config::GameConfig,
    grid::random_coordinate,
    state::{GameState, Playground, Snack, Snake},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// State change computed from one pre-tick snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickUpdate {
    /// The head was already on or past the border; only the flag changes
    GameOver,
    /// The snake moved one cell; the snack may have been replaced
    Advance { snake: Snake, snack: Snack },
}

/// Information about a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInfo {
    /// Whether the head covered the snack at the start of this tick
    pub ate_snack: bool,
    /// Whether this tick ended the game
    pub hit_border: bool,
}

/// Result of a game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the game is over after this tick
    pub terminated: bool,
    /// Additional information about the tick
    pub info: TickInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine whose snack and start positions are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Brand-new game: score 0, heading right, one-cell snake and a snack at random cells
    pub fn reset(&mut self) -> GameState {
        let grid_size = self.config.grid_size;
        GameState {
            score: 0,
            playground: Playground::default(),
            snake: Snake::single(random_coordinate(&mut self.rng, grid_size)),
            snack: Snack::new(random_coordinate(&mut self.rng, grid_size)),
        }
    }

    /// Compute the movement part of a tick from `state` alone.
    ///
    /// The new snack is drawn without looking at the snake, so it may land on it.
    pub fn plan_tick(&mut self, state: &GameState) -> TickUpdate {
        if state.snake.is_outside_bounds(self.config.grid_size) {
            return TickUpdate::GameOver;
        }

        let is_eating = state.is_snake_eating();
        let new_head = state
            .snake
            .head()
            .moved_in_direction(state.playground.direction);

        let kept = if is_eating {
            &state.snake.coordinates[..]
        } else {
            state.snake.body_without_tail_stub()
        };
        let mut coordinates = Vec::with_capacity(kept.len() + 1);
        coordinates.push(new_head);
        coordinates.extend_from_slice(kept);

        let snack = if is_eating {
            Snack::new(random_coordinate(&mut self.rng, self.config.grid_size))
        } else {
            state.snack
        };

        TickUpdate::Advance {
            snake: Snake::new(coordinates),
            snack,
        }
    }

    /// Execute one tick.
    ///
    /// Movement and scoring are both derived from the same pre-tick snapshot
    /// and written back together, so they can never disagree.
    pub fn tick(&mut self, state: &mut GameState) -> TickResult {
        if state.is_game_over() {
            return TickResult {
                terminated: true,
                info: TickInfo {
                    ate_snack: false,
                    hit_border: false,
                },
            };
        }

        let update = self.plan_tick(state);
        let score = score_after_tick(state);
        let ate_snack = score != state.score;

        match update {
            TickUpdate::GameOver => {
                state.playground.is_game_over = true;
                state.score = score;
                TickResult {
                    terminated: true,
                    info: TickInfo {
                        ate_snack,
                        hit_border: true,
                    },
                }
            }
            TickUpdate::Advance { snake, snack } => {
                state.snake = snake;
                state.snack = snack;
                state.score = score;
                TickResult {
                    terminated: false,
                    info: TickInfo {
                        ate_snack,
                        hit_border: false,
                    },
                }
            }
        }
    }
}

/// Score after a tick starting from `state`: one more if the head covers the snack
pub fn score_after_tick(state: &GameState) -> u32 {
    if state.is_snake_eating() {
        state.score + 1
    } else {
        state.score
    }
}
