//! Single owner of the live game state.
//!
//! Ticks, direction changes and resets all go through `&mut GameSession`, so
//! there is exactly one writer and every tick runs against one consistent
//! snapshot.

use log::{debug, info};

use super::{
    action::Direction,
    config::GameConfig,
    engine::{GameEngine, TickResult},
    state::GameState,
};

pub struct GameSession {
    engine: GameEngine,
    state: GameState,
    ticks: u64,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::from_engine(GameEngine::new(config))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_engine(GameEngine::with_seed(config, seed))
    }

    pub fn from_engine(mut engine: GameEngine) -> Self {
        let state = engine.reset();
        Self {
            engine,
            state,
            ticks: 0,
        }
    }

    /// Replace the state wholesale, e.g. to start from a known position
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// Ticks applied since the last reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self) -> TickResult {
        if self.state.is_game_over() {
            return self.engine.tick(&mut self.state);
        }

        let result = self.engine.tick(&mut self.state);
        self.ticks += 1;

        if result.info.ate_snack {
            debug!(
                "Snack eaten, score {} length {}",
                self.state.score,
                self.state.snake.len()
            );
        }
        if result.info.hit_border {
            info!(
                "Game over at {:?} with score {} after {} ticks",
                self.state.snake.head(),
                self.state.score,
                self.ticks
            );
        }

        result
    }

    /// Apply a directional command; reversals are ignored.
    /// Takes effect on the next tick.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.state.playground.change_direction(direction);
        if !accepted {
            debug!(
                "Ignored reversal from {:?} to {:?}",
                self.state.playground.direction, direction
            );
        }
        accepted
    }

    /// Raw arrow key code input. Unknown codes are ignored.
    pub fn handle_key_code(&mut self, code: u16) -> bool {
        match Direction::from_key_code(code) {
            Some(direction) => self.change_direction(direction),
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.state = self.engine.reset();
        self.ticks = 0;
        info!("Game reset, snake at {:?}", self.state.snake.head());
    }
}
