//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, TickInfo, TickResult, TickUpdate, score_after_tick};
pub use session::GameSession;
pub use state::{GameState, Playground, Position, Snack, Snake};
