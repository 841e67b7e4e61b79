//! Snack Snake - a grid-based snake game
//!
//! This library provides:
//! - Core game logic and the single-writer game session (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - In-memory session metrics (metrics module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
