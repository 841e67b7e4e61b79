//! Terminal presentation of the game state

pub mod cell;
pub mod renderer;

pub use cell::CellClass;
pub use renderer::Renderer;
