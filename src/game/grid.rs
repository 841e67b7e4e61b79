//! Coordinate helpers shared by the engine and the renderer

use super::state::Position;
use rand::Rng;

/// Random cell strictly inside the border, both axes drawn from `1..=grid_size - 1`
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, grid_size: i32) -> Position {
    Position::new(rng.gen_range(1..grid_size), rng.gen_range(1..grid_size))
}

/// True for cells on the outer ring (x or y equal to 0 or `grid_size`)
pub fn is_border(x: i32, y: i32, grid_size: i32) -> bool {
    x == 0 || y == 0 || x == grid_size || y == grid_size
}

pub fn is_same_position(x: i32, y: i32, x2: i32, y2: i32) -> bool {
    x == x2 && y == y2
}

pub fn is_occupied_by_snake(x: i32, y: i32, coordinates: &[Position]) -> bool {
    coordinates
        .iter()
        .any(|coordinate| is_same_position(coordinate.x, coordinate.y, x, y))
}
