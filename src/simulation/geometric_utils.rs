//! Geometric utility functions for distance calculations and bounds handling.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use rand::Rng;

/// Unit steps for the eight compass and diagonal directions.
pub const DIRECTIONS: [(f32, f32); 8] = [
    (0.0, 1.0),
    (1.0, 0.0),
    (0.0, -1.0),
    (-1.0, 0.0),
    (1.0, 1.0),
    (-1.0, -1.0),
    (1.0, -1.0),
    (-1.0, 1.0),
];

/// Euclidean distance between two positions.
pub fn distance(a: Point<f32>, b: Point<f32>) -> f32 {
    Euclidean.distance(a, b)
}

/// Returns `true` if `pos` lies inside `[0, width) x [0, height)`.
pub fn in_bounds(pos: Point<f32>, width: usize, height: usize) -> bool {
    (0.0..width as f32).contains(&pos.x()) && (0.0..height as f32).contains(&pos.y())
}

/// Clamps a position into `[0, width - 1] x [0, height - 1]`.
pub fn clamp_to_grid(pos: Point<f32>, width: usize, height: usize) -> Point<f32> {
    Point::new(
        pos.x().clamp(0.0, width.saturating_sub(1) as f32),
        pos.y().clamp(0.0, height.saturating_sub(1) as f32),
    )
}

/// Proposes one random compass step of length `speed` from `pos`.
pub fn random_step<R: Rng + ?Sized>(pos: Point<f32>, speed: f32, rng: &mut R) -> Point<f32> {
    let (dx, dy) = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
    Point::new(pos.x() + dx * speed, pos.y() + dy * speed)
}

/// Random integer cell inside the grid, as a continuous position.
pub fn random_cell<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Point<f32> {
    Point::new(
        rng.random_range(0..width) as f32,
        rng.random_range(0..height) as f32,
    )
}

/// Offsets `pos` by an independent integer jitter in `[-spread, spread]` per
/// axis and clamps the result into the grid.
pub fn jitter_in_grid<R: Rng + ?Sized>(
    pos: Point<f32>,
    spread: i32,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Point<f32> {
    let jittered = Point::new(
        pos.x() + rng.random_range(-spread..=spread) as f32,
        pos.y() + rng.random_range(-spread..=spread) as f32,
    );
    clamp_to_grid(jittered, width, height)
}
