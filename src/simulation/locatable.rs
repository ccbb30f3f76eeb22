//! Trait for entities that occupy a position on the grid.
//!
//! Ants and creatures both implement it, which lets proximity checks work
//! across species without knowing the concrete type.

use geo::Point;

use super::geometric_utils;

/// Trait for entities with a position in continuous grid coordinates.
pub trait Locatable {
    /// Returns the entity's position.
    fn pos(&self) -> Point<f32>;

    /// Euclidean distance to another locatable entity.
    fn distance_to(&self, other: &(impl Locatable + ?Sized)) -> f32 {
        geometric_utils::distance(self.pos(), other.pos())
    }
}
