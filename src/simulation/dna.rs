//! Heritable trait records, parent blending and mutation.
//!
//! An offspring starts from the arithmetic mean of both parents' traits.
//! Each trait then mutates independently: with [`MUTATION_CHANCE`] it is
//! scaled by a factor drawn from `[1 - MUTATION_RANGE, 1 + MUTATION_RANGE]`.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability that a single trait mutates at birth.
pub const MUTATION_CHANCE: f64 = 0.2;

/// Maximum relative change applied by a mutation.
pub const MUTATION_RANGE: f32 = 0.2;

/// The numeric traits an ant passes on to its offspring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Traits {
    /// Starting health.
    pub health: f32,
    /// Damage dealt per attack.
    pub damage: f32,
    /// Step length per move.
    pub speed: f32,
    /// Advisory fertility value.
    pub fertility: f32,
    /// Detection and attack radius.
    pub awareness: f32,
}

impl Traits {
    /// Arithmetic mean of two parents, trait by trait.
    pub fn blend(a: &Self, b: &Self) -> Self {
        Self {
            health: (a.health + b.health) / 2.0,
            damage: (a.damage + b.damage) / 2.0,
            speed: (a.speed + b.speed) / 2.0,
            fertility: (a.fertility + b.fertility) / 2.0,
            awareness: (a.awareness + b.awareness) / 2.0,
        }
    }

    /// Mutates every trait independently.
    pub fn mutated<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        Self {
            health: mutate(self.health, rng),
            damage: mutate(self.damage, rng),
            speed: mutate(self.speed, rng),
            fertility: mutate(self.fertility, rng),
            awareness: mutate(self.awareness, rng),
        }
    }
}

/// Mutates a single trait value.
///
/// Returns `value` unchanged unless the mutation roll succeeds.
pub fn mutate<R: Rng + ?Sized>(value: f32, rng: &mut R) -> f32 {
    if rng.random_bool(MUTATION_CHANCE) {
        value * rng.random_range(1.0 - MUTATION_RANGE..=1.0 + MUTATION_RANGE)
    } else {
        value
    }
}

/// Scales `value` by a factor drawn uniformly from `[1 - spread, 1 + spread]`.
///
/// Used by asexual creature reproduction, where every trait varies.
pub fn vary<R: Rng + ?Sized>(value: f32, spread: f32, rng: &mut R) -> f32 {
    value * rng.random_range(1.0 - spread..=1.0 + spread)
}
