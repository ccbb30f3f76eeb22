//! Simulation parameters and their validation.
//!
//! Everything that shapes a run lives here: world extents, starting
//! populations, archetype trait ranges, creature defaults and the
//! control-surface limits. Fields missing from a JSON file fall back to
//! [`Params::default`].

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating [`Params`].
#[derive(Debug, Error)]
pub enum ParamsError {
    /// A field holds a value the simulation cannot run with.
    #[error("invalid parameter `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable explanation.
        reason: String,
    },
    /// The parameter file could not be read.
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),
    /// The parameter file is not valid JSON for [`Params`].
    #[error("failed to parse parameter file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Closed interval a trait is sampled from uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitRange {
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (inclusive).
    pub max: f32,
}

impl TraitRange {
    /// Creates a new range.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draws a value uniformly from `[min, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }

    /// Returns `true` if `value` lies inside the range.
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Sampling ranges for every ant trait of one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitRanges {
    /// Starting health.
    pub health: TraitRange,
    /// Damage dealt per attack.
    pub damage: TraitRange,
    /// Step length per move.
    pub speed: TraitRange,
    /// Advisory fertility trait.
    pub fertility: TraitRange,
    /// Detection and attack radius.
    pub awareness: TraitRange,
}

impl TraitRanges {
    /// Ranges for ants without a specialised archetype.
    pub const PLAIN: Self = Self {
        health: TraitRange::new(80.0, 120.0),
        damage: TraitRange::new(8.0, 12.0),
        speed: TraitRange::new(0.8, 1.2),
        fertility: TraitRange::new(0.08, 0.12),
        awareness: TraitRange::new(4.0, 6.0),
    };

    /// Red ants: fast and hard-hitting.
    pub const RED: Self = Self {
        health: TraitRange::new(90.0, 110.0),
        damage: TraitRange::new(11.0, 13.0),
        speed: TraitRange::new(1.1, 1.3),
        fertility: TraitRange::new(0.11, 0.13),
        awareness: TraitRange::new(3.0, 5.0),
    };

    /// Black ants: sturdy and perceptive.
    pub const BLACK: Self = Self {
        health: TraitRange::new(110.0, 130.0),
        damage: TraitRange::new(9.0, 11.0),
        speed: TraitRange::new(0.8, 1.0),
        fertility: TraitRange::new(0.09, 0.11),
        awareness: TraitRange::new(5.0, 7.0),
    };

    fn validate(&self, field: &'static str) -> Result<(), ParamsError> {
        let ranges = [
            self.health,
            self.damage,
            self.speed,
            self.fertility,
            self.awareness,
        ];
        if ranges
            .iter()
            .any(|r| !(r.min >= 0.0 && r.min <= r.max && r.max.is_finite()))
        {
            return Err(ParamsError::Invalid {
                field,
                reason: "every trait range needs 0 <= min <= max".to_string(),
            });
        }
        Ok(())
    }
}

/// Default attributes for newly seeded creatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreatureParams {
    /// Peaceful creature starting health.
    pub peaceful_health: f32,
    /// Peaceful creature step length.
    pub peaceful_speed: f32,
    /// Peaceful creature size (scales the food it yields).
    pub peaceful_size: f32,
    /// Predator starting health.
    pub predator_health: f32,
    /// Predator damage per bite.
    pub predator_damage: f32,
    /// Predator step length.
    pub predator_speed: f32,
    /// Predator size.
    pub predator_size: f32,
    /// Radius within which predators detect ants.
    pub predator_awareness: f32,
}

impl Default for CreatureParams {
    fn default() -> Self {
        Self {
            peaceful_health: 50.0,
            peaceful_speed: 0.8,
            peaceful_size: 3.0,
            predator_health: 300.0,
            predator_damage: 50.0,
            predator_speed: 1.5,
            predator_size: 5.0,
            predator_awareness: 15.0,
        }
    }
}

/// Simulation parameters that control a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Number of single-cell food drops placed at start (clusters come on top).
    pub initial_food: usize,
    /// Ants seeded into the red colony.
    pub initial_red_ants: usize,
    /// Ants seeded into the black colony.
    pub initial_black_ants: usize,
    /// Whether peaceful creatures and predators take part.
    pub creatures_enabled: bool,
    /// Peaceful creatures seeded at start.
    pub initial_peaceful_creatures: usize,
    /// Predators seeded at start.
    pub initial_predators: usize,
    /// Trait sampling ranges for red ants.
    pub red_traits: TraitRanges,
    /// Trait sampling ranges for black ants.
    pub black_traits: TraitRanges,
    /// Creature defaults.
    pub creatures: CreatureParams,
    /// Lowest accepted speed multiplier.
    pub min_speed: f32,
    /// Highest accepted speed multiplier.
    pub max_speed: f32,
    /// Wall-clock interval between ticks at speed 1.0, in milliseconds.
    pub base_tick_interval_ms: u64,
    /// Seed for the simulation random number generator.
    pub seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            initial_food: 800,
            initial_red_ants: 30,
            initial_black_ants: 30,
            creatures_enabled: true,
            initial_peaceful_creatures: 10,
            initial_predators: 2,
            red_traits: TraitRanges::RED,
            black_traits: TraitRanges::BLACK,
            creatures: CreatureParams::default(),
            min_speed: 0.1,
            max_speed: 10.0,
            base_tick_interval_ms: 100,
            seed: 42,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file; absent fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks that the parameters describe a runnable world.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.width == 0 {
            return Err(ParamsError::Invalid {
                field: "width",
                reason: "grid width must be positive".to_string(),
            });
        }
        if self.height == 0 {
            return Err(ParamsError::Invalid {
                field: "height",
                reason: "grid height must be positive".to_string(),
            });
        }
        if !(self.min_speed > 0.0 && self.min_speed <= self.max_speed) {
            return Err(ParamsError::Invalid {
                field: "min_speed",
                reason: format!(
                    "speed range [{}, {}] must be positive and ordered",
                    self.min_speed, self.max_speed
                ),
            });
        }
        self.red_traits.validate("red_traits")?;
        self.black_traits.validate("black_traits")?;
        Ok(())
    }
}
