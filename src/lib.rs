//! # Formicarium - Competing Ant Colonies
//!
//! A discrete-time ecosystem in which two ant colonies with different trait
//! profiles compete for food on a bounded grid. Ants forage, fight, mate and
//! pass blended, mutated traits to their offspring. Peaceful creatures serve
//! as prey, and predators hunt the ants.
//!
//! ## Features
//!
//! - Per-cell food grid with scattered drops and circular clusters
//! - Red and black archetypes with configurable trait sampling ranges
//! - Cooldown-gated combat, mating and predation
//! - Sexual reproduction with trait blending and mutation
//! - Asexual creature reproduction and predator pursuit
//! - Seeded, reproducible runs and a per-day statistics history
//!
//! ## Core Modules
//!
//! - [`simulation::ecosystem`] - Tick orchestration and control surface
//! - [`simulation::colony`] - Colony-level movement, combat and breeding
//! - [`simulation::ant`] - Ant behavior and state
//! - [`simulation::creature`] - Peaceful creatures and predators
//! - [`simulation::environment`] - Grid and food

/// Core simulation logic and data structures.
pub mod simulation {
    /// Vitals, the shared agent capability and id allocation.
    pub mod agent;
    /// Ant behavior, state, and lifecycle.
    pub mod ant;
    /// Colonies of same-archetype ants.
    pub mod colony;
    /// Peaceful creatures and predators.
    pub mod creature;
    /// Owner of all creatures.
    pub mod creature_manager;
    /// Heritable traits, blending and mutation.
    pub mod dna;
    /// Top-level simulation and its control surface.
    pub mod ecosystem;
    /// Grid and food.
    pub mod environment;
    /// Geometric utility functions for distances and bounds.
    pub mod geometric_utils;
    /// Trait for entities with a grid position.
    ///
    /// The [`locatable::Locatable`] trait is implemented by every agent
    /// (ants and creatures) so proximity checks work across species.
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Population statistics and history.
    pub mod stats;
}
