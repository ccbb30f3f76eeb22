//! State and behavior shared by every living agent.
//!
//! Health, age and the alive flag follow one contract for ants and
//! creatures alike: once health reaches zero the agent is dead for good.
//! Removal from the owning collection happens later, in a cleanup pass.

use serde::{Deserialize, Serialize};

use super::locatable::Locatable;

/// Health, age and liveness of an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Remaining health.
    pub health: f32,
    /// Ticks survived so far.
    pub age: u32,
    alive: bool,
}

impl Vitals {
    /// Creates living vitals with the given health.
    pub fn new(health: f32) -> Self {
        Self {
            health,
            age: 0,
            alive: true,
        }
    }

    /// Checks if the agent is alive.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Marks the agent dead. There is no way back.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Subtracts health and kills the agent when it drops to zero or below.
    pub fn lose_health(&mut self, amount: f32) {
        if !self.alive {
            return;
        }
        self.health -= amount;
        if self.health <= 0.0 {
            self.alive = false;
        }
    }
}

/// Common capability of ants and creatures: a position plus vitals.
pub trait Agent: Locatable {
    /// Identifier, unique within the owning collection.
    fn id(&self) -> usize;

    /// Read access to health, age and liveness.
    fn vitals(&self) -> &Vitals;

    /// Write access to health, age and liveness.
    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Checks if the agent is alive.
    fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }

    /// Current health.
    fn health(&self) -> f32 {
        self.vitals().health
    }

    /// Applies damage. Dead agents ignore it.
    fn receive_damage(&mut self, damage: f32) {
        self.vitals_mut().lose_health(damage);
    }
}

/// Hands out monotonically increasing ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    next: usize,
}

impl IdAllocator {
    /// Creates an allocator starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused id.
    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> usize {
        self.next
    }
}
