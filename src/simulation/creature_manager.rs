//! Owner of all peaceful creatures and predators.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::agent::{Agent, IdAllocator};
use super::ant::Ant;
use super::creature::Creature;
use super::environment::Environment;
use super::geometric_utils;
use super::params::CreatureParams;
use super::stats::CreatureCounts;

/// Holds the creature populations and drives them through a tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureManager {
    params: CreatureParams,
    peaceful_creatures: Vec<Creature>,
    predators: Vec<Creature>,
    ids: IdAllocator,
}

impl CreatureManager {
    /// Creates a manager with no creatures.
    pub fn new(params: CreatureParams) -> Self {
        Self {
            params,
            peaceful_creatures: Vec::new(),
            predators: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Adds `count` default peaceful creatures at random cells.
    pub fn add_peaceful_creatures<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        environment: &Environment,
        rng: &mut R,
    ) {
        for _ in 0..count {
            let pos = geometric_utils::random_cell(environment.width, environment.height, rng);
            let creature = Creature::default_peaceful(self.ids.next_id(), pos, &self.params);
            self.peaceful_creatures.push(creature);
        }
    }

    /// Adds `count` default predators at random cells.
    pub fn add_predators<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        environment: &Environment,
        rng: &mut R,
    ) {
        for _ in 0..count {
            let pos = geometric_utils::random_cell(environment.width, environment.height, rng);
            let predator = Creature::default_predator(self.ids.next_id(), pos, &self.params);
            self.predators.push(predator);
        }
    }

    /// Inserts an already built creature into the matching collection.
    pub fn insert(&mut self, creature: Creature) {
        if creature.is_predator() {
            self.predators.push(creature);
        } else {
            self.peaceful_creatures.push(creature);
        }
    }

    /// Peaceful creatures in collection order.
    pub fn peaceful_creatures(&self) -> &[Creature] {
        &self.peaceful_creatures
    }

    /// Mutable access to peaceful creatures, for ants hunting them.
    pub fn peaceful_creatures_mut(&mut self) -> &mut [Creature] {
        &mut self.peaceful_creatures
    }

    /// Predators in collection order.
    pub fn predators(&self) -> &[Creature] {
        &self.predators
    }

    /// Mutable access to predators, for ants fighting back.
    pub fn predators_mut(&mut self) -> &mut [Creature] {
        &mut self.predators
    }

    /// Number of creatures of each kind.
    pub fn count(&self) -> CreatureCounts {
        CreatureCounts {
            peaceful: self.peaceful_creatures.len(),
            predators: self.predators.len(),
        }
    }

    /// Advances all creatures by one tick.
    ///
    /// Peaceful creatures age, wander and breed first; predators then age,
    /// hunt the live ant collections and breed. Offspring are appended after
    /// each breeding pass and the dead are dropped last.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        environment: &Environment,
        red_ants: &mut [Ant],
        black_ants: &mut [Ant],
        rng: &mut R,
    ) {
        for creature in &mut self.peaceful_creatures {
            creature.update();
            creature.step(environment, red_ants, black_ants, rng);
        }
        let peaceful_births = self.breed_peaceful(environment, rng);

        for predator in &mut self.predators {
            predator.update();
            predator.step(environment, red_ants, black_ants, rng);
        }
        let predator_births = self.breed_predators(environment, rng);

        self.peaceful_creatures.retain(|c| c.is_alive());
        self.predators.retain(|p| p.is_alive());

        if peaceful_births > 0 || predator_births > 0 {
            debug!(peaceful_births, predator_births, "creatures bred");
        }
    }

    fn breed_peaceful<R: Rng + ?Sized>(&mut self, environment: &Environment, rng: &mut R) -> usize {
        let offspring: Vec<Creature> = self
            .peaceful_creatures
            .iter()
            .filter_map(|c| c.reproduce(environment, &mut self.ids, rng))
            .collect();
        let births = offspring.len();
        self.peaceful_creatures.extend(offspring);
        births
    }

    fn breed_predators<R: Rng + ?Sized>(
        &mut self,
        environment: &Environment,
        rng: &mut R,
    ) -> usize {
        let offspring: Vec<Creature> = self
            .predators
            .iter()
            .filter_map(|p| p.reproduce(environment, &mut self.ids, rng))
            .collect();
        let births = offspring.len();
        self.predators.extend(offspring);
        births
    }
}
