//! A colony of same-archetype ants.
//!
//! The colony drives its ants through a tick: movement, fights against the
//! enemy colony and predators, then self-update, cleanup of the dead and one
//! reproduction pass. Dead ants are only removed in the cleanup pass, never
//! while the collection is being walked.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::agent::{Agent, IdAllocator};
use super::ant::{Ant, Archetype, TraitOverrides};
use super::creature_manager::CreatureManager;
use super::environment::Environment;
use super::geometric_utils;
use super::params::TraitRanges;
use super::stats::{AverageStats, ColonySummary, GenderCounts};

/// Births and deaths recorded by one [`Colony::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColonyTick {
    /// Ants removed as dead.
    pub deaths: usize,
    /// Offspring appended.
    pub births: usize,
}

/// All ants of one archetype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Colony {
    archetype: Archetype,
    ranges: TraitRanges,
    ants: Vec<Ant>,
    ids: IdAllocator,
}

impl Colony {
    /// Creates a colony of `initial_ants` ants at random cells.
    pub fn new<R: Rng + ?Sized>(
        archetype: Archetype,
        ranges: TraitRanges,
        initial_ants: usize,
        environment: &Environment,
        rng: &mut R,
    ) -> Self {
        let mut colony = Self::empty(archetype, ranges);
        for _ in 0..initial_ants {
            let pos = geometric_utils::random_cell(environment.width, environment.height, rng);
            colony.spawn(pos, TraitOverrides::default(), rng);
        }
        colony
    }

    /// Creates a colony without ants.
    pub fn empty(archetype: Archetype, ranges: TraitRanges) -> Self {
        Self {
            archetype,
            ranges,
            ants: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Adds one ant at `pos` and returns its id.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        pos: geo::Point<f32>,
        overrides: TraitOverrides,
        rng: &mut R,
    ) -> usize {
        let ant = Ant::new(
            self.ids.next_id(),
            pos,
            self.archetype,
            &self.ranges,
            overrides,
            rng,
        );
        let id = ant.id;
        self.ants.push(ant);
        id
    }

    /// Archetype of every ant in this colony.
    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Ants in collection order.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Mutable access to the ants, for interactions driven from outside.
    pub fn ants_mut(&mut self) -> &mut [Ant] {
        &mut self.ants
    }

    /// Looks up an ant by id.
    pub fn ant(&self, id: usize) -> Option<&Ant> {
        self.ants.iter().find(|ant| ant.id == id)
    }

    /// Number of ants in the colony.
    pub fn count(&self) -> usize {
        self.ants.len()
    }

    /// Moves every ant one step.
    pub fn move_ants<R: Rng + ?Sized>(&mut self, environment: &Environment, rng: &mut R) {
        for ant in &mut self.ants {
            ant.step(environment, rng);
        }
    }

    /// Every ant tries to attack every enemy ant.
    pub fn attack_enemies(&mut self, enemy: &mut Colony) {
        for ant in &mut self.ants {
            for target in &mut enemy.ants {
                ant.attack(target);
            }
        }
    }

    /// Every ant tries to attack every predator.
    pub fn attack_predators(&mut self, creature_manager: &mut CreatureManager) {
        for ant in &mut self.ants {
            for predator in creature_manager.predators_mut() {
                ant.attack_predator(predator);
            }
        }
    }

    /// Updates every ant, drops the dead and runs one reproduction pass.
    ///
    /// Each ant pairs at most once per pass. Newborns are appended after the
    /// pass, so they cannot mate on the tick they are born.
    ///
    /// # Arguments
    ///
    /// * `environment` - Grid the ants forage from
    /// * `creature_manager` - Peaceful creatures the ants may prey on, if any
    /// * `rng` - Source for offspring traits, gender and placement
    ///
    /// # Returns
    ///
    /// The number of ants removed as dead and the number of offspring added.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        environment: &mut Environment,
        mut creature_manager: Option<&mut CreatureManager>,
        rng: &mut R,
    ) -> ColonyTick {
        for ant in &mut self.ants {
            ant.update(environment, creature_manager.as_deref_mut());
        }

        let before = self.ants.len();
        self.ants.retain(|ant| ant.is_alive());
        let deaths = before - self.ants.len();

        let mut paired: HashSet<usize> = HashSet::new();
        let mut newborns = Vec::new();
        for index in 0..self.ants.len() {
            let ant = &self.ants[index];
            if paired.contains(&ant.id) || !ant.can_mate() {
                continue;
            }
            let Some(mate_index) = ant.find_mate(&self.ants) else {
                continue;
            };
            if paired.contains(&self.ants[mate_index].id) {
                continue;
            }

            let (ant, mate) = pair_mut(&mut self.ants, index, mate_index);
            let ids = &mut self.ids;
            if let Some(child) = ant.reproduce_with_partner(mate, environment, ids, rng) {
                paired.insert(ant.id);
                paired.insert(mate.id);
                newborns.push(child);
            }
        }

        let births = newborns.len();
        self.ants.extend(newborns);

        if deaths > 0 || births > 0 {
            debug!(
                colony = self.archetype.color(),
                deaths,
                births,
                population = self.ants.len(),
                "colony tick"
            );
        }

        ColonyTick { deaths, births }
    }

    /// Mean traits of living ants; all zeros for an empty colony.
    pub fn get_average_stats(&self) -> AverageStats {
        AverageStats::of_living(&self.ants)
    }

    /// Number of ants of each gender.
    pub fn get_gender_counts(&self) -> GenderCounts {
        GenderCounts::of(&self.ants)
    }

    /// Count, averages and gender split in one record.
    pub fn summary(&self) -> ColonySummary {
        ColonySummary {
            count: self.count(),
            averages: self.get_average_stats(),
            genders: self.get_gender_counts(),
        }
    }
}

/// Mutable references to two distinct elements.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    assert_ne!(a, b, "pair_mut needs two distinct indices");
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
