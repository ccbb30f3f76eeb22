//! Creatures that share the grid with the ants.
//!
//! Peaceful creatures wander and breed slowly; ants hunt them for food.
//! Predators chase the nearest ant they can sense and bite it when close.
//! Neither kind has a food economy, so creatures never starve, but they do
//! weaken with age.

use geo::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::agent::{Agent, IdAllocator, Vitals};
use super::ant::Ant;
use super::dna;
use super::environment::Environment;
use super::geometric_utils;
use super::locatable::Locatable;
use super::params::CreatureParams;

/// Age after which a creature loses health every tick.
pub const OLD_AGE: u32 = 100;
/// Health lost per tick past [`OLD_AGE`].
pub const AGING_PENALTY: f32 = 0.2;
/// Largest per-axis offset of a newborn from its parent.
pub const OFFSPRING_SPREAD: i32 = 3;
/// Relative spread of inherited creature attributes.
pub const INHERITANCE_SPREAD: f32 = 0.1;

/// Per-tick birth probability of an adult peaceful creature.
pub const PEACEFUL_REPRODUCTION_RATE: f64 = 0.02;
/// Age at which peaceful creatures may breed.
pub const PEACEFUL_MATURITY: u32 = 20;

/// Per-tick birth probability of a healthy adult predator.
pub const PREDATOR_REPRODUCTION_RATE: f64 = 0.01;
/// Age at which predators may breed.
pub const PREDATOR_MATURITY: u32 = 50;
/// Health a predator needs to breed.
pub const PREDATOR_BREEDING_HEALTH: f32 = 200.0;
/// Distance below which a predator bites its target.
pub const BITE_RANGE: f32 = 1.5;
/// Ticks a predator waits between bites.
pub const HUNT_COOLDOWN: u32 = 5;
/// Floor for the pursuit vector length, avoiding blow-ups at tiny distances.
const MIN_PURSUIT_LENGTH: f32 = 0.1;

/// Behavior of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CreatureKind {
    /// Harmless herbivore, food for ants.
    Peaceful,
    /// Hunts ants.
    Predator {
        /// Radius within which ants are detected.
        awareness: f32,
        /// Ticks until the next bite is allowed.
        hunt_cooldown: u32,
    },
}

/// A peaceful creature or a predator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Identifier, unique within the creature manager.
    pub id: usize,
    /// Position in continuous grid coordinates.
    pub pos: Point<f32>,
    /// Health, age and liveness.
    pub vitals: Vitals,
    /// Damage per bite; zero for peaceful creatures.
    pub damage: f32,
    /// Step length per move.
    pub speed: f32,
    /// Body size; scales the food an ant gains from a kill.
    pub size: f32,
    /// Behavior.
    pub kind: CreatureKind,
}

impl Creature {
    /// Creates a peaceful creature.
    pub fn peaceful(id: usize, pos: Point<f32>, health: f32, speed: f32, size: f32) -> Self {
        Self {
            id,
            pos,
            vitals: Vitals::new(health),
            damage: 0.0,
            speed,
            size,
            kind: CreatureKind::Peaceful,
        }
    }

    /// Creates a predator.
    pub fn predator(
        id: usize,
        pos: Point<f32>,
        health: f32,
        damage: f32,
        speed: f32,
        size: f32,
        awareness: f32,
    ) -> Self {
        Self {
            id,
            pos,
            vitals: Vitals::new(health),
            damage,
            speed,
            size,
            kind: CreatureKind::Predator {
                awareness,
                hunt_cooldown: 0,
            },
        }
    }

    /// Creates a peaceful creature with default attributes.
    pub fn default_peaceful(id: usize, pos: Point<f32>, params: &CreatureParams) -> Self {
        Self::peaceful(
            id,
            pos,
            params.peaceful_health,
            params.peaceful_speed,
            params.peaceful_size,
        )
    }

    /// Creates a predator with default attributes.
    pub fn default_predator(id: usize, pos: Point<f32>, params: &CreatureParams) -> Self {
        Self::predator(
            id,
            pos,
            params.predator_health,
            params.predator_damage,
            params.predator_speed,
            params.predator_size,
            params.predator_awareness,
        )
    }

    /// Checks whether this creature hunts ants.
    pub fn is_predator(&self) -> bool {
        matches!(self.kind, CreatureKind::Predator { .. })
    }

    /// Detection radius; zero for peaceful creatures.
    pub fn awareness(&self) -> f32 {
        match self.kind {
            CreatureKind::Peaceful => 0.0,
            CreatureKind::Predator { awareness, .. } => awareness,
        }
    }

    /// Ticks until a predator may bite again; zero for peaceful creatures.
    pub fn hunt_cooldown(&self) -> u32 {
        match self.kind {
            CreatureKind::Peaceful => 0,
            CreatureKind::Predator { hunt_cooldown, .. } => hunt_cooldown,
        }
    }

    /// Colour tag used by renderers.
    pub fn color(&self) -> &'static str {
        match self.kind {
            CreatureKind::Peaceful => "blue",
            CreatureKind::Predator { .. } => "purple",
        }
    }

    /// Ages the creature by one tick.
    pub fn update(&mut self) {
        if !self.is_alive() {
            return;
        }
        self.vitals.age += 1;
        if self.vitals.age > OLD_AGE {
            self.vitals.lose_health(AGING_PENALTY);
        }
    }

    /// Moves the creature according to its kind.
    ///
    /// Peaceful creatures random-walk. Predators pursue the nearest ant in
    /// `red_ants` or `black_ants`, falling back to a random walk when none
    /// is within awareness.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        environment: &Environment,
        red_ants: &mut [Ant],
        black_ants: &mut [Ant],
        rng: &mut R,
    ) {
        match self.kind {
            CreatureKind::Peaceful => self.wander(environment, rng),
            CreatureKind::Predator { .. } => self.hunt(environment, red_ants, black_ants, rng),
        }
    }

    /// Takes one random compass step; steps leaving the grid are discarded.
    pub fn wander<R: Rng + ?Sized>(&mut self, environment: &Environment, rng: &mut R) {
        if !self.is_alive() {
            return;
        }
        let proposed = geometric_utils::random_step(self.pos, self.speed, rng);
        if geometric_utils::in_bounds(proposed, environment.width, environment.height) {
            self.pos = proposed;
        }
    }

    /// Predator pursuit.
    ///
    /// Scans red ants, then black ants, for the living ant strictly nearest
    /// and strictly inside awareness; the first minimum found wins ties.
    /// Steps toward it, and bites if the new distance is under
    /// [`BITE_RANGE`] and the hunt cooldown has run out.
    ///
    /// # Arguments
    ///
    /// * `environment` - Grid bounds for the pursuit step
    /// * `red_ants` - Red colony, scanned first
    /// * `black_ants` - Black colony, scanned second
    /// * `rng` - Used only when no ant is in range and the predator wanders
    pub fn hunt<R: Rng + ?Sized>(
        &mut self,
        environment: &Environment,
        red_ants: &mut [Ant],
        black_ants: &mut [Ant],
        rng: &mut R,
    ) {
        if !self.is_alive() {
            return;
        }
        let CreatureKind::Predator {
            awareness,
            hunt_cooldown,
        } = &mut self.kind
        else {
            return;
        };
        *hunt_cooldown = hunt_cooldown.saturating_sub(1);
        let awareness = *awareness;

        let mut groups = [red_ants, black_ants];
        let mut target: Option<(usize, usize)> = None;
        let mut target_distance = f32::INFINITY;
        for (group, ants) in groups.iter().enumerate() {
            for (index, ant) in ants.iter().enumerate() {
                if !ant.is_alive() {
                    continue;
                }
                let distance = geometric_utils::distance(self.pos, ant.pos);
                if distance < awareness && distance < target_distance {
                    target = Some((group, index));
                    target_distance = distance;
                }
            }
        }

        let Some((group, index)) = target else {
            self.wander(environment, rng);
            return;
        };
        let prey = &mut groups[group][index];

        let dx = prey.pos.x() - self.pos.x();
        let dy = prey.pos.y() - self.pos.y();
        let length = dx.hypot(dy).max(MIN_PURSUIT_LENGTH);
        let next = Point::new(
            self.pos.x() + dx / length * self.speed,
            self.pos.y() + dy / length * self.speed,
        );
        self.pos = geometric_utils::clamp_to_grid(next, environment.width, environment.height);

        let in_reach = self.distance_to(&*prey) < BITE_RANGE;
        let damage = self.damage;
        if let CreatureKind::Predator { hunt_cooldown, .. } = &mut self.kind {
            if in_reach && *hunt_cooldown == 0 {
                prey.receive_damage(damage);
                *hunt_cooldown = HUNT_COOLDOWN;
            }
        }
    }

    /// Possibly produces one offspring near this creature.
    ///
    /// Peaceful creatures breed from age [`PEACEFUL_MATURITY`] with
    /// [`PEACEFUL_REPRODUCTION_RATE`]; predators need age
    /// [`PREDATOR_MATURITY`] and [`PREDATOR_BREEDING_HEALTH`] and breed with
    /// [`PREDATOR_REPRODUCTION_RATE`]. The offspring's attributes each vary
    /// by up to [`INHERITANCE_SPREAD`].
    pub fn reproduce<R: Rng + ?Sized>(
        &self,
        environment: &Environment,
        ids: &mut IdAllocator,
        rng: &mut R,
    ) -> Option<Creature> {
        if !self.is_alive() {
            return None;
        }

        let rate = match self.kind {
            CreatureKind::Peaceful if self.vitals.age >= PEACEFUL_MATURITY => {
                PEACEFUL_REPRODUCTION_RATE
            }
            CreatureKind::Predator { .. }
                if self.vitals.age >= PREDATOR_MATURITY
                    && self.vitals.health >= PREDATOR_BREEDING_HEALTH =>
            {
                PREDATOR_REPRODUCTION_RATE
            }
            _ => return None,
        };
        if !rng.random_bool(rate) {
            return None;
        }

        let pos = geometric_utils::jitter_in_grid(
            self.pos,
            OFFSPRING_SPREAD,
            environment.width,
            environment.height,
            rng,
        );
        let health = dna::vary(self.vitals.health, INHERITANCE_SPREAD, rng);

        let child = match self.kind {
            CreatureKind::Peaceful => {
                let speed = dna::vary(self.speed, INHERITANCE_SPREAD, rng);
                let size = dna::vary(self.size, INHERITANCE_SPREAD, rng);
                Creature::peaceful(ids.next_id(), pos, health, speed, size)
            }
            CreatureKind::Predator { awareness, .. } => {
                let damage = dna::vary(self.damage, INHERITANCE_SPREAD, rng);
                let speed = dna::vary(self.speed, INHERITANCE_SPREAD, rng);
                let size = dna::vary(self.size, INHERITANCE_SPREAD, rng);
                Creature::predator(ids.next_id(), pos, health, damage, speed, size, awareness)
            }
        };
        Some(child)
    }
}

impl Locatable for Creature {
    fn pos(&self) -> Point<f32> {
        self.pos
    }
}

impl Agent for Creature {
    fn id(&self) -> usize {
        self.id
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}
