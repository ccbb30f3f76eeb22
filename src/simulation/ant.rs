//! Ant behavior, state, and lifecycle.
//!
//! Ants wander the grid, spend food to move and to live, forage from the
//! environment, prey on peaceful creatures, fight enemy ants and predators,
//! and mate with a nearby partner of the opposite gender. Every action that
//! cannot happen returns `false` or `None`; nothing here is an error.

use geo::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::agent::{Agent, IdAllocator, Vitals};
use super::creature::Creature;
use super::creature_manager::CreatureManager;
use super::dna::Traits;
use super::environment::Environment;
use super::geometric_utils;
use super::locatable::Locatable;
use super::params::TraitRanges;

/// Food reserve every ant starts with.
pub const STARTING_FOOD: f32 = 100.0;
/// Food spent per move attempt.
pub const MOVE_COST: f32 = 1.0;
/// Food spent per tick just to stay alive.
pub const METABOLISM_COST: f32 = 0.5;
/// Age after which an ant loses health every tick.
pub const OLD_AGE: u32 = 100;
/// Health lost per tick past [`OLD_AGE`].
pub const AGING_PENALTY: f32 = 0.5;
/// Ticks an ant waits between attacks.
pub const ATTACK_COOLDOWN: u32 = 3;
/// Minimum food reserve for mating.
pub const MATING_FOOD: f32 = 70.0;
/// Food each parent pays for one offspring.
pub const REPRODUCTION_COST: f32 = 50.0;
/// Ticks a parent waits before mating again.
pub const REPRODUCTION_COOLDOWN: u32 = 15;
/// Furthest a mate may be.
pub const MATING_RANGE: f32 = 2.0;
/// Largest per-axis offset of a newborn from its parents' midpoint.
pub const OFFSPRING_SPREAD: i32 = 2;
/// Food gained per unit of size when an ant kills a peaceful creature.
pub const PREY_FOOD_PER_SIZE: f32 = 30.0;

/// Trait profile an ant is sampled from. Inherited unchanged by offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Fast, hard-hitting ants.
    Red,
    /// Sturdy, perceptive ants.
    Black,
    /// Ants without a specialised profile.
    Plain,
}

impl Archetype {
    /// Built-in sampling ranges for this archetype.
    pub fn default_ranges(self) -> TraitRanges {
        match self {
            Archetype::Red => TraitRanges::RED,
            Archetype::Black => TraitRanges::BLACK,
            Archetype::Plain => TraitRanges::PLAIN,
        }
    }

    /// Colour tag used by renderers.
    pub fn color(self) -> &'static str {
        match self {
            Archetype::Red => "red",
            Archetype::Black => "black",
            Archetype::Plain => "gray",
        }
    }
}

/// Binary sex; mates must differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male ant.
    Male,
    /// Female ant.
    Female,
}

impl Gender {
    /// Picks a gender uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

/// Explicit trait values for a new ant; `None` falls back to sampling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraitOverrides {
    /// Starting health.
    pub health: Option<f32>,
    /// Damage per attack.
    pub damage: Option<f32>,
    /// Step length.
    pub speed: Option<f32>,
    /// Fertility.
    pub fertility: Option<f32>,
    /// Detection and attack radius.
    pub awareness: Option<f32>,
    /// Gender.
    pub gender: Option<Gender>,
}

impl TraitOverrides {
    /// Overrides every numeric trait, leaving gender open.
    pub fn from_traits(traits: Traits) -> Self {
        Self {
            health: Some(traits.health),
            damage: Some(traits.damage),
            speed: Some(traits.speed),
            fertility: Some(traits.fertility),
            awareness: Some(traits.awareness),
            gender: None,
        }
    }

    /// Sets the gender.
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}

/// A single ant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ant {
    /// Identifier, unique within its colony.
    pub id: usize,
    /// Position in continuous grid coordinates.
    pub pos: Point<f32>,
    /// Health, age and liveness.
    pub vitals: Vitals,
    /// Damage dealt per attack.
    pub damage: f32,
    /// Step length per move.
    pub speed: f32,
    /// Advisory fertility value, inherited and reported.
    pub fertility: f32,
    /// Detection and attack radius.
    pub awareness: f32,
    /// Gender.
    pub gender: Gender,
    /// Trait profile, fixed for life.
    pub archetype: Archetype,
    /// Energy reserve; the ant starves at zero.
    pub food: f32,
    /// Ticks until the next attack is allowed.
    pub attack_cooldown: u32,
    /// Ticks until the next mating is allowed.
    pub reproduction_cooldown: u32,
}

impl Ant {
    /// Creates an ant, sampling every trait not given in `overrides` from `ranges`.
    pub fn new<R: Rng + ?Sized>(
        id: usize,
        pos: Point<f32>,
        archetype: Archetype,
        ranges: &TraitRanges,
        overrides: TraitOverrides,
        rng: &mut R,
    ) -> Self {
        let health = overrides
            .health
            .unwrap_or_else(|| ranges.health.sample(rng));
        let damage = overrides
            .damage
            .unwrap_or_else(|| ranges.damage.sample(rng));
        let speed = overrides.speed.unwrap_or_else(|| ranges.speed.sample(rng));
        let fertility = overrides
            .fertility
            .unwrap_or_else(|| ranges.fertility.sample(rng));
        let awareness = overrides
            .awareness
            .unwrap_or_else(|| ranges.awareness.sample(rng));
        let gender = overrides.gender.unwrap_or_else(|| Gender::random(rng));

        Self {
            id,
            pos,
            vitals: Vitals::new(health),
            damage,
            speed,
            fertility,
            awareness,
            gender,
            archetype,
            food: STARTING_FOOD,
            attack_cooldown: 0,
            reproduction_cooldown: 0,
        }
    }

    /// Creates an ant using the archetype's built-in ranges.
    pub fn of_archetype<R: Rng + ?Sized>(
        id: usize,
        pos: Point<f32>,
        archetype: Archetype,
        overrides: TraitOverrides,
        rng: &mut R,
    ) -> Self {
        Self::new(
            id,
            pos,
            archetype,
            &archetype.default_ranges(),
            overrides,
            rng,
        )
    }

    /// Current heritable trait values.
    pub fn traits(&self) -> Traits {
        Traits {
            health: self.vitals.health,
            damage: self.damage,
            speed: self.speed,
            fertility: self.fertility,
            awareness: self.awareness,
        }
    }

    /// Colour tag used by renderers.
    pub fn color(&self) -> &'static str {
        self.archetype.color()
    }

    /// Checks whether the ant may mate this tick.
    pub fn can_mate(&self) -> bool {
        self.is_alive() && self.food >= MATING_FOOD && self.reproduction_cooldown == 0
    }

    /// Moves one random compass step.
    ///
    /// Cooldowns tick down first. A step that would leave the grid is
    /// discarded, but the move still costs [`MOVE_COST`] food.
    pub fn step<R: Rng + ?Sized>(&mut self, environment: &Environment, rng: &mut R) {
        if !self.is_alive() {
            return;
        }

        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
        self.reproduction_cooldown = self.reproduction_cooldown.saturating_sub(1);

        let proposed = geometric_utils::random_step(self.pos, self.speed, rng);
        if geometric_utils::in_bounds(proposed, environment.width, environment.height) {
            self.pos = proposed;
        }

        self.spend_food(MOVE_COST);
    }

    /// Attacks `target` if it is alive and within awareness.
    ///
    /// Returns `true` when damage was dealt.
    pub fn attack(&mut self, target: &mut impl Agent) -> bool {
        if !self.is_alive() || !target.is_alive() || self.attack_cooldown > 0 {
            return false;
        }
        if self.distance_to(&*target) > self.awareness {
            return false;
        }
        target.receive_damage(self.damage);
        self.attack_cooldown = ATTACK_COOLDOWN;
        true
    }

    /// Attacks a predator. Peaceful creatures are not valid targets here.
    pub fn attack_predator(&mut self, predator: &mut Creature) -> bool {
        predator.is_predator() && self.attack(predator)
    }

    /// Bites the first living peaceful creature within awareness.
    ///
    /// Candidates are taken in collection order, not by distance. If the bite
    /// kills the creature the ant gains [`PREY_FOOD_PER_SIZE`] food per unit
    /// of its size. Returns `true` if a creature was attacked.
    pub fn find_and_eat_peaceful_creature(&mut self, creatures: &mut [Creature]) -> bool {
        if !self.is_alive() || self.attack_cooldown > 0 {
            return false;
        }

        let Some(prey) = creatures
            .iter_mut()
            .find(|c| c.is_alive() && self.distance_to(&**c) <= self.awareness)
        else {
            return false;
        };

        prey.receive_damage(self.damage);
        self.attack_cooldown = ATTACK_COOLDOWN;
        if !prey.is_alive() {
            self.food += PREY_FOOD_PER_SIZE * prey.size;
        }
        true
    }

    /// Finds a mate among `ants`, returning its index.
    ///
    /// The first eligible candidate in collection order within
    /// [`MATING_RANGE`] wins, not the nearest.
    pub fn find_mate(&self, ants: &[Ant]) -> Option<usize> {
        if !self.can_mate() {
            return None;
        }
        ants.iter().position(|mate| {
            mate.id != self.id
                && mate.gender != self.gender
                && mate.can_mate()
                && self.distance_to(mate) <= MATING_RANGE
        })
    }

    /// Produces one offspring with `partner`.
    ///
    /// Both parents pay [`REPRODUCTION_COST`] food and enter the
    /// reproduction cooldown. The offspring inherits the blended, mutated
    /// traits of both parents and the archetype of `self`.
    pub fn reproduce_with_partner<R: Rng + ?Sized>(
        &mut self,
        partner: &mut Ant,
        environment: &Environment,
        ids: &mut IdAllocator,
        rng: &mut R,
    ) -> Option<Ant> {
        if !self.can_mate() || !partner.can_mate() {
            return None;
        }

        self.food -= REPRODUCTION_COST;
        partner.food -= REPRODUCTION_COST;
        self.reproduction_cooldown = REPRODUCTION_COOLDOWN;
        partner.reproduction_cooldown = REPRODUCTION_COOLDOWN;

        let blended = Traits::blend(&self.traits(), &partner.traits());
        let traits = blended.mutated(rng);
        let gender = Gender::random(rng);
        let midpoint = Point::new(
            (self.pos.x() + partner.pos.x()) / 2.0,
            (self.pos.y() + partner.pos.y()) / 2.0,
        );
        let pos = geometric_utils::jitter_in_grid(
            midpoint,
            OFFSPRING_SPREAD,
            environment.width,
            environment.height,
            rng,
        );

        Some(Ant::of_archetype(
            ids.next_id(),
            pos,
            self.archetype,
            TraitOverrides::from_traits(traits).with_gender(gender),
            rng,
        ))
    }

    /// Eats from the food cell under the ant.
    pub fn find_food(&mut self, environment: &mut Environment) {
        if !self.is_alive() {
            return;
        }
        if environment.has_food(self.pos) {
            self.food += environment.consume_food(self.pos);
        }
    }

    /// Ages the ant by one tick, pays metabolism and forages.
    ///
    /// Ants past [`OLD_AGE`] lose [`AGING_PENALTY`] health every tick. A
    /// starved or exhausted ant dies and does nothing else this tick.
    pub fn update(
        &mut self,
        environment: &mut Environment,
        creature_manager: Option<&mut CreatureManager>,
    ) {
        if !self.is_alive() {
            return;
        }

        self.vitals.age += 1;
        self.food -= METABOLISM_COST;
        if self.vitals.age > OLD_AGE {
            self.vitals.health -= AGING_PENALTY;
        }

        if self.vitals.health <= 0.0 || self.food <= 0.0 {
            self.vitals.kill();
            return;
        }

        self.find_food(environment);

        if let Some(manager) = creature_manager {
            self.find_and_eat_peaceful_creature(manager.peaceful_creatures_mut());
        }
    }

    fn spend_food(&mut self, amount: f32) {
        self.food -= amount;
        if self.food <= 0.0 {
            self.vitals.kill();
        }
    }
}

impl Locatable for Ant {
    fn pos(&self) -> Point<f32> {
        self.pos
    }
}

impl Agent for Ant {
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
