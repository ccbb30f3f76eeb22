//! Main simulation: one environment, two rival colonies and optional creatures.
//!
//! A tick (one simulated day) runs in a fixed order, and that order is part
//! of the observable behavior:
//! 1. the environment replenishes food,
//! 2. red then black ants move,
//! 3. red attacks black, then black attacks red,
//! 4. creatures update, move and breed, then ants of both colonies attack
//!    predators,
//! 5. red then black colonies update, clean up and reproduce,
//! 6. a snapshot is appended to the history.
//!
//! Everything is sequential: births, deaths and attacks read and write the
//! same collections their siblings are iterating.

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, trace, warn};

use super::ant::Archetype;
use super::colony::Colony;
use super::creature_manager::CreatureManager;
use super::environment::Environment;
use super::params::{Params, ParamsError};
use super::stats::{History, Snapshot};

/// Which colony leads by population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// More red ants than black ants.
    Red,
    /// More black ants than red ants.
    Black,
    /// Equal populations.
    Draw,
}

/// The whole simulated world plus its control state.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    /// Grid and food.
    pub environment: Environment,
    /// Red colony.
    pub red: Colony,
    /// Black colony.
    pub black: Colony,
    /// Peaceful creatures and predators, when enabled.
    pub creatures: Option<CreatureManager>,
    day: u64,
    paused: bool,
    speed: f32,
    min_speed: f32,
    max_speed: f32,
    base_tick_interval: Duration,
    history: History,
    rng: ChaCha8Rng,
}

impl Ecosystem {
    /// Creates a world from parameters.
    ///
    /// The environment, both colonies and the creatures are all seeded from
    /// one `ChaCha8Rng` built from `params.seed`, so equal parameters give
    /// equal runs.
    ///
    /// # Arguments
    ///
    /// * `params` - World extents, starting populations, trait ranges and
    ///   control limits.
    ///
    /// # Returns
    ///
    /// The world at day 0, or a [`ParamsError`] if `params` fail validation.
    pub fn new(params: &Params) -> Result<Self, ParamsError> {
        params.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);

        let environment = Environment::new(
            params.width,
            params.height,
            params.initial_food,
            &mut rng,
        );
        let red = Colony::new(
            Archetype::Red,
            params.red_traits,
            params.initial_red_ants,
            &environment,
            &mut rng,
        );
        let black = Colony::new(
            Archetype::Black,
            params.black_traits,
            params.initial_black_ants,
            &environment,
            &mut rng,
        );
        let creatures = params.creatures_enabled.then(|| {
            let mut manager = CreatureManager::new(params.creatures);
            manager.add_peaceful_creatures(
                params.initial_peaceful_creatures,
                &environment,
                &mut rng,
            );
            manager.add_predators(params.initial_predators, &environment, &mut rng);
            manager
        });

        Self::from_parts(environment, red, black, creatures, params, rng)
    }

    /// Assembles a world from pre-built parts.
    ///
    /// Useful for hand-crafted scenarios; `params` supplies the control
    /// limits and `rng` drives every later tick. The parameters are
    /// validated here as well, so an inverted speed range is rejected.
    pub fn from_parts(
        environment: Environment,
        red: Colony,
        black: Colony,
        creatures: Option<CreatureManager>,
        params: &Params,
        rng: ChaCha8Rng,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            environment,
            red,
            black,
            creatures,
            day: 0,
            paused: false,
            speed: 1.0_f32.clamp(params.min_speed, params.max_speed),
            min_speed: params.min_speed,
            max_speed: params.max_speed,
            base_tick_interval: Duration::from_millis(params.base_tick_interval_ms),
            history: History::new(),
            rng,
        })
    }

    /// Advances the world by one day unless paused.
    pub fn update(&mut self) {
        if self.paused {
            return;
        }
        self.tick();
    }

    /// Advances exactly one day, even while paused.
    pub fn advance_one_tick(&mut self) {
        self.tick();
    }

    /// Runs `days` updates; a paused world does not advance.
    pub fn run(&mut self, days: u64) {
        for _ in 0..days {
            self.update();
        }
    }

    fn tick(&mut self) {
        let rng = &mut self.rng;

        self.environment.update(rng);

        self.red.move_ants(&self.environment, rng);
        self.black.move_ants(&self.environment, rng);

        self.red.attack_enemies(&mut self.black);
        self.black.attack_enemies(&mut self.red);

        if let Some(creatures) = self.creatures.as_mut() {
            creatures.update(
                &self.environment,
                self.red.ants_mut(),
                self.black.ants_mut(),
                rng,
            );
            self.red.attack_predators(creatures);
            self.black.attack_predators(creatures);
        }

        let red_tick = self
            .red
            .update(&mut self.environment, self.creatures.as_mut(), rng);
        let black_tick = self
            .black
            .update(&mut self.environment, self.creatures.as_mut(), rng);

        self.day += 1;
        let snapshot = self.get_stats();
        self.history.record(snapshot);

        trace!(
            day = self.day,
            red = snapshot.red.count,
            black = snapshot.black.count,
            red_births = red_tick.births,
            black_births = black_tick.births,
            "day complete"
        );
    }

    /// Current state summary.
    pub fn get_stats(&self) -> Snapshot {
        Snapshot {
            day: self.day,
            red: self.red.summary(),
            black: self.black.summary(),
            creatures: self.creatures.as_ref().map(CreatureManager::count),
        }
    }

    /// Which colony currently has more ants.
    pub fn outcome(&self) -> Outcome {
        match self.red.count().cmp(&self.black.count()) {
            std::cmp::Ordering::Greater => Outcome::Red,
            std::cmp::Ordering::Less => Outcome::Black,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Days simulated so far.
    pub fn day(&self) -> u64 {
        self.day
    }

    /// Per-tick snapshots recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Checks whether updates are suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspends updates.
    pub fn pause(&mut self) {
        if !self.paused {
            info!(day = self.day, "simulation paused");
        }
        self.paused = true;
    }

    /// Resumes updates.
    pub fn resume(&mut self) {
        if self.paused {
            info!(day = self.day, "simulation resumed");
        }
        self.paused = false;
    }

    /// Flips the pause state and returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
        self.paused
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Sets the speed multiplier, clamped to the configured range.
    ///
    /// Returns the value actually applied.
    pub fn set_speed(&mut self, multiplier: f32) -> f32 {
        let applied = if multiplier.is_nan() {
            self.min_speed
        } else {
            multiplier.clamp(self.min_speed, self.max_speed)
        };
        if applied != multiplier {
            warn!(
                requested = multiplier,
                applied, "speed multiplier clamped to configured range"
            );
        }
        info!(speed = applied, "simulation speed changed");
        self.speed = applied;
        applied
    }

    /// Wall-clock delay between ticks at the current speed.
    pub fn tick_interval(&self) -> Duration {
        let seconds = self.base_tick_interval.as_secs_f64() / f64::from(self.speed);
        Duration::from_secs_f64(seconds)
    }
}
