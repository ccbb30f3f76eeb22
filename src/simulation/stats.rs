//! Population statistics and the per-tick history.
//!
//! Snapshots are plain serde records so plotting and reporting tools can
//! consume them without touching live simulation state.

use serde::{Deserialize, Serialize};

use super::ant::{Ant, Gender};

/// Mean trait values across the living ants of a colony.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AverageStats {
    /// Mean health.
    pub health: f32,
    /// Mean damage.
    pub damage: f32,
    /// Mean speed.
    pub speed: f32,
    /// Mean fertility.
    pub fertility: f32,
    /// Mean awareness.
    pub awareness: f32,
}

impl AverageStats {
    /// Averages the living ants in `ants`; all zeros when none are alive.
    pub fn of_living<'a>(ants: impl IntoIterator<Item = &'a Ant>) -> Self {
        let mut totals = Self::default();
        let mut count = 0usize;
        for ant in ants.into_iter().filter(|ant| ant.vitals.is_alive()) {
            totals.health += ant.vitals.health;
            totals.damage += ant.damage;
            totals.speed += ant.speed;
            totals.fertility += ant.fertility;
            totals.awareness += ant.awareness;
            count += 1;
        }
        if count == 0 {
            return Self::default();
        }
        let n = count as f32;
        Self {
            health: totals.health / n,
            damage: totals.damage / n,
            speed: totals.speed / n,
            fertility: totals.fertility / n,
            awareness: totals.awareness / n,
        }
    }
}

/// Number of ants of each gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenderCounts {
    /// Male ants.
    pub male: usize,
    /// Female ants.
    pub female: usize,
}

impl GenderCounts {
    /// Counts genders over `ants`.
    pub fn of<'a>(ants: impl IntoIterator<Item = &'a Ant>) -> Self {
        ants.into_iter().fold(Self::default(), |mut counts, ant| {
            match ant.gender {
                Gender::Male => counts.male += 1,
                Gender::Female => counts.female += 1,
            }
            counts
        })
    }
}

/// Number of creatures of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreatureCounts {
    /// Peaceful creatures.
    pub peaceful: usize,
    /// Predators.
    pub predators: usize,
}

/// State summary of one colony.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColonySummary {
    /// Ants in the colony.
    pub count: usize,
    /// Mean traits of living ants.
    pub averages: AverageStats,
    /// Gender split.
    pub genders: GenderCounts,
}

/// Summary of the whole simulation after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Days simulated so far.
    pub day: u64,
    /// Red colony summary.
    pub red: ColonySummary,
    /// Black colony summary.
    pub black: ColonySummary,
    /// Creature counts, when creatures take part.
    pub creatures: Option<CreatureCounts>,
}

/// Append-only record of per-tick snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Checks if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Red and black population per tick.
    pub fn populations(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.snapshots.iter().map(|s| (s.red.count, s.black.count))
    }

    /// Saves the history to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a history from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let history = serde_json::from_str(&json)?;
        Ok(history)
    }
}
