//! The bounded grid and its food.
//!
//! Food is a dense per-cell quantity. It enters the world through single
//! cell drops and through circular clusters, and leaves it only when ants
//! consume it. Cell values never go negative.

use geo::Point;
use ndarray::{Array2, ArrayView2};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Most food a single `consume_food` call can take from a cell.
pub const BITE_SIZE: f32 = 10.0;

/// Preferred distance between a cluster centre and the grid edge.
const CLUSTER_MARGIN: usize = 10;

/// Shape of a food cluster event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterSpec {
    /// Smallest and largest radius, in cells.
    pub radius: (usize, usize),
    /// Smallest and largest number of deposit points.
    pub points: (usize, usize),
}

impl ClusterSpec {
    /// Clusters placed by [`Environment::spawn_food`].
    pub const INITIAL: Self = Self {
        radius: (3, 8),
        points: (50, 150),
    };

    /// Rare large clusters placed by [`Environment::update`].
    pub const BLOOM: Self = Self {
        radius: (5, 10),
        points: (80, 200),
    };
}

/// Grid world holding per-cell food quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    food_map: Array2<f32>,
}

impl Environment {
    /// Creates an environment and spawns `initial_food` drops plus clusters.
    pub fn new<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        initial_food: usize,
        rng: &mut R,
    ) -> Self {
        let mut environment = Self::empty(width, height);
        environment.spawn_food(initial_food, rng);
        environment
    }

    /// Creates an environment without any food.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            food_map: Array2::zeros((width, height)),
        }
    }

    /// Read-only view of the food grid, indexed `[x, y]`.
    pub fn food_map(&self) -> ArrayView2<'_, f32> {
        self.food_map.view()
    }

    /// Sum of all food on the grid.
    pub fn total_food(&self) -> f32 {
        self.food_map.sum()
    }

    /// Food in the cell containing `pos`, or zero outside the grid.
    pub fn food_at(&self, pos: Point<f32>) -> f32 {
        self.cell(pos).map_or(0.0, |cell| self.food_map[cell])
    }

    /// Places `amount` single-cell drops and then 3 to 6 clusters.
    ///
    /// Returns the total food deposited.
    pub fn spawn_food<R: Rng + ?Sized>(&mut self, amount: usize, rng: &mut R) -> f32 {
        let mut deposited = self.scatter_food(amount, rng);
        let clusters = rng.random_range(3..=6);
        for _ in 0..clusters {
            deposited += self.spawn_cluster(ClusterSpec::INITIAL, rng);
        }
        deposited
    }

    /// Places `amount` drops of 5 to 20 food at uniformly random cells.
    pub fn scatter_food<R: Rng + ?Sized>(&mut self, amount: usize, rng: &mut R) -> f32 {
        let mut deposited = 0.0;
        for _ in 0..amount {
            let x = rng.random_range(0..self.width);
            let y = rng.random_range(0..self.height);
            let quantity = rng.random_range(5..=20) as f32;
            self.food_map[[x, y]] += quantity;
            deposited += quantity;
        }
        deposited
    }

    /// Deposits one circular cluster of food around a random centre.
    ///
    /// Each point gets 10 to 30 food. Points falling outside the grid are
    /// dropped. Returns the food actually deposited.
    pub fn spawn_cluster<R: Rng + ?Sized>(&mut self, spec: ClusterSpec, rng: &mut R) -> f32 {
        let center_x = random_with_margin(self.width, rng) as f32;
        let center_y = random_with_margin(self.height, rng) as f32;
        let radius = rng.random_range(spec.radius.0..=spec.radius.1) as f32;
        let points = rng.random_range(spec.points.0..=spec.points.1);

        let mut deposited = 0.0;
        for _ in 0..points {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let r = rng.random_range(0.0..=radius);
            let quantity = rng.random_range(10..=30) as f32;
            let point = Point::new(center_x + r * angle.cos(), center_y + r * angle.sin());
            if let Some(cell) = self.cell(point) {
                self.food_map[cell] += quantity;
                deposited += quantity;
            }
        }
        deposited
    }

    /// Checks whether the cell containing `pos` holds any food.
    pub fn has_food(&self, pos: Point<f32>) -> bool {
        self.food_at(pos) > 0.0
    }

    /// Removes up to [`BITE_SIZE`] food from the cell containing `pos`.
    ///
    /// Returns the amount removed; zero outside the grid or on an empty cell.
    pub fn consume_food(&mut self, pos: Point<f32>) -> f32 {
        let Some(cell) = self.cell(pos) else {
            return 0.0;
        };
        let available = self.food_map[cell];
        if available <= 0.0 {
            return 0.0;
        }
        let amount = available.min(BITE_SIZE);
        self.food_map[cell] = (available - amount).max(0.0);
        amount
    }

    /// Per-tick food events: a 5% chance of 5 to 15 scattered drops and,
    /// independently, a 1% chance of one large cluster.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // Drops only; clusters come from the separate bloom roll below.
        if rng.random_bool(0.05) {
            let drops = rng.random_range(5..=15);
            let food = self.scatter_food(drops, rng);
            debug!(drops, food, "scattered food");
        }
        if rng.random_bool(0.01) {
            let food = self.spawn_cluster(ClusterSpec::BLOOM, rng);
            debug!(food, "food bloom");
        }
    }

    /// Grid cell for a position, by truncating both coordinates.
    fn cell(&self, pos: Point<f32>) -> Option<[usize; 2]> {
        let x = pos.x().trunc();
        let y = pos.y().trunc();
        if x < 0.0 || y < 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then_some([x, y])
    }
}

/// Random coordinate keeping [`CLUSTER_MARGIN`] from both edges, with the
/// margin shrunk on grids too small to honour it.
fn random_with_margin<R: Rng + ?Sized>(extent: usize, rng: &mut R) -> usize {
    let low = CLUSTER_MARGIN.min(extent / 2);
    let high = extent.saturating_sub(CLUSTER_MARGIN).max(low);
    rng.random_range(low..=high)
}
