#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use formicarium::simulation::environment::{BITE_SIZE, ClusterSpec, Environment};
use geo::Point;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn single_cell_with_food(seed: u64) -> (Environment, f32) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut environment = Environment::empty(1, 1);
    let deposited = environment.scatter_food(1, &mut rng);
    (environment, deposited)
}

#[test]
fn test_empty_environment_has_no_food() {
    let environment = Environment::empty(20, 10);

    assert_eq!(environment.food_map().dim(), (20, 10));
    assert_eq!(environment.total_food(), 0.0);
    assert!(!environment.has_food(Point::new(3.0, 4.0)));
}

#[test]
fn test_scatter_drops_are_between_5_and_20() {
    for seed in 0..50 {
        let (environment, deposited) = single_cell_with_food(seed);
        assert!((5.0..=20.0).contains(&deposited));
        assert_eq!(environment.food_at(Point::new(0.5, 0.5)), deposited);
    }
}

#[test]
fn test_consume_food_takes_at_most_one_bite() {
    for seed in 0..50 {
        let (mut environment, deposited) = single_cell_with_food(seed);
        let pos = Point::new(0.2, 0.9);

        let first = environment.consume_food(pos);
        assert_eq!(first, deposited.min(BITE_SIZE));
        assert_eq!(environment.food_at(pos), deposited - first);

        let second = environment.consume_food(pos);
        assert_eq!(second, (deposited - first).min(BITE_SIZE));
        assert!(environment.food_at(pos) >= 0.0);
    }
}

#[test]
fn test_consume_empty_cell_returns_zero() {
    let mut environment = Environment::empty(5, 5);
    assert_eq!(environment.consume_food(Point::new(2.0, 2.0)), 0.0);
    assert_eq!(environment.total_food(), 0.0);
}

#[test]
fn test_out_of_bounds_queries_are_harmless() {
    let (mut environment, deposited) = single_cell_with_food(7);

    for pos in [
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(-1.5, 0.0),
        Point::new(100.0, 100.0),
    ] {
        assert!(!environment.has_food(pos));
        assert_eq!(environment.consume_food(pos), 0.0);
    }
    assert_eq!(environment.total_food(), deposited);
}

#[test]
fn test_coordinates_are_truncated_to_cells() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut environment = Environment::empty(3, 3);
    environment.scatter_food(40, &mut rng);

    let map = environment.food_map();
    assert_eq!(environment.food_at(Point::new(1.99, 2.5)), map[[1, 2]]);
    assert_eq!(environment.food_at(Point::new(0.0, 0.999)), map[[0, 0]]);
}

#[test]
fn test_spawn_food_without_drops_still_builds_clusters() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut environment = Environment::empty(10, 10);

        let deposited = environment.spawn_food(0, &mut rng);

        assert!(deposited > 0.0, "clusters should deposit food");
        assert!((environment.total_food() - deposited).abs() < 1e-2);
        for &cell in environment.food_map() {
            assert!(cell >= 0.0);
            assert!(cell <= deposited);
        }
    }
}

#[test]
fn test_cluster_points_deposit_between_10_and_30() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut environment = Environment::empty(60, 60);
    let spec = ClusterSpec {
        radius: (0, 0),
        points: (1, 1),
    };

    let deposited = environment.spawn_cluster(spec, &mut rng);

    assert!((10.0..=30.0).contains(&deposited));
    let nonzero = environment.food_map().iter().filter(|&&f| f > 0.0).count();
    assert_eq!(nonzero, 1);
}

#[test]
fn test_update_never_removes_food() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut environment = Environment::new(50, 50, 100, &mut rng);

    let mut previous = environment.total_food();
    for _ in 0..500 {
        environment.update(&mut rng);
        let total = environment.total_food();
        assert!(total >= previous);
        previous = total;
    }
    assert!(environment.food_map().iter().all(|&f| f >= 0.0));
}
