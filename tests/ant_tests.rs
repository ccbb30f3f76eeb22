#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use formicarium::simulation::agent::{Agent, IdAllocator};
use formicarium::simulation::ant::{
    ATTACK_COOLDOWN, Ant, Archetype, Gender, REPRODUCTION_COOLDOWN, STARTING_FOOD, TraitOverrides,
};
use formicarium::simulation::creature::Creature;
use formicarium::simulation::dna::Traits;
use formicarium::simulation::environment::Environment;
use formicarium::simulation::params::TraitRanges;
use geo::Point;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn ant_at(id: usize, x: f32, y: f32, gender: Gender) -> Ant {
    let overrides = TraitOverrides {
        health: Some(100.0),
        damage: Some(10.0),
        speed: Some(1.0),
        fertility: Some(0.1),
        awareness: Some(5.0),
        gender: Some(gender),
    };
    let pos = Point::new(x, y);
    Ant::of_archetype(id, pos, Archetype::Red, overrides, &mut rng(id as u64))
}

#[test]
fn test_unspecified_traits_follow_archetype_ranges() {
    for seed in 0..50 {
        for archetype in [Archetype::Red, Archetype::Black, Archetype::Plain] {
            let ant = Ant::of_archetype(
                0,
                Point::new(0.0, 0.0),
                archetype,
                TraitOverrides::default(),
                &mut rng(seed),
            );
            let ranges = archetype.default_ranges();
            assert!(ranges.health.contains(ant.vitals.health));
            assert!(ranges.damage.contains(ant.damage));
            assert!(ranges.speed.contains(ant.speed));
            assert!(ranges.fertility.contains(ant.fertility));
            assert!(ranges.awareness.contains(ant.awareness));
            assert_eq!(ant.food, STARTING_FOOD);
            assert!(ant.is_alive());
            assert_eq!(ant.archetype, archetype);
        }
    }
}

#[test]
fn test_overrides_are_applied_field_by_field() {
    let overrides = TraitOverrides {
        speed: Some(3.0),
        gender: Some(Gender::Female),
        ..TraitOverrides::default()
    };
    let ant = Ant::new(
        4,
        Point::new(1.0, 2.0),
        Archetype::Black,
        &TraitRanges::BLACK,
        overrides,
        &mut rng(1),
    );

    assert_eq!(ant.speed, 3.0);
    assert_eq!(ant.gender, Gender::Female);
    assert!(TraitRanges::BLACK.health.contains(ant.vitals.health));
    assert_eq!(ant.color(), "black");
}

#[test]
fn test_blocked_move_still_costs_food() {
    let environment = Environment::empty(1, 1);
    let mut ant = ant_at(0, 0.0, 0.0, Gender::Male);

    for step in 1..=5 {
        ant.step(&environment, &mut rng(step));
        assert_eq!(ant.pos, Point::new(0.0, 0.0));
        assert_eq!(ant.food, STARTING_FOOD - step as f32);
    }
}

#[test]
fn test_move_stays_in_bounds_and_decrements_cooldowns() {
    let environment = Environment::empty(10, 10);
    let mut ant = ant_at(0, 5.0, 5.0, Gender::Male);
    ant.attack_cooldown = 2;
    ant.reproduction_cooldown = 1;
    let mut rng = rng(9);

    ant.step(&environment, &mut rng);
    assert_eq!(ant.attack_cooldown, 1);
    assert_eq!(ant.reproduction_cooldown, 0);

    for _ in 0..200 {
        ant.food = STARTING_FOOD;
        ant.step(&environment, &mut rng);
        assert!((0.0..10.0).contains(&ant.pos.x()));
        assert!((0.0..10.0).contains(&ant.pos.y()));
    }
    assert_eq!(ant.attack_cooldown, 0);
}

#[test]
fn test_starving_ant_dies_while_moving() {
    let environment = Environment::empty(10, 10);
    let mut ant = ant_at(0, 5.0, 5.0, Gender::Male);
    ant.food = 1.0;

    ant.step(&environment, &mut rng(2));
    assert!(!ant.is_alive());

    let pos = ant.pos;
    ant.step(&environment, &mut rng(3));
    assert_eq!(ant.pos, pos);
}

#[test]
fn test_attack_in_range_sets_cooldown() {
    let mut attacker = ant_at(0, 0.0, 0.0, Gender::Male);
    let mut target = ant_at(1, 3.0, 4.0, Gender::Male);

    assert!(attacker.attack(&mut target));
    assert_eq!(target.health(), 90.0);
    assert_eq!(attacker.attack_cooldown, ATTACK_COOLDOWN);

    assert!(!attacker.attack(&mut target));
    assert_eq!(target.health(), 90.0);
}

#[test]
fn test_attack_out_of_range_does_nothing() {
    let mut attacker = ant_at(0, 0.0, 0.0, Gender::Male);
    let mut target = ant_at(1, 4.0, 4.0, Gender::Male);

    assert!(!attacker.attack(&mut target));
    assert_eq!(target.health(), 100.0);
    assert_eq!(attacker.attack_cooldown, 0);
}

#[test]
fn test_dead_target_cannot_be_attacked() {
    let mut target = ant_at(1, 0.0, 0.0, Gender::Male);
    target.vitals.health = 5.0;
    target.receive_damage(10.0);
    assert!(!target.is_alive());

    let mut attacker = ant_at(0, 0.5, 0.0, Gender::Female);
    attacker.awareness = 100.0;
    assert!(!attacker.attack(&mut target));
    assert_eq!(attacker.attack_cooldown, 0);

    target.vitals.health = 50.0;
    assert!(!target.is_alive(), "death is permanent");
}

#[test]
fn test_attack_predator_ignores_peaceful_creatures() {
    let mut ant = ant_at(0, 0.0, 0.0, Gender::Male);
    let mut peaceful = Creature::peaceful(0, Point::new(1.0, 0.0), 50.0, 0.8, 3.0);
    let mut predator = Creature::predator(1, Point::new(1.0, 0.0), 300.0, 50.0, 1.5, 5.0, 15.0);

    assert!(!ant.attack_predator(&mut peaceful));
    assert_eq!(peaceful.health(), 50.0);
    assert!(ant.attack_predator(&mut predator));
    assert_eq!(predator.health(), 290.0);
}

#[test]
fn test_eats_first_creature_in_range_not_nearest() {
    let mut ant = ant_at(0, 0.0, 0.0, Gender::Male);
    let mut creatures = vec![
        Creature::peaceful(0, Point::new(20.0, 0.0), 50.0, 0.8, 3.0),
        Creature::peaceful(1, Point::new(4.0, 0.0), 5.0, 0.8, 3.0),
        Creature::peaceful(2, Point::new(1.0, 0.0), 5.0, 0.8, 2.0),
    ];

    assert!(ant.find_and_eat_peaceful_creature(&mut creatures));
    assert_eq!(creatures[0].health(), 50.0);
    assert!(!creatures[1].is_alive());
    assert!(creatures[2].is_alive());
    assert_eq!(ant.food, STARTING_FOOD + 90.0);
    assert_eq!(ant.attack_cooldown, ATTACK_COOLDOWN);

    assert!(!ant.find_and_eat_peaceful_creature(&mut creatures));
}

#[test]
fn test_wounding_prey_gives_no_food() {
    let mut ant = ant_at(0, 0.0, 0.0, Gender::Male);
    let mut creatures = vec![Creature::peaceful(0, Point::new(1.0, 1.0), 50.0, 0.8, 3.0)];

    assert!(ant.find_and_eat_peaceful_creature(&mut creatures));
    assert_eq!(creatures[0].health(), 40.0);
    assert_eq!(ant.food, STARTING_FOOD);
}

#[test]
fn test_find_mate_returns_first_eligible_candidate() {
    let ants = vec![
        ant_at(0, 5.0, 5.0, Gender::Male),
        ant_at(1, 5.5, 5.0, Gender::Male),
        ant_at(2, 6.5, 5.0, Gender::Female),
        ant_at(3, 5.2, 5.0, Gender::Female),
    ];

    assert_eq!(ants[0].find_mate(&ants), Some(2));
}

#[test]
fn test_find_mate_respects_food_cooldown_and_range() {
    let mut ants = vec![
        ant_at(0, 5.0, 5.0, Gender::Male),
        ant_at(1, 5.0, 6.0, Gender::Female),
        ant_at(2, 5.0, 9.0, Gender::Female),
    ];
    assert_eq!(ants[0].find_mate(&ants), Some(1));

    ants[1].food = 69.0;
    assert_eq!(ants[0].find_mate(&ants), None);

    ants[1].food = 70.0;
    ants[1].reproduction_cooldown = 1;
    assert_eq!(ants[0].find_mate(&ants), None);

    ants[1].reproduction_cooldown = 0;
    ants[0].food = 60.0;
    assert_eq!(ants[0].find_mate(&ants), None);
}

#[test]
fn test_reproduction_pays_food_and_sets_cooldowns() {
    let environment = Environment::empty(100, 100);
    let mut ids = IdAllocator::new();
    let mut first = ant_at(ids.next_id(), 10.0, 10.0, Gender::Male);
    let mut second = ant_at(ids.next_id(), 11.0, 10.0, Gender::Female);

    let child = first
        .reproduce_with_partner(&mut second, &environment, &mut ids, &mut rng(4))
        .expect("eligible parents should reproduce");

    assert_eq!(first.food, 50.0);
    assert_eq!(second.food, 50.0);
    assert_eq!(first.reproduction_cooldown, REPRODUCTION_COOLDOWN);
    assert_eq!(second.reproduction_cooldown, REPRODUCTION_COOLDOWN);
    assert_eq!(child.id, 2);
    assert_eq!(child.archetype, Archetype::Red);
    assert_eq!(child.food, STARTING_FOOD);
    assert!((8.5..=12.5).contains(&child.pos.x()));
    assert!((8.0..=12.0).contains(&child.pos.y()));

    assert!(
        first
            .reproduce_with_partner(&mut second, &environment, &mut ids, &mut rng(5))
            .is_none()
    );
}

#[test]
fn test_offspring_takes_first_parent_archetype() {
    let environment = Environment::empty(50, 50);
    let mut ids = IdAllocator::new();
    let mut black = ant_at(0, 5.0, 5.0, Gender::Male);
    black.archetype = Archetype::Black;
    let mut red = ant_at(1, 5.0, 6.0, Gender::Female);

    let child = black
        .reproduce_with_partner(&mut red, &environment, &mut ids, &mut rng(6))
        .expect("eligible parents should reproduce");
    assert_eq!(child.archetype, Archetype::Black);
}

#[test]
fn test_offspring_position_is_clamped() {
    let environment = Environment::empty(5, 5);
    for seed in 0..50 {
        let mut ids = IdAllocator::new();
        let mut first = ant_at(0, 0.0, 4.0, Gender::Male);
        let mut second = ant_at(1, 0.5, 4.5, Gender::Female);

        let child = first
            .reproduce_with_partner(&mut second, &environment, &mut ids, &mut rng(seed))
            .expect("eligible parents should reproduce");
        assert!((0.0..=4.0).contains(&child.pos.x()));
        assert!((0.0..=4.0).contains(&child.pos.y()));
    }
}

#[test]
fn test_offspring_traits_stay_within_mutation_bounds() {
    let environment = Environment::empty(50, 50);
    let mut mutated = 0;
    for seed in 0..200 {
        let mut ids = IdAllocator::new();
        let mut first = ant_at(0, 5.0, 5.0, Gender::Male);
        let mut second = ant_at(1, 5.0, 6.0, Gender::Female);
        second.vitals.health = 120.0;
        second.damage = 14.0;
        second.speed = 1.4;
        second.fertility = 0.12;
        second.awareness = 7.0;
        let mean = Traits::blend(&first.traits(), &second.traits());

        let child = first
            .reproduce_with_partner(&mut second, &environment, &mut ids, &mut rng(seed))
            .expect("eligible parents should reproduce");
        let traits = child.traits();

        for (value, mean) in [
            (traits.health, mean.health),
            (traits.damage, mean.damage),
            (traits.speed, mean.speed),
            (traits.fertility, mean.fertility),
            (traits.awareness, mean.awareness),
        ] {
            let low = mean * 0.8 - 1e-4;
            let high = mean * 1.2 + 1e-4;
            assert!((low..=high).contains(&value), "{value} outside {low}..{high}");
            if value != mean {
                mutated += 1;
            }
        }
    }
    assert!(mutated > 0, "some traits should have mutated");
    assert!(mutated < 1000, "most traits should be inherited unchanged");
}

#[test]
fn test_update_pays_metabolism_and_forages() {
    let mut rng = rng(8);
    let mut environment = Environment::empty(1, 1);
    let deposited = environment.scatter_food(1, &mut rng);
    let mut ant = ant_at(0, 0.0, 0.0, Gender::Male);

    ant.update(&mut environment, None);

    assert_eq!(ant.vitals.age, 1);
    assert_eq!(ant.food, STARTING_FOOD - 0.5 + deposited.min(10.0));
    assert_eq!(environment.total_food(), deposited - deposited.min(10.0));
}

#[test]
fn test_old_ants_lose_health_every_tick() {
    let mut environment = Environment::empty(10, 10);
    let mut ant = ant_at(0, 5.0, 5.0, Gender::Male);
    ant.vitals.age = 100;

    ant.update(&mut environment, None);
    assert_eq!(ant.vitals.health, 99.5);
    ant.update(&mut environment, None);
    assert_eq!(ant.vitals.health, 99.0);
    assert_eq!(ant.vitals.age, 102);
}

#[test]
fn test_update_kills_starving_ant() {
    let mut environment = Environment::empty(10, 10);
    let mut ant = ant_at(0, 5.0, 5.0, Gender::Male);
    ant.food = 0.5;

    ant.update(&mut environment, None);

    assert!(!ant.is_alive());
    assert_eq!(ant.vitals.age, 1);

    ant.update(&mut environment, None);
    assert_eq!(ant.vitals.age, 1, "dead ants do not age");
}
