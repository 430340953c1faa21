// tests/draw_test.rs — Integration test: end-to-end draws and their invariants

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use secret_santa::core::draw::draw;
use secret_santa::core::registry::Registry;
use secret_santa::core::types::{AssignmentPolicy, Category, Participant};
use secret_santa::infra::errors::SantaError;

/// An RNG that counts how often it is asked for randomness.
struct CountingRng {
    inner: StdRng,
    draws: usize,
}

impl CountingRng {
    fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws += 1;
        self.inner.try_fill_bytes(dest)
    }
}

fn people(names: &[&str]) -> Vec<Participant> {
    names.iter().map(|n| Participant::new(*n)).collect()
}

fn cats(names: &[&str]) -> Vec<Category> {
    names.iter().map(|n| Category::named(*n)).collect()
}

/// Assert every structural invariant on a finalized registry.
fn assert_invariants(registry: &Registry) {
    assert!(registry.is_finalized());
    let everyone: HashSet<&str> = registry.givers().iter().map(|g| g.name()).collect();

    for giver in registry.givers() {
        let row = giver.assignments();
        assert_eq!(row.len(), registry.category_count(), "{} has a short row", giver.name());
        for (category, receiver) in &row {
            assert_ne!(*receiver, giver.name(), "{} gives to self in {category}", giver.name());
            assert!(everyone.contains(receiver));
        }
        let distinct: HashSet<&str> = row.iter().map(|(_, r)| *r).collect();
        assert_eq!(distinct.len(), row.len(), "{} repeats a receiver", giver.name());
    }

    for category in registry.categories() {
        let column: Vec<&str> = registry
            .givers()
            .iter()
            .filter_map(|g| g.receiver_for(category))
            .collect();
        let distinct: HashSet<&str> = column.iter().copied().collect();
        assert_eq!(distinct.len(), column.len(), "duplicate receiver in {category}");
        assert_eq!(distinct, everyone, "{category} is not a permutation");
    }
}

#[test]
fn test_small_single_category_always_succeeds() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let outcome = draw(
            people(&["A", "B", "C", "D"]),
            cats(&["Gift"]),
            &AssignmentPolicy::default(),
            &mut rng,
        )
        .expect("4x1 must converge");
        assert_invariants(&outcome.registry);
    }
}

#[test]
fn test_book_and_game_scenario() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..100 {
        let outcome = draw(
            people(&["Alice", "Bob", "Carol", "Dave"]),
            cats(&["Book", "Game"]),
            &AssignmentPolicy::default(),
            &mut rng,
        )
        .unwrap();
        assert_invariants(&outcome.registry);
        for giver in outcome.registry.givers() {
            assert_eq!(giver.assignments().len(), 2);
        }
    }
}

#[test]
fn test_book_and_game_without_column_awareness() {
    // The plain algorithm relies on the validator alone to enforce columns.
    let policy = AssignmentPolicy {
        column_aware: false,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let outcome = draw(
            people(&["Alice", "Bob", "Carol", "Dave"]),
            cats(&["Book", "Game"]),
            &policy,
            &mut rng,
        )
        .unwrap();
        assert_invariants(&outcome.registry);
    }
}

#[test]
fn test_minimum_ratio_three_by_two_converges() {
    for column_aware in [true, false] {
        let policy = AssignmentPolicy {
            column_aware,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let outcome = draw(people(&["A", "B", "C"]), cats(&["X", "Y"]), &policy, &mut rng)
                .expect("3x2 must converge");
            assert_invariants(&outcome.registry);
        }
    }
}

#[test]
fn test_two_participants_unique_derangement() {
    let mut rng = StdRng::seed_from_u64(5);
    let x = Category::named("X");
    for _ in 0..50 {
        let outcome = draw(people(&["A", "B"]), vec![x.clone()], &AssignmentPolicy::default(), &mut rng)
            .unwrap();
        let reg = &outcome.registry;
        assert_eq!(reg.giver("A").unwrap().receiver_for(&x), Some("B"));
        assert_eq!(reg.giver("B").unwrap().receiver_for(&x), Some("A"));
    }
}

#[test]
fn test_default_category_run() {
    let mut rng = StdRng::seed_from_u64(6);
    let outcome = draw(
        people(&["A", "B", "C", "D", "E"]),
        vec![],
        &AssignmentPolicy::default(),
        &mut rng,
    )
    .unwrap();
    assert_eq!(outcome.registry.categories(), &[Category::Default]);
    assert_invariants(&outcome.registry);
}

#[test]
fn test_realistic_group_converges() {
    let names = ["Ann", "Ben", "Cat", "Dan", "Eve", "Fay", "Gus", "Hal", "Ivy", "Jon"];
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let outcome = draw(
            people(&names),
            cats(&["Book", "Game", "Sweets"]),
            &AssignmentPolicy::default(),
            &mut rng,
        )
        .unwrap();
        assert_invariants(&outcome.registry);
    }
}

#[test]
fn test_duplicate_names_fail_with_zero_draws() {
    let mut rng = CountingRng::new(8);
    let err = draw(
        people(&["Alice", "Bob", "Alice"]),
        vec![],
        &AssignmentPolicy::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, SantaError::DuplicateParticipant { .. }));
    assert!(err.is_configuration());
    assert_eq!(rng.draws, 0);
}

#[test]
fn test_other_configuration_errors_fail_with_zero_draws() {
    let cases: Vec<(Vec<Participant>, Vec<Category>)> = vec![
        (people(&["A", "B", "C"]), cats(&["X", "X"])),
        (people(&["A", "B"]), cats(&["X", "Y"])),
        (people(&["A"]), vec![]),
    ];
    for (participants, categories) in cases {
        let mut rng = CountingRng::new(9);
        let err = draw(participants, categories, &AssignmentPolicy::default(), &mut rng)
            .unwrap_err();
        assert!(err.is_configuration(), "{err}");
        assert_eq!(rng.draws, 0);
    }
}

#[test]
fn test_counting_rng_is_used_on_success() {
    let mut rng = CountingRng::new(10);
    draw(people(&["A", "B", "C"]), vec![], &AssignmentPolicy::default(), &mut rng).unwrap();
    assert!(rng.draws > 0);
}

#[test]
fn test_budget_exhaustion_reports_attempts() {
    // Without column awareness a 10x3 draw almost never lines up in 3 tries.
    let policy = AssignmentPolicy {
        max_attempts: 3,
        column_aware: false,
        fairness_cap: None,
    };
    let names = ["Ann", "Ben", "Cat", "Dan", "Eve", "Fay", "Gus", "Hal", "Ivy", "Jon"];
    let mut rng = StdRng::seed_from_u64(11);
    match draw(people(&names), cats(&["A", "B", "C"]), &policy, &mut rng) {
        Err(SantaError::AttemptsExhausted { attempts }) => assert_eq!(attempts, 3),
        Ok(outcome) => assert_invariants(&outcome.registry),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_runs_differ_but_both_valid() {
    let names = ["Ann", "Ben", "Cat", "Dan", "Eve", "Fay"];
    let mut first = StdRng::seed_from_u64(100);
    let mut second = StdRng::seed_from_u64(200);
    let a = draw(people(&names), cats(&["X"]), &AssignmentPolicy::default(), &mut first).unwrap();
    let b = draw(people(&names), cats(&["X"]), &AssignmentPolicy::default(), &mut second).unwrap();
    assert_invariants(&a.registry);
    assert_invariants(&b.registry);
}

#[test]
fn test_same_seed_reproduces() {
    let names = ["Ann", "Ben", "Cat", "Dan", "Eve", "Fay"];
    let x = Category::named("X");
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = draw(people(&names), vec![x.clone()], &AssignmentPolicy::default(), &mut rng)
            .unwrap();
        names
            .iter()
            .map(|n| outcome.registry.giver(n).unwrap().receiver_for(&x).unwrap().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn test_parallel_runs_share_nothing() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                let outcome = draw(
                    people(&["A", "B", "C", "D", "E"]),
                    cats(&["X", "Y"]),
                    &AssignmentPolicy::default(),
                    &mut rng,
                )
                .unwrap();
                assert_invariants(&outcome.registry);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
