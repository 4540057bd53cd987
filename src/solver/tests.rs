use std::collections::HashSet;

use super::Solver;
use crate::game::GameRange;

#[test]
fn guesses_every_number_once() {
    let range = GameRange::new(-3, 6).unwrap();
    let mut solver = Solver::new(range);
    assert_eq!(solver.remaining(), 10);

    let mut seen = HashSet::new();
    while let Some(guess) = solver.next_guess() {
        let value = guess.parse::<i64>().unwrap();
        assert!(range.contains(value));
        assert!(seen.insert(value), "guessed {} twice", value);
    }
    assert_eq!(seen.len(), 10);
    assert_eq!(solver.remaining(), 0);
    assert_eq!(solver.next_guess(), None);
}

#[test]
fn order_is_shuffled() {
    // 20! orderings, so two identical runs in a row means no shuffling
    let range = GameRange::new(1, 20).unwrap();
    let drain = |mut solver: Solver| {
        std::iter::from_fn(move || solver.next_guess()).collect::<Vec<_>>()
    };
    let orders = (0..5)
        .map(|_| drain(Solver::new(range)))
        .collect::<HashSet<_>>();
    assert!(orders.len() > 1);
}

#[test]
fn empty_solver() {
    let mut solver = Solver::default();
    assert_eq!(solver.remaining(), 0);
    assert_eq!(solver.next_guess(), None);
}

#[test]
fn wide_range_is_sampled() {
    let range = GameRange::new(i64::MIN, i64::MAX).unwrap();
    let mut solver = Solver::new(range);
    assert_eq!(solver.remaining(), 1u128 << 64);

    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let value = solver.next_guess().unwrap().parse::<i64>().unwrap();
        assert!(seen.insert(value), "guessed {} twice", value);
    }
    assert_eq!(solver.remaining(), (1u128 << 64) - 1000);
}

#[test]
fn large_range_never_repeats() {
    // Just past the shuffle limit, so guesses are drawn lazily
    let range = GameRange::new(1, (1 << 16) + 1).unwrap();
    let mut solver = Solver::new(range);
    let mut seen = HashSet::new();
    for _ in 0..5000 {
        let value = solver.next_guess().unwrap().parse::<i64>().unwrap();
        assert!(range.contains(value));
        assert!(seen.insert(value), "guessed {} twice", value);
    }
    assert_eq!(solver.remaining(), (1 << 16) + 1 - 5000);
}
