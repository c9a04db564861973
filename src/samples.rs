//! Sample arrays for demos, tests and benchmarks
//!
//! Every generator returns the values `0..size` in some arrangement, so
//! sorted output can always be compared against [`ascending`].

use std::fmt::Display;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// `0, 1, ..., size - 1`
pub fn ascending(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}

/// `size - 1, ..., 1, 0`
pub fn descending(size: usize) -> Vec<i64> {
    (0..size as i64).rev().collect()
}

/// `0..size` in random order.
///
/// With a seed the permutation is reproducible across runs and platforms;
/// without one the thread RNG is used.
pub fn shuffled(size: usize, seed: Option<u64>) -> Vec<i64> {
    let mut values = descending(size);
    match seed {
        Some(seed) => values.shuffle(&mut ChaCha8Rng::seed_from_u64(seed)),
        None => values.shuffle(&mut rand::thread_rng()),
    }
    values
}

/// Comma-delimited rendering: `1, 2, 3`.
pub fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Input arrangements used by the sort demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Ascending,
    Descending,
    Random,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Ascending, Shape::Descending, Shape::Random];

    pub fn generate(self, size: usize, seed: Option<u64>) -> Vec<i64> {
        match self {
            Shape::Ascending => ascending(size),
            Shape::Descending => descending(size),
            Shape::Random => shuffled(size, seed),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Shape::Ascending => "Ascending",
            Shape::Descending => "Descending",
            Shape::Random => "Random",
        }
    }
}
