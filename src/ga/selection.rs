//! Fitness-proportionate (roulette wheel) selection.
//!
//! A [`RouletteWheel`] is the fitness table of a pool together with its
//! total. Spinning it draws a ball in `[0, total)` and walks the table,
//! returning the first slot whose running sum exceeds the ball, so each
//! slot is chosen with probability `fitness / total`.
//!
//! A table whose total is zero (every chromosome infeasible) cannot be
//! roulette-selected; it falls back to a uniform draw.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Chromosome, Evaluator, Fitness};
use crate::random::{uniform_below, uniform_index};
use log::{debug, warn};
use rand::Rng;

/// Fitness table of a pool, built fresh from the chromosomes' current bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouletteWheel {
    fitnesses: Vec<Fitness>,
    total: u64,
}

impl RouletteWheel {
    /// Evaluates every chromosome and sums the scores.
    pub fn build<E: Evaluator + ?Sized>(evaluator: &E, chromosomes: &[Chromosome]) -> Self {
        Self::from_fitnesses(chromosomes.iter().map(|c| evaluator.evaluate(c)).collect())
    }

    /// Wraps a precomputed fitness table.
    pub fn from_fitnesses(fitnesses: Vec<Fitness>) -> Self {
        let total = fitnesses.iter().sum();
        Self { fitnesses, total }
    }

    /// Per-slot fitness values.
    pub fn fitnesses(&self) -> &[Fitness] {
        &self.fitnesses
    }

    /// Sum of all fitness values.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of slots on the wheel.
    pub fn len(&self) -> usize {
        self.fitnesses.len()
    }

    /// Returns `true` if the wheel has no slots.
    pub fn is_empty(&self) -> bool {
        self.fitnesses.is_empty()
    }

    /// Draws one slot index.
    ///
    /// # Panics
    /// Panics if the wheel is empty.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        select_parent(&self.fitnesses, self.total, rng)
    }
}

/// Selects an index from `fitness_table` with probability proportional to
/// its share of `total_fitness`.
///
/// When `total_fitness` is zero the index is drawn uniformly instead.
///
/// # Panics
/// Panics if `fitness_table` is empty.
pub fn select_parent<R: Rng + ?Sized>(
    fitness_table: &[Fitness],
    total_fitness: u64,
    rng: &mut R,
) -> usize {
    assert!(
        !fitness_table.is_empty(),
        "cannot select from empty population"
    );

    if total_fitness == 0 {
        debug!(
            "all {} chromosomes have zero fitness, selecting uniformly",
            fitness_table.len()
        );
        return uniform_index(rng, fitness_table.len());
    }

    let ball = uniform_below(rng, total_fitness);
    let mut acc = 0u64;
    for (i, &f) in fitness_table.iter().enumerate() {
        acc += f;
        if acc > ball {
            return i;
        }
    }

    // Only reachable when `total_fitness` overstates the table's sum.
    fitness_table.len() - 1
}

/// Draws a mother and a father from the wheel, resampling both until they
/// differ.
///
/// After `retry_limit` attempts the last pair is accepted even if the two
/// indices coincide; this happens when a single chromosome holds all the
/// fitness.
pub fn select_parents<R: Rng + ?Sized>(
    wheel: &RouletteWheel,
    retry_limit: usize,
    rng: &mut R,
) -> (usize, usize) {
    let mut mother = wheel.spin(rng);
    let mut father = wheel.spin(rng);
    let mut attempts = 1;
    while mother == father && attempts < retry_limit {
        mother = wheel.spin(rng);
        father = wheel.spin(rng);
        attempts += 1;
    }
    if mother == father && wheel.len() > 1 {
        warn!("no distinct parents after {attempts} attempts, mating slot {mother} with itself");
    }
    (mother, father)
}
