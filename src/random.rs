//! Seeded random decision source.
//!
//! Every stochastic decision in the solver (initial bits, roulette draws,
//! crossover points, mutation flips, the mating gate) goes through the
//! helpers in this module so that a run is fully determined by its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates the deterministic generator used for a whole run.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws an integer uniformly from `[0, limit)`.
///
/// The draw scales a unit float by `limit`; when rounding lands exactly on
/// `limit` the draw is rejected and repeated, so `limit` itself is never
/// returned.
///
/// A zero-length range has no valid value; it collapses to `0` rather than
/// looping. Callers that index with the result must handle `limit == 0`
/// themselves (see [`uniform_index`]).
pub fn uniform_below<R: Rng + ?Sized>(rng: &mut R, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    let scale = limit as f64;
    loop {
        let draw = (rng.random::<f64>() * scale) as u64;
        if draw < limit {
            return draw;
        }
    }
}

/// Draws an index uniformly from `0..len`.
///
/// # Panics
/// Panics if `len == 0`.
pub fn uniform_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    assert!(len > 0, "cannot draw an index from an empty range");
    uniform_below(rng, len as u64) as usize
}

/// Returns `true` with the given probability.
///
/// Probabilities outside `[0, 1]` saturate: `<= 0` never fires, `>= 1`
/// always fires.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    if probability <= 0.0 {
        return false;
    }
    if probability >= 1.0 {
        return true;
    }
    rng.random::<f64>() < probability
}

/// Draws a single bit that is `1` with probability `probability_of_one`.
///
/// Used to seed the initial population with sparse chromosomes.
pub fn biased_bit<R: Rng + ?Sized>(rng: &mut R, probability_of_one: f64) -> bool {
    chance(rng, probability_of_one)
}
