//! Bit-string genetic operators.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: one random cut point, tails exchanged
//! - [`crossover_at`]: the same with an explicit cut point
//!
//! # Mutation
//!
//! - [`bit_flip_mutation`]: independent per-bit flips with a fixed rate
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::types::Chromosome;
use crate::random::{chance, uniform_index};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at a random cut point `cp ∈ [0, n)`.
///
/// See [`crossover_at`] for the child layout.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn single_point_crossover<R: Rng + ?Sized>(
    mother: &Chromosome,
    father: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    assert_eq!(mother.len(), father.len(), "parents must have equal length");
    assert!(!mother.is_empty(), "parents must not be empty");

    let cp = uniform_index(rng, mother.len());
    crossover_at(mother, father, cp)
}

/// Exchanges the tails of two parents at `cp`.
///
/// - `child1 = mother[..cp] ++ father[cp..]`
/// - `child2 = father[..cp] ++ mother[cp..]`
///
/// # Panics
/// Panics if parents have different lengths or `cp > len`.
pub fn crossover_at(
    mother: &Chromosome,
    father: &Chromosome,
    cp: usize,
) -> (Chromosome, Chromosome) {
    let n = mother.len();
    assert_eq!(n, father.len(), "parents must have equal length");
    assert!(cp <= n, "crossover point {cp} beyond chromosome length {n}");

    let (m, p) = (mother.bits(), father.bits());

    let mut c1 = Vec::with_capacity(n);
    c1.extend_from_slice(&m[..cp]);
    c1.extend_from_slice(&p[cp..]);

    let mut c2 = Vec::with_capacity(n);
    c2.extend_from_slice(&p[..cp]);
    c2.extend_from_slice(&m[cp..]);

    (Chromosome::from_bits(c1), Chromosome::from_bits(c2))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips each bit independently with probability `rate`.
///
/// Returns the number of flipped bits.
pub fn bit_flip_mutation<R: Rng + ?Sized>(
    chromosome: &mut Chromosome,
    rate: f64,
    rng: &mut R,
) -> usize {
    let mut flips = 0;
    for i in 0..chromosome.len() {
        if chance(rng, rate) {
            chromosome.flip(i);
            flips += 1;
        }
    }
    flips
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn chromosome(s: &str) -> Chromosome {
        s.parse().unwrap()
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_at_layout() {
        let m = chromosome("111111");
        let p = chromosome("000000");
        let (c1, c2) = crossover_at(&m, &p, 2);
        assert_eq!(c1.to_string(), "110000");
        assert_eq!(c2.to_string(), "001111");
    }

    #[test]
    fn test_crossover_at_zero_swaps_parents() {
        let m = chromosome("1010");
        let p = chromosome("0110");
        let (c1, c2) = crossover_at(&m, &p, 0);
        assert_eq!(c1, p);
        assert_eq!(c2, m);
    }

    #[test]
    fn test_crossover_at_end_copies_parents() {
        let m = chromosome("1010");
        let p = chromosome("0110");
        let (c1, c2) = crossover_at(&m, &p, 4);
        assert_eq!(c1, m);
        assert_eq!(c2, p);
    }

    #[test]
    fn test_single_point_crossover_single_gene() {
        let mut rng = create_rng(42);
        let m = chromosome("1");
        let p = chromosome("0");
        // cp is always 0, so the children are the swapped parents.
        let (c1, c2) = single_point_crossover(&m, &p, &mut rng);
        assert_eq!(c1, p);
        assert_eq!(c2, m);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = create_rng(42);
        single_point_crossover(&chromosome("10"), &chromosome("101"), &mut rng);
    }

    proptest! {
        #[test]
        fn prop_crossover_conserves_genes(
            (m, p, cp) in (1usize..64).prop_flat_map(|n| (
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(any::<bool>(), n),
                0..n,
            ))
        ) {
            let n = m.len();
            let mother = Chromosome::from_bits(m.clone());
            let father = Chromosome::from_bits(p.clone());
            let (c1, c2) = crossover_at(&mother, &father, cp);

            prop_assert_eq!(c1.len(), n);
            prop_assert_eq!(c2.len(), n);
            prop_assert_eq!(&c1.bits()[..cp], &m[..cp]);
            prop_assert_eq!(&c1.bits()[cp..], &p[cp..]);
            prop_assert_eq!(&c2.bits()[..cp], &p[..cp]);
            prop_assert_eq!(&c2.bits()[cp..], &m[cp..]);
        }

        #[test]
        fn prop_random_crossover_children_are_complementary(
            seed in any::<u64>(),
            (m, p) in (1usize..64).prop_flat_map(|n| (
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(any::<bool>(), n),
            ))
        ) {
            let mut rng = create_rng(seed);
            let mother = Chromosome::from_bits(m);
            let father = Chromosome::from_bits(p);
            let (c1, c2) = single_point_crossover(&mother, &father, &mut rng);

            // Every locus keeps one copy of each parent's gene.
            for i in 0..mother.len() {
                let mut got = [c1.get(i), c2.get(i)];
                let mut want = [mother.get(i), father.get(i)];
                got.sort();
                want.sort();
                prop_assert_eq!(got, want);
            }
        }
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_zero_rate_is_identity() {
        let mut rng = create_rng(42);
        let mut c = chromosome("1010110");
        let before = c.clone();
        assert_eq!(bit_flip_mutation(&mut c, 0.0, &mut rng), 0);
        assert_eq!(c, before);
    }

    #[test]
    fn test_mutation_full_rate_inverts() {
        let mut rng = create_rng(42);
        let mut c = chromosome("1010110");
        assert_eq!(bit_flip_mutation(&mut c, 1.0, &mut rng), 7);
        assert_eq!(c.to_string(), "0101001");
    }

    #[test]
    fn test_mutation_rate_converges_per_position() {
        let mut rng = create_rng(33);
        let n = 16;
        let trials = 20_000;
        let rate = 0.01;
        let mut flips = vec![0u32; n];

        for _ in 0..trials {
            let mut c = Chromosome::zeros(n);
            bit_flip_mutation(&mut c, rate, &mut rng);
            for i in c.included() {
                flips[i] += 1;
            }
        }

        for (pos, &f) in flips.iter().enumerate() {
            let observed = f as f64 / trials as f64;
            assert!(
                (observed - rate).abs() < 0.005,
                "position {pos}: flip rate {observed:.4}, expected ~{rate}"
            );
        }
    }
}
