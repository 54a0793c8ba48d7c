//! Core types for the knapsack GA.
//!
//! A [`Chromosome`] is an owned bit vector, one bit per catalog item. A
//! [`Pool`] is a fixed-size ordered collection of chromosomes; it plays two
//! roles in each generation, the [`Population`] and the doubled-size
//! [`OffspringPool`]. The [`Evaluator`] trait is the contract between the
//! generic evolutionary loop and the fitness function.

use std::fmt;
use std::str::FromStr;

/// Fitness score. Higher is better; `0` marks an infeasible chromosome.
pub type Fitness = u64;

/// A candidate solution: bit `i` set means item `i` is included.
///
/// Chromosomes are always copied between pools, never shared, since each
/// pool is mutated independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Creates an all-zero chromosome of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Wraps an existing bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of genes (equals the catalog size).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The genes as a slice.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Returns the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Sets the gene at `index`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits[index] = value;
    }

    /// Flips the gene at `index`.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Number of included items.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Indices of the included items, in catalog order.
    pub fn included(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| if b { Some(i) } else { None })
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Error returned when parsing a chromosome from a `0`/`1` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid gene {found:?} at position {position}, expected '0' or '1'")]
pub struct ParseChromosomeError {
    /// Zero-based character position.
    pub position: usize,
    /// The offending character.
    pub found: char,
}

impl FromStr for Chromosome {
    type Err = ParseChromosomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(ParseChromosomeError { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_bits)
    }
}

/// Fixed-size ordered collection of chromosomes.
///
/// The size is chosen at construction and never changes; chromosomes are
/// only ever replaced in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    chromosomes: Vec<Chromosome>,
}

/// The current generation, `population_size` chromosomes.
pub type Population = Pool;

/// The offspring of one generation, `2 × population_size` chromosomes.
pub type OffspringPool = Pool;

impl Pool {
    /// Takes ownership of a set of chromosomes, fixing the pool size.
    pub fn new(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Returns `true` if the pool has no slots.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// All chromosomes, in slot order.
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Mutable access to the slots. The slice cannot be resized.
    pub fn chromosomes_mut(&mut self) -> &mut [Chromosome] {
        &mut self.chromosomes
    }

    /// Returns the chromosome in `slot`.
    pub fn get(&self, slot: usize) -> &Chromosome {
        &self.chromosomes[slot]
    }

    /// Overwrites `slot` with a copy of `chromosome`.
    pub fn overwrite(&mut self, slot: usize, chromosome: &Chromosome) {
        self.chromosomes[slot].clone_from(chromosome);
    }

    /// Iterates over the chromosomes in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.chromosomes.iter()
    }

    /// Consumes the pool, returning its chromosomes.
    pub fn into_inner(self) -> Vec<Chromosome> {
        self.chromosomes
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}

/// Maps a chromosome to its fitness.
///
/// Implementations must be pure: the loop re-evaluates chromosomes freely
/// (for roulette tables, replacement, reporting) and never caches scores.
///
/// # Implementing
///
/// ```
/// use u_knapsack::ga::{Chromosome, Evaluator, Fitness};
///
/// struct OneMax(usize);
///
/// impl Evaluator for OneMax {
///     fn chromosome_len(&self) -> usize { self.0 }
///     fn evaluate(&self, c: &Chromosome) -> Fitness { c.count_ones() as Fitness }
/// }
/// ```
pub trait Evaluator {
    /// Length every chromosome must have.
    fn chromosome_len(&self) -> usize;

    /// Scores a chromosome. Higher is better.
    fn evaluate(&self, chromosome: &Chromosome) -> Fitness;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn chromosome_len(&self) -> usize {
        (**self).chromosome_len()
    }

    fn evaluate(&self, chromosome: &Chromosome) -> Fitness {
        (**self).evaluate(chromosome)
    }
}
