//! Knapsack fitness evaluation.

use super::catalog::{Catalog, Item};
use crate::ga::{Chromosome, Evaluator, Fitness};

/// A 0/1 knapsack instance: a catalog and a weight capacity limit.
///
/// A chromosome is feasible only while its total weight stays strictly
/// below `capacity_limit`; reaching or exceeding the limit is lethal and
/// scores zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    catalog: Catalog,
    capacity_limit: u64,
}

impl Knapsack {
    pub fn new(catalog: Catalog, capacity_limit: u64) -> Self {
        Self {
            catalog,
            capacity_limit,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn capacity_limit(&self) -> u64 {
        self.capacity_limit
    }

    /// Sum of the weights of the included items.
    pub fn total_weight(&self, chromosome: &Chromosome) -> u64 {
        self.included(chromosome).map(|item| item.weight as u64).sum()
    }

    /// Sum of the values of the included items, ignoring the capacity limit.
    pub fn total_value(&self, chromosome: &Chromosome) -> u64 {
        self.included(chromosome).map(|item| item.value as u64).sum()
    }

    /// Whether the chromosome's weight stays below the capacity limit.
    pub fn is_feasible(&self, chromosome: &Chromosome) -> bool {
        self.total_weight(chromosome) < self.capacity_limit
    }

    fn included<'a>(
        &'a self,
        chromosome: &'a Chromosome,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        debug_assert_eq!(
            chromosome.len(),
            self.catalog.len(),
            "chromosome length must equal catalog size"
        );
        self.catalog
            .items()
            .iter()
            .zip(chromosome.bits())
            .filter_map(|(item, &bit)| if bit { Some(item) } else { None })
    }
}

impl Evaluator for Knapsack {
    fn chromosome_len(&self) -> usize {
        self.catalog.len()
    }

    fn evaluate(&self, chromosome: &Chromosome) -> Fitness {
        let (weight, value) = self
            .included(chromosome)
            .fold((0u64, 0u64), |(w, v), item| {
                (w + item.weight as u64, v + item.value as u64)
            });
        if weight >= self.capacity_limit {
            0
        } else {
            value
        }
    }
}
