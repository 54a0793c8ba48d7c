//! Genetic-algorithm heuristic solver for the 0/1 knapsack problem.
//!
//! Given a catalog of `(weight, value)` items and a capacity limit, the
//! solver evolves a population of bit-string chromosomes (bit `i` set means
//! item `i` is packed) towards high total value:
//!
//! - **Fitness**: total value of the packed items, or zero once their total
//!   weight reaches the capacity limit.
//! - **Selection**: fitness-proportionate (roulette wheel), for parents and
//!   for survivors.
//! - **Variation**: single-point crossover and independent bit-flip
//!   mutation.
//! - **Elitism**: the best chromosome seen so far always occupies slot 0.
//!
//! This is a heuristic: it carries no optimality guarantee.
//!
//! # Architecture
//!
//! - [`random`]: the seeded decision source every stochastic step draws from
//! - [`knapsack`]: item catalog, catalog loading, fitness evaluation
//! - [`ga`]: chromosomes, pools, operators, and the generational loop
//! - [`report`]: console rendering of per-generation reports
//!
//! # Example
//!
//! ```
//! use u_knapsack::ga::{GaConfig, GaRunner};
//! use u_knapsack::knapsack::{Catalog, Knapsack};
//!
//! let catalog = Catalog::parse("2 3\n3 4\n4 5\n5 6\n", 4).unwrap();
//! let knapsack = Knapsack::new(catalog, 8);
//! let config = GaConfig::classic().with_population_size(10).with_max_generations(30);
//!
//! let result = GaRunner::run(&knapsack, &config).unwrap();
//! assert!(result.best_fitness <= 9);
//! ```

pub mod ga;
pub mod knapsack;
pub mod random;
pub mod report;
