//! The 0/1 knapsack problem.
//!
//! - [`Catalog`]: the fixed list of `(weight, value)` items, loaded once
//! - [`Knapsack`]: catalog plus capacity limit; implements
//!   [`Evaluator`](crate::ga::Evaluator) so the GA can score chromosomes

mod catalog;
mod problem;

pub use catalog::{Catalog, CatalogError, Item};
pub use problem::Knapsack;
