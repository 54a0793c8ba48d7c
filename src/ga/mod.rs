//! Generational genetic algorithm over bit-string chromosomes.
//!
//! The loop is problem-agnostic: anything implementing [`Evaluator`] can be
//! optimized. Fitness is maximized and must be non-negative, since parents
//! and survivors are drawn by roulette.
//!
//! # Generation
//!
//! 1. [`mate`]: roulette-select parent pairs, single-point crossover,
//!    fill an offspring pool twice the population size
//! 2. [`mutate_pool`]: independent per-bit flips over the offspring pool
//! 3. [`replace`]: roulette-sample the next population from the offspring
//! 4. [`apply_elitism`]: copy the best chromosome into slot 0 and report
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with fitness history
//! - [`GenerationReport`]: Per-generation population snapshot
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{ConfigError, GaConfig};
pub use runner::{
    apply_elitism, initialize_population, mate, mutate_pool, replace, GaResult, GaRunner,
    GenerationReport, ScoredChromosome,
};
pub use selection::{select_parent, select_parents, RouletteWheel};
pub use types::{
    Chromosome, Evaluator, Fitness, OffspringPool, ParseChromosomeError, Pool, Population,
};
