//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational process:
//! initialization → (mating → mutation → replacement → elitism) × generations.
//!
//! Each phase is also exposed as a free function working on explicitly
//! owned pools, so phases can be driven and tested one at a time.

use super::config::{ConfigError, GaConfig};
use super::operators::{bit_flip_mutation, single_point_crossover};
use super::selection::{select_parents, RouletteWheel};
use super::types::{Chromosome, Evaluator, Fitness, OffspringPool, Population};
use crate::random::{biased_bit, chance, create_rng};
use log::{debug, info};
use rand::Rng;

/// One chromosome of a reported population together with its fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredChromosome {
    pub chromosome: Chromosome,
    pub fitness: Fitness,
}

/// Snapshot of a population after elitism has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Generation number; `0` is the first evolved generation.
    pub generation: usize,

    /// Every slot of the population, in order, with its fitness.
    pub members: Vec<ScoredChromosome>,

    /// Slot the elite was copied from, or `0` when the previous
    /// generation's elite was carried over.
    pub elite_index: usize,

    /// Fitness of the elite.
    pub best_fitness: Fitness,

    /// Mean fitness over the whole population.
    pub mean_fitness: f64,
}

impl GenerationReport {
    /// The elite chromosome (always stored in slot 0).
    pub fn elite(&self) -> &Chromosome {
        &self.members[0].chromosome
    }
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best chromosome found during the entire run.
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of the initial population, then of each generation.
    pub fitness_history: Vec<Fitness>,

    /// Mean fitness of the initial population, then of each generation.
    pub mean_history: Vec<f64>,
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use u_knapsack::ga::{GaConfig, GaRunner};
/// use u_knapsack::knapsack::{Catalog, Item, Knapsack};
///
/// let catalog = Catalog::new(vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)]);
/// let knapsack = Knapsack::new(catalog, 6);
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_max_generations(20)
///     .with_seed(33);
///
/// let result = GaRunner::run(&knapsack, &config).unwrap();
/// assert!(result.best_fitness <= 8);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA for `config.max_generations` generations.
    pub fn run<E: Evaluator>(evaluator: &E, config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::run_with_observer(evaluator, config, |_| {})
    }

    /// Runs the GA, handing every generation's report to `observer`.
    pub fn run_with_observer<E, F>(
        evaluator: &E,
        config: &GaConfig,
        mut observer: F,
    ) -> Result<GaResult, ConfigError>
    where
        E: Evaluator,
        F: FnMut(&GenerationReport),
    {
        config.validate()?;
        let chromosome_len = evaluator.chromosome_len();
        if chromosome_len == 0 {
            return Err(ConfigError::EmptyChromosome);
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        info!(
            "starting GA: {} genes, population {}, {} generations, seed {}",
            chromosome_len, config.population_size, config.max_generations, seed
        );

        // 1. Initialize population
        let mut population = initialize_population(
            chromosome_len,
            config.population_size,
            config.initial_inclusion_rate,
            &mut rng,
        );

        // 2. Score the initial population; its best seeds the elite
        let initial = RouletteWheel::build(evaluator, population.chromosomes());
        let (initial_best, &initial_best_fitness) = initial
            .fitnesses()
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
            .unwrap_or((0, &0));
        let mut elite = population.get(initial_best).clone();
        let mut elite_fitness = initial_best_fitness;

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        let mut mean_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(initial_best_fitness);
        mean_history.push(initial.total() as f64 / population.len() as f64);

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            let mut offspring = mate(evaluator, &population, config, &mut rng);
            let flips = mutate_pool(&mut offspring, config.mutation_rate, &mut rng);
            population = replace(evaluator, &offspring, config.population_size, &mut rng);

            let report = apply_elitism(evaluator, &mut population, Some(&elite), gen);
            debug!(
                "generation {}: best {}, mean {:.3}, {} bits flipped",
                gen, report.best_fitness, report.mean_fitness, flips
            );

            elite.clone_from(report.elite());
            elite_fitness = report.best_fitness;
            fitness_history.push(report.best_fitness);
            mean_history.push(report.mean_fitness);

            observer(&report);
        }

        info!("GA finished: best fitness {elite_fitness}");

        Ok(GaResult {
            best: elite,
            best_fitness: elite_fitness,
            generations: config.max_generations,
            fitness_history,
            mean_history,
        })
    }
}

/// Creates `population_size` random chromosomes of `chromosome_len` genes.
///
/// Each gene is `1` with probability `inclusion_rate`. No capacity check is
/// made; infeasible chromosomes simply score zero.
pub fn initialize_population<R: Rng + ?Sized>(
    chromosome_len: usize,
    population_size: usize,
    inclusion_rate: f64,
    rng: &mut R,
) -> Population {
    let chromosomes = (0..population_size)
        .map(|_| {
            Chromosome::from_bits(
                (0..chromosome_len)
                    .map(|_| biased_bit(rng, inclusion_rate))
                    .collect(),
            )
        })
        .collect();
    Population::new(chromosomes)
}

/// Builds the offspring pool (`2 × population.len()` chromosomes).
///
/// With probability `config.crossover_rate` the generation mates: parents
/// are drawn by roulette from one fitness table, crossed at a single point,
/// and their two children written to consecutive slots. Otherwise each
/// chromosome of the population is copied into two consecutive slots.
pub fn mate<E, R>(
    evaluator: &E,
    population: &Population,
    config: &GaConfig,
    rng: &mut R,
) -> OffspringPool
where
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    let mut offspring = Vec::with_capacity(population.len() * 2);

    if !chance(rng, config.crossover_rate) {
        debug!("mating skipped this generation");
        for chromosome in population {
            offspring.push(chromosome.clone());
            offspring.push(chromosome.clone());
        }
        return OffspringPool::new(offspring);
    }

    let wheel = RouletteWheel::build(evaluator, population.chromosomes());
    for _ in 0..population.len() {
        let (mother, father) = select_parents(&wheel, config.parent_retry_limit, rng);
        let (c1, c2) = single_point_crossover(population.get(mother), population.get(father), rng);
        offspring.push(c1);
        offspring.push(c2);
    }
    OffspringPool::new(offspring)
}

/// Applies bit-flip mutation to every chromosome of the pool in place.
///
/// Returns the total number of flipped bits.
pub fn mutate_pool<R: Rng + ?Sized>(pool: &mut OffspringPool, rate: f64, rng: &mut R) -> usize {
    pool.chromosomes_mut()
        .iter_mut()
        .map(|c| bit_flip_mutation(c, rate, rng))
        .sum()
}

/// Samples a new population of `population_size` chromosomes, with
/// replacement, from the offspring pool by roulette.
///
/// The fitness table is rebuilt from the offspring's current bits for every
/// output slot.
///
/// # Panics
/// Panics if `offspring` is empty.
pub fn replace<E, R>(
    evaluator: &E,
    offspring: &OffspringPool,
    population_size: usize,
    rng: &mut R,
) -> Population
where
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    let chromosomes = (0..population_size)
        .map(|_| {
            let wheel = RouletteWheel::build(evaluator, offspring.chromosomes());
            offspring.get(wheel.spin(rng)).clone()
        })
        .collect();
    Population::new(chromosomes)
}

/// Copies the best chromosome into slot 0 and reports the population.
///
/// The best is taken over the population and `prior_elite` (the previous
/// generation's best), so the best fitness never decreases from one
/// generation to the next. Ties go to the lowest slot; a prior elite only
/// wins when strictly better.
///
/// # Panics
/// Panics if `population` is empty.
pub fn apply_elitism<E: Evaluator + ?Sized>(
    evaluator: &E,
    population: &mut Population,
    prior_elite: Option<&Chromosome>,
    generation: usize,
) -> GenerationReport {
    assert!(!population.is_empty(), "population must not be empty");

    let mut elite_index = 0;
    let mut best_fitness = 0;
    for (i, chromosome) in population.iter().enumerate() {
        let fitness = evaluator.evaluate(chromosome);
        if fitness > best_fitness {
            best_fitness = fitness;
            elite_index = i;
        }
    }

    let carried = prior_elite
        .map(|c| (c, evaluator.evaluate(c)))
        .filter(|&(_, f)| f > best_fitness);
    match carried {
        Some((chromosome, fitness)) => {
            population.overwrite(0, chromosome);
            best_fitness = fitness;
            elite_index = 0;
        }
        None => {
            let best = population.get(elite_index).clone();
            population.overwrite(0, &best);
        }
    }

    let members: Vec<ScoredChromosome> = population
        .iter()
        .map(|c| ScoredChromosome {
            chromosome: c.clone(),
            fitness: evaluator.evaluate(c),
        })
        .collect();
    let total: u64 = members.iter().map(|m| m.fitness).sum();

    GenerationReport {
        generation,
        elite_index,
        best_fitness,
        mean_fitness: total as f64 / members.len() as f64,
        members,
    }
}

// ============================================================================
// Tests
// ============================================================================
