//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Every parameter is fixed for the duration of a run.

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// The defaults mirror the classic setup: 50 chromosomes, 100 generations,
/// 1% per-bit mutation, sparse (5%) initial chromosomes.
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_mutation_rate(0.02)
///     .with_crossover_rate(0.3)
///     .with_seed(33);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in the population.
    ///
    /// The offspring pool is always twice this size.
    pub population_size: usize,

    /// Number of generations to run. The only termination condition.
    pub max_generations: usize,

    /// Probability that mating happens in a given generation (0.0–1.0).
    ///
    /// When mating is skipped, every chromosome of the population is copied
    /// twice into the offspring pool instead.
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to every offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability that a gene of an initial chromosome is `1` (0.0–1.0).
    ///
    /// Kept low so that random initial chromosomes tend to fit the
    /// capacity limit.
    pub initial_inclusion_rate: f64,

    /// Attempts at drawing two distinct parents before accepting a
    /// duplicate pair.
    pub parent_retry_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            crossover_rate: 1.0,
            mutation_rate: 0.01,
            initial_inclusion_rate: 0.05,
            parent_retry_limit: 100,
            seed: None,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("parent_retry_limit must be at least 1")]
    ZeroRetryLimit,
    #[error("chromosomes must have at least one gene")]
    EmptyChromosome,
}

impl GaConfig {
    /// The classic parameter set with the fixed seed `33`.
    pub fn classic() -> Self {
        Self::default().with_seed(33)
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mating probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the probability of a `1` gene in initial chromosomes.
    pub fn with_initial_inclusion_rate(mut self, rate: f64) -> Self {
        self.initial_inclusion_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the distinct-parent retry ceiling.
    pub fn with_parent_retry_limit(mut self, limit: usize) -> Self {
        self.parent_retry_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Size of the offspring pool built each generation.
    pub fn offspring_pool_size(&self) -> usize {
        self.population_size * 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("initial_inclusion_rate", self.initial_inclusion_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        if self.parent_retry_limit == 0 {
            return Err(ConfigError::ZeroRetryLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 100);
        assert!((config.crossover_rate - 1.0).abs() < 1e-10);
        assert!((config.mutation_rate - 0.01).abs() < 1e-10);
        assert!((config.initial_inclusion_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.parent_retry_limit, 100);
        assert!(config.seed.is_none());
        assert_eq!(config.offspring_pool_size(), 100);
    }

    #[test]
    fn test_classic_preset() {
        let config = GaConfig::classic();
        assert_eq!(config.seed, Some(33));
        assert_eq!(config.population_size, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(10)
            .with_crossover_rate(0.3)
            .with_mutation_rate(0.05)
            .with_initial_inclusion_rate(0.2)
            .with_parent_retry_limit(8)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, 10);
        assert!((config.crossover_rate - 0.3).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.initial_inclusion_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.parent_retry_limit, 8);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0)
            .with_initial_inclusion_rate(1.5);

        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        assert!((config.initial_inclusion_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_rate_set_directly() {
        let mut config = GaConfig::default();
        config.mutation_rate = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "mutation_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_zero_retry_limit() {
        let config = GaConfig::default().with_parent_retry_limit(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRetryLimit));
    }
}
