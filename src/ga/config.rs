//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! The chromosome length is not part of it: it is taken from the
//! evaluator's distance matrix.

use crate::error::{GaError, GaResult};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tourga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 40);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tourga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(100)
///     .with_crossover_rate(0.8)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in the population. Constant across generations.
    pub population_size: usize,

    /// Number of generations to run after generation 0.
    ///
    /// The loop has no early stopping; exactly this many generations run.
    pub generations: usize,

    /// Probability of applying crossover to a consecutive pair (cxpb).
    pub crossover_rate: f64,

    /// Probability that the mutation operator runs on an offspring (mutpb).
    pub mutation_rate: f64,

    /// Per-gene swap probability inside the mutation operator (indpb).
    ///
    /// Only consumed by the default [`ShuffleIndexes`](super::ShuffleIndexes)
    /// operator. Independent of [`mutation_rate`](Self::mutation_rate): the
    /// latter gates whether the per-gene pass runs at all.
    pub gene_mutation_rate: f64,

    /// Number of aspirants drawn per tournament.
    pub tournament_size: usize,

    /// Whether to evaluate stale tours in parallel.
    ///
    /// Has an effect only when the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 40,
            crossover_rate: 0.7,
            mutation_rate: 0.2,
            gene_mutation_rate: 0.05,
            tournament_size: 3,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-individual mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the per-gene swap probability.
    pub fn with_gene_mutation_rate(mut self, rate: f64) -> Self {
        self.gene_mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] naming the first invalid parameter.
    pub fn validate(&self) -> GaResult<()> {
        if self.population_size < 1 {
            return Err(GaError::config("population_size", "must be at least 1"));
        }
        if self.tournament_size < 1 {
            return Err(GaError::config("tournament_size", "must be at least 1"));
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability("gene_mutation_rate", self.gene_mutation_rate)?;
        Ok(())
    }
}

fn check_probability(parameter: &'static str, p: f64) -> GaResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GaError::config(parameter, format!("must be within [0, 1], got {p}")))
    }
}
