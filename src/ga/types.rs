//! Core types for the TSP genetic algorithm.
//!
//! [`Tour`] is the individual: a permutation of city indices plus a cached
//! fitness that is invalidated whenever the genes change. The five
//! capability traits are the seams at which [`EvolutionEngine`] accepts
//! alternative operator implementations.
//!
//! [`EvolutionEngine`]: super::EvolutionEngine

use rand::Rng;

use crate::error::{GaError, GaResult};

/// A candidate tour: an ordered visiting sequence of cities `0..n`.
///
/// The fitness (total tour length, lower is better) is cached alongside the
/// genes. Any mutable access to the genes through [`genes_mut`](Tour::genes_mut)
/// drops the cached value, so a stale fitness can never be read back.
///
/// # Examples
///
/// ```
/// use u_tourga::ga::Tour;
///
/// let mut tour = Tour::new(vec![2, 0, 1]);
/// assert_eq!(tour.fitness(), None);
///
/// tour.set_fitness(12.5);
/// assert_eq!(tour.fitness(), Some(12.5));
///
/// tour.genes_mut().swap(0, 1);
/// assert_eq!(tour.fitness(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    genes: Vec<usize>,
    fitness: Option<f64>,
}

impl Tour {
    /// Creates an unevaluated tour from a city sequence.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Returns the city sequence.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Returns the city sequence for in-place modification.
    ///
    /// Invalidates the cached fitness.
    pub fn genes_mut(&mut self) -> &mut [usize] {
        self.fitness = None;
        &mut self.genes
    }

    /// Consumes the tour and returns its city sequence.
    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }

    /// Returns the cached fitness, or `None` if the tour is unevaluated.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Stores a freshly computed fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Drops the cached fitness.
    pub fn invalidate(&mut self) {
        self.fitness = None;
    }

    /// Returns `true` if the tour carries a valid fitness.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns the fitness, or an invariant violation naming `reader` if
    /// the tour was never evaluated.
    pub(crate) fn evaluated_fitness(&self, reader: &'static str) -> GaResult<f64> {
        self.fitness.ok_or_else(|| {
            GaError::invariant(reader, format!("read stale fitness of {:?}", self.genes))
        })
    }

    /// Checks that the tour is a permutation of `0..n`.
    ///
    /// # Errors
    /// Returns [`GaError::InvariantViolation`] attributed to `operator`
    /// on any duplicate, omission, or length mismatch.
    pub fn check_permutation(&self, n: usize, operator: &'static str) -> GaResult<()> {
        if is_permutation(&self.genes, n) {
            Ok(())
        } else {
            Err(GaError::invariant(
                operator,
                format!("{:?} is not a permutation of 0..{n}", self.genes),
            ))
        }
    }
}

/// Returns `true` if `genes` contains each of `0..n` exactly once.
pub fn is_permutation(genes: &[usize], n: usize) -> bool {
    if genes.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &g in genes {
        if g >= n || seen[g] {
            return false;
        }
        seen[g] = true;
    }
    true
}

/// Builds the generation-0 population.
pub trait PopulationInitializer {
    /// Produces `population_size` tours over `chromosome_len` cities.
    ///
    /// Each tour owns its own gene sequence.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] if `chromosome_len < 2` or
    /// `population_size < 1`.
    fn initialize<R: Rng>(
        &self,
        chromosome_len: usize,
        population_size: usize,
        rng: &mut R,
    ) -> GaResult<Vec<Tour>>;
}

/// Computes the cost of a tour.
///
/// Must be a pure function of its input. `Send + Sync` because stale
/// individuals may be evaluated from several rayon workers at once.
pub trait FitnessEvaluator: Send + Sync {
    /// Number of cities the evaluator expects per tour.
    fn chromosome_len(&self) -> usize;

    /// Returns the cost of visiting `genes` in order and returning to the start.
    fn evaluate(&self, genes: &[usize]) -> GaResult<f64>;
}

/// Builds a mating pool from an evaluated population.
pub trait SelectionOperator {
    /// Returns `count` copies drawn from `population`.
    ///
    /// Copies keep their cached fitness.
    fn select<R: Rng>(
        &self,
        population: &[Tour],
        count: usize,
        rng: &mut R,
    ) -> GaResult<Vec<Tour>>;
}

/// Recombines two parent permutations into two child permutations.
pub trait CrossoverOperator {
    /// Produces two children from two equal-length parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> (Vec<usize>, Vec<usize>);
}

/// Perturbs a permutation in place, keeping it a permutation.
pub trait MutationOperator {
    /// Mutates `genes` in place.
    fn mutate<R: Rng>(&self, genes: &mut [usize], rng: &mut R);
}
