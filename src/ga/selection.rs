//! Tournament selection.
//!
//! Selection determines which tours enter the mating pool. All comparisons
//! assume **minimization** (lower tour length = better).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use crate::error::{GaError, GaResult};

use super::types::{SelectionOperator, Tour};

/// Tournament selection: draw `size` aspirants uniformly with replacement,
/// keep the one with the lowest fitness.
///
/// Ties go to the aspirant drawn first. Every output slot runs its own
/// tournament.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_tourga::ga::{SelectionOperator, Tour, Tournament};
///
/// let mut pop = vec![Tour::new(vec![0, 1]), Tour::new(vec![1, 0])];
/// pop[0].set_fitness(3.0);
/// pop[1].set_fitness(5.0);
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let pool = Tournament::new(3).select(&pop, 4, &mut rng).unwrap();
/// assert_eq!(pool.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    size: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Self { size: 3 }
    }
}

impl Tournament {
    /// Creates a tournament with `size` aspirants.
    ///
    /// Higher `size` = stronger selection pressure.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of aspirants per tournament.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Runs one tournament and returns the winner's index.
    ///
    /// # Errors
    /// - [`GaError::Configuration`] if the tournament size is zero or the
    ///   population is empty.
    /// - [`GaError::InvariantViolation`] if a drawn aspirant is unevaluated.
    pub fn run_once<R: Rng>(&self, population: &[Tour], rng: &mut R) -> GaResult<usize> {
        if self.size < 1 {
            return Err(GaError::config("tournament_size", "must be at least 1"));
        }
        if population.is_empty() {
            return Err(GaError::config("population_size", "cannot select from empty population"));
        }
        let n = population.len();

        let mut best_idx = rng.random_range(0..n);
        let mut best_fit = population[best_idx].evaluated_fitness("selection")?;
        for _ in 1..self.size {
            let idx = rng.random_range(0..n);
            let fit = population[idx].evaluated_fitness("selection")?;
            if fit < best_fit {
                best_idx = idx;
                best_fit = fit;
            }
        }
        Ok(best_idx)
    }
}

impl SelectionOperator for Tournament {
    fn select<R: Rng>(
        &self,
        population: &[Tour],
        count: usize,
        rng: &mut R,
    ) -> GaResult<Vec<Tour>> {
        (0..count)
            .map(|_| self.run_once(population, rng).map(|i| population[i].clone()))
            .collect()
    }
}
