//! Random permutation population initializer.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GaError, GaResult};

use super::types::{PopulationInitializer, Tour};

/// Fills the population with independent, uniformly random permutations
/// of `0..n` (Fisher-Yates shuffle of the identity).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPermutation;

impl PopulationInitializer for RandomPermutation {
    fn initialize<R: Rng>(
        &self,
        chromosome_len: usize,
        population_size: usize,
        rng: &mut R,
    ) -> GaResult<Vec<Tour>> {
        if chromosome_len < 2 {
            return Err(GaError::config(
                "chromosome_len",
                format!("must be at least 2, got {chromosome_len}"),
            ));
        }
        if population_size < 1 {
            return Err(GaError::config("population_size", "must be at least 1"));
        }

        let population = (0..population_size)
            .map(|_| {
                let mut genes: Vec<usize> = (0..chromosome_len).collect();
                genes.shuffle(rng);
                Tour::new(genes)
            })
            .collect();
        Ok(population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::is_permutation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_population_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = RandomPermutation.initialize(8, 30, &mut rng).expect("valid");
        assert_eq!(pop.len(), 30);
        for tour in &pop {
            assert!(is_permutation(tour.genes(), 8), "{:?}", tour.genes());
            assert!(!tour.is_evaluated());
        }
    }

    #[test]
    fn test_tours_differ() {
        let mut rng = StdRng::seed_from_u64(7);
        let pop = RandomPermutation.initialize(10, 20, &mut rng).expect("valid");
        let distinct: std::collections::HashSet<Vec<usize>> =
            pop.iter().map(|t| t.genes().to_vec()).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_rejects_short_chromosome() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = RandomPermutation.initialize(1, 10, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GaError::Configuration {
                parameter: "chromosome_len",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_population() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(RandomPermutation.initialize(5, 0, &mut rng).is_err());
    }

    #[test]
    fn test_first_position_is_spread() {
        let mut rng = StdRng::seed_from_u64(3);
        let pop = RandomPermutation.initialize(4, 4000, &mut rng).expect("valid");
        let mut counts = [0u32; 4];
        for tour in &pop {
            counts[tour.genes()[0]] += 1;
        }
        for &c in &counts {
            assert!(c > 800, "expected roughly uniform first city, got {counts:?}");
        }
    }
}
