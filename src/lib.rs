//! Genetic algorithm for the Traveling Salesman Problem.
//!
//! Evolves a population of candidate tours over a precomputed distance
//! matrix and returns the shortest closed tour it finds:
//!
//! - **Initialization**: uniformly random permutations of the cities
//! - **Evaluation**: closed tour length, aborting on negative or non-finite distances
//! - **Selection**: tournament selection
//! - **Crossover**: Partially Matched Crossover (PMX)
//! - **Mutation**: index-shuffle swaps
//! - **Elitism**: a single-slot hall of fame tracking the best tour ever seen
//!
//! # Architecture
//!
//! The crate consumes a [`DistanceMatrix`] and a [`ga::GaConfig`] and
//! produces a [`ga::EvolutionResult`]. Loading city data, computing the
//! matrix from coordinates, and presenting the winning tour belong to the
//! caller.
//!
//! ```
//! use u_tourga::DistanceMatrix;
//! use u_tourga::ga::{EvolutionEngine, GaConfig, TourLength};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! let dm = DistanceMatrix::symmetric_from_fn(5, |i, j| (xs[i] - xs[j]).abs()).unwrap();
//! let evaluator = TourLength::new(dm);
//!
//! let config = GaConfig::default().with_population_size(30).with_seed(1);
//! let result = EvolutionEngine::new(evaluator.clone(), config).run().unwrap();
//!
//! let legs = evaluator.edges(result.best.genes()).unwrap();
//! assert_eq!(legs.len(), 5);
//! assert!(result.best_fitness >= 8.0);
//! ```

pub mod distance;
pub mod error;
pub mod ga;

pub use distance::DistanceMatrix;
pub use error::{GaError, GaResult};
