//! Genetic Algorithm for the Traveling Salesman Problem.
//!
//! Tours are permutations of city indices; fitness is the closed tour
//! length over a [`DistanceMatrix`](crate::DistanceMatrix), minimized.
//!
//! # Core Traits
//!
//! - [`PopulationInitializer`]: builds generation 0
//! - [`FitnessEvaluator`]: tour cost
//! - [`SelectionOperator`]: mating pool construction
//! - [`CrossoverOperator`]: two parents → two children
//! - [`MutationOperator`]: in-place perturbation
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, rates, generations, seed)
//! - [`EvolutionEngine`]: Executes the generational loop with injected operators
//! - [`EvolutionResult`]: Best tour, its length, and per-generation statistics
//! - [`HallOfFame`]: Best-ever archive
//!
//! # Default Operators
//!
//! - [`RandomPermutation`]: uniform random permutations
//! - [`TourLength`]: closed tour length with bad-cell and overflow detection
//! - [`Tournament`]: tournament selection, first-drawn wins ties
//! - [`PartiallyMatched`]: PMX crossover (see [`operators`])
//! - [`ShuffleIndexes`]: index-shuffle mutation (see [`operators`])
//!
//! # Variation
//!
//! Each generation the mating pool is varied the classic way: consecutive
//! pairs are crossed with probability `crossover_rate`, then each tour is
//! mutated with probability `mutation_rate`. The mutation operator itself
//! swaps each gene with probability `gene_mutation_rate`, so the two rates
//! are independent gates.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod config;
mod fitness;
mod hall_of_fame;
mod init;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::{Edge, TourLength};
pub use hall_of_fame::HallOfFame;
pub use init::RandomPermutation;
pub use operators::{PartiallyMatched, ShuffleIndexes};
pub use runner::{EvolutionEngine, EvolutionResult, GenerationStats};
pub use selection::Tournament;
pub use types::{
    is_permutation, CrossoverOperator, FitnessEvaluator, MutationOperator, PopulationInitializer,
    SelectionOperator, Tour,
};
