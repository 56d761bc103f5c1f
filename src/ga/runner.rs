//! GA evolutionary loop execution.
//!
//! [`EvolutionEngine`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! evaluation → hall of fame, repeated for a fixed number of generations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::error::{GaError, GaResult};

use super::config::GaConfig;
use super::hall_of_fame::HallOfFame;
use super::init::RandomPermutation;
use super::operators::{PartiallyMatched, ShuffleIndexes};
use super::selection::Tournament;
use super::types::{
    CrossoverOperator, FitnessEvaluator, MutationOperator, PopulationInitializer,
    SelectionOperator, Tour,
};

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,
    /// Number of fitness evaluations performed in this generation.
    pub evaluations: usize,
    /// Lowest tour length.
    pub min: f64,
    /// Highest tour length.
    pub max: f64,
    /// Mean tour length.
    pub mean: f64,
    /// Population standard deviation of tour length.
    pub std: f64,
}

impl GenerationStats {
    /// Summarizes an evaluated population.
    ///
    /// # Errors
    /// Returns [`GaError::InvariantViolation`] if any tour is unevaluated.
    pub fn from_population(
        generation: usize,
        evaluations: usize,
        population: &[Tour],
    ) -> GaResult<Self> {
        let fits = population
            .iter()
            .map(|t| t.evaluated_fitness("statistics"))
            .collect::<GaResult<Vec<f64>>>()?;
        if fits.is_empty() {
            return Err(GaError::invariant("statistics", "empty population"));
        }

        let n = fits.len() as f64;
        let mean = fits.iter().sum::<f64>() / n;
        let var = fits.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / n;
        Ok(Self {
            generation,
            evaluations,
            min: fits.iter().copied().fold(f64::INFINITY, f64::min),
            max: fits.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean,
            std: var.sqrt(),
        })
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The best tour found during the entire run.
    pub best: Tour,

    /// Best tour length (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Total number of generations executed after generation 0.
    pub generations: usize,

    /// Hall-of-fame fitness after generation 0 and after each generation.
    pub fitness_history: Vec<f64>,

    /// Population statistics for generation 0 and each generation.
    pub stats: Vec<GenerationStats>,
}

/// Executes the GA evolutionary loop.
///
/// Operators are injected through the type parameters; [`new`](Self::new)
/// wires the defaults (random permutations, tournament selection, PMX,
/// index shuffle) from the config.
///
/// # Usage
///
/// ```
/// use u_tourga::DistanceMatrix;
/// use u_tourga::ga::{EvolutionEngine, GaConfig, TourLength};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 1.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![1.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(30)
///     .with_seed(42);
///
/// let result = EvolutionEngine::new(TourLength::new(dm), config).run().unwrap();
/// assert_eq!(result.best_fitness, 4.0);
/// ```
pub struct EvolutionEngine<
    E,
    I = RandomPermutation,
    S = Tournament,
    C = PartiallyMatched,
    M = ShuffleIndexes,
> {
    evaluator: E,
    initializer: I,
    selection: S,
    crossover: C,
    mutation: M,
    config: GaConfig,
}

impl<E: FitnessEvaluator> EvolutionEngine<E> {
    /// Creates an engine with the default operators.
    ///
    /// Tournament size and per-gene mutation rate come from `config`.
    pub fn new(evaluator: E, config: GaConfig) -> Self {
        Self {
            evaluator,
            initializer: RandomPermutation,
            selection: Tournament::new(config.tournament_size),
            crossover: PartiallyMatched,
            mutation: ShuffleIndexes::new(config.gene_mutation_rate),
            config,
        }
    }
}

impl<E, I, S, C, M> EvolutionEngine<E, I, S, C, M>
where
    E: FitnessEvaluator,
    I: PopulationInitializer,
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// Replaces the population initializer.
    pub fn with_initializer<I2: PopulationInitializer>(
        self,
        initializer: I2,
    ) -> EvolutionEngine<E, I2, S, C, M> {
        EvolutionEngine {
            evaluator: self.evaluator,
            initializer,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            config: self.config,
        }
    }

    /// Replaces the selection operator.
    pub fn with_selection<S2: SelectionOperator>(
        self,
        selection: S2,
    ) -> EvolutionEngine<E, I, S2, C, M> {
        EvolutionEngine {
            evaluator: self.evaluator,
            initializer: self.initializer,
            selection,
            crossover: self.crossover,
            mutation: self.mutation,
            config: self.config,
        }
    }

    /// Replaces the crossover operator.
    pub fn with_crossover<C2: CrossoverOperator>(
        self,
        crossover: C2,
    ) -> EvolutionEngine<E, I, S, C2, M> {
        EvolutionEngine {
            evaluator: self.evaluator,
            initializer: self.initializer,
            selection: self.selection,
            crossover,
            mutation: self.mutation,
            config: self.config,
        }
    }

    /// Replaces the mutation operator.
    pub fn with_mutation<M2: MutationOperator>(
        self,
        mutation: M2,
    ) -> EvolutionEngine<E, I, S, C, M2> {
        EvolutionEngine {
            evaluator: self.evaluator,
            initializer: self.initializer,
            selection: self.selection,
            crossover: self.crossover,
            mutation,
            config: self.config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Returns the fitness evaluator.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Runs the GA with an RNG seeded from [`GaConfig::seed`].
    ///
    /// # Errors
    /// - [`GaError::Configuration`] before the run starts
    /// - [`GaError::Evaluation`] on the first negative or non-finite distance read
    /// - [`GaError::NonFiniteTotal`] if a tour length overflows
    /// - [`GaError::InvariantViolation`] if an operator breaks a permutation
    pub fn run(&self) -> GaResult<EvolutionResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// Every draw happens on the calling thread in a fixed order, so the
    /// result depends only on the RNG state, not on parallel evaluation.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            cities = self.evaluator.chromosome_len(),
            population = self.config.population_size,
            generations = self.config.generations,
        )
    )]
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> GaResult<EvolutionResult> {
        self.config.validate()?;
        info!(
            crossover_rate = self.config.crossover_rate,
            mutation_rate = self.config.mutation_rate,
            "starting evolution"
        );

        let mut population = self.initial_population(rng)?;
        let mut hall_of_fame = HallOfFame::new();
        hall_of_fame.update(&population)?;

        let mut stats = Vec::with_capacity(self.config.generations + 1);
        let mut fitness_history = Vec::with_capacity(self.config.generations + 1);
        stats.push(GenerationStats::from_population(0, population.len(), &population)?);
        fitness_history.push(archived_fitness(&hall_of_fame)?);

        for generation in 1..=self.config.generations {
            let (next, evaluations) = self.next_generation(&population, rng)?;
            population = next;

            if hall_of_fame.update(&population)? {
                debug!(generation, best = ?hall_of_fame.fitness(), "hall of fame improved");
            }

            let gen_stats = GenerationStats::from_population(generation, evaluations, &population)?;
            debug!(
                generation,
                evaluations,
                min = gen_stats.min,
                mean = gen_stats.mean,
                max = gen_stats.max,
                "generation complete"
            );
            stats.push(gen_stats);
            fitness_history.push(archived_fitness(&hall_of_fame)?);
        }

        let best_fitness = archived_fitness(&hall_of_fame)?;
        let best = hall_of_fame
            .into_best()
            .ok_or_else(|| GaError::invariant("hall_of_fame", "empty after run"))?;
        info!(best_fitness, "evolution finished");

        Ok(EvolutionResult {
            best,
            best_fitness,
            generations: self.config.generations,
            fitness_history,
            stats,
        })
    }

    /// Builds and evaluates generation 0.
    ///
    /// # Errors
    /// Returns [`GaError::Configuration`] for fewer than 2 cities, whatever
    /// initializer is installed. Propagates initializer and evaluation
    /// errors; an initializer that produces a non-permutation is an
    /// invariant violation.
    pub fn initial_population<R: Rng>(&self, rng: &mut R) -> GaResult<Vec<Tour>> {
        let n = self.evaluator.chromosome_len();
        if n < 2 {
            return Err(GaError::config(
                "chromosome_len",
                format!("must be at least 2, got {n}"),
            ));
        }
        let mut population = self
            .initializer
            .initialize(n, self.config.population_size, rng)?;
        for tour in &population {
            tour.check_permutation(n, "initializer")?;
        }
        self.evaluate_stale(&mut population)?;
        Ok(population)
    }

    /// Produces the next evaluated generation from an evaluated one.
    ///
    /// Returns the new population and the number of evaluations spent.
    /// Tours that pass through selection without crossover or mutation keep
    /// their cached fitness and cost nothing.
    pub fn next_generation<R: Rng>(
        &self,
        population: &[Tour],
        rng: &mut R,
    ) -> GaResult<(Vec<Tour>, usize)> {
        let pool = self.selection.select(population, population.len(), rng)?;
        let mut offspring = self.vary(pool, rng)?;
        let evaluations = self.evaluate_stale(&mut offspring)?;
        Ok((offspring, evaluations))
    }

    /// Crossover on consecutive pairs, then the per-individual mutation gate.
    fn vary<R: Rng>(&self, mut offspring: Vec<Tour>, rng: &mut R) -> GaResult<Vec<Tour>> {
        let n = self.evaluator.chromosome_len();

        for i in (1..offspring.len()).step_by(2) {
            if rng.random_range(0.0..1.0) < self.config.crossover_rate {
                let (c1, c2) =
                    self.crossover
                        .crossover(offspring[i - 1].genes(), offspring[i].genes(), rng);
                offspring[i - 1] = Tour::new(c1);
                offspring[i] = Tour::new(c2);
                offspring[i - 1].check_permutation(n, "crossover")?;
                offspring[i].check_permutation(n, "crossover")?;
            }
        }

        for tour in &mut offspring {
            if rng.random_range(0.0..1.0) < self.config.mutation_rate {
                self.mutation.mutate(tour.genes_mut(), rng);
                tour.check_permutation(n, "mutation")?;
            }
        }

        Ok(offspring)
    }

    /// Evaluates every tour without a cached fitness; returns how many.
    fn evaluate_stale(&self, population: &mut [Tour]) -> GaResult<usize> {
        let stale = population.iter().filter(|t| !t.is_evaluated()).count();
        if self.config.parallel {
            evaluate_parallel(&self.evaluator, population)?;
        } else {
            evaluate_serial(&self.evaluator, population)?;
        }
        Ok(stale)
    }
}

fn archived_fitness(hall_of_fame: &HallOfFame) -> GaResult<f64> {
    hall_of_fame
        .fitness()
        .ok_or_else(|| GaError::invariant("hall_of_fame", "no evaluated tour archived"))
}

fn evaluate_serial<E: FitnessEvaluator>(evaluator: &E, population: &mut [Tour]) -> GaResult<()> {
    for tour in population.iter_mut().filter(|t| !t.is_evaluated()) {
        let f = evaluator.evaluate(tour.genes())?;
        tour.set_fitness(f);
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn evaluate_parallel<E: FitnessEvaluator>(evaluator: &E, population: &mut [Tour]) -> GaResult<()> {
    use rayon::prelude::*;

    population
        .par_iter_mut()
        .filter(|t| !t.is_evaluated())
        .try_for_each(|tour| {
            let f = evaluator.evaluate(tour.genes())?;
            tour.set_fitness(f);
            Ok(())
        })
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel<E: FitnessEvaluator>(evaluator: &E, population: &mut [Tour]) -> GaResult<()> {
    evaluate_serial(evaluator, population)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::ga::fitness::TourLength;

    /// Six cities on a unit hexagon; the perimeter (length 6) is optimal.
    fn hexagon() -> TourLength {
        let pts: Vec<(f64, f64)> = (0..6)
            .map(|k| {
                let t = std::f64::consts::PI / 3.0 * k as f64;
                (t.cos(), t.sin())
            })
            .collect();
        // Scramble the labels so the identity order is not the optimum.
        let order = [0, 3, 1, 4, 2, 5];
        let dm = DistanceMatrix::symmetric_from_fn(6, |i, j| {
            let (a, b) = (pts[order[i]], pts[order[j]]);
            ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
        })
        .expect("valid");
        TourLength::new(dm)
    }

    /// Exhaustive optimum with city 0 fixed first.
    fn brute_force(eval: &TourLength) -> f64 {
        fn permute(rest: &mut Vec<usize>, k: usize, eval: &TourLength, best: &mut f64) {
            if k == rest.len() {
                let mut tour = vec![0];
                tour.extend_from_slice(rest);
                let f = eval.evaluate(&tour).expect("finite");
                if f < *best {
                    *best = f;
                }
                return;
            }
            for i in k..rest.len() {
                rest.swap(k, i);
                permute(rest, k + 1, eval, best);
                rest.swap(k, i);
            }
        }
        let mut rest: Vec<usize> = (1..eval.chromosome_len()).collect();
        let mut best = f64::INFINITY;
        permute(&mut rest, 0, eval, &mut best);
        best
    }

    fn evaluated(genes: Vec<usize>, eval: &TourLength) -> Tour {
        let mut t = Tour::new(genes);
        t.set_fitness(eval.evaluate(t.genes()).expect("finite"));
        t
    }

    #[test]
    fn test_converges_to_brute_force_optimum() {
        let eval = hexagon();
        let optimum = brute_force(&eval);
        assert!((optimum - 6.0).abs() < 1e-9);

        let mut hits = 0;
        for seed in 0..5 {
            let config = GaConfig::default()
                .with_population_size(50)
                .with_generations(100)
                .with_seed(seed);
            let result = EvolutionEngine::new(eval.clone(), config).run().expect("run");
            assert!(result.best_fitness >= optimum - 1e-9);
            if (result.best_fitness - optimum).abs() < 1e-9 {
                hits += 1;
            }
        }
        assert!(hits >= 4, "only {hits}/5 seeded runs reached the optimum");
    }

    #[test]
    fn test_hall_of_fame_is_monotone() {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_generations(60)
            .with_seed(42);
        let result = EvolutionEngine::new(hexagon(), config).run().expect("run");

        assert_eq!(result.fitness_history.len(), 61);
        assert_eq!(result.stats.len(), 61);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "hall of fame got worse: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.fitness_history.last().copied(), Some(result.best_fitness));
        assert_eq!(result.best.fitness(), Some(result.best_fitness));
    }

    #[test]
    fn test_best_is_valid_and_consistent() {
        let eval = hexagon();
        let config = GaConfig::default().with_population_size(10).with_seed(3);
        let result = EvolutionEngine::new(eval.clone(), config).run().expect("run");

        result.best.check_permutation(6, "test").expect("permutation");
        let recomputed = eval.evaluate(result.best.genes()).expect("finite");
        assert_eq!(recomputed, result.best_fitness);
        let min_seen = result
            .stats
            .iter()
            .map(|s| s.min)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(min_seen, result.best_fitness);
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(25)
            .with_seed(2024);
        let a = EvolutionEngine::new(hexagon(), config.clone()).run().expect("run");
        let b = EvolutionEngine::new(hexagon(), config).run().expect("run");
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_no_variation_keeps_selected_fitness() {
        let eval = hexagon();
        let config = GaConfig::default()
            .with_population_size(16)
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0);
        let engine = EvolutionEngine::new(eval, config);

        let mut rng = StdRng::seed_from_u64(8);
        let population = engine.initial_population(&mut rng).expect("init");

        let mut select_rng = StdRng::seed_from_u64(99);
        let pool = Tournament::new(3)
            .select(&population, population.len(), &mut select_rng)
            .expect("select");

        let mut step_rng = StdRng::seed_from_u64(99);
        let (next, evaluations) = engine.next_generation(&population, &mut step_rng).expect("step");

        assert_eq!(evaluations, 0);
        let pool_fits: Vec<Option<f64>> = pool.iter().map(Tour::fitness).collect();
        let next_fits: Vec<Option<f64>> = next.iter().map(Tour::fitness).collect();
        assert_eq!(pool_fits, next_fits);
        assert_eq!(pool, next);
    }

    #[test]
    fn test_full_variation_reevaluates() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_crossover_rate(1.0)
            .with_mutation_rate(1.0);
        let engine = EvolutionEngine::new(hexagon(), config);
        let mut rng = StdRng::seed_from_u64(4);
        let population = engine.initial_population(&mut rng).expect("init");
        let (next, evaluations) = engine.next_generation(&population, &mut rng).expect("step");
        assert_eq!(next.len(), 10);
        assert_eq!(evaluations, 10);
        assert!(next.iter().all(Tour::is_evaluated));
    }

    #[test]
    fn test_odd_population_keeps_size() {
        let config = GaConfig::default()
            .with_population_size(7)
            .with_crossover_rate(1.0)
            .with_generations(5)
            .with_seed(1);
        let result = EvolutionEngine::new(hexagon(), config).run().expect("run");
        assert_eq!(result.generations, 5);
        assert!(result.stats.iter().all(|s| s.evaluations <= 7));
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let config = GaConfig::default()
            .with_population_size(12)
            .with_generations(0)
            .with_seed(5);
        let result = EvolutionEngine::new(hexagon(), config).run().expect("run");
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
        assert_eq!(result.stats[0].evaluations, 12);
        assert_eq!(result.best_fitness, result.stats[0].min);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_run() {
        let config = GaConfig::default().with_mutation_rate(1.2);
        let err = EvolutionEngine::new(hexagon(), config).run().unwrap_err();
        assert!(matches!(
            err,
            GaError::Configuration {
                parameter: "mutation_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_single_city_is_rejected() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0]]).expect("valid");
        let err = EvolutionEngine::new(TourLength::new(dm), GaConfig::default().with_seed(1))
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            GaError::Configuration {
                parameter: "chromosome_len",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_distance_aborts() {
        let mut rows = vec![vec![1.0; 5]; 5];
        rows[3][1] = f64::NAN;
        let dm = DistanceMatrix::from_rows(rows).expect("valid");
        let config = GaConfig::default().with_population_size(40).with_seed(6);
        let err = EvolutionEngine::new(TourLength::new(dm), config).run().unwrap_err();
        assert!(matches!(err, GaError::Evaluation { from: 3, to: 1, .. }));
    }

    #[test]
    fn test_stats_summary() {
        let eval = TourLength::new(
            DistanceMatrix::from_rows(vec![
                vec![0.0, 10.0, 15.0, 10.0],
                vec![10.0, 0.0, 10.0, 15.0],
                vec![15.0, 10.0, 0.0, 10.0],
                vec![10.0, 15.0, 10.0, 0.0],
            ])
            .expect("valid"),
        );
        let pop = vec![
            evaluated(vec![0, 1, 2, 3], &eval),
            evaluated(vec![0, 2, 1, 3], &eval),
        ];
        let stats = GenerationStats::from_population(3, 2, &pop).expect("evaluated");
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.min, 40.0);
        assert_eq!(stats.max, 50.0);
        assert_eq!(stats.mean, 45.0);
        assert_eq!(stats.std, 5.0);
    }

    // ---- Operator injection ----

    /// Crossover that breaks the permutation invariant.
    struct Duplicating;

    impl CrossoverOperator for Duplicating {
        fn crossover<R: Rng>(
            &self,
            parent1: &[usize],
            _parent2: &[usize],
            _rng: &mut R,
        ) -> (Vec<usize>, Vec<usize>) {
            (vec![parent1[0]; parent1.len()], parent1.to_vec())
        }
    }

    #[test]
    fn test_broken_crossover_is_invariant_violation() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_crossover_rate(1.0)
            .with_seed(1);
        let err = EvolutionEngine::new(hexagon(), config)
            .with_crossover(Duplicating)
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            GaError::InvariantViolation {
                operator: "crossover",
                ..
            }
        ));
    }

    /// Initializer that always returns the identity order.
    struct Identity;

    impl PopulationInitializer for Identity {
        fn initialize<R: Rng>(&self, n: usize, size: usize, _rng: &mut R) -> GaResult<Vec<Tour>> {
            Ok((0..size).map(|_| Tour::new((0..n).collect())).collect())
        }
    }

    /// Mutation that never changes anything.
    struct Frozen;

    impl MutationOperator for Frozen {
        fn mutate<R: Rng>(&self, _genes: &mut [usize], _rng: &mut R) {}
    }

    #[test]
    fn test_injected_operators_are_used() {
        let eval = hexagon();
        let identity_cost = eval.evaluate(&[0, 1, 2, 3, 4, 5]).expect("finite");
        let config = GaConfig::default()
            .with_population_size(6)
            .with_generations(10)
            .with_crossover_rate(0.0)
            .with_mutation_rate(1.0)
            .with_seed(2);
        let result = EvolutionEngine::new(eval, config)
            .with_initializer(Identity)
            .with_selection(Tournament::new(2))
            .with_mutation(Frozen)
            .run()
            .expect("run");
        assert_eq!(result.best.genes(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(result.best_fitness, identity_cost);
    }

    #[test]
    fn test_single_city_is_rejected_with_injected_initializer() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0]]).expect("valid");
        let engine = EvolutionEngine::new(TourLength::new(dm), GaConfig::default().with_seed(1))
            .with_initializer(Identity);
        let err = engine.run().unwrap_err();
        assert!(matches!(
            err,
            GaError::Configuration {
                parameter: "chromosome_len",
                ..
            }
        ));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(engine.initial_population(&mut rng).is_err());
    }

    #[test]
    fn test_overflowing_tour_length_aborts() {
        let dm = DistanceMatrix::from_rows(vec![vec![f64::MAX; 3]; 3]).expect("valid");
        let config = GaConfig::default().with_population_size(8).with_seed(3);
        let err = EvolutionEngine::new(TourLength::new(dm), config).run().unwrap_err();
        assert!(matches!(err, GaError::NonFiniteTotal { .. }));
    }

    #[test]
    fn test_negative_distance_aborts() {
        let mut rows = vec![vec![1.0; 4]; 4];
        rows[2][0] = -3.0;
        rows[0][2] = -3.0;
        let dm = DistanceMatrix::from_rows(rows).expect("valid");
        let config = GaConfig::default().with_population_size(20).with_seed(4);
        let err = EvolutionEngine::new(TourLength::new(dm), config).run().unwrap_err();
        assert!(matches!(err, GaError::Evaluation { value, .. } if value == -3.0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_generations(30)
            .with_seed(77);
        let serial = EvolutionEngine::new(hexagon(), config.clone()).run().expect("run");
        let parallel = EvolutionEngine::new(hexagon(), config.with_parallel(true))
            .run()
            .expect("run");
        assert_eq!(serial.best, parallel.best);
        assert_eq!(serial.stats, parallel.stats);
    }
}
