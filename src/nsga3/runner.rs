//! NSGA-III evolutionary loop execution.
//!
//! [`Nsga3Runner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → offspring production → environmental
//! selection → repeat. Variation is delegated to the problem definition;
//! survival is decided by [`environmental_selection`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::Nsga3Config;
use super::reference;
use super::selection::environmental_selection;
use super::types::{Nsga3Problem, Solution};

/// Result of an NSGA-III optimization run.
///
/// Contains the final population together with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct Nsga3Result<G> {
    /// The final population, ordered by ascending Pareto rank.
    pub population: Vec<Solution<G>>,

    /// The non-dominated (rank 0) solutions of the final population.
    pub front: Vec<Solution<G>>,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Size of the non-dominated front at the end of each generation
    /// (index 0 is the initial population).
    pub front_size_history: Vec<usize>,
}

/// Executes the NSGA-III evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = Nsga3Config::default().with_seed(42);
/// let result = Nsga3Runner::run(&problem, &config);
/// println!("Front size: {}", result.front.len());
/// ```
pub struct Nsga3Runner;

impl Nsga3Runner {
    /// Runs the NSGA-III optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`Nsga3Config::validate`]
    /// first to get a descriptive error), if the problem reports zero
    /// objectives, or if `evaluate` returns a vector of the wrong length.
    pub fn run<P: Nsga3Problem>(problem: &P, config: &Nsga3Config) -> Nsga3Result<P::Genome> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs NSGA-III with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// at the end of the current generation and returns the population
    /// evolved so far.
    pub fn run_with_cancel<P: Nsga3Problem>(
        problem: &P,
        config: &Nsga3Config,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Nsga3Result<P::Genome> {
        config.validate().expect("invalid Nsga3Config");

        let n_objectives = problem.objective_count();
        assert!(n_objectives > 0, "problem must have at least one objective");

        let directions = match &config.reference_directions {
            Some(dirs) => {
                reference::validate_directions(dirs, n_objectives)
                    .expect("invalid reference directions");
                dirs.clone()
            }
            None => {
                let h = config
                    .divisions
                    .unwrap_or_else(|| reference::auto_divisions(n_objectives, config.population_size));
                reference::simplex_lattice(n_objectives, h)
            }
        };

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let start = Instant::now();

        // 1. Initialize and evaluate the starting population
        let mut population: Vec<Solution<P::Genome>> = (0..config.population_size)
            .map(|_| {
                let genome = problem.create_genome(&mut rng);
                let objectives = evaluate_genome(problem, &genome);
                Solution::new(genome, objectives)
            })
            .collect();

        // Rank the starting population (no candidates are dropped: the
        // population already has target size).
        population =
            environmental_selection(population, &directions, config.population_size, &mut rng);

        let mut front_size_history = Vec::with_capacity(config.max_generations + 1);
        front_size_history.push(front_size(&population));

        let mut generations = 0usize;
        let mut cancelled = false;

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(limit) {
                    break;
                }
            }

            // Offspring production: binary tournament on rank, then
            // problem-defined crossover and mutation.
            let mut offspring: Vec<Solution<P::Genome>> =
                Vec::with_capacity(config.population_size);
            while offspring.len() < config.population_size {
                let p1 = tournament(&population, &mut rng);
                let p2 = tournament(&population, &mut rng);

                let children = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    problem.crossover(&population[p1].genome, &population[p2].genome, &mut rng)
                } else {
                    vec![population[p1].genome.clone()]
                };

                for mut genome in children {
                    if offspring.len() >= config.population_size {
                        break;
                    }
                    if rng.random_range(0.0..1.0) < config.mutation_rate {
                        problem.mutate(&mut genome, &mut rng);
                    }
                    let objectives = evaluate_genome(problem, &genome);
                    offspring.push(Solution::new(genome, objectives));
                }
            }

            // Environmental selection over parents + offspring
            population.extend(offspring);
            population =
                environmental_selection(population, &directions, config.population_size, &mut rng);

            generations = gen + 1;
            let size = front_size(&population);
            front_size_history.push(size);
            problem.on_generation(generations, size);
        }

        let front: Vec<Solution<P::Genome>> = population
            .iter()
            .filter(|s| s.rank == 0)
            .cloned()
            .collect();

        Nsga3Result {
            population,
            front,
            generations,
            cancelled,
            front_size_history,
        }
    }
}

/// Evaluates a genome and checks the objective-vector length against the
/// problem's declared objective count.
fn evaluate_genome<P: Nsga3Problem>(problem: &P, genome: &P::Genome) -> Vec<f64> {
    let objectives = problem.evaluate(genome);
    assert_eq!(
        objectives.len(),
        problem.objective_count(),
        "evaluate returned {} objectives, expected {}",
        objectives.len(),
        problem.objective_count()
    );
    objectives
}

/// Binary tournament on Pareto rank: the lower-ranked parent wins, the
/// first draw wins ties.
fn tournament<G, R: Rng>(population: &[Solution<G>], rng: &mut R) -> usize {
    let n = population.len();
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if population[a].rank <= population[b].rank {
        a
    } else {
        b
    }
}

/// Number of rank-0 solutions. The population is rank-ordered after
/// environmental selection, so the front is a prefix.
fn front_size<G>(population: &[Solution<G>]) -> usize {
    population.iter().take_while(|s| s.rank == 0).count()
}

// ============================================================================
// Tests
// ============================================================================
