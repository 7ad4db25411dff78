//! Core trait and solution types for the NSGA-III engine.
//!
//! [`Nsga3Problem`] defines the contract between the generic evolutionary
//! engine and domain-specific problem implementations. [`Solution`] pairs a
//! genome with its objective vector and the per-generation selection
//! metadata.

use rand::Rng;

/// A candidate solution in the population.
///
/// Owns its genome and objective vector. The objective vector is written
/// once after evaluation and never mutated afterwards. `rank` and the niche
/// metadata are recomputed from scratch by environmental selection every
/// generation and carry no meaning across generations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<G> {
    /// The decision vector (genome).
    pub genome: G,

    /// Objective values, all minimized. Length equals
    /// [`Nsga3Problem::objective_count`].
    pub objectives: Vec<f64>,

    /// Pareto rank assigned by non-dominated sorting (0 = non-dominated
    /// front). Recomputed every generation.
    pub rank: usize,

    /// Index of the nearest reference direction. Valid only during the
    /// environmental selection that assigned it.
    pub niche: usize,

    /// Perpendicular distance to the nearest reference direction. Valid
    /// only during the environmental selection that assigned it.
    pub niche_distance: f64,
}

impl<G> Solution<G> {
    /// Creates a solution from an evaluated genome.
    pub fn new(genome: G, objectives: Vec<f64>) -> Self {
        Self {
            genome,
            objectives,
            rank: 0,
            niche: 0,
            niche_distance: 0.0,
        }
    }
}

/// Defines an NSGA-III optimization problem.
///
/// This is the main trait that users implement to plug their domain-specific
/// logic into the generic engine. It covers:
///
/// 1. **Initialization**: how to create random genomes
/// 2. **Evaluation**: how to compute the objective vector
/// 3. **Crossover**: how to recombine two parents
/// 4. **Mutation**: how to perturb a genome
///
/// All objectives are **minimized**: lower values are better. For
/// maximization objectives, negate the value in [`evaluate`](Self::evaluate).
///
/// # Thread Safety
///
/// `Nsga3Problem` must be `Send + Sync` so problem definitions can be shared
/// across threads by callers that evaluate populations concurrently.
pub trait Nsga3Problem: Send + Sync {
    /// The genome (decision vector) type for this problem.
    type Genome: Clone + Send + Sync;

    /// Number of objectives (M). Must be at least 1 and constant for the
    /// lifetime of the problem.
    fn objective_count(&self) -> usize;

    /// Creates a random genome.
    ///
    /// Called during population initialization. The implementation should
    /// produce a valid (but not necessarily good) solution.
    fn create_genome<R: Rng>(&self, rng: &mut R) -> Self::Genome;

    /// Evaluates a genome and returns its objective vector.
    ///
    /// Must return exactly [`objective_count`](Self::objective_count)
    /// values. This is typically the most expensive operation.
    fn evaluate(&self, genome: &Self::Genome) -> Vec<f64>;

    /// Produces one or two offspring by recombining two parents.
    ///
    /// Returns a `Vec` of 1 or 2 children. The engine handles sizing.
    ///
    /// The default implementation clones parent1 (no crossover). See
    /// [`operators`](super::operators) for ready-made real-coded operators.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Genome,
        _parent2: &Self::Genome,
        _rng: &mut R,
    ) -> Vec<Self::Genome> {
        vec![parent1.clone()]
    }

    /// Mutates a genome in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _genome: &mut Self::Genome, _rng: &mut R) {}

    /// Called at the end of each generation with the size of the current
    /// non-dominated front.
    ///
    /// Useful for logging or external progress reporting. The default
    /// implementation is a no-op.
    fn on_generation(&self, _generation: usize, _front_size: usize) {}
}
