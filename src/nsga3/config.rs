//! NSGA-III configuration.
//!
//! [`Nsga3Config`] holds all parameters that control the evolutionary loop
//! and the reference-direction set.

/// Configuration for the NSGA-III runner.
///
/// Controls population size, reference directions, operator rates,
/// and termination conditions.
///
/// # Defaults
///
/// ```
/// use u_moo::nsga3::Nsga3Config;
///
/// let config = Nsga3Config::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 400);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_moo::nsga3::Nsga3Config;
///
/// let config = Nsga3Config::default()
///     .with_population_size(92)
///     .with_divisions(12)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga3Config {
    /// Number of individuals in the population.
    ///
    /// Commonly chosen near the reference-direction count so every niche
    /// can be occupied. Typical range: 90–300.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, a clone of one parent is used.
    /// NSGA-III conventionally keeps this at 1.0.
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    ///
    /// Per-gene mutation probability is the problem's concern (the
    /// polynomial-mutation helper uses `1/n` internally), so this usually
    /// stays at 1.0.
    pub mutation_rate: f64,

    /// Number of simplex-lattice divisions (H) for reference-direction
    /// generation.
    ///
    /// `None` chooses the smallest H whose lattice covers
    /// `population_size`. Ignored when `reference_directions` is set.
    pub divisions: Option<usize>,

    /// Caller-supplied reference directions.
    ///
    /// `None` generates a simplex lattice once per run. A supplied set must
    /// be non-empty, with every direction a finite length-M vector that is
    /// not all zeros.
    pub reference_directions: Option<Vec<Vec<f64>>>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// When set, the runner stops after approximately this many
    /// milliseconds, returning the population evolved so far. The check
    /// happens at the start of each generation.
    ///
    /// `None` disables time-based termination (the default).
    pub time_limit_ms: Option<u64>,
}

impl Default for Nsga3Config {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 400,
            crossover_rate: 1.0,
            mutation_rate: 1.0,
            divisions: None,
            reference_directions: None,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl Nsga3Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of simplex-lattice divisions.
    pub fn with_divisions(mut self, h: usize) -> Self {
        self.divisions = Some(h);
        self
    }

    /// Supplies a custom reference-direction set.
    pub fn with_reference_directions(mut self, directions: Vec<Vec<f64>>) -> Self {
        self.reference_directions = Some(directions);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    /// Reference-direction consistency against the problem's objective
    /// count is checked by the runner, which knows M.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.divisions == Some(0) {
            return Err("divisions must be positive or None".into());
        }
        if let Some(dirs) = &self.reference_directions {
            if dirs.is_empty() {
                return Err("reference_directions must not be empty".into());
            }
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Nsga3Config::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 400);
        assert!((config.crossover_rate - 1.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        assert!(config.divisions.is_none());
        assert!(config.reference_directions.is_none());
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = Nsga3Config::default()
            .with_population_size(92)
            .with_max_generations(250)
            .with_crossover_rate(0.9)
            .with_mutation_rate(0.8)
            .with_divisions(12)
            .with_seed(42)
            .with_time_limit_ms(5000);

        assert_eq!(config.population_size, 92);
        assert_eq!(config.max_generations, 250);
        assert!((config.crossover_rate - 0.9).abs() < 1e-10);
        assert!((config.mutation_rate - 0.8).abs() < 1e-10);
        assert_eq!(config.divisions, Some(12));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(5000));
    }

    #[test]
    fn test_clamp_rates() {
        let config = Nsga3Config::default()
            .with_crossover_rate(1.5)
            .with_mutation_rate(-0.2);
        assert!((config.crossover_rate - 1.0).abs() < 1e-10);
        assert!((config.mutation_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(Nsga3Config::default().with_population_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(Nsga3Config::default().with_max_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_divisions() {
        assert!(Nsga3Config::default().with_divisions(0).validate().is_err());
    }

    #[test]
    fn test_validate_empty_reference_directions() {
        let config = Nsga3Config::default().with_reference_directions(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        assert!(Nsga3Config::default().with_time_limit_ms(0).validate().is_err());
    }

    #[test]
    fn test_custom_directions_accepted() {
        let config = Nsga3Config::default()
            .with_reference_directions(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert!(config.validate().is_ok());
    }
}
