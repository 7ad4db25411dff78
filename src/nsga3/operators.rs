//! Real-coded genetic operators.
//!
//! Ready-made crossover and mutation for `Vec<f64>` genomes with box
//! constraints, for use inside [`Nsga3Problem`](super::Nsga3Problem)
//! implementations. Both operators clamp offspring to the given bounds.
//!
//! # Operators
//!
//! - [`sbx_crossover`]: Simulated Binary Crossover — contiguous analogue of
//!   single-point binary crossover; larger `eta` keeps children closer to
//!   their parents
//! - [`polynomial_mutation`]: per-gene perturbation with probability `1/n`;
//!   larger `eta` produces smaller steps
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous
//!   Search Space", Complex Systems 9(2), 115-148
//! - Deb & Goyal (1996), "A Combined Genetic Adaptive Search (GeneAS) for
//!   Engineering Design", Computer Science and Informatics 26, 30-45

use rand::Rng;

/// Simulated Binary Crossover (SBX) for real-coded genomes.
///
/// Produces two children. Genes where the parents agree to within 1e-14 are
/// copied unchanged; differing genes are recombined with a spread factor
/// drawn from the SBX distribution with index `eta` (typical range 10–30).
///
/// # Panics
///
/// Panics if the parents and bounds do not all have the same length.
pub fn sbx_crossover<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    lower: &[f64],
    upper: &[f64],
    eta: f64,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert_eq!(n, lower.len(), "lower bounds must match genome length");
    assert_eq!(n, upper.len(), "upper bounds must match genome length");

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();

    for i in 0..n {
        let (p1, p2) = (parent1[i], parent2[i]);
        if (p1 - p2).abs() < 1e-14 {
            continue;
        }

        let u: f64 = rng.random_range(0.0..1.0);
        let beta = if u <= 0.5 {
            (2.0 * u).powf(1.0 / (eta + 1.0))
        } else {
            (1.0 / (2.0 * (1.0 - u))).powf(1.0 / (eta + 1.0))
        };

        let c1 = 0.5 * ((1.0 + beta) * p1 + (1.0 - beta) * p2);
        let c2 = 0.5 * ((1.0 - beta) * p1 + (1.0 + beta) * p2);

        child1[i] = c1.clamp(lower[i], upper[i]);
        child2[i] = c2.clamp(lower[i], upper[i]);
    }

    (child1, child2)
}

/// Polynomial mutation for real-coded genomes.
///
/// Each gene mutates with probability `1/n`. The perturbation is drawn from
/// a polynomial distribution with index `eta` (typical range 15–25) whose
/// support is the full variable range, biased toward small steps.
///
/// # Panics
///
/// Panics if the genome and bounds do not all have the same length.
pub fn polynomial_mutation<R: Rng>(
    genome: &mut [f64],
    lower: &[f64],
    upper: &[f64],
    eta: f64,
    rng: &mut R,
) {
    let n = genome.len();
    assert_eq!(n, lower.len(), "lower bounds must match genome length");
    assert_eq!(n, upper.len(), "upper bounds must match genome length");
    if n == 0 {
        return;
    }

    #[allow(clippy::cast_precision_loss)]
    let gene_rate = 1.0 / n as f64;

    for i in 0..n {
        if rng.random_range(0.0..1.0) >= gene_rate {
            continue;
        }

        let range = upper[i] - lower[i];
        if range <= 0.0 {
            continue;
        }

        let x = genome[i];
        let u: f64 = rng.random_range(0.0..1.0);
        let delta1 = (x - lower[i]) / range;
        let delta2 = (upper[i] - x) / range;

        let delta_q = if u < 0.5 {
            let xy = 1.0 - delta1;
            let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(eta + 1.0);
            val.powf(1.0 / (eta + 1.0)) - 1.0
        } else {
            let xy = 1.0 - delta2;
            let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(eta + 1.0);
            1.0 - val.powf(1.0 / (eta + 1.0))
        };

        genome[i] = (x + delta_q * range).clamp(lower[i], upper[i]);
    }
}
