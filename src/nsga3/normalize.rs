//! Hyperplane-based objective normalization.
//!
//! Rescales raw objective vectors into a common unit-range space before
//! niche association. Each call computes a fresh ideal point (component-wise
//! minimum) and nadir point for the given population; nothing is carried
//! across generations.
//!
//! The nadir point is estimated from the hyperplane spanned by the M
//! per-axis extreme points: the intercept system `S·h = 1` is solved with a
//! dense LU decomposition and the axis intercepts are `1/h_i`. When the
//! extreme-point matrix is singular, or the solve produces a non-positive
//! intercept (which would place the nadir at or below the ideal), the
//! estimate silently falls back to the component-wise maximum over the
//! current non-dominated front. Degenerate geometry is an expected, frequent
//! condition in early generations and never surfaces to the caller.
//!
//! # References
//!
//! - Deb & Jain (2014), "An Evolutionary Many-Objective Optimization
//!   Algorithm Using Reference-Point-Based Nondominated Sorting Approach,
//!   Part I", §IV-C (adaptive normalization)

use nalgebra::{DMatrix, DVector};

use super::geometry::{component_max, component_min};
use super::types::Solution;

/// Off-axis weight perturbation for the achievement scalarizing function.
/// Keeps every weight strictly positive so translated components of 0 never
/// divide by zero.
const ASF_EPS: f64 = 1e-6;

/// Determinant magnitude below which the extreme-point matrix is treated as
/// singular.
const DET_EPS: f64 = 1e-10;

/// Normalizes every solution's objective vector to `(f - ideal) / (nadir - ideal)`.
///
/// Returns one normalized vector per solution, in input order. Ranks must
/// already be assigned: the degenerate-geometry fallback estimates the nadir
/// from rank-0 solutions only.
///
/// Denominators smaller than machine epsilon are clamped to machine epsilon,
/// so a collapsed objective range on an axis yields large-but-finite values
/// instead of dividing by zero.
///
/// # Panics
///
/// Panics if `population` is empty (caller contract: environmental selection
/// never normalizes an empty set).
pub fn normalize<G>(population: &[Solution<G>]) -> Vec<Vec<f64>> {
    assert!(!population.is_empty(), "cannot normalize an empty population");

    let m = population[0].objectives.len();
    let objectives: Vec<&[f64]> = population.iter().map(|s| s.objectives.as_slice()).collect();

    let ideal = component_min(&objectives);
    let translated: Vec<Vec<f64>> = objectives
        .iter()
        .map(|o| o.iter().zip(&ideal).map(|(&f, &z)| f - z).collect())
        .collect();

    let range = match intercepts(&translated, m) {
        Some(intercepts) => intercepts,
        None => {
            // Degenerate simplex: estimate the nadir from the worst value
            // per axis among non-dominated solutions.
            let front: Vec<&[f64]> = population
                .iter()
                .filter(|s| s.rank == 0)
                .map(|s| s.objectives.as_slice())
                .collect();
            let nadir = component_max(&front);
            nadir.iter().zip(&ideal).map(|(&w, &z)| w - z).collect()
        }
    };

    translated
        .iter()
        .map(|fx| {
            fx.iter()
                .zip(&range)
                .map(|(&f, &d)| f / d.max(f64::EPSILON))
                .collect()
        })
        .collect()
}

/// Achievement scalarizing function of a translated objective vector for
/// the weight vector emphasizing `axis`: `max_j(Fx_j / w_j)` with
/// `w = identity + ASF_EPS`.
fn asf(fx: &[f64], axis: usize) -> f64 {
    fx.iter()
        .enumerate()
        .map(|(j, &v)| {
            let w = if j == axis { 1.0 + ASF_EPS } else { ASF_EPS };
            v / w
        })
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Index of the extreme point for each objective axis: the candidate
/// minimizing the axis-weighted ASF.
fn extreme_points(translated: &[Vec<f64>], m: usize) -> Vec<usize> {
    let mut extremes = Vec::with_capacity(m);
    for axis in 0..m {
        let mut best = 0;
        let mut best_asf = f64::INFINITY;
        for (i, fx) in translated.iter().enumerate() {
            let a = asf(fx, axis);
            if a < best_asf {
                best_asf = a;
                best = i;
            }
        }
        extremes.push(best);
    }
    extremes
}

/// Axis intercepts of the hyperplane through the M extreme points, or
/// `None` when the geometry is degenerate and the caller must fall back to
/// population extrema.
fn intercepts(translated: &[Vec<f64>], m: usize) -> Option<Vec<f64>> {
    let extremes = extreme_points(translated, m);

    let s = DMatrix::from_fn(m, m, |r, c| translated[extremes[r]][c]);
    if s.determinant().abs() < DET_EPS {
        return None;
    }

    let ones = DVector::from_element(m, 1.0);
    let h = s.lu().solve(&ones)?;

    let mut out = Vec::with_capacity(m);
    for i in 0..m {
        let intercept = 1.0 / h[i];
        if !intercept.is_finite() || intercept <= 0.0 {
            return None;
        }
        out.push(intercept);
    }
    Some(out)
}

// ============================================================================
// Tests
// ============================================================================
