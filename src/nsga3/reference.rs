//! Reference-direction generation on the unit simplex.
//!
//! NSGA-III guides diversity with a fixed set of reference directions in
//! objective space, one niche per direction. The systematic construction of
//! Das & Dennis partitions each objective's weight into `H` increments and
//! emits every composition, yielding `C(H + M - 1, M - 1)` evenly spaced
//! points on the unit simplex.
//!
//! The set is generated once per run. Callers may instead supply their own
//! direction set through [`Nsga3Config`](super::Nsga3Config); custom sets
//! are checked with [`validate_directions`] before use.
//!
//! # References
//!
//! - Das & Dennis (1998), "Normal-Boundary Intersection: A New Method for
//!   Generating the Pareto Surface in Nonlinear Multicriteria Optimization
//!   Problems", SIAM Journal on Optimization 8(3), 631-657

/// Generates the simplex-lattice (Das-Dennis) reference directions.
///
/// Returns `C(H + M - 1, M - 1)` points where `M = n_objectives` and
/// `H = divisions`. Every point has non-negative components summing to 1.
///
/// # Panics
///
/// Panics if `n_objectives` or `divisions` is zero.
pub fn simplex_lattice(n_objectives: usize, divisions: usize) -> Vec<Vec<f64>> {
    assert!(n_objectives > 0, "n_objectives must be at least 1");
    assert!(divisions > 0, "divisions must be at least 1");

    let mut points = Vec::new();
    let mut current = vec![0.0_f64; n_objectives];
    lattice_recursive(n_objectives, divisions, 0, divisions, &mut current, &mut points);
    points
}

#[allow(clippy::cast_precision_loss)]
fn lattice_recursive(
    n_objectives: usize,
    divisions: usize,
    depth: usize,
    remaining: usize,
    current: &mut Vec<f64>,
    result: &mut Vec<Vec<f64>>,
) {
    if depth == n_objectives - 1 {
        current[depth] = remaining as f64 / divisions as f64;
        result.push(current.clone());
        return;
    }

    for i in 0..=remaining {
        current[depth] = i as f64 / divisions as f64;
        lattice_recursive(
            n_objectives,
            divisions,
            depth + 1,
            remaining - i,
            current,
            result,
        );
    }
}

/// Chooses the number of divisions so the lattice covers a target
/// population size.
///
/// Returns the smallest `H` such that `C(H + M - 1, M - 1) >= target`.
pub fn auto_divisions(n_objectives: usize, target: usize) -> usize {
    let m = n_objectives;
    for h in 1..200 {
        if n_combinations(h + m - 1, m - 1) >= target {
            return h;
        }
    }
    12
}

/// Compute `C(n, k)` = n! / (k! * (n-k)!).
fn n_combinations(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }
    result
}

/// Validates a caller-supplied reference-direction set.
///
/// Requires a non-empty set where every direction has exactly
/// `n_objectives` finite components and at least one non-zero component.
pub fn validate_directions(directions: &[Vec<f64>], n_objectives: usize) -> Result<(), String> {
    if directions.is_empty() {
        return Err("reference direction set must not be empty".into());
    }
    for (i, w) in directions.iter().enumerate() {
        if w.len() != n_objectives {
            return Err(format!(
                "reference direction {} has {} components, expected {}",
                i,
                w.len(),
                n_objectives
            ));
        }
        if w.iter().any(|x| !x.is_finite()) {
            return Err(format!("reference direction {i} has a non-finite component"));
        }
        if w.iter().all(|&x| x == 0.0) {
            return Err(format!("reference direction {i} is the zero vector"));
        }
    }
    Ok(())
}
