//! Pareto ranking: fast non-dominated sorting.
//!
//! The ranking collaborator of environmental selection. Assigns every
//! solution a Pareto rank from its objective vector; rank 0 is the
//! non-dominated front. NSGA-III consumes the ranks for front truncation
//! and parent tournaments but, unlike NSGA-II, uses no crowding distance —
//! diversity is handled by reference-point niching instead.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II", IEEE Transactions on Evolutionary Computation
//!   6(2), 182-197
//! - Deb & Jain (2014), "An Evolutionary Many-Objective Optimization
//!   Algorithm Using Reference-Point-Based Nondominated Sorting Approach,
//!   Part I", IEEE Transactions on Evolutionary Computation 18(4), 577-601

/// Result of non-dominated sorting.
///
/// Each element of `ranks` is the Pareto rank of the solution at the same
/// index. Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone)]
pub struct NondominatedSortResult {
    /// Pareto rank for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting.
///
/// Assigns a Pareto rank to each solution based on dominance relationships.
/// All objectives are **minimized**: lower values are better. A solution
/// dominates another when it is no worse in every objective and strictly
/// better in at least one.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of solutions
///
/// # Panics
///
/// Panics if `objectives` is empty or if inner slices have inconsistent
/// lengths.
///
/// # Example
///
/// ```
/// use u_moo::nsga3::ranking::non_dominated_sort;
///
/// let objectives = vec![
///     vec![1.0, 5.0],  // Solution A
///     vec![3.0, 3.0],  // Solution B
///     vec![5.0, 1.0],  // Solution C
///     vec![4.0, 4.0],  // Solution D — dominated by B
/// ];
///
/// let result = non_dominated_sort(&objectives);
///
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(result.fronts[0], vec![0, 1, 2]);
/// ```
pub fn non_dominated_sort(objectives: &[Vec<f64>]) -> NondominatedSortResult {
    let n = objectives.len();
    assert!(n > 0, "objectives must not be empty");

    if n == 1 {
        return NondominatedSortResult {
            ranks: vec![0],
            fronts: vec![vec![0]],
        };
    }

    let m = objectives[0].len();
    assert!(m > 0, "each solution must have at least one objective");
    debug_assert!(
        objectives.iter().all(|o| o.len() == m),
        "all objective vectors must have the same length"
    );

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    // Compute dominance relationships
    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(&objectives[i], &objectives[j]) {
                Dominance::Left => {
                    // i dominates j
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    // j dominates i
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        if domination_count[i] == 0 {
            ranks[i] = 0;
            front_0.push(i);
        }
    }

    // Build subsequent fronts
    let mut fronts = vec![front_0];
    loop {
        let current = fronts
            .last()
            .expect("fronts is initialized with front_0; never empty");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    NondominatedSortResult { ranks, fronts }
}

/// Dominance comparison result.
#[derive(Debug, PartialEq)]
enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Compare two solutions for Pareto dominance (minimization).
fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

// ============================================================================
// Tests
// ============================================================================
