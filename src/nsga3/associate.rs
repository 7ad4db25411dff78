//! Nearest-reference-direction association.
//!
//! Maps each normalized objective vector to the reference direction whose
//! line through the origin is closest in perpendicular distance, and tallies
//! how many already-admitted solutions occupy each niche. The tallies and
//! distances feed the niching fill in [`selection`](super::selection).
//!
//! Association is recomputed from scratch every generation; no niche state
//! survives a call.

use super::geometry::perpendicular_distance;

/// Result of associating normalized objective vectors with reference
/// directions. All vectors are index-aligned with the associated input.
#[derive(Debug, Clone)]
pub struct Association {
    /// Index of the nearest reference direction per solution.
    pub niche: Vec<usize>,

    /// Number of solutions from fully admitted fronts per direction.
    /// Boundary-front solutions are associated but not counted here.
    pub frequency: Vec<usize>,

    /// Perpendicular distance to the nearest direction per solution.
    pub distance: Vec<f64>,
}

/// Associates every normalized vector with its closest reference direction.
///
/// The nearest direction is found by first strict improvement: an exact
/// distance tie keeps the earlier direction in iteration order.
///
/// Only solutions with index below `boundary_start` increment their niche's
/// frequency counter — those are the solutions from fully admitted fronts.
/// Solutions from `boundary_start` onwards (the undecided boundary front)
/// are associated for later lookup but do not pre-bias niche crowding.
///
/// # Panics
///
/// Panics if `directions` is empty.
pub fn associate(
    normalized: &[Vec<f64>],
    directions: &[Vec<f64>],
    boundary_start: usize,
) -> Association {
    assert!(!directions.is_empty(), "reference direction set must not be empty");

    let mut niche = Vec::with_capacity(normalized.len());
    let mut distance = Vec::with_capacity(normalized.len());
    let mut frequency = vec![0usize; directions.len()];

    for (i, point) in normalized.iter().enumerate() {
        let mut best = 0usize;
        let mut best_distance = f64::INFINITY;
        for (d, direction) in directions.iter().enumerate() {
            let dist = perpendicular_distance(point, direction);
            if dist < best_distance {
                best_distance = dist;
                best = d;
            }
        }

        if i < boundary_start {
            frequency[best] += 1;
        }
        niche.push(best);
        distance.push(best_distance);
    }

    Association {
        niche,
        frequency,
        distance,
    }
}
