//! Geometric primitives for objective-space normalization and niching.
//!
//! Small vector helpers shared by the hyperplane normalizer and the niche
//! associator. All functions operate on plain `f64` slices; the dense-matrix
//! work for intercept computation lives in [`normalize`](super::normalize).

/// Perpendicular distance from a point to the line through the origin along
/// `direction`.
///
/// Computes `||p - ((p·w)/(w·w))·w||`, the orthogonal distance between the
/// point and its projection onto the reference line.
///
/// Returns `f64::INFINITY` for a numerically zero direction vector, so a
/// degenerate direction can never win a nearest-line search.
///
/// # Panics
///
/// Panics if `point` and `direction` have different lengths.
pub fn perpendicular_distance(point: &[f64], direction: &[f64]) -> f64 {
    assert_eq!(
        point.len(),
        direction.len(),
        "point and direction must have the same dimension"
    );

    let dot: f64 = point.iter().zip(direction).map(|(&p, &w)| p * w).sum();
    let norm_sq: f64 = direction.iter().map(|&w| w * w).sum();

    if norm_sq < 1e-30 {
        return f64::INFINITY;
    }

    let t = dot / norm_sq;
    point
        .iter()
        .zip(direction)
        .map(|(&p, &w)| {
            let d = p - t * w;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Component-wise minimum over a set of equal-length vectors.
///
/// # Panics
///
/// Panics if `vectors` is empty.
pub fn component_min(vectors: &[&[f64]]) -> Vec<f64> {
    assert!(!vectors.is_empty(), "component_min requires at least one vector");

    let mut out = vectors[0].to_vec();
    for v in &vectors[1..] {
        for (o, &x) in out.iter_mut().zip(*v) {
            if x < *o {
                *o = x;
            }
        }
    }
    out
}

/// Component-wise maximum over a set of equal-length vectors.
///
/// # Panics
///
/// Panics if `vectors` is empty.
pub fn component_max(vectors: &[&[f64]]) -> Vec<f64> {
    assert!(!vectors.is_empty(), "component_max requires at least one vector");

    let mut out = vectors[0].to_vec();
    for v in &vectors[1..] {
        for (o, &x) in out.iter_mut().zip(*v) {
            if x > *o {
                *o = x;
            }
        }
    }
    out
}
