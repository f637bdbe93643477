//! Linear regression through the origin.
//!
//! The model is `elapsed ≈ slope · iters` with no intercept: zero
//! iterations must take zero time, and the fitted slope is the
//! per-iteration cost with fixed per-measurement overhead cancelled.

use crate::types::Point;

/// Slope of the least-squares line through the origin,
/// `Σ(x·y) / Σ(x·x)`.
///
/// # Panics
///
/// Panics unless at least one point has a nonzero x coordinate.
pub fn slope(points: &[Point]) -> f64 {
    let mut xy = 0.0;
    let mut xx = 0.0;

    for p in points {
        xy += p.x * p.y;
        xx += p.x * p.x;
    }

    assert!(xx > 0.0, "regression requires a point with nonzero x");
    xy / xx
}

/// Coefficient of determination for a through-origin fit.
///
/// Both sums of squares are uncentered, consistent with the no-intercept
/// model: `r² = 1 − Σ(y − slope·x)² / Σ y²`.
pub fn r_squared(points: &[Point], slope: f64) -> f64 {
    let residual_sum_of_squares: f64 = points
        .iter()
        .map(|p| {
            let diff = p.y - slope * p.x;
            diff * diff
        })
        .sum();

    let total_sum_of_squares: f64 = points.iter().map(|p| p.y * p.y).sum();

    1.0 - residual_sum_of_squares / total_sum_of_squares
}
