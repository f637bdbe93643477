//! Percentiles with linear interpolation, medians, quartiles, and the
//! median absolute deviation.
//!
//! Percentiles use the interpolating estimator over rank
//! `(p / 100) · (n − 1)`: the value at the integer part of the rank is
//! blended with its upper neighbor by the fractional part. The hot path of
//! the MAD (`median_select`) avoids a full sort via `select_nth_unstable`.

use serde::Serialize;

/// Percentile of an already sorted sample.
///
/// `p = 100` returns the maximum; a one-element sample returns that
/// element; otherwise the two sorted neighbors of the fractional rank are
/// linearly interpolated.
///
/// # Panics
///
/// Panics if `sorted` is empty or `p` is outside `(0, 100]`.
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "percentile requires at least one value");
    assert!(p > 0.0 && p <= 100.0, "percentile must be in (0, 100]");

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    if p == 100.0 {
        return sorted[n - 1];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower_rank = rank.floor();
    let d = rank - lower_rank;
    let idx = lower_rank as usize;
    let lo = sorted[idx];
    let hi = sorted[idx + 1];

    lo + (hi - lo) * d
}

/// Percentile of an unsorted sample. Sorts a copy.
pub fn percentile(sample: &[f64], p: f64) -> f64 {
    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    percentile_of_sorted(&sorted, p)
}

/// Median of an unsorted sample. Sorts a copy.
pub fn median(sample: &[f64]) -> f64 {
    percentile(sample, 50.0)
}

/// Median of an already sorted sample.
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    percentile_of_sorted(sorted, 50.0)
}

/// Median via in-place selection, reordering `sample`.
///
/// O(n) expected time; used in the bootstrap's MAD inner loop where a full
/// sort per resample would dominate.
///
/// # Panics
///
/// Panics if `sample` is empty.
pub fn median_select(sample: &mut [f64]) -> f64 {
    assert!(!sample.is_empty(), "median requires at least one value");

    let n = sample.len();
    let mid = n / 2;
    let (below, mid_val, _) = sample.select_nth_unstable_by(mid, |a, b| a.total_cmp(b));

    if n % 2 != 0 {
        *mid_val
    } else {
        // Even length: average the middle element with the largest value
        // of the lower partition.
        let lower_max = below.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (*mid_val + lower_max) / 2.0
    }
}

/// Median absolute deviation of an already sorted sample, scaled by 1.4826
/// so it estimates the standard deviation under normality.
///
/// `abs_devs_buffer` is scratch space reused across calls.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median_abs_dev_of_sorted(sorted: &[f64], abs_devs_buffer: &mut Vec<f64>) -> f64 {
    let med = median_of_sorted(sorted);

    abs_devs_buffer.clear();
    abs_devs_buffer.extend(sorted.iter().map(|v| (med - v).abs()));

    median_select(abs_devs_buffer) * 1.4826
}

/// The three quartiles of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Second quartile (the median).
    pub q2: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range, `q3 - q1`.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Compute the quartiles of an unsorted sample. Sorts a copy once.
pub fn quartiles(sample: &[f64]) -> Quartiles {
    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    Quartiles {
        q1: percentile_of_sorted(&sorted, 25.0),
        q2: percentile_of_sorted(&sorted, 50.0),
        q3: percentile_of_sorted(&sorted, 75.0),
    }
}
