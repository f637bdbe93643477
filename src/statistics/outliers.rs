//! Outlier classification using Tukey's fences.

use serde::Serialize;

use super::quantile::{quartiles, Quartiles};
use crate::types::Times;

/// Severity boundaries derived from a sample's quartiles.
///
/// With a non-negative IQR,
/// `low_severe <= low_mild <= q1 <= q3 <= high_mild <= high_severe`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    /// `q3 + 3·iqr`.
    pub high_severe: f64,
    /// `q3 + 1.5·iqr`.
    pub high_mild: f64,
    /// `q1 − 1.5·iqr`.
    pub low_mild: f64,
    /// `q1 − 3·iqr`.
    pub low_severe: f64,
}

impl Thresholds {
    /// Derive the four fences from a sample's quartiles.
    pub fn from_quartiles(qs: &Quartiles) -> Self {
        let iqr = qs.iqr();
        Self {
            high_severe: qs.q3 + 3.0 * iqr,
            high_mild: qs.q3 + 1.5 * iqr,
            low_mild: qs.q1 - 1.5 * iqr,
            low_severe: qs.q1 - 3.0 * iqr,
        }
    }
}

/// A five-way severity partition of a time sample.
///
/// Every input element lands in exactly one bucket, and elements keep their
/// input order within each bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outliers {
    /// Values below `low_severe`.
    pub low_severe: Times,
    /// Values in `[low_severe, low_mild)`.
    pub low_mild: Times,
    /// Values within the mild fences.
    pub normal: Times,
    /// Values in `(high_mild, high_severe]`.
    pub high_mild: Times,
    /// Values above `high_severe`.
    pub high_severe: Times,
    /// Quartiles the fences were derived from.
    pub quartiles: Quartiles,
    /// The fences themselves.
    pub thresholds: Thresholds,
}

impl Outliers {
    /// Classify a time sample against its own quartiles.
    ///
    /// # Panics
    ///
    /// Panics if `times` is empty (quartiles are undefined).
    pub fn classify(times: &[f64]) -> Self {
        let qs = quartiles(times);
        let thresholds = Thresholds::from_quartiles(&qs);

        let mut low_severe = Vec::new();
        let mut low_mild = Vec::new();
        let mut normal = Vec::new();
        let mut high_mild = Vec::new();
        let mut high_severe = Vec::new();

        for &t in times {
            if t < thresholds.low_severe {
                low_severe.push(t);
            } else if t < thresholds.low_mild {
                low_mild.push(t);
            } else if t > thresholds.high_severe {
                high_severe.push(t);
            } else if t > thresholds.high_mild {
                high_mild.push(t);
            } else {
                normal.push(t);
            }
        }

        Self {
            low_severe,
            low_mild,
            normal,
            high_mild,
            high_severe,
            quartiles: qs,
            thresholds,
        }
    }

    /// Total number of classified values across all five buckets.
    pub fn len(&self) -> usize {
        self.low_severe.len()
            + self.low_mild.len()
            + self.normal.len()
            + self.high_mild.len()
            + self.high_severe.len()
    }

    /// Whether the classified sample was empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of values outside the mild fences.
    pub fn num_outliers(&self) -> usize {
        self.len() - self.normal.len()
    }
}
