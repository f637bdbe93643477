//! Bootstrap resampling engine and confidence-interval estimates.
//!
//! A single seed drives three resampling passes (sorted statistics,
//! moments, regression). Each pass rebuilds its own Xoshiro256++ stream
//! from that seed and draws the same number of uniform indices, so the
//! i-th resample of every pass is the same synthetic dataset and bootstrap
//! draws stay comparable across statistic families.
//!
//! The sorted and moments passes run as parallel tasks while the
//! regression pass runs on the initiating thread; each pass owns its RNG
//! and its output buffers, so joining them is the only synchronization.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

use crate::types::{points_from_measurements, Measurement};

use super::moments::{mean, std_dev};
use super::quantile::{median_abs_dev_of_sorted, median_of_sorted, percentile_of_sorted};
use super::regression::{r_squared, slope};

/// A bootstrap point estimate with a two-sided confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// The statistic computed on the full, non-resampled sample.
    pub point: f64,
    /// Standard deviation of the bootstrap distribution.
    pub standard_error: f64,
    /// Lower confidence bound.
    pub lower_bound: f64,
    /// Upper confidence bound.
    pub upper_bound: f64,
    /// Confidence level of the bounds, in (0, 1).
    pub confidence_level: f64,
}

impl Estimate {
    /// Create an estimate.
    ///
    /// # Panics
    ///
    /// Panics if `confidence_level` is outside (0, 1).
    pub fn new(
        point: f64,
        standard_error: f64,
        lower_bound: f64,
        upper_bound: f64,
        confidence_level: f64,
    ) -> Self {
        assert!(
            confidence_level > 0.0 && confidence_level < 1.0,
            "confidence level must be in (0, 1)"
        );
        Self {
            point,
            standard_error,
            lower_bound,
            upper_bound,
            confidence_level,
        }
    }
}

/// An estimate together with the bootstrap distribution that produced it,
/// kept for inspection and plotting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateAndDistribution {
    /// The derived estimate.
    pub estimate: Estimate,
    /// Bootstrap statistic values in generation order.
    pub distribution: Vec<f64>,
}

impl EstimateAndDistribution {
    /// Build an estimate from a point statistic and its bootstrap
    /// distribution.
    ///
    /// A sorted copy of the distribution provides the standard error and
    /// the percentile bounds at `50·(1 − cl)` and `50·(1 + cl)`; the
    /// distribution itself is retained in generation order.
    pub fn from_distribution(point: f64, distribution: Vec<f64>, confidence_level: f64) -> Self {
        let mut sorted = distribution.clone();
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));

        let estimate = Estimate::new(
            point,
            std_dev(&sorted),
            percentile_of_sorted(&sorted, 50.0 * (1.0 - confidence_level)),
            percentile_of_sorted(&sorted, 50.0 * (1.0 + confidence_level)),
            confidence_level,
        );

        Self {
            estimate,
            distribution,
        }
    }
}

/// Bootstrap estimates for every statistic the engine reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatedStatistics {
    /// Mean per-iteration time.
    pub mean: EstimateAndDistribution,
    /// Median per-iteration time.
    pub median: EstimateAndDistribution,
    /// Standard deviation of per-iteration times.
    pub std_dev: EstimateAndDistribution,
    /// Median absolute deviation of per-iteration times.
    pub median_abs_dev: EstimateAndDistribution,
    /// Through-origin regression slope of elapsed time against iteration
    /// count (the "linear least squares" per-iteration cost).
    pub slope: EstimateAndDistribution,
    /// Coefficient of determination of the regression fit.
    pub r_squared: EstimateAndDistribution,
}

/// Draw `num_resamples` resamples from `sample` and hand each to `f`.
///
/// Each resample is `sample.len()` draws with replacement, indices chosen
/// uniformly by a Xoshiro256++ stream seeded with `seed`. The buffer
/// passed to `f` may be reordered freely by the callback.
///
/// # Panics
///
/// Panics if `sample` is empty or `num_resamples` is zero.
pub fn resample<T, F>(sample: &[T], num_resamples: u32, seed: u64, mut f: F)
where
    T: Copy,
    F: FnMut(&mut [T]),
{
    assert!(!sample.is_empty(), "resampling requires a non-empty sample");
    assert!(num_resamples >= 1, "must resample at least once");

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let n = sample.len();
    let mut resampled = sample.to_vec();

    for _ in 0..num_resamples {
        for slot in resampled.iter_mut() {
            *slot = sample[rng.random_range(0..n)];
        }
        f(&mut resampled);
    }
}

/// Bootstrap confidence intervals for all reported statistics, with a seed
/// drawn from the thread RNG.
pub fn estimate_statistics(
    measurements: &[Measurement],
    times: &[f64],
    num_resamples: u32,
    confidence_level: f64,
) -> EstimatedStatistics {
    let seed = rand::rng().random();
    estimate_statistics_seeded(measurements, times, num_resamples, confidence_level, seed)
}

/// Bootstrap confidence intervals with an explicit seed.
///
/// Deterministic: the same inputs and seed produce bit-identical
/// distributions and estimates.
///
/// # Panics
///
/// Panics if the sample is empty, if `times` is not one-to-one with
/// `measurements`, if `num_resamples` is zero, or if `confidence_level` is
/// outside (0, 1).
pub fn estimate_statistics_seeded(
    measurements: &[Measurement],
    times: &[f64],
    num_resamples: u32,
    confidence_level: f64,
    seed: u64,
) -> EstimatedStatistics {
    assert!(!times.is_empty(), "estimation requires a non-empty sample");
    assert_eq!(
        measurements.len(),
        times.len(),
        "times must be derived one-to-one from measurements"
    );

    let points = points_from_measurements(measurements);

    tracing::debug!(num_resamples, confidence_level, "bootstrapping sample");

    let ((slopes, r2s), ((medians, mads), (means, std_devs))) = rayon::join(
        // Regression pass, on the initiating thread.
        || {
            let mut slopes = Vec::with_capacity(num_resamples as usize);
            let mut r2s = Vec::with_capacity(num_resamples as usize);
            resample(&points, num_resamples, seed, |ps| {
                let s = slope(ps);
                slopes.push(s);
                r2s.push(r_squared(ps, s));
            });
            (slopes, r2s)
        },
        || {
            rayon::join(
                // Sorted pass: statistics that need an ordered resample.
                || {
                    let mut medians = Vec::with_capacity(num_resamples as usize);
                    let mut mads = Vec::with_capacity(num_resamples as usize);
                    let mut mad_buffer = Vec::with_capacity(times.len());
                    resample(times, num_resamples, seed, |s| {
                        s.sort_unstable_by(|a, b| a.total_cmp(b));
                        medians.push(median_of_sorted(s));
                        mads.push(median_abs_dev_of_sorted(s, &mut mad_buffer));
                    });
                    (medians, mads)
                },
                // Moments pass: no ordering required.
                || {
                    let mut means = Vec::with_capacity(num_resamples as usize);
                    let mut std_devs = Vec::with_capacity(num_resamples as usize);
                    resample(times, num_resamples, seed, |s| {
                        means.push(mean(s));
                        std_devs.push(std_dev(s));
                    });
                    (means, std_devs)
                },
            )
        },
    );

    // Point statistics come from the full, non-resampled sample.
    let mut sorted_sample = times.to_vec();
    sorted_sample.sort_unstable_by(|a, b| a.total_cmp(b));
    let mut mad_buffer = Vec::with_capacity(times.len());

    let mean_point = mean(&sorted_sample);
    let median_point = median_of_sorted(&sorted_sample);
    let std_dev_point = std_dev(&sorted_sample);
    let mad_point = median_abs_dev_of_sorted(&sorted_sample, &mut mad_buffer);
    let slope_point = slope(&points);
    let r2_point = r_squared(&points, slope_point);

    EstimatedStatistics {
        mean: EstimateAndDistribution::from_distribution(mean_point, means, confidence_level),
        median: EstimateAndDistribution::from_distribution(median_point, medians, confidence_level),
        std_dev: EstimateAndDistribution::from_distribution(
            std_dev_point,
            std_devs,
            confidence_level,
        ),
        median_abs_dev: EstimateAndDistribution::from_distribution(
            mad_point,
            mads,
            confidence_level,
        ),
        slope: EstimateAndDistribution::from_distribution(slope_point, slopes, confidence_level),
        r_squared: EstimateAndDistribution::from_distribution(r2_point, r2s, confidence_level),
    }
}
