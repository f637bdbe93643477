//! Statistical methods over measurement samples.
//!
//! This module provides the analysis half of the pipeline:
//! - moment and quantile primitives (mean, variance, interpolated
//!   percentiles, MAD)
//! - outlier classification via Tukey's fences
//! - linear regression through the origin for overhead cancellation
//! - Gaussian kernel density estimation with Scott's bandwidth rule
//! - the bootstrap resampling engine and its confidence intervals

mod bootstrap;
mod kde;
mod moments;
mod outliers;
mod quantile;
mod regression;

pub use bootstrap::{
    estimate_statistics, estimate_statistics_seeded, resample, Estimate, EstimateAndDistribution,
    EstimatedStatistics,
};
pub use kde::{bandwidth_scott, gaussian_pdf, kde, linspace, DEFAULT_KDE_POINTS};
pub use moments::{mean, std_dev, sum, variance};
pub use outliers::{Outliers, Thresholds};
pub use quantile::{
    median, median_abs_dev_of_sorted, median_of_sorted, median_select, percentile,
    percentile_of_sorted, quartiles, Quartiles,
};
pub use regression::{r_squared, slope};
