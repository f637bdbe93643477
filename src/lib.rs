//! # chronometry
//!
//! Statistically rigorous microbenchmarking: given a callable unit of
//! work, estimate its true per-call cost with bootstrap confidence
//! intervals, outlier classification, and overhead cancellation, robust to
//! OS scheduling noise and clock jitter.
//!
//! The pipeline for each benchmark:
//! 1. **Calibration** doubles an iteration count inside a warm-up budget
//!    until run times are no longer dominated by clock resolution.
//! 2. **Collection** takes measurements with linearly increasing iteration
//!    counts, so regressing elapsed time against iteration count through
//!    the origin cancels fixed per-measurement overhead.
//! 3. **Classification** buckets per-iteration times by Tukey-fence
//!    severity.
//! 4. **Estimation** bootstraps confidence intervals for the mean, median,
//!    standard deviation, MAD, regression slope, and r².
//!
//! Progress and results flow through a [`Reporter`]; rendering lives
//! outside the measurement core.
//!
//! ## Quick start
//!
//! ```no_run
//! use chronometry::{black_box, Config, Suite, TextReporter};
//!
//! let mut reporter = TextReporter::stdout();
//! Suite::with_config(&mut reporter, Config::quick())
//!     .bench("sum 1..1000", || {
//!         black_box((1..1000u64).sum::<u64>());
//!     })
//!     .bench_with_stopwatch("sort", |sw| {
//!         let mut data: Vec<u32> = (0..1000).rev().collect(); // untimed setup
//!         sw.measure(|| data.sort_unstable());
//!     });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod clock;
mod config;
mod reporter;
mod suite;
mod types;

pub mod measurement;
pub mod output;
pub mod statistics;

pub use clock::{Clock, MonotonicClock};
pub use config::Config;
pub use measurement::{black_box, Routine, Stopwatch};
pub use output::TextReporter;
pub use reporter::{MultiReporter, Reporter};
pub use statistics::{
    Estimate, EstimateAndDistribution, EstimatedStatistics, Outliers, Quartiles, Thresholds,
};
pub use suite::Suite;
pub use types::{
    points_from_measurements, times_from_measurements, ItersForDuration, Measurement,
    Measurements, Point, Points, Times,
};
