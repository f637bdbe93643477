//! Measurement scheduling and collection.
//!
//! Iteration counts grow linearly across the collected measurements so
//! that regressing elapsed time against iteration count cancels the fixed
//! per-measurement overhead (clock reads, loop setup).

use std::time::Duration;

use crate::clock::Clock;
use crate::types::{Measurement, Measurements};

use super::stopwatch::{time_routine, Routine};

/// Closed-form base iteration count.
///
/// With measurement `i` running `i · base` iterations (i = 1..N), the
/// schedule's total run time is `base · N·(N+1)/2 · mean_time_per_iter`;
/// solving for the target `measurement_time` gives
/// `base = ceil(2·T / mean_time_per_iter / (N·(N+1)))`.
///
/// # Panics
///
/// Panics if `num_measurements` is zero or the mean iteration time is not
/// positive.
pub fn base_iters(
    measurement_time: Duration,
    mean_time_per_iter_ns: f64,
    num_measurements: u32,
) -> u64 {
    assert!(num_measurements >= 1, "at least one measurement must be taken");
    assert!(
        mean_time_per_iter_ns > 0.0,
        "mean iteration time must be positive"
    );

    let mt = measurement_time.as_nanos() as f64;
    let nm = f64::from(num_measurements);

    (2.0 * mt / mean_time_per_iter_ns / (nm * (nm + 1.0))).ceil() as u64
}

/// Total iterations across the whole schedule,
/// `base_iters · N·(N+1)/2`.
pub fn total_iters(base_iters: u64, num_measurements: u32) -> u64 {
    let n = u64::from(num_measurements);
    base_iters * n * (n + 1) / 2
}

/// Take `num_measurements` measurements of `routine`; the i-th (1-based)
/// measurement runs `i · base_iters` iterations as an independent
/// stopwatch run.
///
/// # Panics
///
/// Panics if `num_measurements` or `base_iters` is zero.
pub fn collect<C, R>(routine: &mut R, num_measurements: u32, base_iters: u64) -> Measurements
where
    C: Clock,
    R: Routine<C> + ?Sized,
{
    assert!(num_measurements >= 1, "at least one measurement must be taken");
    assert!(
        base_iters >= 1,
        "base iteration count must be at least one; the measurement time is too short for the calibrated cost"
    );

    tracing::debug!(num_measurements, base_iters, "collecting measurements");

    (1..=u64::from(num_measurements))
        .map(|i| {
            let iters = i * base_iters;
            Measurement::new(iters, time_routine(routine, iters))
        })
        .collect()
}
