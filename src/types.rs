//! Shared value types: measurements and the samples derived from them.

use std::time::Duration;

use serde::Serialize;

/// A single timed run: `iters` executions of the unit of work and the wall
/// time they took.
///
/// Immutable once created. One benchmark produces a vector of these, with
/// linearly increasing iteration counts (see the measurement collector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Number of iterations executed during the run.
    pub iters: u64,
    /// Wall time elapsed over all `iters` iterations.
    pub elapsed: Duration,
}

impl Measurement {
    /// Create a measurement.
    ///
    /// # Panics
    ///
    /// Panics if `iters` is zero.
    pub fn new(iters: u64, elapsed: Duration) -> Self {
        assert!(iters >= 1, "a measurement must cover at least one iteration");
        Self { iters, elapsed }
    }

    /// Estimated per-iteration time in nanoseconds.
    pub fn time_per_iter_ns(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.iters as f64
    }
}

/// The measurements taken for one benchmark, in collection order.
pub type Measurements = Vec<Measurement>;

/// Per-iteration duration estimates in nanoseconds, one per measurement.
///
/// This is the "sample" handed to the outlier classifier, the KDE, and the
/// non-regression bootstrap passes.
pub type Times = Vec<f64>;

/// An (x, y) pair.
///
/// Carries (iteration count, elapsed ns) for the through-origin regression,
/// and (location, density) on the KDE output curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of points.
pub type Points = Vec<Point>;

/// Result of warm-up calibration: the iteration count reached and the
/// elapsed time of the final timed run at that count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItersForDuration {
    /// Iteration count of the final calibration run.
    pub iters: u64,
    /// Elapsed time of that run.
    pub elapsed: Duration,
}

impl ItersForDuration {
    /// Mean per-iteration time in nanoseconds, used to plan the
    /// measurement schedule.
    pub fn mean_time_per_iter_ns(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.iters as f64
    }
}

/// Derive the per-iteration time sample from a set of measurements.
pub fn times_from_measurements(measurements: &[Measurement]) -> Times {
    measurements.iter().map(Measurement::time_per_iter_ns).collect()
}

/// Derive the (iterations, elapsed ns) regression points from a set of
/// measurements, one per measurement, in order.
pub fn points_from_measurements(measurements: &[Measurement]) -> Points {
    measurements
        .iter()
        .map(|m| Point::new(m.iters as f64, m.elapsed.as_nanos() as f64))
        .collect()
}
