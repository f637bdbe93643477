//! Benchmark lifecycle observers.

use std::time::Duration;

use crate::statistics::{EstimatedStatistics, Outliers};
use crate::types::{ItersForDuration, Measurement};

/// Receives ordered lifecycle notifications while a suite runs.
///
/// Every method has a no-op default, so implementations override only the
/// notifications they consume. For one suite the call order is fixed:
/// `suite_starting`, an optional clock-cost estimation, then per benchmark
/// `benchmark_starting` → warm-up events → measurement-collection events →
/// statistics events → `benchmark_ended`, and finally `suite_ended`.
#[allow(unused_variables)]
pub trait Reporter {
    /// A suite is starting on the named clock.
    fn suite_starting(&mut self, clock: &str, is_steady: bool) {}

    /// Clock-cost estimation is about to run.
    fn estimate_clock_cost_starting(&mut self) {}

    /// Clock-cost estimation finished; `cost_ns` is the median cost of one
    /// clock reading in nanoseconds.
    fn estimate_clock_cost_ended(&mut self, cost_ns: f64) {}

    /// A benchmark is starting.
    fn benchmark_starting(&mut self, name: &str) {}

    /// Warm-up is starting with the given budget.
    fn warm_up_starting(&mut self, duration: Duration) {}

    /// Warm-up finished at the reported iteration count.
    fn warm_up_ended(&mut self, wu: &ItersForDuration) {}

    /// Reserved for calibration budgets that could not be honored; the
    /// engine does not currently emit it.
    fn warm_up_failed(&mut self, wu: &ItersForDuration) {}

    /// Measurement collection is starting; `estimated_ns` is the
    /// predicted total collection time in nanoseconds.
    fn measurement_collection_starting(&mut self, num_measurements: u32, estimated_ns: f64) {}

    /// Measurement collection finished with the raw measurements, the
    /// derived time sample, and its outlier classification.
    fn measurement_collection_ended(
        &mut self,
        measurements: &[Measurement],
        times: &[f64],
        outliers: &Outliers,
    ) {
    }

    /// Bootstrap estimation is starting.
    fn estimate_statistics_starting(&mut self, num_resamples: u32) {}

    /// Bootstrap estimation finished.
    fn estimate_statistics_ended(&mut self, statistics: &EstimatedStatistics) {}

    /// The current benchmark is done.
    fn benchmark_ended(&mut self) {}

    /// The suite is done.
    fn suite_ended(&mut self) {}
}

/// Broadcasts every notification to a list of reporters, in registration
/// order.
#[derive(Default)]
pub struct MultiReporter<'a> {
    reporters: Vec<&'a mut dyn Reporter>,
}

impl<'a> MultiReporter<'a> {
    /// Create an empty broadcast composite.
    pub fn new() -> Self {
        Self {
            reporters: Vec::new(),
        }
    }

    /// Register a reporter; it will receive every subsequent notification
    /// after all previously registered reporters.
    pub fn add(&mut self, reporter: &'a mut dyn Reporter) -> &mut Self {
        self.reporters.push(reporter);
        self
    }
}

impl Reporter for MultiReporter<'_> {
    fn suite_starting(&mut self, clock: &str, is_steady: bool) {
        for r in &mut self.reporters {
            r.suite_starting(clock, is_steady);
        }
    }

    fn estimate_clock_cost_starting(&mut self) {
        for r in &mut self.reporters {
            r.estimate_clock_cost_starting();
        }
    }

    fn estimate_clock_cost_ended(&mut self, cost_ns: f64) {
        for r in &mut self.reporters {
            r.estimate_clock_cost_ended(cost_ns);
        }
    }

    fn benchmark_starting(&mut self, name: &str) {
        for r in &mut self.reporters {
            r.benchmark_starting(name);
        }
    }

    fn warm_up_starting(&mut self, duration: Duration) {
        for r in &mut self.reporters {
            r.warm_up_starting(duration);
        }
    }

    fn warm_up_ended(&mut self, wu: &ItersForDuration) {
        for r in &mut self.reporters {
            r.warm_up_ended(wu);
        }
    }

    fn warm_up_failed(&mut self, wu: &ItersForDuration) {
        for r in &mut self.reporters {
            r.warm_up_failed(wu);
        }
    }

    fn measurement_collection_starting(&mut self, num_measurements: u32, estimated_ns: f64) {
        for r in &mut self.reporters {
            r.measurement_collection_starting(num_measurements, estimated_ns);
        }
    }

    fn measurement_collection_ended(
        &mut self,
        measurements: &[Measurement],
        times: &[f64],
        outliers: &Outliers,
    ) {
        for r in &mut self.reporters {
            r.measurement_collection_ended(measurements, times, outliers);
        }
    }

    fn estimate_statistics_starting(&mut self, num_resamples: u32) {
        for r in &mut self.reporters {
            r.estimate_statistics_starting(num_resamples);
        }
    }

    fn estimate_statistics_ended(&mut self, statistics: &EstimatedStatistics) {
        for r in &mut self.reporters {
            r.estimate_statistics_ended(statistics);
        }
    }

    fn benchmark_ended(&mut self) {
        for r in &mut self.reporters {
            r.benchmark_ended();
        }
    }

    fn suite_ended(&mut self) {
        for r in &mut self.reporters {
            r.suite_ended();
        }
    }
}
