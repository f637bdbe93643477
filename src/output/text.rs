//! Plain-text progress and result reporting.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;

use crate::reporter::Reporter;
use crate::statistics::{Estimate, EstimatedStatistics, Outliers};
use crate::types::{ItersForDuration, Measurement};

use super::format::format_time;

/// Writes human-readable progress and estimate summaries to any
/// [`Write`] sink.
///
/// Write errors are ignored: a reporting failure must never abort a
/// benchmark run.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn format_estimate(e: &Estimate) -> String {
        format!(
            "{} +/- {} [{} {}] {}% CI",
            format_time(e.point),
            format_time(e.standard_error),
            format_time(e.lower_bound),
            format_time(e.upper_bound),
            e.confidence_level * 100.0
        )
    }
}

impl TextReporter<std::io::Stdout> {
    /// Create a reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn suite_starting(&mut self, clock: &str, is_steady: bool) {
        let steadiness = if is_steady { "steady" } else { "unsteady" };
        let _ = writeln!(
            self.out,
            "Benchmarking with `{clock}` which is {steadiness}"
        );
    }

    fn estimate_clock_cost_starting(&mut self) {
        let _ = writeln!(self.out, "Estimating the cost of the clock");
    }

    fn estimate_clock_cost_ended(&mut self, cost_ns: f64) {
        let _ = writeln!(self.out, "> Median: {}\n", format_time(cost_ns));
    }

    fn benchmark_starting(&mut self, name: &str) {
        let _ = writeln!(self.out, "Benchmarking {}", name.bold());
    }

    fn warm_up_starting(&mut self, duration: Duration) {
        let _ = writeln!(self.out, "> Warming up for {} ms", duration.as_millis());
    }

    fn warm_up_ended(&mut self, wu: &ItersForDuration) {
        let _ = writeln!(
            self.out,
            "> Warmed up to {} iterations in {}",
            wu.iters,
            format_time(wu.elapsed.as_nanos() as f64)
        );
    }

    fn measurement_collection_starting(&mut self, num_measurements: u32, estimated_ns: f64) {
        let _ = writeln!(
            self.out,
            "> Collecting {num_measurements} measurements in estimated {}",
            format_time(estimated_ns)
        );
    }

    fn measurement_collection_ended(
        &mut self,
        _measurements: &[Measurement],
        _times: &[f64],
        outliers: &Outliers,
    ) {
        let total = outliers.num_outliers();
        let sample_size = outliers.len();
        let percent = |n: usize| 100.0 * n as f64 / sample_size as f64;

        let summary = format!(
            "> Found {total} outliers among {sample_size} measurements ({:.2}%)",
            percent(total)
        );
        let _ = if total == 0 {
            writeln!(self.out, "{summary}")
        } else {
            writeln!(self.out, "{}", summary.yellow())
        };

        if total == 0 {
            return;
        }

        let mut bucket = |n: usize, severity: &str| {
            if n > 0 {
                let _ = writeln!(self.out, "  > {n} ({:.2}%) {severity}", percent(n));
            }
        };
        bucket(outliers.low_severe.len(), "low severe");
        bucket(outliers.low_mild.len(), "low mild");
        bucket(outliers.high_mild.len(), "high mild");
        bucket(outliers.high_severe.len(), "high severe");
    }

    fn estimate_statistics_starting(&mut self, num_resamples: u32) {
        let _ = writeln!(self.out, "> Estimating statistics");
        let _ = writeln!(
            self.out,
            "  > Bootstrapping sample with {num_resamples} resamples"
        );
    }

    fn estimate_statistics_ended(&mut self, statistics: &EstimatedStatistics) {
        let rows = [
            ("mean  ", &statistics.mean),
            ("median", &statistics.median),
            ("SD    ", &statistics.std_dev),
            ("MAD   ", &statistics.median_abs_dev),
            ("slope ", &statistics.slope),
        ];
        for (label, stat) in rows {
            let _ = writeln!(
                self.out,
                "  > {label} {}",
                Self::format_estimate(&stat.estimate)
            );
        }

        let r2 = &statistics.r_squared.estimate;
        let _ = writeln!(
            self.out,
            "  > r^2    {:.7} +/- {:.7} [{:.7} {:.7}] {}% CI\n",
            r2.point,
            r2.standard_error,
            r2.lower_bound,
            r2.upper_bound,
            r2.confidence_level * 100.0
        );
    }
}
