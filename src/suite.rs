//! The suite driver: runs benchmarks one after another and pushes
//! lifecycle notifications to a reporter.

use std::marker::PhantomData;

use crate::clock::{Clock, MonotonicClock};
use crate::config::Config;
use crate::measurement::{
    base_iters, black_box, collect, total_iters, warm_up, ExplicitRoutine, ImplicitRoutine,
    Routine, Stopwatch,
};
use crate::reporter::Reporter;
use crate::statistics::{estimate_statistics, median, Outliers};
use crate::types::{times_from_measurements, Measurements};

/// Runs a suite of benchmarks against the clock capability `C`.
///
/// Constructing the suite fires `suite_starting` (and the optional
/// clock-cost estimation); dropping it fires `suite_ended`. Benchmarks run
/// strictly one after another in call order.
///
/// # Example
///
/// ```no_run
/// use chronometry::{black_box, Config, Suite, TextReporter};
///
/// let mut reporter = TextReporter::stdout();
/// Suite::with_config(&mut reporter, Config::quick())
///     .bench("fib 20", || {
///         black_box(fibonacci(black_box(20)));
///     });
///
/// fn fibonacci(n: u64) -> u64 {
///     if n < 2 { n } else { fibonacci(n - 1) + fibonacci(n - 2) }
/// }
/// ```
pub struct Suite<'r, C: Clock = MonotonicClock> {
    config: Config,
    reporter: &'r mut dyn Reporter,
    _clock: PhantomData<C>,
}

impl<'r> Suite<'r, MonotonicClock> {
    /// Start a suite with the default configuration on the default
    /// monotonic clock.
    pub fn new(reporter: &'r mut dyn Reporter) -> Self {
        Self::with_config(reporter, Config::default())
    }

    /// Start a suite with `config` on the default monotonic clock.
    pub fn with_config(reporter: &'r mut dyn Reporter, config: Config) -> Self {
        Self::on_clock(reporter, config)
    }
}

impl<'r, C: Clock> Suite<'r, C> {
    /// Start a suite on a caller-chosen clock capability.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    pub fn on_clock(reporter: &'r mut dyn Reporter, config: Config) -> Self {
        if let Err(message) = config.validate() {
            panic!("invalid configuration: {message}");
        }

        reporter.suite_starting(C::name(), C::IS_STEADY);

        if config.estimate_clock_cost {
            estimate_clock_cost::<C>(&config, &mut *reporter);
        }

        Self {
            config,
            reporter,
            _clock: PhantomData,
        }
    }

    /// Benchmark a closure. The harness loops it the scheduled number of
    /// times and times the whole loop.
    pub fn bench<F: FnMut()>(&mut self, name: &str, f: F) -> &mut Self {
        let mut routine = ImplicitRoutine(f);
        run_benchmark::<C, _>(name, &mut routine, &self.config, &mut *self.reporter);
        self
    }

    /// Benchmark a routine that drives the stopwatch itself.
    ///
    /// The routine receives `&mut Stopwatch` once per timed run and must
    /// call [`Stopwatch::measure`] exactly once; code around that call
    /// (setup, teardown) stays outside the timed region.
    pub fn bench_with_stopwatch<F>(&mut self, name: &str, f: F) -> &mut Self
    where
        F: FnMut(&mut Stopwatch<C>),
    {
        let mut routine = ExplicitRoutine(f);
        run_benchmark::<C, _>(name, &mut routine, &self.config, &mut *self.reporter);
        self
    }
}

impl<C: Clock> Drop for Suite<'_, C> {
    fn drop(&mut self) {
        self.reporter.suite_ended();
    }
}

/// Run the full per-benchmark pipeline: warm-up, collection, outlier
/// classification, bootstrap estimation.
fn run_benchmark<C, R>(name: &str, routine: &mut R, config: &Config, reporter: &mut dyn Reporter)
where
    C: Clock,
    R: Routine<C>,
{
    tracing::info!(name, "benchmark starting");
    reporter.benchmark_starting(name);

    let measurements = measure::<C, R>(routine, config, reporter);

    let times = times_from_measurements(&measurements);
    let outliers = Outliers::classify(&times);
    reporter.measurement_collection_ended(&measurements, &times, &outliers);

    reporter.estimate_statistics_starting(config.num_resamples);
    let statistics = estimate_statistics(
        &measurements,
        &times,
        config.num_resamples,
        config.confidence_level,
    );
    reporter.estimate_statistics_ended(&statistics);

    reporter.benchmark_ended();
}

/// Warm up, plan the schedule from the calibrated cost, and collect.
fn measure<C, R>(routine: &mut R, config: &Config, reporter: &mut dyn Reporter) -> Measurements
where
    C: Clock,
    R: Routine<C> + ?Sized,
{
    reporter.warm_up_starting(config.warm_up_time);
    let wu = warm_up::<C, R>(routine, config.warm_up_time);
    reporter.warm_up_ended(&wu);

    let mean_ns = wu.mean_time_per_iter_ns();
    let base = base_iters(config.measurement_time, mean_ns, config.num_measurements);
    let estimated_ns = total_iters(base, config.num_measurements) as f64 * mean_ns;

    reporter.measurement_collection_starting(config.num_measurements, estimated_ns);
    collect::<C, R>(routine, config.num_measurements, base)
}

/// Estimate the median cost of one clock reading.
///
/// The cost is only reported; it is not used in any statistic.
fn estimate_clock_cost<C: Clock>(config: &Config, reporter: &mut dyn Reporter) -> f64 {
    reporter.estimate_clock_cost_starting();

    let mut routine = ImplicitRoutine(|| {
        black_box(C::now());
    });
    let measurements = measure::<C, _>(&mut routine, config, reporter);
    let times = times_from_measurements(&measurements);
    let cost = median(&times);

    reporter.estimate_clock_cost_ended(cost);
    cost
}
