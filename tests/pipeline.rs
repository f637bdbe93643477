//! End-to-end pipeline tests against the real monotonic clock.

use std::time::Duration;

use chronometry::{
    black_box, Config, EstimatedStatistics, Measurement, MultiReporter, Outliers, Reporter, Suite,
    TextReporter,
};

/// Captures the notification sequence and the payloads needed for
/// invariant checks.
#[derive(Default)]
struct RecordingReporter {
    events: Vec<String>,
    num_measurements: usize,
    sample_size: usize,
    bucket_total: usize,
    statistics: Option<EstimatedStatistics>,
}

impl Reporter for RecordingReporter {
    fn suite_starting(&mut self, clock: &str, is_steady: bool) {
        self.events.push(format!("suite_starting({clock},{is_steady})"));
    }

    fn benchmark_starting(&mut self, name: &str) {
        self.events.push(format!("benchmark_starting({name})"));
    }

    fn warm_up_starting(&mut self, _duration: Duration) {
        self.events.push("warm_up_starting".into());
    }

    fn warm_up_ended(&mut self, wu: &chronometry::ItersForDuration) {
        assert!(wu.iters >= 1);
        self.events.push("warm_up_ended".into());
    }

    fn measurement_collection_starting(&mut self, num_measurements: u32, estimated_ns: f64) {
        assert!(estimated_ns > 0.0);
        self.num_measurements = num_measurements as usize;
        self.events.push("measurement_collection_starting".into());
    }

    fn measurement_collection_ended(
        &mut self,
        measurements: &[Measurement],
        times: &[f64],
        outliers: &Outliers,
    ) {
        self.sample_size = times.len();
        self.bucket_total = outliers.len();

        assert_eq!(measurements.len(), times.len());

        // The schedule is linear: measurement i runs i * base iterations.
        let base = measurements[0].iters;
        for (i, m) in measurements.iter().enumerate() {
            assert_eq!(m.iters, (i as u64 + 1) * base);
        }

        self.events.push("measurement_collection_ended".into());
    }

    fn estimate_statistics_starting(&mut self, _num_resamples: u32) {
        self.events.push("estimate_statistics_starting".into());
    }

    fn estimate_statistics_ended(&mut self, statistics: &EstimatedStatistics) {
        self.statistics = Some(statistics.clone());
        self.events.push("estimate_statistics_ended".into());
    }

    fn benchmark_ended(&mut self) {
        self.events.push("benchmark_ended".into());
    }

    fn suite_ended(&mut self) {
        self.events.push("suite_ended".into());
    }
}

fn fast_config() -> Config {
    Config::new()
        .warm_up_time(Duration::from_millis(2))
        .measurement_time(Duration::from_millis(10))
        .num_measurements(10)
        .num_resamples(200)
}

fn busy_work() -> u64 {
    black_box((1..64u64).fold(0, |acc, x| acc.wrapping_add(x * x)))
}

#[test]
fn full_pipeline_reports_in_order_and_holds_invariants() {
    let mut recorder = RecordingReporter::default();

    {
        let mut suite = Suite::with_config(&mut recorder, fast_config());
        suite.bench("busy work", || {
            busy_work();
        });
    }

    assert_eq!(
        recorder.events,
        vec![
            "suite_starting(monotonic,true)",
            "benchmark_starting(busy work)",
            "warm_up_starting",
            "warm_up_ended",
            "measurement_collection_starting",
            "measurement_collection_ended",
            "estimate_statistics_starting",
            "estimate_statistics_ended",
            "benchmark_ended",
            "suite_ended",
        ]
    );

    // Outlier buckets partition the sample.
    assert_eq!(recorder.sample_size, recorder.num_measurements);
    assert_eq!(recorder.bucket_total, recorder.sample_size);

    // Confidence bounds are ordered and estimates are positive times.
    let stats = recorder.statistics.expect("statistics were reported");
    for e in [
        &stats.mean.estimate,
        &stats.median.estimate,
        &stats.std_dev.estimate,
        &stats.median_abs_dev.estimate,
        &stats.slope.estimate,
        &stats.r_squared.estimate,
    ] {
        assert!(e.lower_bound <= e.upper_bound);
    }
    assert!(stats.mean.estimate.point > 0.0);
    assert!(stats.slope.estimate.point > 0.0);
    assert_eq!(stats.mean.distribution.len(), 200);
}

#[test]
fn explicit_stopwatch_benchmarks_complete() {
    let mut recorder = RecordingReporter::default();

    {
        let mut suite = Suite::with_config(&mut recorder, fast_config());
        suite.bench_with_stopwatch("with setup", |sw| {
            let data: Vec<u64> = (0..32).collect(); // untimed setup
            sw.measure(|| {
                black_box(data.iter().sum::<u64>());
            });
        });
    }

    assert!(recorder.events.contains(&"benchmark_ended".to_string()));
    assert_eq!(recorder.events.last().unwrap(), "suite_ended");
}

#[test]
fn multiple_benchmarks_run_back_to_back() {
    let mut recorder = RecordingReporter::default();

    {
        let mut suite = Suite::with_config(&mut recorder, fast_config());
        suite
            .bench("first", || {
                busy_work();
            })
            .bench("second", || {
                busy_work();
            });
    }

    let names: Vec<_> = recorder
        .events
        .iter()
        .filter(|e| e.starts_with("benchmark_starting"))
        .collect();
    assert_eq!(
        names,
        vec!["benchmark_starting(first)", "benchmark_starting(second)"]
    );

    let ends = recorder
        .events
        .iter()
        .filter(|e| *e == "benchmark_ended")
        .count();
    assert_eq!(ends, 2);
}

#[test]
fn broadcast_reaches_text_and_recording_reporters() {
    let mut recorder = RecordingReporter::default();
    let mut text = TextReporter::new(Vec::new());

    {
        let mut multi = MultiReporter::new();
        multi.add(&mut recorder).add(&mut text);

        let mut suite = Suite::with_config(&mut multi, fast_config());
        suite.bench("broadcast", || {
            busy_work();
        });
    }

    assert_eq!(recorder.events.last().unwrap(), "suite_ended");
    let rendered = String::from_utf8(text.into_inner()).unwrap();
    assert!(rendered.contains("Benchmarking"));
    assert!(rendered.contains("resamples"));
    assert!(rendered.contains("mean"));
}
