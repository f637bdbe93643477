//! Benchmark suite configuration.

use std::time::Duration;

/// Options controlling calibration, measurement, and bootstrap estimation.
///
/// Builder methods validate their argument and panic on an out-of-range
/// value; a wrong setting silently accepted would surface later as wrong
/// statistics presented as valid.
#[derive(Debug, Clone)]
pub struct Config {
    /// Confidence level for bootstrap intervals, in (0, 1).
    pub confidence_level: f64,

    /// Target total time for one benchmark's measurement collection.
    ///
    /// Not a strict upper bound; the actual collection usually runs a bit
    /// longer than this.
    pub measurement_time: Duration,

    /// Number of bootstrap resamples per statistic.
    pub num_resamples: u32,

    /// Number of measurements to take per benchmark.
    pub num_measurements: u32,

    /// Warm-up budget spent calibrating the iteration count before
    /// measurement begins.
    pub warm_up_time: Duration,

    /// Whether to estimate the cost of a clock reading before the first
    /// benchmark. The cost is only reported; it is not used in any
    /// statistic.
    pub estimate_clock_cost: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            measurement_time: Duration::from_millis(10_000),
            num_resamples: 100_000,
            num_measurements: 100,
            warm_up_time: Duration::from_millis(5_000),
            estimate_clock_cost: false,
        }
    }
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A reduced-cost preset for quick local runs.
    pub fn quick() -> Self {
        Self {
            measurement_time: Duration::from_millis(100),
            num_resamples: 1_000,
            num_measurements: 25,
            warm_up_time: Duration::from_millis(20),
            ..Self::default()
        }
    }

    /// Set the confidence level used for every bootstrap interval.
    pub fn confidence_level(mut self, cl: f64) -> Self {
        assert!(cl > 0.0 && cl < 1.0, "confidence level must be in (0, 1)");
        self.confidence_level = cl;
        self
    }

    /// Set the target total measurement time.
    pub fn measurement_time(mut self, time: Duration) -> Self {
        assert!(!time.is_zero(), "measurement time must be positive");
        self.measurement_time = time;
        self
    }

    /// Set the number of bootstrap resamples.
    pub fn num_resamples(mut self, n: u32) -> Self {
        assert!(n >= 1, "must resample at least once");
        self.num_resamples = n;
        self
    }

    /// Set the number of measurements to take.
    pub fn num_measurements(mut self, n: u32) -> Self {
        assert!(n >= 1, "at least one measurement must be taken");
        self.num_measurements = n;
        self
    }

    /// Set the warm-up budget.
    pub fn warm_up_time(mut self, time: Duration) -> Self {
        assert!(!time.is_zero(), "warm-up time must be positive");
        self.warm_up_time = time;
        self
    }

    /// Enable or disable clock-cost estimation.
    pub fn estimate_clock_cost(mut self, estimate: bool) -> Self {
        self.estimate_clock_cost = estimate;
        self
    }

    /// Check every option against its validity constraint.
    pub fn validate(&self) -> Result<(), String> {
        if self.confidence_level <= 0.0 || self.confidence_level >= 1.0 {
            return Err("confidence_level must be in (0, 1)".to_string());
        }
        if self.measurement_time.is_zero() {
            return Err("measurement_time must be positive".to_string());
        }
        if self.num_resamples == 0 {
            return Err("num_resamples must be at least 1".to_string());
        }
        if self.num_measurements == 0 {
            return Err("num_measurements must be at least 1".to_string());
        }
        if self.warm_up_time.is_zero() {
            return Err("warm_up_time must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.measurement_time, Duration::from_millis(10_000));
        assert_eq!(config.num_resamples, 100_000);
        assert_eq!(config.num_measurements, 100);
        assert_eq!(config.warm_up_time, Duration::from_millis(5_000));
        assert!(!config.estimate_clock_cost);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = Config::new()
            .confidence_level(0.99)
            .measurement_time(Duration::from_millis(500))
            .num_resamples(10_000)
            .num_measurements(50)
            .warm_up_time(Duration::from_millis(100))
            .estimate_clock_cost(true);

        assert_eq!(config.confidence_level, 0.99);
        assert_eq!(config.measurement_time, Duration::from_millis(500));
        assert_eq!(config.num_resamples, 10_000);
        assert_eq!(config.num_measurements, 50);
        assert_eq!(config.warm_up_time, Duration::from_millis(100));
        assert!(config.estimate_clock_cost);
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        let mut config = Config::default();
        config.confidence_level = 1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.num_resamples = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.measurement_time = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    #[should_panic(expected = "confidence level must be in (0, 1)")]
    fn out_of_range_confidence_level_panics() {
        Config::new().confidence_level(1.5);
    }

    #[test]
    #[should_panic(expected = "must resample at least once")]
    fn zero_resamples_panics() {
        Config::new().num_resamples(0);
    }
}
