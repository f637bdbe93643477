//! Sums, means, and dispersion over `f64` samples.
//!
//! These functions do not handle non-finite values.

/// Sum of the sample.
pub fn sum(sample: &[f64]) -> f64 {
    sample.iter().sum()
}

/// Arithmetic mean.
///
/// # Panics
///
/// Panics if `sample` is empty.
pub fn mean(sample: &[f64]) -> f64 {
    assert!(!sample.is_empty(), "mean requires at least one value");
    sum(sample) / sample.len() as f64
}

/// Sample variance with Bessel's correction (`n - 1` denominator).
///
/// Defined as 0 for samples with fewer than two values.
pub fn variance(sample: &[f64]) -> f64 {
    if sample.len() < 2 {
        return 0.0;
    }

    let avg = mean(sample);
    let squared_devs: f64 = sample
        .iter()
        .map(|s| {
            let x = s - avg;
            x * x
        })
        .sum();

    squared_devs / (sample.len() - 1) as f64
}

/// Sample standard deviation.
pub fn std_dev(sample: &[f64]) -> f64 {
    variance(sample).sqrt()
}
