//! Gaussian kernel density estimation with Scott's bandwidth rule.

use crate::types::{Point, Points};

use super::moments::std_dev;
use super::quantile::quartiles;

/// Evaluation points used by reporters that plot the density curve.
pub const DEFAULT_KDE_POINTS: u32 = 400;

/// Standard normal probability density function.
pub fn gaussian_pdf(x: f64) -> f64 {
    (-x * x / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// Invoke `f` at `n` evenly spaced values covering `[start, stop]`, with
/// both endpoints produced exactly.
pub fn linspace<F: FnMut(f64)>(start: f64, stop: f64, n: u32, mut f: F) {
    if n == 0 {
        return;
    }
    if n == 1 {
        f(start);
        return;
    }

    let step = (stop - start) / f64::from(n - 1);
    for i in 0..n - 1 {
        f(f64::from(i) * step + start);
    }
    f(stop);
}

/// Scott's rule bandwidth:
/// `1.06 · min(std_dev, IQR / 1.34) · n^(-0.2)`.
///
/// Returns 0.0 for a sample whose values are all identical; callers that
/// cannot tolerate a degenerate bandwidth should check before calling
/// [`kde`].
pub fn bandwidth_scott(times: &[f64]) -> f64 {
    let sd = std_dev(times);
    let adjusted_iqr = quartiles(times).iqr() / 1.34;
    1.06 * sd.min(adjusted_iqr) * (times.len() as f64).powf(-0.2)
}

/// Estimate a smoothed density curve for `times`, evaluated at
/// `num_points` locations spanning three bandwidths beyond the sample's
/// extremes.
///
/// # Panics
///
/// Panics if `times` is empty, or if the bandwidth degenerates to zero
/// (all sample values identical); a zero-width kernel would divide by
/// zero and render garbage as a valid curve.
pub fn kde(times: &[f64], num_points: u32) -> Points {
    assert!(!times.is_empty(), "kde requires a non-empty sample");

    let n = times.len() as f64;
    let bw = bandwidth_scott(times);
    assert!(
        bw > 0.0,
        "kde bandwidth is zero: all sample values are identical"
    );

    let (min, max) = times
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
            (lo.min(t), hi.max(t))
        });

    let adjustment = 3.0;
    let start = min - adjustment * bw;
    let stop = max + adjustment * bw;

    let mut points = Vec::with_capacity(num_points as usize);
    linspace(start, stop, num_points, |x| {
        let sum: f64 = times.iter().map(|t| gaussian_pdf((x - t) / bw)).sum();
        points.push(Point::new(x, sum / n / bw));
    });

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_pdf_known_values() {
        assert!((gaussian_pdf(4.0) - 0.0001338).abs() < 1e-7);
        assert!((gaussian_pdf(0.123) - 0.3959359).abs() < 1e-7);
        assert!((gaussian_pdf(-0.043) - 0.3985736).abs() < 1e-7);
        assert!((gaussian_pdf(2.2005) - 0.03543559).abs() < 1e-8);
    }

    #[test]
    fn linspace_zero_points() {
        let mut result = Vec::new();
        linspace(1.0, 100.0, 0, |d| result.push(d));
        assert!(result.is_empty());
    }

    #[test]
    fn linspace_one_point() {
        let mut result = Vec::new();
        linspace(50.0, 100.0, 1, |d| result.push(d));
        assert_eq!(result, vec![50.0]);
    }

    #[test]
    fn linspace_many_points() {
        let mut result = Vec::new();
        linspace(1.0, 10.0, 10, |d| result.push(d));
        let expected: Vec<f64> = (1..=10).map(f64::from).collect();
        for (r, e) in result.iter().zip(&expected) {
            assert!((r - e).abs() < 1e-12);
        }
        assert_eq!(result.len(), 10);
    }

    #[test]
    fn scott_bandwidth_known_values() {
        assert!((bandwidth_scott(&[1.0, 4.0]) - 1.032967).abs() < 1e-6);
        assert!((bandwidth_scott(&[50.0, 500.0, 1500.0, 0.5]) - 427.0687).abs() < 1e-3);
        assert!((bandwidth_scott(&[0.5, 0.75, 0.8, 0.9]) - 0.08243123).abs() < 1e-7);
        assert!((bandwidth_scott(&[10.0, 11.0, 15.0, 16.0, 17.0]) - 2.392752).abs() < 1e-6);
    }

    #[test]
    fn scott_bandwidth_degenerates_to_zero() {
        assert_eq!(bandwidth_scott(&[1.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn kde_matches_r_density() {
        // R: density(c(1, 2, 3, 4, 5), bw="nrd", n=8)
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        let points = kde(&sample, 8);

        let expected = [
            (-2.43999, 0.0008212),
            (-0.88571, 0.02124),
            (0.66857, 0.11217),
            (2.2228, 0.18763),
            (3.7771, 0.187766),
            (5.3314, 0.11217),
            (6.8857, 0.02124),
            (8.4399, 0.00082),
        ];

        assert_eq!(points.len(), expected.len());
        for (p, (x, y)) in points.iter().zip(&expected) {
            assert!((p.x - x).abs() < 1e-3 * x.abs().max(1.0), "x: {} vs {}", p.x, x);
            assert!((p.y - y).abs() < 2e-3 * y.abs().max(0.01), "y: {} vs {}", p.y, y);
        }
    }

    #[test]
    fn kde_range_spans_three_bandwidths() {
        let sample = [10.0, 11.0, 15.0, 16.0, 17.0];
        let bw = bandwidth_scott(&sample);
        let points = kde(&sample, 100);
        let first = points.first().unwrap().x;
        let last = points.last().unwrap().x;
        assert!((first - (10.0 - 3.0 * bw)).abs() < 1e-9);
        assert!((last - (17.0 + 3.0 * bw)).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "non-empty sample")]
    fn kde_of_empty_sample_panics() {
        kde(&[], 10);
    }

    #[test]
    #[should_panic(expected = "bandwidth is zero")]
    fn kde_of_constant_sample_panics() {
        kde(&[3.0, 3.0, 3.0, 3.0], 10);
    }
}
