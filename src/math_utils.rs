//! Small statistics helpers used to check surrogate properties.

/// Arithmetic mean; 0.0 for empty input.
pub fn calculate_mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with an `n - 1` denominator; 0.0 for fewer than two points.
///
/// Uses Welford's single-pass update for numerical stability.
///
/// ```rust
/// use ebisuzaki_surrogate::math_utils::calculate_variance;
///
/// let v = calculate_variance(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
/// assert!((v - 6.0).abs() < 1e-12);
/// ```
pub fn calculate_variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }

    let mut mean = 0.0;
    let mut m2 = 0.0;
    for (i, &value) in data.iter().enumerate() {
        let delta = value - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (value - mean);
    }

    m2 / (data.len() - 1) as f64
}

/// Largest elementwise difference between two equally long slices, relative
/// to the largest absolute value in `reference`.
///
/// Falls back to the absolute difference when `reference` is all zeros.
/// Returns `f64::INFINITY` when the lengths differ.
pub fn max_relative_difference(values: &[f64], reference: &[f64]) -> f64 {
    if values.len() != reference.len() {
        return f64::INFINITY;
    }

    let scale = reference.iter().fold(0.0f64, |acc, x| acc.max(x.abs()));
    let max_diff = values
        .iter()
        .zip(reference)
        .fold(0.0f64, |acc, (a, b)| acc.max((a - b).abs()));

    if scale > 0.0 {
        max_diff / scale
    } else {
        max_diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_mean_and_variance() {
        assert_eq!(calculate_mean(&[]), 0.0);
        assert_approx_eq!(calculate_mean(&[1.0, 2.0, 3.0, 6.0]), 3.0, 1e-15);

        assert_eq!(calculate_variance(&[]), 0.0);
        assert_eq!(calculate_variance(&[4.2]), 0.0);
        assert_approx_eq!(calculate_variance(&[5.0; 6]), 0.0, 1e-15);
        assert_approx_eq!(calculate_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 32.0 / 7.0, 1e-12);
    }

    #[test]
    fn test_variance_large_offset() {
        // Welford keeps precision where the naive sum-of-squares formula does not
        let data: Vec<f64> = (0..100).map(|i| 1e9 + (i % 2) as f64).collect();
        assert_approx_eq!(calculate_variance(&data), 0.25 * 100.0 / 99.0, 1e-6);
    }

    #[test]
    fn test_max_relative_difference() {
        assert_eq!(max_relative_difference(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
        assert_approx_eq!(max_relative_difference(&[1.0, 2.1], &[1.0, 2.0]), 0.05, 1e-12);
        assert_approx_eq!(max_relative_difference(&[1e-3, 0.0], &[0.0, 0.0]), 1e-3, 1e-15);
        assert!(max_relative_difference(&[1.0], &[1.0, 2.0]).is_infinite());
    }
}
