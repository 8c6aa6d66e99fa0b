//! Statistical utility functions shared by scorers and the risk assessor.

/// Minimum threshold for standard deviation to avoid division by zero.
/// Values below this threshold are treated as zero variance.
pub const MIN_STD_THRESHOLD: f64 = 1e-10;

/// Arithmetic mean of the finite values in a slice.
///
/// Returns `None` when the slice holds no finite value.
///
/// # Examples
///
/// ```
/// use verdict_traits::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, f64::NAN, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    let (sum, n) = values
        .iter()
        .filter(|x| x.is_finite())
        .fold((0.0, 0usize), |(sum, n), x| (sum + x, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Sample standard deviation (N-1 denominator) of the finite values.
///
/// Returns `None` with fewer than two finite values.
///
/// # Examples
///
/// ```
/// use verdict_traits::stats::sample_std;
///
/// let std = sample_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((std - 2.138).abs() < 1e-3);
/// ```
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    let finite: Vec<f64> = values.iter().filter(|x| x.is_finite()).copied().collect();
    if finite.len() < 2 {
        return None;
    }

    let m = finite.iter().sum::<f64>() / finite.len() as f64;
    // Bessel's correction
    let variance = finite.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (finite.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Z-score of `value` against `mean` and `std`.
///
/// Returns `None` when `std` is below [`MIN_STD_THRESHOLD`].
#[must_use]
pub fn z_score(value: f64, mean: f64, std: f64) -> Option<f64> {
    (std > MIN_STD_THRESHOLD).then(|| (value - mean) / std)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_skips_non_finite() {
        assert_eq!(mean(&[f64::INFINITY, 4.0, 6.0]), Some(5.0));
        assert_eq!(mean(&[f64::NAN]), None);
    }

    #[test]
    fn test_sample_std() {
        assert_relative_eq!(sample_std(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 2.5_f64.sqrt());
        assert_eq!(sample_std(&[3.0]), None);
        assert_relative_eq!(sample_std(&[5.0, 5.0, 5.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_z_score() {
        assert_relative_eq!(z_score(12.0, 10.0, 1.0).unwrap(), 2.0);
        assert_eq!(z_score(12.0, 10.0, 0.0), None);
    }
}
