//! Price indicator helpers shared by the scorers.
//!
//! All functions take a series ordered oldest first and return the value at
//! the most recent bar, or `None` when the series is too short.

use verdict_traits::stats::sample_std;

/// Simple moving average of the last `window` values.
#[must_use]
pub fn sma(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Sample standard deviation (N-1) of the last `window` values.
#[must_use]
pub fn rolling_std(values: &[f64], window: usize) -> Option<f64> {
    if window < 2 || values.len() < window {
        return None;
    }
    sample_std(&values[values.len() - window..])
}

/// Exponentially weighted mean series with `alpha = 2 / (span + 1)`.
///
/// Uses the adjusted form, where each output is the weighted average of all
/// observations so far with weights `(1 - alpha)^i`. Early values are
/// therefore not biased towards the first observation.
///
/// # Examples
///
/// ```
/// use verdict_signals::indicators::ema;
///
/// let out = ema(&[1.0, 2.0], 3);
/// assert_eq!(out[0], 1.0);
/// // weights 1 and 0.5: (2 + 0.5) / 1.5
/// assert!((out[1] - 2.5 / 1.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let decay = 1.0 - alpha;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    values
        .iter()
        .map(|x| {
            numerator = x + decay * numerator;
            denominator = 1.0 + decay * denominator;
            numerator / denominator
        })
        .collect()
}

/// Relative strength index over the last `period` price changes.
///
/// Average gains and losses are simple means. Returns 100 when there were no
/// losses, and `None` when the window holds no movement at all.
#[must_use]
pub fn rsi(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period + 1 {
        return None;
    }

    let tail = &values[values.len() - period - 1..];
    let (gain, loss) = tail.windows(2).fold((0.0, 0.0), |(gain, loss), pair| {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            (gain + delta, loss)
        } else {
            (gain, loss - delta)
        }
    });

    let avg_gain = gain / period as f64;
    let avg_loss = loss / period as f64;
    if avg_loss == 0.0 {
        return (avg_gain > 0.0).then_some(100.0);
    }
    Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
}

/// Fractional change between the last value and the one `periods` bars earlier.
#[must_use]
pub fn pct_change(values: &[f64], periods: usize) -> Option<f64> {
    if periods == 0 || values.len() < periods + 1 {
        return None;
    }
    let last = values[values.len() - 1];
    let base = values[values.len() - 1 - periods];
    (base != 0.0).then(|| last / base - 1.0)
}

/// Simple daily returns; one element shorter than the input.
#[must_use]
pub fn daily_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter(|pair| pair[0] != 0.0)
        .map(|pair| pair[1] / pair[0] - 1.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sma() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(sma(&values, 2).unwrap(), 4.5);
        assert_relative_eq!(sma(&values, 5).unwrap(), 3.0);
        assert_eq!(sma(&values, 6), None);
        assert_eq!(sma(&values, 0), None);
    }

    #[test]
    fn test_rolling_std() {
        let values = [10.0, 1.0, 2.0, 3.0];
        assert_relative_eq!(rolling_std(&values, 3).unwrap(), 1.0);
        assert_eq!(rolling_std(&values, 1), None);
    }

    #[test]
    fn test_ema_of_constant_is_constant() {
        let out = ema(&[4.0; 10], 12);
        for value in out {
            assert_relative_eq!(value, 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ema_tracks_trend() {
        let values: Vec<f64> = (1..=40).map(f64::from).collect();
        let fast = ema(&values, 12);
        let slow = ema(&values, 26);
        assert!(fast[39] > slow[39]);
        assert!(fast[39] < 40.0);
    }

    #[test]
    fn test_rsi_extremes() {
        let rising: Vec<f64> = (0..20).map(f64::from).collect();
        assert_relative_eq!(rsi(&rising, 14).unwrap(), 100.0);

        let falling: Vec<f64> = (0..20).rev().map(f64::from).collect();
        assert_relative_eq!(rsi(&falling, 14).unwrap(), 0.0);

        assert_eq!(rsi(&[5.0; 20], 14), None);
        assert_eq!(rsi(&rising[..14], 14), None);
    }

    #[test]
    fn test_rsi_balanced() {
        // alternating +1 / -1 moves
        let values: Vec<f64> = (0..15).map(|i| if i % 2 == 0 { 10.0 } else { 11.0 }).collect();
        assert_relative_eq!(rsi(&values, 14).unwrap(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pct_change() {
        let values = [100.0, 105.0, 110.0];
        assert_relative_eq!(pct_change(&values, 2).unwrap(), 0.10, epsilon = 1e-12);
        assert_relative_eq!(pct_change(&values, 1).unwrap(), 110.0 / 105.0 - 1.0);
        assert_eq!(pct_change(&values, 3), None);
        assert_eq!(pct_change(&[0.0, 1.0], 1), None);
    }

    #[test]
    fn test_daily_returns() {
        let returns = daily_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(returns.len(), 2);
        assert_relative_eq!(returns[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(returns[1], -0.10, epsilon = 1e-12);
    }
}
