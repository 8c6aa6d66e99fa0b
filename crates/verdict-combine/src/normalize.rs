//! Rescaling of heterogeneous strategy scores onto a common scale.

use verdict_traits::StrategyScore;

/// Magnitude bound of a normalized score.
pub const NORMALIZED_BOUND: f64 = 100.0;

/// Rescales a strategy score to percent of its own scale.
///
/// Computes `score / max_score * 100`, clamped to `[-100, 100]`. A score
/// with `max_score <= 0` or non-finite fields normalizes to `0`. The input is
/// never modified, so the raw score still reaches the decision unchanged.
///
/// # Examples
///
/// ```
/// use verdict_combine::normalize;
/// use verdict_traits::StrategyScore;
///
/// assert_eq!(normalize(&StrategyScore::new("technical", 4.0, 5.0)), 80.0);
/// assert_eq!(normalize(&StrategyScore::new("value", -14.0, 10.0)), -100.0);
/// ```
#[must_use]
pub fn normalize(score: &StrategyScore) -> f64 {
    let valid_scale = score.max_score > 0.0 && score.max_score.is_finite();
    if !valid_scale || !score.score.is_finite() {
        tracing::warn!(
            strategy = %score.strategy_name,
            score = score.score,
            max_score = score.max_score,
            "malformed strategy score, normalizing to zero"
        );
        return 0.0;
    }

    let normalized = score.score / score.max_score * NORMALIZED_BOUND;
    if normalized.abs() > NORMALIZED_BOUND {
        tracing::debug!(
            strategy = %score.strategy_name,
            score = score.score,
            max_score = score.max_score,
            "strategy score outside its scale, clamping"
        );
    }
    normalized.clamp(-NORMALIZED_BOUND, NORMALIZED_BOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_in_range_scores() {
        assert_relative_eq!(normalize(&StrategyScore::new("value", 8.0, 10.0)), 80.0);
        assert_relative_eq!(normalize(&StrategyScore::new("momentum", -3.0, 10.0)), -30.0);
        assert_relative_eq!(normalize(&StrategyScore::new("technical", 4.0, 5.0)), 80.0);
        assert_relative_eq!(normalize(&StrategyScore::neutral("value", 10.0)), 0.0);
    }

    #[test]
    fn test_clamps_out_of_scale_scores() {
        assert_relative_eq!(normalize(&StrategyScore::new("value", 12.0, 10.0)), 100.0);
        assert_relative_eq!(normalize(&StrategyScore::new("value", -12.0, 10.0)), -100.0);
    }

    #[test]
    fn test_malformed_scale_is_ignored() {
        assert_relative_eq!(normalize(&StrategyScore::new("value", 5.0, 0.0)), 0.0);
        assert_relative_eq!(normalize(&StrategyScore::new("value", 5.0, -10.0)), 0.0);
        assert_relative_eq!(normalize(&StrategyScore::new("value", f64::NAN, 10.0)), 0.0);
        assert_relative_eq!(normalize(&StrategyScore::new("value", 5.0, f64::INFINITY)), 0.0);
    }

    #[test]
    fn test_input_is_untouched() {
        let score = StrategyScore::new("value", 15.0, 10.0);
        let _ = normalize(&score);
        assert_eq!(score.score, 15.0);
    }
}
