//! Ordered threshold tables mapping a score to a recommendation tier.

use verdict_traits::{Action, Recommendation};

/// Recommendation plus the price multipliers it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Recommendation label.
    pub recommendation: Recommendation,
    /// Multiplier applied to the current price for the target.
    pub target_multiplier: f64,
    /// Multiplier applied to the current price for the stop-loss.
    pub stop_multiplier: f64,
}

impl Tier {
    /// Creates a tier.
    pub const fn new(
        recommendation: Recommendation,
        target_multiplier: f64,
        stop_multiplier: f64,
    ) -> Self {
        Self {
            recommendation,
            target_multiplier,
            stop_multiplier,
        }
    }

    /// Action implied by the recommendation.
    pub const fn action(&self) -> Action {
        self.recommendation.action()
    }
}

/// Thresholds evaluated from highest to lowest, plus a floor tier.
///
/// A key belongs to the first row whose threshold it reaches (`key >= threshold`),
/// so boundary values land in the higher tier. Keys below every threshold,
/// including NaN, get the floor tier, which makes the lookup total.
#[derive(Debug, Clone, Copy)]
pub struct TierTable<K, const N: usize> {
    rows: [(K, Tier); N],
    floor: Tier,
}

impl<K: PartialOrd + Copy, const N: usize> TierTable<K, N> {
    /// Creates a table. Rows must be sorted by descending threshold.
    pub const fn new(rows: [(K, Tier); N], floor: Tier) -> Self {
        Self { rows, floor }
    }

    /// Tier for `key`.
    pub fn lookup(&self, key: K) -> &Tier {
        self.rows
            .iter()
            .find(|(threshold, _)| key >= *threshold)
            .map_or(&self.floor, |(_, tier)| tier)
    }

    /// All tiers from highest to lowest, floor last.
    pub fn tiers(&self) -> impl Iterator<Item = &Tier> {
        self.rows
            .iter()
            .map(|(_, tier)| tier)
            .chain(std::iter::once(&self.floor))
    }
}

const STRONG_BUY: Tier = Tier::new(Recommendation::StrongBuy, 1.15, 0.95);
const BUY: Tier = Tier::new(Recommendation::Buy, 1.10, 0.96);
const HOLD: Tier = Tier::new(Recommendation::Hold, 1.05, 0.97);
const SELL: Tier = Tier::new(Recommendation::Sell, 0.95, 1.03);
const STRONG_SELL: Tier = Tier::new(Recommendation::StrongSell, 0.90, 1.05);

/// Tiers for the fused 0-100 confidence.
pub const FUSED_TIERS: TierTable<f64, 4> = TierTable::new(
    [(75.0, STRONG_BUY), (60.0, BUY), (40.0, HOLD), (25.0, SELL)],
    STRONG_SELL,
);

/// Tiers for the integer quick score.
pub const QUICK_TIERS: TierTable<i32, 4> = TierTable::new(
    [(4, STRONG_BUY), (2, BUY), (-1, HOLD), (-3, SELL)],
    STRONG_SELL,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fused_boundaries_go_up() {
        assert_eq!(FUSED_TIERS.lookup(75.0).recommendation, Recommendation::StrongBuy);
        assert_eq!(FUSED_TIERS.lookup(60.0).recommendation, Recommendation::Buy);
        assert_eq!(FUSED_TIERS.lookup(40.0).recommendation, Recommendation::Hold);
        assert_eq!(FUSED_TIERS.lookup(25.0).recommendation, Recommendation::Sell);
        assert_eq!(FUSED_TIERS.lookup(24.999).recommendation, Recommendation::StrongSell);
    }

    #[test]
    fn test_fused_tiers_partition_range() {
        // walk [0, 100] in 0.25 steps; the tier order may only descend
        let order = |r: Recommendation| match r {
            Recommendation::StrongBuy => 4,
            Recommendation::Buy => 3,
            Recommendation::Hold => 2,
            Recommendation::Sell => 1,
            Recommendation::StrongSell => 0,
        };
        let mut last = i32::MAX;
        for i in (0..=400).rev() {
            let c = f64::from(i) * 0.25;
            let rank = order(FUSED_TIERS.lookup(c).recommendation);
            assert!(rank <= last);
            last = rank;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn test_quick_boundaries() {
        assert_eq!(QUICK_TIERS.lookup(5).recommendation, Recommendation::StrongBuy);
        assert_eq!(QUICK_TIERS.lookup(4).recommendation, Recommendation::StrongBuy);
        assert_eq!(QUICK_TIERS.lookup(3).recommendation, Recommendation::Buy);
        assert_eq!(QUICK_TIERS.lookup(2).recommendation, Recommendation::Buy);
        assert_eq!(QUICK_TIERS.lookup(1).recommendation, Recommendation::Hold);
        assert_eq!(QUICK_TIERS.lookup(-1).recommendation, Recommendation::Hold);
        assert_eq!(QUICK_TIERS.lookup(-2).recommendation, Recommendation::Sell);
        assert_eq!(QUICK_TIERS.lookup(-3).recommendation, Recommendation::Sell);
        assert_eq!(QUICK_TIERS.lookup(-4).recommendation, Recommendation::StrongSell);
    }

    #[test]
    fn test_nan_hits_floor() {
        assert_eq!(FUSED_TIERS.lookup(f64::NAN).recommendation, Recommendation::StrongSell);
    }

    #[test]
    fn test_tiers_listing() {
        let labels: Vec<_> = FUSED_TIERS.tiers().map(|t| t.recommendation).collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], Recommendation::StrongBuy);
        assert_eq!(labels[4], Recommendation::StrongSell);
        assert_eq!(FUSED_TIERS.lookup(80.0).action(), Action::Buy);
    }
}
