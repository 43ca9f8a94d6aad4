//! Fills-remaining value object for decay tracking

use serde::{Deserialize, Serialize};

/// How much of a pouch's decay budget is left, as reported to observers.
///
/// Three states are observable and must stay distinguishable: a known
/// fraction of the budget, a pouch that never decays, and a pouch that
/// decays but whose budget has not been observed yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FillsRemaining {
    /// Known fraction of the decay budget still available.
    ///
    /// May exceed 1.0 or drop below 0.0: the budget is never floored, and
    /// an authoritative reading can place it outside `[0, max]`.
    Ratio(f64),
    /// The pouch never decays.
    Unlimited,
    /// The pouch decays, but its budget has not been observed yet.
    Unknown,
}

impl FillsRemaining {
    /// Collapse to a scalar ratio for display math.
    ///
    /// `Unknown` maps to the smallest representable positive value rather
    /// than 0.0, so consumers can distinguish "no fills left" from "don't
    /// know"; `Unlimited` maps to 1.0.
    pub fn ratio(&self) -> f64 {
        match self {
            Self::Ratio(ratio) => *ratio,
            Self::Unlimited => 1.0,
            Self::Unknown => f64::MIN_POSITIVE,
        }
    }

    /// Check whether the pouch never decays.
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Check whether the budget is an assumption rather than an observation.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_passthrough() {
        assert_eq!(FillsRemaining::Ratio(0.5).ratio(), 0.5);
        assert_eq!(FillsRemaining::Ratio(-0.4).ratio(), -0.4);
    }

    #[test]
    fn test_unlimited_is_one() {
        assert_eq!(FillsRemaining::Unlimited.ratio(), 1.0);
    }

    #[test]
    fn test_unknown_sentinel_is_positive_but_not_zero_or_one() {
        let sentinel = FillsRemaining::Unknown.ratio();
        assert!(sentinel > 0.0);
        assert!(sentinel < 1.0);
        assert_eq!(sentinel, f64::MIN_POSITIVE);
    }

    #[test]
    fn test_predicates() {
        assert!(FillsRemaining::Unlimited.is_unlimited());
        assert!(!FillsRemaining::Unlimited.is_unknown());
        assert!(FillsRemaining::Unknown.is_unknown());
        assert!(!FillsRemaining::Ratio(0.0).is_unknown());
        assert!(!FillsRemaining::Ratio(1.0).is_unlimited());
    }
}
