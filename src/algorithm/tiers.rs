//! Circle tier decomposition
//!
//! A score on the six-point scale is drawn as six concentric circles filled
//! like a thermometer: tier 1 saturates first, then tier 2, and so on. Tier
//! `k` covers the score interval `[k - 1, k]`.

use crate::error::Result;
use crate::models::check_score;

/// Number of circle tiers per trait
pub const TIER_COUNT: usize = 6;

/// Fill ratios of the six tiers of one trait, tier 1 first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierDecomposition {
    ratios: [f64; TIER_COUNT],
}

impl TierDecomposition {
    #[must_use]
    pub const fn ratios(&self) -> &[f64; TIER_COUNT] {
        &self.ratios
    }

    /// Ratio of tier `k` (1-based)
    #[must_use]
    pub fn tier(&self, k: usize) -> Option<f64> {
        k.checked_sub(1).and_then(|i| self.ratios.get(i).copied())
    }

    /// Sum of all ratios; equals the decomposed score
    #[must_use]
    pub fn total(&self) -> f64 {
        self.ratios.iter().sum()
    }
}

/// Split a score in `[0, 6]` into six tier fill ratios
///
/// Tiers are filled from the top down: each tier takes whatever the score
/// exceeds its threshold by, minus what the tiers above already took.
pub fn decompose(score: f64) -> Result<TierDecomposition> {
    let score = check_score(score)?;

    let mut ratios = [0.0; TIER_COUNT];
    let mut higher_tiers = 0.0;
    for k in (1..=TIER_COUNT).rev() {
        let threshold = (k - 1) as f64;
        let ratio = (score - threshold - higher_tiers).max(0.0);
        ratios[k - 1] = ratio;
        higher_tiers += ratio;
    }

    Ok(TierDecomposition { ratios })
}
