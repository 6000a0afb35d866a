//! Score-to-shape algorithms
//!
//! These turn bounded survey scores into the discrete parameters the
//! template is drawn with:
//!
//! 1. Circle tier fill ratios for each trait score
//! 2. Tendency arrows for the differential of each trait pair
//! 3. Makeup arrows ranking the subgroup scores of each trait

pub mod makeup;
pub mod tendency;
pub mod tiers;

// Re-export key types
pub use makeup::{MakeupArrow, MakeupEntry, MakeupOutcome};
pub use tendency::{ArrowState, Dominance, TIE_STUB_FRACTION, TendencyOutcome};
pub use tiers::{TIER_COUNT, TierDecomposition, decompose};
