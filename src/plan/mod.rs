//! Render plans
//!
//! A `RenderPlan` holds every visual parameter of one subject. It is built
//! once by the [`RenderPlanAssembler`] and lowered into sink instructions by
//! [`lower`].

pub mod assembler;
pub mod instructions;
pub mod variant;

pub use assembler::RenderPlanAssembler;
pub use instructions::{Anchor, Instruction, Item, Location, Opacity, lower, template_locations};
pub use variant::{ExportVariant, VariantKind};

use crate::algorithm::{MakeupOutcome, TendencyOutcome, TierDecomposition};
use crate::models::{OriginType, Side, TraitPair};

/// Visual parameters of one trait pair
#[derive(Debug, Clone, PartialEq)]
pub struct PairPlan {
    pub pair: TraitPair,
    /// Aggregate sin score
    pub negative_score: f64,
    /// Aggregate virtue score
    pub positive_score: f64,
    pub negative_tiers: TierDecomposition,
    pub positive_tiers: TierDecomposition,
    pub tendency: TendencyOutcome,
    pub negative_makeup: MakeupOutcome,
    pub positive_makeup: MakeupOutcome,
}

impl PairPlan {
    #[must_use]
    pub const fn score(&self, side: Side) -> f64 {
        match side {
            Side::Negative => self.negative_score,
            Side::Positive => self.positive_score,
        }
    }

    #[must_use]
    pub const fn tiers(&self, side: Side) -> &TierDecomposition {
        match side {
            Side::Negative => &self.negative_tiers,
            Side::Positive => &self.positive_tiers,
        }
    }

    #[must_use]
    pub const fn makeup(&self, side: Side) -> &MakeupOutcome {
        match side {
            Side::Negative => &self.negative_makeup,
            Side::Positive => &self.positive_makeup,
        }
    }

    #[must_use]
    pub const fn negative_makeup(&self) -> &MakeupOutcome {
        &self.negative_makeup
    }

    #[must_use]
    pub const fn positive_makeup(&self) -> &MakeupOutcome {
        &self.positive_makeup
    }
}

/// All visual parameters of one subject
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    subject_name: String,
    respondents: [i64; 4],
    pairs: Vec<PairPlan>,
    variants: [ExportVariant; 3],
}

impl RenderPlan {
    #[must_use]
    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    /// Respondent count behind one origin's scores
    #[must_use]
    pub const fn respondents(&self, origin: OriginType) -> i64 {
        self.respondents[origin.index()]
    }

    /// The seven pairs, in template order
    #[must_use]
    pub fn pairs(&self) -> &[PairPlan] {
        &self.pairs
    }

    #[must_use]
    pub fn pair(&self, pair: TraitPair) -> Option<&PairPlan> {
        self.pairs.iter().find(|p| p.pair == pair)
    }

    /// Export variants, in export order
    #[must_use]
    pub const fn variants(&self) -> &[ExportVariant; 3] {
        &self.variants
    }
}
