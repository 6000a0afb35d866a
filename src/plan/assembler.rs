//! Render plan assembly
//!
//! Runs the tier, tendency and makeup algorithms over all seven trait pairs
//! of a subject and bundles the results with the export variants.

use crate::algorithm::{decompose, makeup, tendency};
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::models::{OriginType, Side, Subject, TraitPair};
use crate::plan::{ExportVariant, PairPlan, RenderPlan};

/// Compiles subjects into render plans for one template geometry
#[derive(Debug, Clone, Default)]
pub struct RenderPlanAssembler {
    layout: LayoutConfig,
}

impl RenderPlanAssembler {
    #[must_use]
    pub const fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Compile one subject
    pub fn assemble(&self, subject: &Subject) -> Result<RenderPlan> {
        let pairs = TraitPair::ALL
            .iter()
            .map(|&pair| self.assemble_pair(subject, pair))
            .collect::<Result<Vec<_>>>()?;

        let respondents = OriginType::ALL.map(|origin| subject.scores(origin).respondents());

        Ok(RenderPlan {
            subject_name: subject.name().to_string(),
            respondents,
            pairs,
            variants: ExportVariant::ALL,
        })
    }

    fn assemble_pair(&self, subject: &Subject, pair: TraitPair) -> Result<PairPlan> {
        let (negative, positive) = subject.aggregate_pair(pair);
        let respondents = subject.subgroup_respondents();
        let makeup_for = |side| {
            makeup::resolve(
                subject.subgroup_scores(pair, side),
                respondents,
                self.layout.makeup_arrow_span,
            )
        };

        Ok(PairPlan {
            pair,
            negative_score: negative,
            positive_score: positive,
            negative_tiers: decompose(negative)?,
            positive_tiers: decompose(positive)?,
            tendency: tendency::resolve(negative, positive, self.layout.tendency_arrow_span),
            negative_makeup: makeup_for(Side::Negative),
            positive_makeup: makeup_for(Side::Positive),
        })
    }
}
