//! Tendency arrows
//!
//! Each trait pair carries two arrows starting from a shared centre: one
//! growing toward the sin, one toward the virtue. Only the side that wins the
//! differential is drawn, scaled by how far it wins.

use crate::models::{SCORE_MAX, Side};

/// Fraction of the arrow span drawn for each arrow when a pair is tied.
///
/// The document host mangles shapes scaled to exactly zero, so a tie draws
/// two short stubs instead of two empty arrows.
pub const TIE_STUB_FRACTION: f64 = 0.01;

/// Which trait of the pair scored higher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    Negative,
    Positive,
    Tied,
}

/// Visibility and length of one arrow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowState {
    pub visible: bool,
    /// Zero when hidden
    pub length: f64,
}

impl ArrowState {
    const HIDDEN: Self = Self {
        visible: false,
        length: 0.0,
    };

    const fn shown(length: f64) -> Self {
        Self {
            visible: true,
            length,
        }
    }
}

/// Resolved tendency arrows of one trait pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TendencyOutcome {
    /// `positive - negative`
    pub differential: f64,
    pub dominance: Dominance,
    /// Length of the visible arrow (each stub's length on a tie)
    pub length: f64,
    pub negative: ArrowState,
    pub positive: ArrowState,
}

impl TendencyOutcome {
    #[must_use]
    pub const fn arrow(&self, side: Side) -> ArrowState {
        match side {
            Side::Negative => self.negative,
            Side::Positive => self.positive,
        }
    }
}

/// Resolve the tendency arrows for one pair of scores
pub fn resolve(negative: f64, positive: f64, arrow_span: f64) -> TendencyOutcome {
    let differential = positive - negative;
    let length = differential.abs() / SCORE_MAX * arrow_span;

    if differential > 0.0 {
        TendencyOutcome {
            differential,
            dominance: Dominance::Positive,
            length,
            negative: ArrowState::HIDDEN,
            positive: ArrowState::shown(length),
        }
    } else if differential < 0.0 {
        TendencyOutcome {
            differential,
            dominance: Dominance::Negative,
            length,
            negative: ArrowState::shown(length),
            positive: ArrowState::HIDDEN,
        }
    } else {
        let stub = TIE_STUB_FRACTION * arrow_span;
        TendencyOutcome {
            differential,
            dominance: Dominance::Tied,
            length: stub,
            negative: ArrowState::shown(stub),
            positive: ArrowState::shown(stub),
        }
    }
}
