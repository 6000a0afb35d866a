//! Aggregated trait scores for one subject and one origin.

use crate::error::{PressError, Result};
use crate::models::trait_pair::TraitPair;

/// Lowest score on the survey scale
pub const SCORE_MIN: f64 = 0.0;

/// Highest score on the survey scale
pub const SCORE_MAX: f64 = 6.0;

/// Check that a score lies on the closed six-point scale
pub fn check_score(score: f64) -> Result<f64> {
    if (SCORE_MIN..=SCORE_MAX).contains(&score) {
        Ok(score)
    } else {
        Err(PressError::ScoreOutOfRange { score })
    }
}

/// Fourteen mean trait scores plus the number of respondents behind them
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSet {
    negative: [f64; 7],
    positive: [f64; 7],
    respondents: i64,
}

impl ScoreSet {
    /// Build a score set, rejecting scores off the scale and negative counts
    pub fn new(negative: [f64; 7], positive: [f64; 7], respondents: i64) -> Result<Self> {
        for score in negative.iter().chain(positive.iter()) {
            check_score(*score)?;
        }
        if respondents < 0 {
            return Err(PressError::InvalidRespondentCount { count: respondents });
        }

        Ok(Self {
            negative,
            positive,
            respondents,
        })
    }

    /// `(negative, positive)` scores of one pair
    #[must_use]
    pub const fn pair(&self, pair: TraitPair) -> (f64, f64) {
        let idx = pair.column_index();
        (self.negative[idx], self.positive[idx])
    }

    #[must_use]
    pub const fn negative_scores(&self) -> &[f64; 7] {
        &self.negative
    }

    #[must_use]
    pub const fn positive_scores(&self) -> &[f64; 7] {
        &self.positive
    }

    /// Number of respondents behind this set
    #[must_use]
    pub const fn respondents(&self) -> i64 {
        self.respondents
    }
}
