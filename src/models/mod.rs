//! Domain models for survey subjects and their trait scores

pub mod score_set;
pub mod subject;
pub mod trait_pair;

pub use score_set::{SCORE_MAX, SCORE_MIN, ScoreSet, check_score};
pub use subject::{OriginType, Subject};
pub use trait_pair::{NEGATIVE_TRAITS, POSITIVE_TRAITS, Side, Subgroup, SubgroupValues, TraitPair};
