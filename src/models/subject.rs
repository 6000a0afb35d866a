//! A named survey subject with one score set per origin.

use std::fmt;

use crate::models::score_set::ScoreSet;
use crate::models::trait_pair::{Side, Subgroup, SubgroupValues, TraitPair};

/// The respondent subgroup a score set was aggregated over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginType {
    Aggregate,
    MaleOnly,
    FemaleOnly,
    OtherOnly,
}

impl OriginType {
    pub const ALL: [Self; 4] = [
        Self::Aggregate,
        Self::MaleOnly,
        Self::FemaleOnly,
        Self::OtherOnly,
    ];

    /// Label tagging this origin's row in the survey table
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aggregate => "all",
            Self::MaleOnly => "male pure",
            Self::FemaleOnly => "female pure",
            Self::OtherOnly => "other pure",
        }
    }

    /// Recognise a table label; anything else (e.g. "male adj") is `None`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|origin| origin.label() == label)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Aggregate => 0,
            Self::MaleOnly => 1,
            Self::FemaleOnly => 2,
            Self::OtherOnly => 3,
        }
    }

    /// Name of the text frame showing this origin's respondent count
    #[must_use]
    pub const fn count_label(self) -> &'static str {
        match self {
            Self::Aggregate => "All",
            Self::MaleOnly => "Male",
            Self::FemaleOnly => "Female",
            Self::OtherOnly => "Other",
        }
    }
}

impl From<Subgroup> for OriginType {
    fn from(subgroup: Subgroup) -> Self {
        match subgroup {
            Subgroup::Male => Self::MaleOnly,
            Subgroup::Female => Self::FemaleOnly,
            Subgroup::Other => Self::OtherOnly,
        }
    }
}

impl fmt::Display for OriginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One subject of the survey and its four score sets
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    name: String,
    aggregate: ScoreSet,
    male: ScoreSet,
    female: ScoreSet,
    other: ScoreSet,
}

impl Subject {
    /// Create a subject; callers guarantee `name` is non-empty
    pub fn new(
        name: impl Into<String>,
        aggregate: ScoreSet,
        male: ScoreSet,
        female: ScoreSet,
        other: ScoreSet,
    ) -> Self {
        Self {
            name: name.into(),
            aggregate,
            male,
            female,
            other,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn scores(&self, origin: OriginType) -> &ScoreSet {
        match origin {
            OriginType::Aggregate => &self.aggregate,
            OriginType::MaleOnly => &self.male,
            OriginType::FemaleOnly => &self.female,
            OriginType::OtherOnly => &self.other,
        }
    }

    /// Aggregate `(negative, positive)` scores of one pair
    #[must_use]
    pub const fn aggregate_pair(&self, pair: TraitPair) -> (f64, f64) {
        self.aggregate.pair(pair)
    }

    /// Per-subgroup scores for one side of one pair
    #[must_use]
    pub fn subgroup_scores(&self, pair: TraitPair, side: Side) -> SubgroupValues<f64> {
        let pick = |set: &ScoreSet| {
            let (negative, positive) = set.pair(pair);
            match side {
                Side::Negative => negative,
                Side::Positive => positive,
            }
        };
        SubgroupValues::new(pick(&self.male), pick(&self.female), pick(&self.other))
    }

    /// Respondent counts of the three subgroups
    #[must_use]
    pub const fn subgroup_respondents(&self) -> SubgroupValues<i64> {
        SubgroupValues::new(
            self.male.respondents(),
            self.female.respondents(),
            self.other.respondents(),
        )
    }
}
