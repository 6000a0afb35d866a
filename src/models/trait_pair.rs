//! The seven sin/virtue axes and the sides and subgroups they split into.

use std::fmt;

/// One of the seven fixed negative/positive trait axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitPair {
    LustChastity,
    GluttonyTemperance,
    GreedCharity,
    SlothDiligence,
    WrathPatience,
    EnvyKindness,
    PrideHumility,
}

impl TraitPair {
    /// Every pair, in the order the template lays them out
    pub const ALL: [Self; 7] = [
        Self::LustChastity,
        Self::GluttonyTemperance,
        Self::GreedCharity,
        Self::SlothDiligence,
        Self::WrathPatience,
        Self::EnvyKindness,
        Self::PrideHumility,
    ];

    /// Position of this pair's traits within the seven negative and the
    /// seven positive score columns
    #[must_use]
    pub const fn column_index(self) -> usize {
        match self {
            Self::LustChastity => 0,
            Self::GluttonyTemperance => 1,
            Self::GreedCharity => 2,
            Self::SlothDiligence => 3,
            Self::EnvyKindness => 4,
            Self::WrathPatience => 5,
            Self::PrideHumility => 6,
        }
    }

    #[must_use]
    pub const fn negative_name(self) -> &'static str {
        NEGATIVE_TRAITS[self.column_index()]
    }

    #[must_use]
    pub const fn positive_name(self) -> &'static str {
        POSITIVE_TRAITS[self.column_index()]
    }

    /// Name of the template group drawing this pair, e.g. `LustChastity`
    #[must_use]
    pub const fn group_name(self) -> &'static str {
        match self {
            Self::LustChastity => "LustChastity",
            Self::GluttonyTemperance => "GluttonyTemperance",
            Self::GreedCharity => "GreedCharity",
            Self::SlothDiligence => "SlothDiligence",
            Self::WrathPatience => "WrathPatience",
            Self::EnvyKindness => "EnvyKindness",
            Self::PrideHumility => "PrideHumility",
        }
    }
}

impl fmt::Display for TraitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.negative_name(), self.positive_name())
    }
}

/// The seven deadly sins, in table column order
pub const NEGATIVE_TRAITS: [&str; 7] = [
    "Lust", "Gluttony", "Greed", "Sloth", "Envy", "Wrath", "Pride",
];

/// The seven heavenly virtues, in table column order
pub const POSITIVE_TRAITS: [&str; 7] = [
    "Chastity",
    "Temperance",
    "Charity",
    "Diligence",
    "Kindness",
    "Patience",
    "Humility",
];

/// Which half of a trait pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Negative,
    Positive,
}

impl Side {
    pub const BOTH: [Self; 2] = [Self::Negative, Self::Positive];

    /// Prefix the template uses for this side's shapes
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Negative => "Left",
            Self::Positive => "Right",
        }
    }
}

/// Demographic subgroup behind a makeup arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subgroup {
    Male,
    Female,
    Other,
}

impl Subgroup {
    /// Fixed precedence; also the tie order when scores are equal
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Shape name of this subgroup's arrow inside a makeup group
    #[must_use]
    pub const fn shape_name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// One value per subgroup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubgroupValues<T> {
    pub male: T,
    pub female: T,
    pub other: T,
}

impl<T: Copy> SubgroupValues<T> {
    pub const fn new(male: T, female: T, other: T) -> Self {
        Self {
            male,
            female,
            other,
        }
    }

    #[must_use]
    pub const fn get(&self, subgroup: Subgroup) -> T {
        match subgroup {
            Subgroup::Male => self.male,
            Subgroup::Female => self.female,
            Subgroup::Other => self.other,
        }
    }

    /// Values paired with their subgroup, in precedence order
    pub fn iter(&self) -> impl Iterator<Item = (Subgroup, T)> + '_ {
        Subgroup::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}
