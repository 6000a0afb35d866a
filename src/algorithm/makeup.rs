//! Makeup arrows
//!
//! Each side of a trait pair shows one arrow per subgroup, stacked so the
//! shortest arrow sits on top and the longest at the bottom. Subgroups with
//! no respondents are hidden rather than drawn at their (meaningless) score.

use smallvec::SmallVec;

use crate::models::{SCORE_MAX, Subgroup, SubgroupValues};

/// Drawn part of a visible makeup arrow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeupArrow {
    pub length: f64,
    /// 1 is nearest the top of the stack
    pub draw_order: u8,
}

/// One subgroup's entry on one side of a trait pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MakeupEntry {
    pub subgroup: Subgroup,
    pub score: f64,
    pub respondents: i64,
    /// 1 for the smallest score, 3 for the largest
    pub rank: u8,
    /// `None` when the subgroup had no respondents
    pub arrow: Option<MakeupArrow>,
}

impl MakeupEntry {
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.arrow.is_some()
    }
}

/// Makeup entries of one side, ascending by score
#[derive(Debug, Clone, PartialEq)]
pub struct MakeupOutcome {
    entries: SmallVec<[MakeupEntry; 3]>,
}

impl MakeupOutcome {
    #[must_use]
    pub fn entries(&self) -> &[MakeupEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, subgroup: Subgroup) -> Option<&MakeupEntry> {
        self.entries.iter().find(|e| e.subgroup == subgroup)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_visible()).count()
    }
}

/// Rank the three subgroup scores of one side and size their arrows
///
/// The sort is stable over Male, Female, Other, so equal scores keep that order.
pub fn resolve(
    scores: SubgroupValues<f64>,
    respondents: SubgroupValues<i64>,
    arrow_span: f64,
) -> MakeupOutcome {
    let mut ranked: SmallVec<[(Subgroup, f64); 3]> = scores.iter().collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let entries = ranked
        .into_iter()
        .zip(1u8..)
        .map(|((subgroup, score), rank)| {
            let count = respondents.get(subgroup);
            let arrow = (count > 0).then(|| MakeupArrow {
                length: score / SCORE_MAX * arrow_span,
                draw_order: rank,
            });
            MakeupEntry {
                subgroup,
                score,
                respondents: count,
                rank,
                arrow,
            }
        })
        .collect();

    MakeupOutcome { entries }
}
