//! Lowering render plans into document instructions
//!
//! The template lives on one layer of the host document:
//!
//! ```text
//! <layer>
//! ├── Header        text TargetName
//! ├── Numbers       texts All, Male, Female, Other
//! ├── LustChastity  texts Left, LeftScore, Right, RightScore, SumScore
//! │                 paths Left1..Left6, Right1..Right6, LeftTendency, RightTendency
//! │                 groups LeftMakeup, RightMakeup (paths Male, Female, Other)
//! ├── ...           one group per trait pair
//! └── plugin item 1 (decorative overlay)
//! ```
//!
//! Instruction order is fixed so replaying a plan always leaves the document
//! in the same state.

use std::fmt;
use std::path::PathBuf;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::algorithm::TIER_COUNT;
use crate::config::{PressConfig, RasterOptions};
use crate::models::{OriginType, Side, Subgroup, TraitPair};
use crate::plan::{PairPlan, RenderPlan};

const HEADER_GROUP: &str = "Header";
const HEADER_TITLE: &str = "TargetName";
const NUMBERS_GROUP: &str = "Numbers";
const SUM_SCORE: &str = "SumScore";
const OVERLAY_INDEX: usize = 1;

/// A named item inside a group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Item {
    Text(String),
    Path(String),
    Group(String),
    /// Plugin items are addressed by 1-based index; the host gives them no name
    Plugin(usize),
}

/// Address of one item in the host document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub layer: String,
    /// Enclosing groups, outermost first
    pub groups: Vec<String>,
    pub item: Item,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layer)?;
        for group in &self.groups {
            write!(f, " > {group}")?;
        }
        match &self.item {
            Item::Text(name) => write!(f, " > text '{name}'"),
            Item::Path(name) => write!(f, " > path '{name}'"),
            Item::Group(name) => write!(f, " > group '{name}'"),
            Item::Plugin(index) => write!(f, " > plugin #{index}"),
        }
    }
}

/// Fixed point a shape is scaled about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// Anchor keeping an arrow's base at the pair's centre line, so the arrow
    /// grows outward toward `side`
    #[must_use]
    pub const fn growing_toward(side: Side) -> Self {
        match side {
            Side::Negative => Self::Right,
            Side::Positive => Self::Left,
        }
    }
}

/// Shape opacity; the host only ever sees 0 or 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum Opacity {
    Transparent,
    Opaque,
}

impl From<Opacity> for u8 {
    fn from(opacity: Opacity) -> Self {
        match opacity {
            Opacity::Transparent => 0,
            Opacity::Opaque => 100,
        }
    }
}

/// One operation on the host document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    SetText {
        location: Location,
        value: String,
    },
    SetShapeOpacity {
        location: Location,
        opacity: Opacity,
    },
    SetShapeScale {
        location: Location,
        width: f64,
        height: f64,
        anchor: Anchor,
    },
    SetDrawOrder {
        location: Location,
        rank_from_front: u32,
    },
    SetLayerVisibility {
        location: Location,
        hidden: bool,
    },
    ExportRaster {
        output_path: PathBuf,
        options: RasterOptions,
    },
}

impl Instruction {
    /// Target of the instruction; exports have none
    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        match self {
            Self::SetText { location, .. }
            | Self::SetShapeOpacity { location, .. }
            | Self::SetShapeScale { location, .. }
            | Self::SetDrawOrder { location, .. }
            | Self::SetLayerVisibility { location, .. } => Some(location),
            Self::ExportRaster { .. } => None,
        }
    }
}

/// Builds locations on the target layer
struct Locator<'a> {
    layer: &'a str,
}

impl Locator<'_> {
    fn at(&self, groups: &[&str], item: Item) -> Location {
        Location {
            layer: self.layer.to_string(),
            groups: groups.iter().map(|g| (*g).to_string()).collect(),
            item,
        }
    }

    fn title(&self) -> Location {
        self.at(&[HEADER_GROUP], Item::Text(HEADER_TITLE.to_string()))
    }

    fn numbers(&self) -> Location {
        self.at(&[], Item::Group(NUMBERS_GROUP.to_string()))
    }

    fn count(&self, origin: OriginType) -> Location {
        self.at(&[NUMBERS_GROUP], Item::Text(origin.count_label().to_string()))
    }

    fn pair_text(&self, pair: TraitPair, name: &str) -> Location {
        self.at(&[pair.group_name()], Item::Text(name.to_string()))
    }

    fn pair_path(&self, pair: TraitPair, name: &str) -> Location {
        self.at(&[pair.group_name()], Item::Path(name.to_string()))
    }

    fn pair_group(&self, pair: TraitPair, name: &str) -> Location {
        self.at(&[pair.group_name()], Item::Group(name.to_string()))
    }

    fn score(&self, pair: TraitPair, side: Side) -> Location {
        self.pair_text(pair, &format!("{}Score", side.prefix()))
    }

    fn circle(&self, pair: TraitPair, side: Side, tier: usize) -> Location {
        self.pair_path(pair, &format!("{}{tier}", side.prefix()))
    }

    fn tendency(&self, pair: TraitPair, side: Side) -> Location {
        self.pair_path(pair, &format!("{}Tendency", side.prefix()))
    }

    fn makeup_group(&self, pair: TraitPair, side: Side) -> Location {
        self.pair_group(pair, &makeup_group_name(side))
    }

    fn makeup_arrow(&self, pair: TraitPair, side: Side, subgroup: Subgroup) -> Location {
        let group = makeup_group_name(side);
        self.at(
            &[pair.group_name(), group.as_str()],
            Item::Path(subgroup.shape_name().to_string()),
        )
    }

    fn overlay(&self) -> Location {
        self.at(&[], Item::Plugin(OVERLAY_INDEX))
    }

    /// Everything hidden by variants that suppress annotations
    fn annotations(&self) -> Vec<Location> {
        let mut targets = vec![self.numbers()];
        for pair in TraitPair::ALL {
            targets.push(self.pair_text(pair, SUM_SCORE));
            for side in Side::BOTH {
                targets.push(self.pair_text(pair, side.prefix()));
                targets.push(self.score(pair, side));
                targets.push(self.makeup_group(pair, side));
                targets.push(self.tendency(pair, side));
            }
        }
        targets
    }
}

fn makeup_group_name(side: Side) -> String {
    format!("{}Makeup", side.prefix())
}

/// Every location the standard template provides on `layer`
#[must_use]
pub fn template_locations(layer: &str) -> FxHashSet<Location> {
    let at = Locator { layer };
    let mut locations: FxHashSet<Location> = at.annotations().into_iter().collect();
    locations.insert(at.title());
    locations.insert(at.overlay());
    for origin in OriginType::ALL {
        locations.insert(at.count(origin));
    }
    for pair in TraitPair::ALL {
        for side in Side::BOTH {
            for tier in 1..=TIER_COUNT {
                locations.insert(at.circle(pair, side, tier));
            }
            for subgroup in Subgroup::ALL {
                locations.insert(at.makeup_arrow(pair, side, subgroup));
            }
        }
    }
    locations
}

/// Lower one plan into the ordered instruction list that draws and exports it
#[must_use]
pub fn lower(plan: &RenderPlan, config: &PressConfig) -> Vec<Instruction> {
    let at = Locator {
        layer: &config.target_layer,
    };
    let mut out = Vec::new();

    out.push(Instruction::SetText {
        location: at.title(),
        value: plan.subject_name().to_string(),
    });
    for origin in OriginType::ALL {
        out.push(Instruction::SetText {
            location: at.count(origin),
            value: plan.respondents(origin).to_string(),
        });
    }

    for pair in plan.pairs() {
        lower_scores(&mut out, &at, pair, config.layout.circle_size);
    }
    for pair in plan.pairs() {
        lower_makeup(&mut out, &at, pair);
    }

    for variant in plan.variants() {
        lower_visibility(
            &mut out,
            &at,
            variant.suppress_annotations,
            variant.suppress_overlay,
        );
        out.push(Instruction::ExportRaster {
            output_path: config.export.output_path(plan.subject_name(), variant),
            options: config.export.raster,
        });
    }
    lower_visibility(&mut out, &at, false, false);

    out
}

fn opacity(location: Location, visible: bool) -> Instruction {
    Instruction::SetShapeOpacity {
        location,
        opacity: if visible {
            Opacity::Opaque
        } else {
            Opacity::Transparent
        },
    }
}

fn lower_scores(out: &mut Vec<Instruction>, at: &Locator<'_>, plan: &PairPlan, circle_size: f64) {
    let pair = plan.pair;

    for side in Side::BOTH {
        out.push(Instruction::SetText {
            location: at.score(pair, side),
            value: format!("{:.2}", plan.score(side)),
        });
    }
    out.push(Instruction::SetText {
        location: at.pair_text(pair, SUM_SCORE),
        value: format!("{:.2}", plan.tendency.differential),
    });

    for side in Side::BOTH {
        for (tier, &ratio) in (1..=TIER_COUNT).zip(plan.tiers(side).ratios()) {
            let location = at.circle(pair, side, tier);
            if ratio == 0.0 {
                out.push(opacity(location, false));
            } else {
                out.push(opacity(location.clone(), true));
                out.push(Instruction::SetShapeScale {
                    location,
                    width: circle_size * ratio,
                    height: circle_size * ratio,
                    anchor: Anchor::Center,
                });
            }
        }
    }

    for side in Side::BOTH {
        out.push(opacity(at.tendency(pair, side), plan.tendency.arrow(side).visible));
    }
    for side in Side::BOTH {
        let arrow = plan.tendency.arrow(side);
        if arrow.visible {
            out.push(Instruction::SetShapeScale {
                location: at.tendency(pair, side),
                width: arrow.length,
                height: 0.0,
                anchor: Anchor::growing_toward(side),
            });
        }
    }
}

fn lower_makeup(out: &mut Vec<Instruction>, at: &Locator<'_>, plan: &PairPlan) {
    for side in Side::BOTH {
        for entry in plan.makeup(side).entries() {
            let location = at.makeup_arrow(plan.pair, side, entry.subgroup);
            let Some(arrow) = entry.arrow else {
                out.push(opacity(location, false));
                continue;
            };
            out.push(opacity(location.clone(), true));
            out.push(Instruction::SetShapeScale {
                location: location.clone(),
                width: arrow.length,
                height: 0.0,
                anchor: Anchor::growing_toward(side),
            });
            out.push(Instruction::SetDrawOrder {
                location,
                rank_from_front: u32::from(arrow.draw_order),
            });
        }
    }
}

fn lower_visibility(
    out: &mut Vec<Instruction>,
    at: &Locator<'_>,
    hide_annotations: bool,
    hide_overlay: bool,
) {
    out.extend(
        at.annotations()
            .into_iter()
            .map(|location| Instruction::SetLayerVisibility {
                location,
                hidden: hide_annotations,
            }),
    );
    out.push(Instruction::SetLayerVisibility {
        location: at.overlay(),
        hidden: hide_overlay,
    });
}
