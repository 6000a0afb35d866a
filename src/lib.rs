//! Compiles sin/virtue survey tables into layout instructions for a fixed
//! infographic template.
//!
//! Each subject's aggregate and per-subgroup trait scores become circle fill
//! ratios, tendency arrows and stacked makeup arrows, which are lowered into
//! an ordered list of document operations and replayed through a
//! [`sink::DocumentSink`].

pub mod algorithm;
pub mod async_io;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod plan;
pub mod reader;
pub mod sink;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{ExportConfig, LayoutConfig, PressConfig, RasterOptions};
pub use error::{PressError, Result};
pub use models::{OriginType, ScoreSet, Subject, TraitPair};
pub use parser::{SubjectParser, parse_subjects};
pub use plan::{ExportVariant, Instruction, RenderPlan, RenderPlanAssembler, lower};
pub use reader::{TableRow, read_table};
pub use sink::{DocumentSink, RecordingSink, ScriptSink};

// Pipeline entry points
pub use async_io::load_subjects_async;
pub use pipeline::{compile_subjects, load_subjects, press_plans, select_subjects};
