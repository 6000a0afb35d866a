//! Configuration for the survey press.
//!
//! Export prefix/suffix, target layer and template geometry live in one
//! explicit value that is handed to the assembler, the lowering step and the
//! pipeline.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::plan::{ExportVariant, RenderPlan};

/// Default location of the survey table
pub const DEFAULT_TABLE_PATH: &str = "detailed.csv";

/// Default layer holding the template groups
pub const DEFAULT_TARGET_LAYER: &str = "Working";

/// Geometry of the fixed template, in document points
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Full length of a tendency arrow (a differential of 6)
    pub tendency_arrow_span: f64,
    /// Full length of a makeup arrow (a subgroup score of 6)
    pub makeup_arrow_span: f64,
    /// Diameter of a fully filled circle tier
    pub circle_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tendency_arrow_span: 515.0,
            makeup_arrow_span: 600.0,
            circle_size: 170.0,
        }
    }
}

/// Options handed to the sink with every raster export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RasterOptions {
    pub antialias: bool,
    pub clip_to_artboard: bool,
    pub transparent: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            antialias: true,
            clip_to_artboard: true,
            transparent: false,
        }
    }
}

/// Naming and placement of exported images
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Prepended to every exported file name
    pub prefix: String,
    /// Appended after the subject name, before the variant suffix
    pub suffix: String,
    /// Directory receiving the exports; created if absent
    pub output_dir: PathBuf,
    pub raster: RasterOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            prefix: "afterlife-".to_string(),
            suffix: String::new(),
            output_dir: PathBuf::from("output"),
            raster: RasterOptions::default(),
        }
    }
}

impl ExportConfig {
    /// `{prefix}{name}{suffix}{variantSuffix}.png`
    #[must_use]
    pub fn file_name(&self, subject_name: &str, variant: &ExportVariant) -> String {
        format!(
            "{}{}{}{}.png",
            self.prefix,
            subject_name,
            self.suffix,
            variant.file_suffix()
        )
    }

    /// Full output path of one export
    #[must_use]
    pub fn output_path(&self, subject_name: &str, variant: &ExportVariant) -> PathBuf {
        self.output_dir.join(self.file_name(subject_name, variant))
    }

    /// Path of the instruction script written by the binary
    #[must_use]
    pub fn script_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}script.jsonl", self.prefix))
    }
}

/// Configuration for the survey press
#[derive(Debug, Clone)]
pub struct PressConfig {
    /// Table to read subjects from
    pub table_path: PathBuf,
    /// Document layer holding the template groups
    pub target_layer: String,
    pub layout: LayoutConfig,
    pub export: ExportConfig,
    /// Whether to compile subjects on a thread pool
    pub use_parallel: bool,
    /// Number of worker threads when compiling in parallel
    pub num_threads: usize,
    /// Whether to draw progress bars while pressing
    pub show_progress: bool,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            target_layer: DEFAULT_TARGET_LAYER.to_string(),
            layout: LayoutConfig::default(),
            export: ExportConfig::default(),
            use_parallel: true,
            num_threads: num_cpus::get(),
            show_progress: true,
        }
    }
}

impl PressConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a press configuration
    #[must_use]
    pub fn builder() -> PressConfigBuilder {
        PressConfigBuilder::new()
    }

    /// Output paths of every variant of a plan, in export order
    #[must_use]
    pub fn export_paths(&self, plan: &RenderPlan) -> Vec<PathBuf> {
        plan.variants()
            .iter()
            .map(|variant| self.export.output_path(plan.subject_name(), variant))
            .collect()
    }
}

impl fmt::Display for PressConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Press Configuration:")?;
        writeln!(f, "  Table: {}", self.table_path.display())?;
        writeln!(f, "  Target Layer: {}", self.target_layer)?;
        writeln!(f, "  Export Prefix: '{}'", self.export.prefix)?;
        writeln!(f, "  Export Suffix: '{}'", self.export.suffix)?;
        writeln!(f, "  Output Directory: {}", self.export.output_dir.display())?;
        writeln!(
            f,
            "  Arrow Spans: tendency {}, makeup {}",
            self.layout.tendency_arrow_span, self.layout.makeup_arrow_span
        )?;
        writeln!(f, "  Circle Size: {}", self.layout.circle_size)?;
        if self.use_parallel {
            writeln!(f, "  Parallel: {} threads", self.num_threads)?;
        } else {
            writeln!(f, "  Parallel: off")?;
        }
        Ok(())
    }
}

/// Builder for constructing a press configuration
#[derive(Debug, Clone)]
pub struct PressConfigBuilder {
    config: PressConfig,
}

impl Default for PressConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PressConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PressConfig::default(),
        }
    }

    /// Set the table path
    #[must_use]
    pub fn table_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.table_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the target layer name
    #[must_use]
    pub fn target_layer(mut self, layer: impl Into<String>) -> Self {
        self.config.target_layer = layer.into();
        self
    }

    /// Set the export prefix
    #[must_use]
    pub fn export_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.export.prefix = prefix.into();
        self
    }

    /// Set the export suffix
    #[must_use]
    pub fn export_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.export.suffix = suffix.into();
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.export.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the template geometry
    #[must_use]
    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }

    /// Set whether to compile in parallel
    #[must_use]
    pub const fn use_parallel(mut self, parallel: bool) -> Self {
        self.config.use_parallel = parallel;
        self
    }

    /// Set the worker thread count (at least one)
    #[must_use]
    pub fn num_threads(mut self, threads: usize) -> Self {
        self.config.num_threads = threads.max(1);
        self
    }

    /// Set whether progress bars are drawn
    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    /// Build the press configuration
    #[must_use]
    pub fn build(self) -> PressConfig {
        self.config
    }
}
