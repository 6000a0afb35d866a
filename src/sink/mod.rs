//! Document sinks
//!
//! A sink owns the live document the template is drawn in. Its visibility
//! and z-order state is cumulative, so plans must be applied one at a time:
//! every method takes `&mut self`, and [`apply`] replays one plan's
//! instructions in order.

pub mod recording;
pub mod script;

pub use recording::RecordingSink;
pub use script::ScriptSink;

use std::path::Path;

use crate::config::RasterOptions;
use crate::error::Result;
use crate::plan::{Anchor, Instruction, Location, Opacity};

/// Operations a document host must support to draw a render plan
pub trait DocumentSink {
    /// Replace the contents of a text frame
    fn set_text(&mut self, location: &Location, value: &str) -> Result<()>;

    fn set_shape_opacity(&mut self, location: &Location, opacity: Opacity) -> Result<()>;

    /// Scale a shape to `width` x `height` about `anchor`
    fn set_shape_scale(
        &mut self,
        location: &Location,
        width: f64,
        height: f64,
        anchor: Anchor,
    ) -> Result<()>;

    /// Bring the shape to the front, then send it back `rank_from_front` steps
    fn set_draw_order(&mut self, location: &Location, rank_from_front: u32) -> Result<()>;

    fn set_layer_visibility(&mut self, location: &Location, hidden: bool) -> Result<()>;

    /// Rasterise the document to `output_path`
    fn export_raster(&mut self, output_path: &Path, options: &RasterOptions) -> Result<()>;
}

impl Instruction {
    /// Perform this instruction on a sink
    pub fn apply_to<S: DocumentSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        match self {
            Self::SetText { location, value } => sink.set_text(location, value),
            Self::SetShapeOpacity { location, opacity } => {
                sink.set_shape_opacity(location, *opacity)
            }
            Self::SetShapeScale {
                location,
                width,
                height,
                anchor,
            } => sink.set_shape_scale(location, *width, *height, *anchor),
            Self::SetDrawOrder {
                location,
                rank_from_front,
            } => sink.set_draw_order(location, *rank_from_front),
            Self::SetLayerVisibility { location, hidden } => {
                sink.set_layer_visibility(location, *hidden)
            }
            Self::ExportRaster {
                output_path,
                options,
            } => sink.export_raster(output_path, options),
        }
    }
}

/// Replay an instruction list, stopping at the first failure
pub fn apply<S: DocumentSink + ?Sized>(sink: &mut S, instructions: &[Instruction]) -> Result<()> {
    for instruction in instructions {
        instruction.apply_to(sink)?;
    }
    Ok(())
}
