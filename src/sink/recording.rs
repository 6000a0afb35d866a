//! In-memory sink that records every instruction it receives

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::config::RasterOptions;
use crate::error::{PressError, Result};
use crate::plan::{Anchor, Instruction, Location, Opacity, template_locations};
use crate::sink::DocumentSink;

/// Records instructions, optionally refusing locations missing from a template
#[derive(Debug, Default)]
pub struct RecordingSink {
    instructions: Vec<Instruction>,
    template: Option<FxHashSet<Location>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept locations of the standard template on `layer`
    #[must_use]
    pub fn with_template(layer: &str) -> Self {
        Self {
            instructions: Vec::new(),
            template: Some(template_locations(layer)),
        }
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[must_use]
    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Paths of every export seen so far, in order
    #[must_use]
    pub fn exports(&self) -> Vec<&Path> {
        self.instructions
            .iter()
            .filter_map(|i| match i {
                Instruction::ExportRaster { output_path, .. } => Some(output_path.as_path()),
                _ => None,
            })
            .collect()
    }

    fn resolve(&self, location: &Location) -> Result<Location> {
        match &self.template {
            Some(template) if !template.contains(location) => {
                Err(PressError::SinkLookup(format!("no item at {location}")))
            }
            _ => Ok(location.clone()),
        }
    }
}

impl DocumentSink for RecordingSink {
    fn set_text(&mut self, location: &Location, value: &str) -> Result<()> {
        let location = self.resolve(location)?;
        self.instructions.push(Instruction::SetText {
            location,
            value: value.to_string(),
        });
        Ok(())
    }

    fn set_shape_opacity(&mut self, location: &Location, opacity: Opacity) -> Result<()> {
        let location = self.resolve(location)?;
        self.instructions
            .push(Instruction::SetShapeOpacity { location, opacity });
        Ok(())
    }

    fn set_shape_scale(
        &mut self,
        location: &Location,
        width: f64,
        height: f64,
        anchor: Anchor,
    ) -> Result<()> {
        let location = self.resolve(location)?;
        self.instructions.push(Instruction::SetShapeScale {
            location,
            width,
            height,
            anchor,
        });
        Ok(())
    }

    fn set_draw_order(&mut self, location: &Location, rank_from_front: u32) -> Result<()> {
        let location = self.resolve(location)?;
        self.instructions.push(Instruction::SetDrawOrder {
            location,
            rank_from_front,
        });
        Ok(())
    }

    fn set_layer_visibility(&mut self, location: &Location, hidden: bool) -> Result<()> {
        let location = self.resolve(location)?;
        self.instructions
            .push(Instruction::SetLayerVisibility { location, hidden });
        Ok(())
    }

    fn export_raster(&mut self, output_path: &Path, options: &RasterOptions) -> Result<()> {
        self.instructions.push(Instruction::ExportRaster {
            output_path: output_path.to_path_buf(),
            options: *options,
        });
        Ok(())
    }
}
