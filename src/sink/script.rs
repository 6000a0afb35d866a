//! JSON-lines instruction script
//!
//! The script sink does not touch a document itself. It writes one JSON
//! object per operation so a small host-side script can replay them against
//! the live document in order.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::RasterOptions;
use crate::error::util::ensure_directory;
use crate::error::Result;
use crate::plan::{Anchor, Instruction, Location, Opacity};
use crate::sink::DocumentSink;

#[derive(Serialize)]
struct ScriptHeader<'a> {
    op: &'static str,
    generated_at: DateTime<Utc>,
    layer: &'a str,
}

/// Writes every operation as one line of JSON
#[derive(Debug)]
pub struct ScriptSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> ScriptSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Start the script with a `begin` line naming the target layer
    pub fn with_header(mut writer: W, layer: &str) -> Result<Self> {
        let header = ScriptHeader {
            op: "begin",
            generated_at: Utc::now(),
            layer,
        };
        serde_json::to_writer(&mut writer, &header)?;
        writer.write_all(b"\n")?;
        Ok(Self::new(writer))
    }

    /// Number of operations written
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn record(&mut self, instruction: &Instruction) -> Result<()> {
        serde_json::to_writer(&mut self.writer, instruction)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }
}

impl<W: Write> DocumentSink for ScriptSink<W> {
    fn set_text(&mut self, location: &Location, value: &str) -> Result<()> {
        self.record(&Instruction::SetText {
            location: location.clone(),
            value: value.to_string(),
        })
    }

    fn set_shape_opacity(&mut self, location: &Location, opacity: Opacity) -> Result<()> {
        self.record(&Instruction::SetShapeOpacity {
            location: location.clone(),
            opacity,
        })
    }

    fn set_shape_scale(
        &mut self,
        location: &Location,
        width: f64,
        height: f64,
        anchor: Anchor,
    ) -> Result<()> {
        self.record(&Instruction::SetShapeScale {
            location: location.clone(),
            width,
            height,
            anchor,
        })
    }

    fn set_draw_order(&mut self, location: &Location, rank_from_front: u32) -> Result<()> {
        self.record(&Instruction::SetDrawOrder {
            location: location.clone(),
            rank_from_front,
        })
    }

    fn set_layer_visibility(&mut self, location: &Location, hidden: bool) -> Result<()> {
        self.record(&Instruction::SetLayerVisibility {
            location: location.clone(),
            hidden,
        })
    }

    fn export_raster(&mut self, output_path: &Path, options: &RasterOptions) -> Result<()> {
        if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            ensure_directory(dir)?;
        }
        self.record(&Instruction::ExportRaster {
            output_path: output_path.to_path_buf(),
            options: *options,
        })
    }
}
