//! Log lines shared by the reader, the parser and the pipeline
//!
//! Keeping them here means a table read, a skipped row or an export always
//! reads the same in the log, whichever code path produced it.

use std::path::Path;
use std::time::Duration;

use crate::reader::TableFormat;

/// Log the start of a table read
pub fn log_table_open(path: &Path, format: TableFormat) {
    log::info!("Reading {format:?} survey table {}", path.display());
}

/// Log a finished table read
///
/// # Arguments
/// * `path` - Table that was read
/// * `rows` - Number of rows decoded, headers included
/// * `elapsed` - Time spent decoding
pub fn log_table_read(path: &Path, rows: usize, elapsed: Duration) {
    log::info!(
        "Read {} rows from {} in {:?}",
        rows,
        path.display(),
        elapsed
    );
}

/// Log a data row the parser passes over
pub fn log_skipped_row(row: usize, reason: &str) {
    log::debug!("Skipping row {row}: {reason}");
}

/// Log an origin record replacing an earlier one in the same block
pub fn log_duplicate_origin(row: usize, block: usize, origin: &str) {
    log::warn!("Row {row} repeats origin '{origin}' in block {block}; keeping the later record");
}

/// Log one export a sink has accepted
pub fn log_export(subject: &str, variant: &str, path: &Path) {
    log::debug!("Exported '{subject}' ({variant}) to {}", path.display());
}
