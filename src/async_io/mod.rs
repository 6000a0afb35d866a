//! Async loading of survey tables
//!
//! Reading and parsing are blocking; they run on tokio's blocking pool so an
//! async caller is not stalled.

use std::path::PathBuf;

use crate::error::{PressError, Result};
use crate::models::Subject;
use crate::pipeline::load_subjects;

/// Read and parse a survey table without blocking the async runtime
pub async fn load_subjects_async(path: PathBuf) -> Result<Vec<Subject>> {
    tokio::task::spawn_blocking(move || load_subjects(&path))
        .await
        .map_err(|e| PressError::Task(format!("Table loading task failed: {e}")))?
}
