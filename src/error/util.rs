//! Utility functions for error handling
//!
//! This module provides helpers that attach path context to filesystem errors.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PressError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(PressError::FileAccess {
            path: path.to_path_buf(),
            context: format!("Expected a file for: {purpose}"),
            source: io::Error::new(io::ErrorKind::NotFound, "not a file"),
        });
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        PressError::FileAccess {
            path: path.to_path_buf(),
            context,
            source: e,
        }
    })
}

/// Create a directory (and its parents) if it does not exist yet
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PressError::FileAccess {
        path: path.to_path_buf(),
        context: "Failed to create output directory".to_string(),
        source: e,
    })
}
