//! Error handling for the survey press.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors that can occur while reading, compiling or pressing survey data
#[derive(Debug, thiserror::Error)]
pub enum PressError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// IO error with the path and purpose attached
    #[error("{context}: {}", .path.display())]
    FileAccess {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Arrow error while decoding a table
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error while decoding a table
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error writing an instruction script
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The table does not have the block layout a subject needs
    #[error("Structural parse error in block {block} (row {row}): {message}")]
    StructuralParse {
        block: usize,
        row: usize,
        message: String,
    },

    /// A data cell could not be parsed as a number
    #[error("Invalid number '{value}' in column '{column}' at row {row}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// A score lies outside the closed six-point scale
    #[error("Score {score} is outside the range [0, 6]")]
    ScoreOutOfRange { score: f64 },

    /// A respondent count is negative
    #[error("Respondent count {count} is negative")]
    InvalidRespondentCount { count: i64 },

    /// The document sink could not resolve a named shape or layer
    #[error("Sink lookup error: {0}")]
    SinkLookup(String),

    /// The table file has an extension we cannot read
    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),

    /// A worker pool or blocking task failed
    #[error("Task error: {0}")]
    Task(String),
}

impl PressError {
    /// Create a structural parse error for a block
    pub fn structural(block: usize, row: usize, message: impl Into<String>) -> Self {
        Self::StructuralParse {
            block,
            row,
            message: message.into(),
        }
    }

    /// Whether this error came from malformed table content
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::StructuralParse { .. }
                | Self::InvalidNumber { .. }
                | Self::ScoreOutOfRange { .. }
                | Self::InvalidRespondentCount { .. }
        )
    }
}

/// Result type for survey press operations
pub type Result<T> = std::result::Result<T, PressError>;
