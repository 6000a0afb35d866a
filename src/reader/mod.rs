//! Module for reading survey tables into rows of text cells.
//!
//! The survey table is row oriented and its first rows are free-form headers,
//! so every column is read as text and typed later by the subject parser.

use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::array::Array;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::util::safe_open_file;
use crate::error::{PressError, Result};
use crate::utils::logging::{log_table_open, log_table_read};

/// Number of columns in the survey table: two name columns, the origin label,
/// fourteen trait scores and the respondent count
pub const TABLE_COLUMNS: usize = 18;

/// Rows decoded per record batch
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// One row of the survey table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based position of the row in its source
    pub number: usize,
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new<S: Into<String>>(number: usize, cells: impl IntoIterator<Item = S>) -> Self {
        Self {
            number,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// Cell contents with surrounding whitespace removed; missing cells are empty
    #[must_use]
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", |c| c.trim())
    }
}

/// Supported on-disk table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    /// Detect the format from a file extension; no extension reads as CSV
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(Self::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Self::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("parquet") => Ok(Self::Parquet),
            Some(ext) => Err(PressError::UnsupportedFormat(format!(
                "'.{ext}' ({})",
                path.display()
            ))),
        }
    }
}

/// Schema used for CSV input: every column nullable text
#[must_use]
pub fn text_schema() -> SchemaRef {
    text_schema_with_width(TABLE_COLUMNS)
}

/// Text schema with `columns` columns, never fewer than [`TABLE_COLUMNS`]
#[must_use]
pub fn text_schema_with_width(columns: usize) -> SchemaRef {
    let fields: Vec<Field> = (0..columns.max(TABLE_COLUMNS))
        .map(|i| Field::new(format!("c{i}"), DataType::Utf8, true))
        .collect();
    Arc::new(Schema::new(fields))
}

/// Read a survey table from disk
pub fn read_table(path: &Path) -> Result<Vec<TableRow>> {
    let format = TableFormat::from_path(path)?;
    log_table_open(path, format);
    let start = Instant::now();

    let file = safe_open_file(path, "survey table")?;
    let rows = match format {
        TableFormat::Csv => read_csv_rows(file)?,
        TableFormat::Parquet => {
            let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
                .with_batch_size(DEFAULT_BATCH_SIZE)
                .build()?;
            let mut batches = Vec::new();
            for batch in reader {
                batches.push(batch?);
            }
            rows_from_batches(&batches)?
        }
    };

    log_table_read(path, rows.len(), start.elapsed());
    Ok(rows)
}

/// Read comma-separated rows from any reader
///
/// The schema is as wide as the first row, and at least [`TABLE_COLUMNS`].
/// Shorter rows are padded with empty cells. Blank lines produce no row.
pub fn read_csv_rows<R: Read>(mut input: R) -> Result<Vec<TableRow>> {
    let mut buffer = Vec::new();
    input.read_to_end(&mut buffer)?;

    let (inferred, _) = Format::default()
        .with_header(false)
        .infer_schema(buffer.as_slice(), Some(1))?;

    let reader = ReaderBuilder::new(text_schema_with_width(inferred.fields().len()))
        .with_header(false)
        .with_truncated_rows(true)
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build(Cursor::new(buffer))?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    rows_from_batches(&batches)
}

/// Flatten record batches into numbered text rows
pub fn rows_from_batches(batches: &[RecordBatch]) -> Result<Vec<TableRow>> {
    let mut rows = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());

    for batch in batches {
        for row in 0..batch.num_rows() {
            let cells = row_cells(batch, row)?;
            rows.push(TableRow {
                number: rows.len() + 1,
                cells,
            });
        }
    }

    Ok(rows)
}

/// Render every column of one row as text; nulls become empty cells
pub fn row_cells(batch: &RecordBatch, row: usize) -> Result<Vec<String>> {
    batch
        .columns()
        .iter()
        .map(|column| {
            if column.is_null(row) {
                Ok(String::new())
            } else {
                array_value_to_string(column.as_ref(), row).map_err(PressError::from)
            }
        })
        .collect()
}
