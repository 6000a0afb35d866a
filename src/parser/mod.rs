//! Subject parsing
//!
//! The survey table opens with two header rows. After that every subject
//! owns a block of seven rows: one row per origin ("all", "male pure",
//! "female pure", "other pure") interleaved with derived "adj" rows that are
//! ignored. For example:
//!
//! ```text
//! mark,mark,all,3.40,2.56,...,3.71,16
//! mark,,male pure,3.69,2.28,...,3.34,16
//! mark,,male adj,2.62,1.62,...,2.38,16
//! ...
//! ```

use crate::error::{PressError, Result};
use crate::models::{NEGATIVE_TRAITS, OriginType, POSITIVE_TRAITS, ScoreSet, Subject};
use crate::reader::TableRow;
use crate::utils::logging::{log_duplicate_origin, log_skipped_row};

/// Header rows preceding the first subject block
pub const HEADER_ROWS: usize = 2;

/// Rows per subject block
pub const BLOCK_ROWS: usize = 7;

const COLUMN_NAME: usize = 0;
const COLUMN_ORIGIN: usize = 2;
const COLUMN_FIRST_SCORE: usize = 3;
const COLUMN_RESPONDENTS: usize = 17;
const RESPONDENTS_COLUMN_NAME: &str = "n";

/// Collects the origin records of one block until it can become a `Subject`
#[derive(Debug)]
struct BlockAccumulator {
    index: usize,
    first_row: usize,
    name: Option<String>,
    origins: [Option<ScoreSet>; 4],
}

impl BlockAccumulator {
    const fn new(index: usize, first_row: usize) -> Self {
        Self {
            index,
            first_row,
            name: None,
            origins: [None, None, None, None],
        }
    }

    fn absorb(&mut self, row: &TableRow, position: usize) -> Result<()> {
        let name = row.cell(COLUMN_NAME);
        if position == 0 && !name.is_empty() {
            self.name = Some(name.to_string());
        }
        if name.is_empty() {
            log_skipped_row(row.number, "spacer");
            return Ok(());
        }

        let label = row.cell(COLUMN_ORIGIN);
        let Some(origin) = OriginType::from_label(label) else {
            log_skipped_row(row.number, &format!("origin tag '{label}'"));
            return Ok(());
        };

        let scores = parse_score_set(row, self.index)?;
        let slot = &mut self.origins[origin.index()];
        if slot.is_some() {
            log_duplicate_origin(row.number, self.index, origin.label());
        }
        *slot = Some(scores);
        Ok(())
    }

    fn finish(self) -> Result<Subject> {
        let missing: Vec<&str> = OriginType::ALL
            .iter()
            .filter(|o| self.origins[o.index()].is_none())
            .map(|o| o.label())
            .collect();
        if !missing.is_empty() {
            return Err(PressError::structural(
                self.index,
                self.first_row,
                format!("missing origin records: {}", missing.join(", ")),
            ));
        }

        let name = self.name.ok_or_else(|| {
            PressError::structural(self.index, self.first_row, "block has no subject name")
        })?;

        match self.origins {
            [Some(aggregate), Some(male), Some(female), Some(other)] => {
                Ok(Subject::new(name, aggregate, male, female, other))
            }
            _ => Err(PressError::structural(
                self.index,
                self.first_row,
                "incomplete block",
            )),
        }
    }
}

fn parse_score_set(row: &TableRow, block: usize) -> Result<ScoreSet> {
    if row.cells.len() <= COLUMN_RESPONDENTS {
        return Err(PressError::structural(
            block,
            row.number,
            format!(
                "expected {} columns, found {}",
                COLUMN_RESPONDENTS + 1,
                row.cells.len()
            ),
        ));
    }

    let mut negative = [0.0; 7];
    let mut positive = [0.0; 7];
    for (i, name) in NEGATIVE_TRAITS.iter().enumerate() {
        negative[i] = parse_cell(row, COLUMN_FIRST_SCORE + i, name)?;
    }
    for (i, name) in POSITIVE_TRAITS.iter().enumerate() {
        positive[i] = parse_cell(row, COLUMN_FIRST_SCORE + 7 + i, name)?;
    }
    let respondents = parse_cell(row, COLUMN_RESPONDENTS, RESPONDENTS_COLUMN_NAME)?;

    ScoreSet::new(negative, positive, respondents)
}

fn parse_cell<T: std::str::FromStr>(row: &TableRow, index: usize, column: &'static str) -> Result<T> {
    let value = row.cell(index);
    value.parse().map_err(|_| PressError::InvalidNumber {
        row: row.number,
        column,
        value: value.to_string(),
    })
}

/// Lazy iterator turning table rows into subjects
///
/// Yields one subject per completed block. After the first error it yields
/// nothing more; parse again from fresh rows to iterate a second time.
pub struct SubjectParser<I> {
    rows: I,
    headers_left: usize,
    data_rows: usize,
    block: Option<BlockAccumulator>,
    deferred: Option<PressError>,
    finished: bool,
}

impl<I: Iterator<Item = TableRow>> SubjectParser<I> {
    pub fn new(rows: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            rows: rows.into_iter(),
            headers_left: HEADER_ROWS,
            data_rows: 0,
            block: None,
            deferred: None,
            finished: false,
        }
    }

    fn fail(&mut self, error: PressError) -> Option<Result<Subject>> {
        self.finished = true;
        self.block = None;
        Some(Err(error))
    }
}

impl<I: Iterator<Item = TableRow>> Iterator for SubjectParser<I> {
    type Item = Result<Subject>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(error) = self.deferred.take() {
            return self.fail(error);
        }

        while !self.finished {
            let Some(row) = self.rows.next() else {
                self.finished = true;
                return self.block.take().map(BlockAccumulator::finish);
            };

            if self.headers_left > 0 {
                self.headers_left -= 1;
                continue;
            }

            let block_index = self.data_rows / BLOCK_ROWS;
            let position = self.data_rows % BLOCK_ROWS;
            self.data_rows += 1;

            let completed = if position == 0 {
                self.block
                    .replace(BlockAccumulator::new(block_index, row.number))
            } else {
                None
            };

            let absorbed = match self.block.as_mut() {
                Some(block) => block.absorb(&row, position),
                None => Err(PressError::structural(block_index, row.number, "no open block")),
            };

            match (completed.map(BlockAccumulator::finish), absorbed) {
                (Some(Err(e)), _) | (None, Err(e)) => return self.fail(e),
                (Some(Ok(subject)), Err(e)) => {
                    self.deferred = Some(e);
                    return Some(Ok(subject));
                }
                (Some(Ok(subject)), Ok(())) => return Some(Ok(subject)),
                (None, Ok(())) => {}
            }
        }

        None
    }
}

/// Parse every subject, failing the whole ingestion on the first error
pub fn parse_subjects(rows: impl IntoIterator<Item = TableRow>) -> Result<Vec<Subject>> {
    SubjectParser::new(rows).collect()
}
