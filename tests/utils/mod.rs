use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use afterlife_press::{PressConfig, Result, Subject, parse_subjects, reader::read_csv_rows};
use rand::Rng;
use rand::rngs::StdRng;

/// Column headers of the survey table
pub const HEADER_ROW: &str = "name,,origin,lust,gluttony,greed,sloth,envy,wrath,pride,\
chastity,temperance,charity,diligence,kindness,patience,humility,n";

/// One origin record: seven negative scores, seven positive scores, a count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginRow {
    pub negative: [f64; 7],
    pub positive: [f64; 7],
    pub respondents: i64,
}

impl OriginRow {
    /// Same score on every negative trait and every positive trait
    #[must_use]
    pub const fn uniform(negative: f64, positive: f64, respondents: i64) -> Self {
        Self {
            negative: [negative; 7],
            positive: [positive; 7],
            respondents,
        }
    }

    /// Score and respondent cells, comma separated
    #[must_use]
    pub fn cells(&self) -> String {
        self.negative
            .iter()
            .chain(&self.positive)
            .map(f64::to_string)
            .chain(std::iter::once(self.respondents.to_string()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// A subject block as it appears in the survey table
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectFixture {
    pub name: String,
    pub aggregate: OriginRow,
    pub male: OriginRow,
    pub female: OriginRow,
    pub other: OriginRow,
}

impl SubjectFixture {
    #[must_use]
    pub fn new(name: &str, aggregate: OriginRow, male: OriginRow, female: OriginRow, other: OriginRow) -> Self {
        Self {
            name: name.to_string(),
            aggregate,
            male,
            female,
            other,
        }
    }

    /// A subject whose every origin carries the same record
    #[must_use]
    pub fn flat(name: &str, row: OriginRow) -> Self {
        Self::new(name, row, row, row, row)
    }

    /// The seven rows of the block, "adj" rows included
    #[must_use]
    pub fn block(&self) -> String {
        let adj = OriginRow::uniform(1.0, 1.0, 1).cells();
        let mut out = String::new();
        let rows = [
            (self.name.as_str(), "all", self.aggregate.cells()),
            (self.name.as_str(), "male pure", self.male.cells()),
            (self.name.as_str(), "male adj", adj.clone()),
            (self.name.as_str(), "female pure", self.female.cells()),
            (self.name.as_str(), "female adj", adj.clone()),
            (self.name.as_str(), "other pure", self.other.cells()),
            (self.name.as_str(), "other adj", adj),
        ];
        for (name, origin, cells) in rows {
            let _ = writeln!(out, "{name},,{origin},{cells}");
        }
        out
    }
}

/// Full table text: two header rows then one block per subject
#[must_use]
pub fn table_csv(subjects: &[SubjectFixture]) -> String {
    let mut out = format!("{HEADER_ROW}\n,,,,,,,,,,,,,,,,,\n");
    for subject in subjects {
        out.push_str(&subject.block());
    }
    out
}

/// Parse fixture text the same way a table file is parsed
pub fn parse_fixture(csv: &str) -> Result<Vec<Subject>> {
    parse_subjects(read_csv_rows(csv.as_bytes())?)
}

/// A score on the six-point scale with two decimals, like the survey tables
pub fn random_score(rng: &mut StdRng) -> f64 {
    f64::from(rng.random_range(0..=600_u32)) / 100.0
}

/// A respondent count that is zero about one time in five
pub fn random_respondents(rng: &mut StdRng) -> i64 {
    if rng.random_bool(0.2) {
        0
    } else {
        rng.random_range(1..=40)
    }
}

pub fn random_origin(rng: &mut StdRng) -> OriginRow {
    let mut row = OriginRow::uniform(0.0, 0.0, random_respondents(rng));
    for score in row.negative.iter_mut().chain(row.positive.iter_mut()) {
        *score = random_score(rng);
    }
    row
}

pub fn random_subject(rng: &mut StdRng, name: &str) -> SubjectFixture {
    SubjectFixture::new(
        name,
        random_origin(rng),
        random_origin(rng),
        random_origin(rng),
        random_origin(rng),
    )
}

/// Sequential, quiet configuration writing into `output_dir`
#[must_use]
pub fn test_config(output_dir: &Path) -> PressConfig {
    PressConfig::builder()
        .output_dir(output_dir)
        .use_parallel(false)
        .show_progress(false)
        .build()
}

/// Write fixture text into `dir` and return its path
pub fn write_table(dir: &Path, file_name: &str, csv: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, csv)?;
    Ok(path)
}

/// The sample subject from the survey documentation
#[must_use]
pub fn mark() -> SubjectFixture {
    let mut aggregate = OriginRow::uniform(3.40, 4.69, 16);
    aggregate.negative[0] = 2.80;
    SubjectFixture::new(
        "Mark",
        aggregate,
        OriginRow::uniform(3.82, 4.0, 16),
        OriginRow::uniform(4.02, 4.0, 16),
        OriginRow::uniform(2.00, 4.0, 0),
    )
}
