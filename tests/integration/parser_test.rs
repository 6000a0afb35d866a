use std::fs::File;
use std::io::Cursor;
use std::sync::Arc;

use afterlife_press::models::{Side, Subgroup};
use afterlife_press::reader::{TABLE_COLUMNS, read_csv_rows, text_schema};
use afterlife_press::{OriginType, PressError, SubjectParser, TraitPair, parse_subjects, read_table};
use arrow::array::{ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use crate::utils::{OriginRow, SubjectFixture, mark, parse_fixture, table_csv, write_table};

/// Swap the table row starting with `prefix` for `row`
fn replace_row(csv: &str, prefix: &str, row: &str) -> String {
    csv.lines()
        .map(|line| if line.starts_with(prefix) { row } else { line })
        .map(|line| format!("{line}\n"))
        .collect()
}

#[test]
fn test_reads_rows_from_any_reader() {
    let csv = table_csv(&[mark()]);
    let rows = read_csv_rows(Cursor::new(csv)).unwrap();

    assert_eq!(rows.len(), 2 + 7);
    assert_eq!(rows[0].number, 1);
    assert!(rows.iter().all(|r| r.cells.len() == TABLE_COLUMNS));
    assert_eq!(rows[2].cell(0), "Mark");
    assert_eq!(rows[2].cell(2), "all");
    assert_eq!(rows[1].cell(0), "");
}

#[test]
fn test_short_rows_are_padded() {
    let csv = "h\nh\nMark,,all,1\n";
    let rows = read_csv_rows(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].cell(3), "1");
    assert_eq!(rows[2].cell(17), "");
}

#[test]
fn test_trailing_delimiter_on_every_row() {
    let csv: String = table_csv(&[mark()])
        .lines()
        .map(|line| format!("{line},\n"))
        .collect();

    let rows = read_csv_rows(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 9);
    assert!(rows.iter().all(|r| r.cells.len() == TABLE_COLUMNS + 1));

    let subjects = parse_subjects(rows).unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].aggregate_pair(TraitPair::LustChastity), (2.80, 4.69));
    assert_eq!(subjects[0].scores(OriginType::Aggregate).respondents(), 16);
}

#[test]
fn test_spacer_row_inside_block() {
    let ruth = SubjectFixture::flat("Ruth", OriginRow::uniform(2.0, 3.0, 5));
    let csv = replace_row(&table_csv(&[mark(), ruth]), "Mark,,male adj", &",".repeat(TABLE_COLUMNS - 1));

    let subjects = parse_fixture(&csv).unwrap();
    let names: Vec<&str> = subjects.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["Mark", "Ruth"]);
    assert_eq!(subjects[1].aggregate_pair(TraitPair::PrideHumility), (2.0, 3.0));
}

#[test]
fn test_duplicate_origin_keeps_later_record() {
    let repeat = format!("Mark,,male pure,{}", OriginRow::uniform(5.0, 0.5, 9).cells());
    let csv = replace_row(&table_csv(&[mark()]), "Mark,,female adj", &repeat);

    let subjects = parse_fixture(&csv).unwrap();
    let male = subjects[0].scores(OriginType::MaleOnly);
    assert_eq!(male.respondents(), 9);
    assert_eq!(male.negative_scores(), &[5.0; 7]);
    assert_eq!(male.positive_scores(), &[0.5; 7]);
    assert_eq!(subjects[0].scores(OriginType::FemaleOnly).respondents(), 16);
}

#[test]
fn test_block_without_name_is_structural() {
    let all = format!("Mark,,all,{}", mark().aggregate.cells());
    let csv = table_csv(&[mark()]);
    let csv = replace_row(&csv, "Mark,,all", &",".repeat(TABLE_COLUMNS - 1));
    let csv = replace_row(&csv, "Mark,,male adj", &all);

    match parse_fixture(&csv) {
        Err(err @ PressError::StructuralParse { .. }) => {
            assert!(err.to_string().contains("no subject name"));
        }
        other => panic!("expected a structural error, got {other:?}"),
    }
}

#[test]
fn test_parses_sample_subject() {
    let subjects = parse_fixture(&table_csv(&[mark()])).unwrap();
    assert_eq!(subjects.len(), 1);

    let subject = &subjects[0];
    assert_eq!(subject.name(), "Mark");
    assert_eq!(subject.aggregate_pair(TraitPair::LustChastity), (2.80, 4.69));
    assert_eq!(subject.aggregate_pair(TraitPair::PrideHumility), (3.40, 4.69));
    assert_eq!(subject.scores(OriginType::OtherOnly).respondents(), 0);

    let negative = subject.subgroup_scores(TraitPair::GreedCharity, Side::Negative);
    assert_eq!(negative.get(Subgroup::Male), 3.82);
    assert_eq!(negative.get(Subgroup::Female), 4.02);
    assert_eq!(negative.get(Subgroup::Other), 2.00);
}

#[test]
fn test_envy_and_wrath_columns() {
    let mut aggregate = OriginRow::uniform(1.0, 1.0, 5);
    aggregate.negative[4] = 4.5; // envy
    aggregate.positive[5] = 5.5; // patience
    let fixture = SubjectFixture::flat("Order", aggregate);

    let subjects = parse_fixture(&table_csv(&[fixture])).unwrap();
    assert_eq!(subjects[0].aggregate_pair(TraitPair::EnvyKindness), (4.5, 1.0));
    assert_eq!(subjects[0].aggregate_pair(TraitPair::WrathPatience), (1.0, 5.5));
}

#[test]
fn test_missing_origin_is_structural() {
    let csv = table_csv(&[mark()]).replace("female pure", "female adj");
    let err = parse_fixture(&csv).unwrap_err();
    assert!(err.is_structural());
    assert!(err.to_string().contains("female pure"));
}

#[test]
fn test_unparseable_score() {
    let csv = table_csv(&[mark()]).replacen("2.8", "n/a", 1);
    match parse_fixture(&csv) {
        Err(PressError::InvalidNumber { column, value, .. }) => {
            assert_eq!(column, "Lust");
            assert_eq!(value, "n/a");
        }
        other => panic!("expected an invalid number, got {other:?}"),
    }
}

#[test]
fn test_score_off_scale_rejected() {
    let fixture = SubjectFixture::flat("Over", OriginRow::uniform(6.5, 1.0, 3));
    assert!(matches!(
        parse_fixture(&table_csv(&[fixture])),
        Err(PressError::ScoreOutOfRange { .. })
    ));
}

#[test]
fn test_negative_respondents_rejected() {
    let fixture = SubjectFixture::flat("Under", OriginRow::uniform(1.0, 1.0, -2));
    assert!(matches!(
        parse_fixture(&table_csv(&[fixture])),
        Err(PressError::InvalidRespondentCount { count: -2 })
    ));
}

#[test]
fn test_iterator_yields_good_blocks_before_error() {
    let good = SubjectFixture::flat("Good", OriginRow::uniform(1.0, 2.0, 4));
    let bad = SubjectFixture::flat("Bad", OriginRow::uniform(1.0, 2.0, 4));
    let csv = table_csv(&[good, bad]).replace("Bad,,other pure", "Bad,,other adj");

    let rows = read_csv_rows(csv.as_bytes()).unwrap();
    let mut parser = SubjectParser::new(rows);
    assert_eq!(parser.next().unwrap().unwrap().name(), "Good");
    assert!(parser.next().unwrap().is_err());
    assert!(parser.next().is_none());
}

#[test]
fn test_read_table_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(dir.path(), "detailed.csv", &table_csv(&[mark()])).unwrap();
    let rows = read_table(&path).unwrap();
    assert_eq!(rows.len(), 9);

    let other = write_table(dir.path(), "detailed.xlsx", "").unwrap();
    assert!(matches!(
        read_table(&other),
        Err(PressError::UnsupportedFormat(_))
    ));

    assert!(matches!(
        read_table(&dir.path().join("missing.csv")),
        Err(PressError::FileAccess { .. })
    ));
}

#[test]
fn test_parquet_table_matches_csv() {
    let dir = tempfile::tempdir().unwrap();
    let csv_rows = read_csv_rows(table_csv(&[mark()]).as_bytes()).unwrap();

    let columns: Vec<ArrayRef> = (0..TABLE_COLUMNS)
        .map(|c| {
            let values: Vec<Option<&str>> = csv_rows.iter().map(|r| Some(r.cell(c))).collect();
            Arc::new(StringArray::from(values)) as ArrayRef
        })
        .collect();
    let batch = RecordBatch::try_new(text_schema(), columns).unwrap();

    let path = dir.path().join("detailed.parquet");
    let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), batch.schema(), None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let rows = read_table(&path).unwrap();
    assert_eq!(rows, csv_rows);

    let subjects = parse_subjects(rows).unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].name(), "Mark");
}
