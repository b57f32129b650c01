use std::io::Write;

use tempfile::NamedTempFile;

use survey_qc::{Cell, NullSink, QuestionnaireData, DEFAULT_MAX_NANS_PER_SUBJECT};

/// Seven subjects: a mix of valid/invalid emails, missing ages and missing
/// grades, plus a passthrough `group` column.
const FIXTURE: &str = r#"[
  {"group": "a", "age": 23,   "email": "ada@lovelace.org", "q1": 2, "q2": 4, "q3": null, "q4": 6, "q5": 8},
  {"group": "a", "age": 31,   "email": "ab@.com",          "q1": 3, "q2": 3, "q3": 3,    "q4": 3, "q5": null},
  {"group": "b", "age": null, "email": "a@b@c.com",        "q1": 5, "q2": 5, "q3": 5,    "q4": 5, "q5": 5},
  {"group": "b", "age": 47,   "email": "@abc.com",         "q1": 1, "q2": 2, "q3": 3,    "q4": 4, "q5": 5},
  {"group": "b", "age": 100,  "email": "abc.com",          "q1": null, "q2": null, "q3": null, "q4": null, "q5": null},
  {"group": "c", "age": 62,   "email": "a.b@c.com",        "q1": 4, "q2": 4, "q3": null, "q4": null, "q5": 4},
  {"group": "c", "age": 5,    "email": "x@y.net",          "q1": 10, "q2": 10, "q3": 10, "q4": 10, "q5": 10}
]"#;

fn fixture_file() -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    write!(file, "{}", FIXTURE).unwrap();
    file
}

#[test]
fn load_then_run_every_operation() {
    let file = fixture_file();
    let data = QuestionnaireData::from_path(file.path()).unwrap();

    assert_eq!(data.table().len(), 7);
    assert_eq!(data.source_hash().len(), 64);

    // histogram: 6 present ages, one of them exactly 100
    let dist = data.show_age_distribution(&mut NullSink).unwrap();
    assert_eq!(dist.total(), 6);
    assert_eq!(dist.counts[0], 1); // age 5
    assert_eq!(dist.counts[2], 1); // age 23
    assert_eq!(dist.counts[9], 1); // age 100, closed last bucket
    assert_eq!(dist.edges.len(), 11);

    // email filter: rows 0, 5 and 6 survive
    let valid = data.filter_valid_emails().unwrap();
    assert_eq!(valid.len(), 3);
    let email_col = valid.column_index("email").unwrap();
    assert_eq!(
        valid.cell(0, email_col),
        Some(&Cell::Text("ada@lovelace.org".to_string()))
    );
    assert_eq!(
        valid.cell(2, email_col),
        Some(&Cell::Text("x@y.net".to_string()))
    );

    // imputation
    let (filled, modified) = data.fill_missing_grades().unwrap();
    assert_eq!(modified, vec![0, 1, 4, 5]);
    let q3 = filled.column_index("q3").unwrap();
    assert_eq!(filled.cell(0, q3), Some(&Cell::Float(5.0))); // mean of 2,4,6,8
    assert_eq!(filled.cell(4, q3), Some(&Cell::Missing)); // all grades missing

    // scoring with the default tolerance
    let scored = data.score_subjects(DEFAULT_MAX_NANS_PER_SUBJECT).unwrap();
    let score = scored.column_index("score").unwrap();
    assert_eq!(scored.cell(0, score), Some(&Cell::Int(5))); // floor(20/4)
    assert_eq!(scored.cell(1, score), Some(&Cell::Int(3))); // 1 missing tolerated
    assert_eq!(scored.cell(4, score), Some(&Cell::Missing)); // 5 missing
    assert_eq!(scored.cell(5, score), Some(&Cell::Missing)); // 2 missing
    assert_eq!(scored.cell(6, score), Some(&Cell::Int(10)));
}

#[test]
fn passthrough_columns_survive_every_transform() {
    let file = fixture_file();
    let data = QuestionnaireData::from_path(file.path()).unwrap();

    let valid = data.filter_valid_emails().unwrap();
    let group = valid.column_index("group").unwrap();
    assert_eq!(valid.cell(1, group), Some(&Cell::Text("c".to_string())));

    let (filled, _) = data.fill_missing_grades().unwrap();
    assert!(filled.column_index("group").is_ok());

    let scored = data.score_subjects(1).unwrap();
    assert_eq!(scored.columns().first().map(String::as_str), Some("group"));
    assert_eq!(scored.columns().last().map(String::as_str), Some("score"));
}

#[test]
fn refiltering_filtered_output_removes_nothing() {
    let file = fixture_file();
    let data = QuestionnaireData::from_path(file.path()).unwrap();

    let once = data.filter_valid_emails().unwrap();
    let twice = survey_qc::ops::filter_valid_emails(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn imputing_clean_rows_is_identity() {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    write!(
        file,
        r#"[{{"age": 20, "email": "a@b.c", "q1": 1, "q2": 2, "q3": 3, "q4": 4, "q5": 5}}]"#
    )
    .unwrap();

    let data = QuestionnaireData::from_path(file.path()).unwrap();
    let (filled, modified) = data.fill_missing_grades().unwrap();
    assert_eq!(&filled, data.table());
    assert!(modified.is_empty());
}
