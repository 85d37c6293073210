//! Integration tests for the source evaluation.
//!
//! These tests run the full load → evaluate → write sequence over small CSV
//! fixtures and check the files that land on disk.

use pretty_assertions::assert_eq;
use source_eval::reporting::{BASIC_INFO_FILE, COMPLETENESS_FILE, QUALITY_FILE};
use source_eval::{
    ColumnKind, Dataset, EvaluationOutcome, EvaluatorConfig, ReportWriter, SourceEvaluator,
};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Helper Functions
// ============================================================================

const BOM: &str = "\u{feff}";

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn config_for(fixture: &str, output_dir: &Path) -> EvaluatorConfig {
    EvaluatorConfig::builder()
        .input_path(fixtures_path().join(fixture))
        .output_dir(output_dir)
        .build()
        .expect("valid config")
}

fn run_fixture(fixture: &str, output_dir: &Path) -> EvaluationOutcome {
    SourceEvaluator::new(config_for(fixture, output_dir))
        .run()
        .expect("evaluation should succeed")
}

/// Report content without the byte-order mark.
fn read_report(dir: &Path, file: &str) -> String {
    let content = fs::read_to_string(dir.join(file)).expect("report file exists");
    assert!(content.starts_with(BOM), "{} should start with a BOM", file);
    content.trim_start_matches(BOM).to_string()
}

// ============================================================================
// Four-row scenario
// ============================================================================

#[test]
fn test_four_rows_completeness_file() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = run_fixture("four_rows.csv", dir.path());

    let completeness = &outcome.report.completeness;
    assert_eq!(completeness.complete_row_count, 3);
    assert_eq!(completeness.partial_row_count, 1);

    assert_eq!(
        read_report(dir.path(), COMPLETENESS_FILE),
        "complete_row_count,complete_row_pct,partial_row_count,partial_row_pct\n\
         3,75.00%,1,25.00%\n"
    );
}

#[test]
fn test_four_rows_quality_file() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = run_fixture("four_rows.csv", dir.path());

    let a = outcome.report.quality.get("A").unwrap();
    assert_eq!(a.missing_ratio_pct, 25.0);
    assert_eq!(a.unique_count, 2);

    assert_eq!(
        read_report(dir.path(), QUALITY_FILE),
        "column,missing_ratio_pct,unique_count,unique_ratio_pct\n\
         A,25.0,2,50.0\n\
         B,0.0,4,100.0\n"
    );
}

#[test]
fn test_four_rows_basic_info_file() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = run_fixture("four_rows.csv", dir.path());

    let content = read_report(dir.path(), BASIC_INFO_FILE);
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("row_count,column_count,column_types,memory_usage")
    );

    let row = lines.next().unwrap();
    assert!(row.starts_with("4,2,\"{A: text, B: numeric}\","), "got: {}", row);
    assert!(row.ends_with(" MB"));
    assert_eq!(lines.next(), None);

    assert_eq!(outcome.output_files.len(), 3);
}

// ============================================================================
// Movie sample
// ============================================================================

#[test]
fn test_movie_sample_reports() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_fixture("movies_sample.csv", dir.path()).report;

    assert_eq!(report.basic_info.row_count, 8);
    assert_eq!(report.basic_info.column_count, 6);

    let types = &report.basic_info.column_types;
    assert_eq!(types.kind_of("title"), Some(ColumnKind::Text));
    assert_eq!(types.kind_of("year"), Some(ColumnKind::Numeric));
    assert_eq!(types.kind_of("budget"), Some(ColumnKind::Numeric));
    assert_eq!(types.kind_of("rating"), Some(ColumnKind::Numeric));
    assert_eq!(types.kind_of("release_date"), Some(ColumnKind::Temporal));

    let genre = report.quality.get("genre").unwrap();
    assert_eq!(genre.missing_ratio_pct, 12.5);
    assert_eq!(genre.unique_count, 4);
    assert_eq!(genre.unique_ratio_pct, 50.0);

    let year = report.quality.get("year").unwrap();
    assert_eq!(year.missing_ratio_pct, 0.0);
    assert_eq!(year.unique_count, 5);
    assert_eq!(year.unique_ratio_pct, 62.5);

    // "NA" is a null marker
    let budget = report.quality.get("budget").unwrap();
    assert_eq!(budget.missing_count, 1);
    assert_eq!(budget.unique_count, 7);

    assert_eq!(report.completeness.complete_row_count, 4);
    assert_eq!(report.completeness.partial_row_count, 4);
    assert_eq!(report.completeness.complete_row_pct_display(), "50.00%");
}

#[test]
fn test_null_markers_count_as_missing_and_keep_numeric_types() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_fixture("null_markers.csv", dir.path()).report;

    assert_eq!(report.basic_info.row_count, 6);

    // quoted "" in a text column
    let title = report.quality.get("title").unwrap();
    assert_eq!(title.missing_count, 1);
    assert_eq!(title.unique_count, 5);

    // N/A, null and quoted ""
    let budget = report.quality.get("budget").unwrap();
    assert_eq!(budget.missing_count, 3);
    assert_eq!(budget.missing_ratio_pct, 50.0);
    assert_eq!(budget.unique_count, 3);

    let rating = report.quality.get("rating").unwrap();
    assert_eq!(rating.missing_count, 2);
    assert_eq!(rating.unique_count, 4);

    assert_eq!(report.completeness.complete_row_count, 1);
    assert_eq!(report.completeness.partial_row_count, 5);

    let basic_info = read_report(dir.path(), BASIC_INFO_FILE);
    let row = basic_info.lines().nth(1).unwrap();
    assert!(
        row.starts_with("6,3,\"{title: text, budget: numeric, rating: numeric}\","),
        "got: {}",
        row
    );

    let quality = read_report(dir.path(), QUALITY_FILE);
    assert!(quality.lines().any(|l| l == "budget,50.0,3,50.0"), "{}", quality);
}

#[test]
fn test_long_file_with_late_float_loads() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("long.csv");
    let mut content = String::from("title,budget\n");
    for i in 0..1500 {
        content.push_str(&format!("m{},{}\n", i, i * 1000));
    }
    content.push_str("late,2.5\n");
    fs::write(&input, content).unwrap();

    let output_dir = dir.path().join("out");
    let config = EvaluatorConfig::builder()
        .input_path(&input)
        .output_dir(&output_dir)
        .build()
        .unwrap();
    let report = SourceEvaluator::new(config).run().unwrap().report;

    assert_eq!(report.basic_info.row_count, 1501);
    assert_eq!(
        report.basic_info.column_types.kind_of("budget"),
        Some(ColumnKind::Numeric)
    );
    assert_eq!(report.quality.get("budget").unwrap().missing_count, 0);
}

#[test]
fn test_report_invariants_hold_for_all_fixtures() {
    for fixture in [
        "four_rows.csv",
        "movies_sample.csv",
        "header_only.csv",
        "null_markers.csv",
    ] {
        let dir = tempfile::tempdir().unwrap();
        let report = run_fixture(fixture, dir.path()).report;
        let rows = report.basic_info.row_count;
        let completeness = &report.completeness;

        assert_eq!(
            completeness.complete_row_count + completeness.partial_row_count,
            rows,
            "{}",
            fixture
        );
        if rows > 0 {
            let sum = completeness.complete_row_pct + completeness.partial_row_pct;
            assert!((sum - 100.0).abs() <= 0.01, "{}: {}", fixture, sum);
        }
        for col in &report.quality.columns {
            assert!((0.0..=100.0).contains(&col.missing_ratio_pct), "{}", col.column);
            assert!((0.0..=100.0).contains(&col.unique_ratio_pct), "{}", col.column);
        }
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_header_only_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_fixture("header_only.csv", dir.path()).report;

    assert_eq!(report.basic_info.row_count, 0);
    assert_eq!(report.basic_info.column_count, 3);
    for col in &report.quality.columns {
        assert_eq!(col.missing_ratio_pct, 0.0);
        assert_eq!(col.unique_ratio_pct, 0.0);
    }

    assert_eq!(
        read_report(dir.path(), COMPLETENESS_FILE),
        "complete_row_count,complete_row_pct,partial_row_count,partial_row_pct\n\
         0,0.00%,0,0.00%\n"
    );
}

#[test]
fn test_rerun_produces_identical_files() {
    let dir = tempfile::tempdir().unwrap();

    run_fixture("movies_sample.csv", dir.path());
    let first: Vec<Vec<u8>> = [BASIC_INFO_FILE, QUALITY_FILE, COMPLETENESS_FILE]
        .iter()
        .map(|f| fs::read(dir.path().join(f)).unwrap())
        .collect();

    run_fixture("movies_sample.csv", dir.path());
    let second: Vec<Vec<u8>> = [BASIC_INFO_FILE, QUALITY_FILE, COMPLETENESS_FILE]
        .iter()
        .map(|f| fs::read(dir.path().join(f)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_creates_nested_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("results").join("source_evaluation");

    run_fixture("four_rows.csv", &nested);

    assert!(nested.join(BASIC_INFO_FILE).is_file());
    assert!(nested.join(QUALITY_FILE).is_file());
    assert!(nested.join(COMPLETENESS_FILE).is_file());
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_source_is_load_error_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("out");

    let err = SourceEvaluator::new(config_for("no_such_file.csv", &output_dir))
        .run()
        .unwrap_err();

    assert!(err.is_load_error());
    assert_eq!(err.error_code(), "LOAD_ERROR");
    assert!(err.to_string().contains("no_such_file.csv"));
    assert!(!output_dir.exists());
}

#[test]
fn test_unwritable_destination_after_computation() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    fs::write(&blocker, "not a directory").unwrap();

    let config = config_for("four_rows.csv", &blocker);
    let dataset = Dataset::load(&config).unwrap();
    let report = SourceEvaluator::evaluate(&dataset).unwrap();

    let err = ReportWriter::new(&blocker).write_all(&report).unwrap_err();
    assert!(err.is_write_error());
    let message = err.to_string();
    assert!(message.contains("basic_info.csv"), "{}", message);

    let cause = std::error::Error::source(&err).expect("write error keeps its cause");
    assert!(message.ends_with(&cause.to_string()), "{}", message);
}

#[test]
fn test_output_dir_blocked_by_file_fails_run() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    fs::write(&blocker, "not a directory").unwrap();

    let err = SourceEvaluator::new(config_for("four_rows.csv", &blocker))
        .run()
        .unwrap_err();

    assert!(err.is_write_error());
    assert_eq!(err.error_code(), "WRITE_ERROR");
}
