//! Tests for the JSON report structure.

use std::path::PathBuf;

use loopcheck::config::ScanConfig;
use loopcheck::detect::Walker;
use loopcheck::report::{build_json, JsonReport};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn run_and_get_json() -> JsonReport {
    let testdata = testdata_path();
    let result = Walker::new(&testdata, ScanConfig::default())
        .run()
        .expect("scan should succeed");
    build_json(&testdata.to_string_lossy(), &result)
}

#[test]
fn test_json_report_structure() {
    let report = run_and_get_json();

    assert!(!report.version.is_empty(), "version should not be empty");
    assert!(!report.path.is_empty(), "path should not be empty");
    assert_eq!(report.files_scanned, 4);
    assert_eq!(report.files_skipped, 0);
    assert!(!report.passed, "fixtures contain critical findings");
}

#[test]
fn test_json_findings_format() {
    let report = run_and_get_json();

    assert_eq!(report.critical.len(), 2);
    assert!(report.warnings.is_empty());

    for f in &report.critical {
        assert!(!f.file.is_empty(), "file should not be empty");
        assert!(!f.message.is_empty(), "message should not be empty");
        assert!(!f.suggestion.is_empty(), "suggestion should not be empty");
        assert!(f.start_line >= 1, "line numbers are 1-based");
        assert!(f.start_line <= f.end_line, "range must be ordered");
    }
}

#[test]
fn test_json_serializes_and_parses() {
    let report = run_and_get_json();

    let json = serde_json::to_string_pretty(&report).expect("should serialize");
    let parsed: JsonReport = serde_json::from_str(&json).expect("should parse back");

    assert_eq!(parsed.files_scanned, report.files_scanned);
    assert_eq!(parsed.critical.len(), report.critical.len());
    assert_eq!(parsed.passed, report.passed);
}

#[test]
fn test_json_level_split_matches_fixture_files() {
    let report = run_and_get_json();

    let files: Vec<&str> = report.critical.iter().map(|f| f.file.as_str()).collect();
    assert!(files.contains(&"counter.tsx"));
    assert!(files.contains(&"profile.jsx"));
}
