use crate::cli::support::{pagesift, write_transcript, SAMPLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Stats command tests
// ============================================================================

#[test]
fn test_stats_human() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .arg("stats")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Markers:    3"))
        .stdout(predicate::str::contains("Pages:      3"));
}

#[test]
fn test_stats_reports_marker_mismatches() {
    let dir = tempdir().unwrap();
    let transcript = write_transcript(dir.path(), "[Page 1] one\n\n[Page 5] five");

    let output = pagesift()
        .current_dir(dir.path())
        .args(["--format", "json", "stats", "--transcript"])
        .arg(&transcript)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["page_count"], 2);
    assert_eq!(json["parsed_pages"], 2);
    assert_eq!(
        json["marker_mismatches"],
        serde_json::json!([{ "position": 2, "marker": 5 }])
    );
}

#[test]
fn test_stats_require_text_rejects_empty_extraction() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args(["stats", "--require-text"])
        .write_stdin("[Page 1] \n\n[Page 2] ")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no meaningful text"));

    pagesift()
        .current_dir(dir.path())
        .args(["stats", "--require-text"])
        .write_stdin(SAMPLE)
        .assert()
        .success();
}

#[test]
fn test_stats_records() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args(["--format", "records", "stats"])
        .write_stdin("[Page 2] shifted")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H pagesift=1 records=1 mode=stats markers=1 pages=1 words=3 chars=16\n",
        ))
        .stdout(predicate::str::contains("M 1 marker=2"));
}
