use crate::cli::support::{pagesift, write_sample, SAMPLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Score command tests
// ============================================================================

#[test]
fn test_score_human() {
    let dir = tempdir().unwrap();
    let transcript = write_sample(dir.path());

    pagesift()
        .current_dir(dir.path())
        .args(["score", "Where does energy come from?", "--transcript"])
        .arg(&transcript)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keywords: energy, come"))
        .stdout(predicate::str::contains("Page   1  score   0"))
        .stdout(predicate::str::contains("Page   2  score   1"))
        .stdout(predicate::str::contains("Page   3  score   1"));
}

#[test]
fn test_score_json_substring_matches() {
    let dir = tempdir().unwrap();

    let output = pagesift()
        .current_dir(dir.path())
        .args(["--format", "json", "score", "cell"])
        .write_stdin("[Page 1] Cellular cells\n\n[Page 2] nothing")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pages"][0]["score"], 2);
    assert_eq!(json["pages"][0]["chars"], 14);
    assert_eq!(json["pages"][1]["score"], 0);
}

#[test]
fn test_score_records() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args(["--format", "records", "score", "respiration"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H pagesift=1 records=1 mode=score question=\"respiration\" keywords=respiration pages=3\n",
        ))
        .stdout(predicate::str::contains("P 2 score=1 chars=44\n"));
}
