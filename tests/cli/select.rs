use crate::cli::support::{pagesift, write_sample, write_transcript, SAMPLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Select command tests
// ============================================================================

#[test]
fn test_select_respiration_scenario() {
    let dir = tempdir().unwrap();
    let transcript = write_sample(dir.path());

    pagesift()
        .current_dir(dir.path())
        .args(["select", "How does respiration work?", "--max-chars", "1000"])
        .arg("--transcript")
        .arg(&transcript)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[Page 1] The cell is the basic unit of life.",
        ))
        .stdout(predicate::str::contains(
            "[Page 2] Mitochondria produce energy via respiration.",
        ));
}

#[test]
fn test_select_reads_stdin() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args(["select", "anything"])
        .write_stdin("Just plain text with no markers.")
        .assert()
        .success()
        .stdout("[Page 1] Just plain text with no markers.\n");
}

#[test]
fn test_select_zero_budget() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args(["select", "respiration", "--max-chars", "0"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No pages fit within a budget of 0"));
}

#[test]
fn test_select_empty_transcript() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args(["--quiet", "select", "respiration"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn test_select_json() {
    let dir = tempdir().unwrap();

    let output = pagesift()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "select",
            "How does respiration work?",
            "--max-chars",
            "1000",
        ])
        .write_stdin(SAMPLE)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["budget"], 1000);
    assert_eq!(json["total_pages"], 3);
    assert_eq!(json["keywords"], serde_json::json!(["respiration", "work"]));
    assert_eq!(json["pages"][0]["number"], 1);
    assert_eq!(json["pages"][0]["reason"], "first_page");
    assert_eq!(json["pages"][1]["number"], 2);
    assert_eq!(json["pages"][1]["reason"], "relevant");
    assert_eq!(json["pages"][1]["score"], 1);
    assert_eq!(json["pages"][2]["reason"], "backfill");
    assert_eq!(json["content"], SAMPLE);
}

#[test]
fn test_select_records() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args([
            "--format",
            "records",
            "select",
            "respiration",
            "--max-chars",
            "110",
        ])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H pagesift=1 records=1 mode=select question=\"respiration\" keywords=respiration budget=110 used=101 pages=2 total_pages=3\n",
        ))
        .stdout(predicate::str::contains("P 1 reason=first_page score=0 chars=46\n"))
        .stdout(predicate::str::contains("P 2 reason=relevant score=1 chars=55\n"))
        .stdout(predicate::str::contains("C-END"));
}

#[test]
fn test_select_budget_from_local_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("pagesift.toml"),
        "[selector]\nmax_chars = 50\n",
    )
    .unwrap();
    let transcript = write_transcript(dir.path(), SAMPLE);

    // only page 1 (46 chars) fits in 50
    pagesift()
        .current_dir(dir.path())
        .args(["select", "", "--transcript"])
        .arg(&transcript)
        .assert()
        .success()
        .stdout("[Page 1] The cell is the basic unit of life.\n");

    // the flag overrides the file
    pagesift()
        .current_dir(dir.path())
        .args(["select", "", "--max-chars", "8000", "--transcript"])
        .arg(&transcript)
        .assert()
        .success()
        .stdout(format!("{}\n", SAMPLE));
}

#[test]
fn test_select_question_case_insensitive() {
    let dir = tempdir().unwrap();
    let transcript = write_sample(dir.path());

    let upper = pagesift()
        .current_dir(dir.path())
        .args(["select", "WHAT About Photosynthesis", "--max-chars", "60"])
        .arg("--transcript")
        .arg(&transcript)
        .output()
        .unwrap();
    let lower = pagesift()
        .current_dir(dir.path())
        .args(["select", "what about photosynthesis", "--max-chars", "60"])
        .arg("--transcript")
        .arg(&transcript)
        .output()
        .unwrap();

    assert!(upper.status.success());
    assert_eq!(upper.stdout, lower.stdout);
}
