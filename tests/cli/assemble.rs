use crate::cli::support::{pagesift, SAMPLE};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Assemble command tests
// ============================================================================

#[test]
fn test_assemble_matches_extractor_format() {
    let dir = tempdir().unwrap();
    let texts = [
        "The cell is the basic unit of life.\n",
        "  Mitochondria produce energy via respiration.",
        "Plants convert sunlight into chemical energy.",
    ];
    for (i, text) in texts.iter().enumerate() {
        fs::write(dir.path().join(format!("p{}.txt", i + 1)), text).unwrap();
    }

    pagesift()
        .current_dir(dir.path())
        .args(["assemble", "p1.txt", "p2.txt", "p3.txt"])
        .assert()
        .success()
        .stdout(format!("{}\n", SAMPLE));
}

#[test]
fn test_assemble_undecodable_page_gets_placeholder() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("p1.txt"), "readable").unwrap();
    fs::write(dir.path().join("p2.txt"), [0xff_u8, 0xfe, 0x00, 0x9f]).unwrap();

    let output = pagesift()
        .current_dir(dir.path())
        .args(["--format", "json", "assemble", "p1.txt", "p2.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pages"], 2);
    assert_eq!(json["failed_pages"], serde_json::json!([2]));
    assert_eq!(
        json["transcript"],
        "[Page 1] readable\n\n[Page 2] [Error extracting content from this page]"
    );
}

#[test]
fn test_assemble_output_feeds_select() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Cover page").unwrap();
    fs::write(dir.path().join("b.txt"), "Osmosis moves water").unwrap();

    let output = pagesift()
        .current_dir(dir.path())
        .args(["assemble", "a.txt", "b.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    pagesift()
        .current_dir(dir.path())
        .args(["select", "osmosis", "--max-chars", "100"])
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout("[Page 1] Cover page\n\n[Page 2] Osmosis moves water\n");
}

#[test]
fn test_assemble_missing_page_file_is_data_error() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args(["assemble", "missing.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("page file not found"));
}

#[test]
fn test_assemble_requires_pages() {
    pagesift().arg("assemble").assert().code(2);
}
