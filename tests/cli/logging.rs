use crate::cli::support::{pagesift, SAMPLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_default_level_is_quiet() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args(["select", "respiration"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_verbose_logs_selection() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args(["--verbose", "select", "respiration"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stderr(predicate::str::contains("select_complete"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();

    let output = pagesift()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "--log-json", "select", "respiration"])
        .write_stdin(SAMPLE)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(event.get("level").is_some());
}

#[test]
fn test_marker_mismatch_warns() {
    let dir = tempdir().unwrap();

    pagesift()
        .current_dir(dir.path())
        .args(["select", "anything"])
        .write_stdin("[Page 3] out of order")
        .assert()
        .success()
        .stderr(predicate::str::contains("page marker does not match its position"));
}

#[test]
fn test_stdin_read_logs_byte_length() {
    let dir = tempdir().unwrap();
    let transcript = "[Page 1] Énergie cellulaire";

    let output = pagesift()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "--log-json", "stats"])
        .write_stdin(transcript)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let event: serde_json::Value = stderr
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|event| event["fields"]["message"] == "read_transcript_stdin")
        .unwrap();
    assert_eq!(event["fields"]["bytes"], transcript.len());
    assert!(event["fields"].get("chars").is_none());
}
