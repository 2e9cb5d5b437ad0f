use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE: &str = "[Page 1] The cell is the basic unit of life.\n\n[Page 2] Mitochondria produce energy via respiration.\n\n[Page 3] Plants convert sunlight into chemical energy.";

/// Get a Command for pagesift, isolated from the user's config and log settings
pub fn pagesift() -> Command {
    let mut cmd = cargo_bin_cmd!("pagesift");
    cmd.env_remove("PAGESIFT_CONFIG")
        .env_remove("PAGESIFT_LOG")
        .env_remove("RUST_LOG")
        .env(
            "PAGESIFT_CONFIG_DIR",
            std::env::temp_dir().join("pagesift-tests-no-global-config"),
        );
    cmd
}

/// Write the sample transcript into `dir` and return its path
pub fn write_sample(dir: &Path) -> PathBuf {
    write_transcript(dir, SAMPLE)
}

pub fn write_transcript(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("transcript.txt");
    fs::write(&path, content).unwrap();
    path
}
