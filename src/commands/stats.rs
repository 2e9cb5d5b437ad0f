//! `pagesift stats` - transcript statistics

use crate::cli::input::read_transcript;
use crate::cli::output::print_json;
use crate::cli::{Cli, OutputFormat, TranscriptArgs};
use pagesift_core::error::Result;
use pagesift_core::transcript::{ensure_meaningful, Transcript, TranscriptStats};
use tracing::warn;

/// Log pages whose marker number disagrees with their position.
///
/// Pages stay numbered by position; the warning only makes the relabeling visible.
pub fn warn_marker_mismatches(transcript: &Transcript) {
    for (position, marker) in transcript.marker_mismatches() {
        warn!(position, marker, "page marker does not match its position");
    }
}

pub fn execute(cli: &Cli, input: &TranscriptArgs, require_text: bool) -> Result<()> {
    let raw = read_transcript(input)?;
    if require_text {
        ensure_meaningful(&raw)?;
    }

    let stats = TranscriptStats::from_raw(&raw);
    let transcript = Transcript::parse(&raw);
    let mismatches = transcript.marker_mismatches();

    match cli.format {
        OutputFormat::Human => {
            println!("Markers:    {}", stats.page_count);
            println!("Pages:      {}", transcript.len());
            println!("Words:      {}", stats.word_count);
            println!("Characters: {}", stats.char_count);
            for (position, marker) in &mismatches {
                println!("Page {} is marked [Page {}]", position, marker);
            }
        }
        OutputFormat::Json => {
            let mismatches: Vec<_> = mismatches
                .iter()
                .map(|(position, marker)| {
                    serde_json::json!({ "position": position, "marker": marker })
                })
                .collect();
            print_json(&serde_json::json!({
                "page_count": stats.page_count,
                "parsed_pages": transcript.len(),
                "word_count": stats.word_count,
                "char_count": stats.char_count,
                "marker_mismatches": mismatches,
            }))?;
        }
        OutputFormat::Records => {
            println!(
                "H pagesift=1 records=1 mode=stats markers={} pages={} words={} chars={}",
                stats.page_count,
                transcript.len(),
                stats.word_count,
                stats.char_count
            );
            for (position, marker) in &mismatches {
                println!("M {} marker={}", position, marker);
            }
        }
    }

    Ok(())
}
